mod client_config;
mod config;
mod database_config;
mod error;
mod identity_provider_config;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;

pub use client_config::ClientConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_provider_config::IdentityProviderConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

pub const CONFIG_DIR_ENV: &str = "BLOG_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".blog";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "blog.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

/// Private cookie keys need at least 64 bytes of key material
pub const MIN_SESSION_SECRET_LENGTH: usize = 64;

const DEFAULT_IDP_ENABLED: bool = false;
const DEFAULT_IDP_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_IDP_REQUEST_URI: &str = "http://localhost";

const DEFAULT_SESSION_ENDPOINT_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_LOCAL_STORAGE_FILENAME: &str = "local_storage.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
