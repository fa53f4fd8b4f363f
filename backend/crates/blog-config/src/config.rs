use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ClientConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, IdentityProviderConfig, LoggingConfig, ServerConfig,
    SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub identity_provider: IdentityProviderConfig,
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. BLOG_CONFIG_DIR env var, else ./.blog/
    /// 2. Auto-create the config directory
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BLOG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: BLOG_CONFIG_DIR env var > ./.blog/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.session.validate()?;
        self.identity_provider.validate()?;
        self.client.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn local_storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.client.local_storage_file))
    }

    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    /// Full path of the log file, or None when logging to stdout
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(self.log_dir()?.join(file))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs secrets)
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  session: {}",
            if self.session.secret.is_some() {
                "configured secret"
            } else {
                "ephemeral key"
            }
        );
        info!(
            "  identity_provider: {} ({})",
            if self.identity_provider.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.identity_provider.base_url
        );
        info!(
            "  client: session endpoint {}, local storage {}",
            self.client.session_endpoint_url, self.client.local_storage_file
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BLOG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BLOG_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("BLOG_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "BLOG_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Session
        Self::apply_env_option_string("BLOG_SESSION_SECRET", &mut self.session.secret);

        // Identity provider
        Self::apply_env_bool("BLOG_IDP_ENABLED", &mut self.identity_provider.enabled);
        Self::apply_env_string("BLOG_IDP_BASE_URL", &mut self.identity_provider.base_url);
        Self::apply_env_option_string("BLOG_IDP_API_KEY", &mut self.identity_provider.api_key);
        Self::apply_env_string(
            "BLOG_IDP_REQUEST_URI",
            &mut self.identity_provider.request_uri,
        );

        // Client
        Self::apply_env_string(
            "BLOG_CLIENT_SESSION_ENDPOINT_URL",
            &mut self.client.session_endpoint_url,
        );
        Self::apply_env_string(
            "BLOG_CLIENT_LOCAL_STORAGE_FILE",
            &mut self.client.local_storage_file,
        );

        // Logging
        Self::apply_env_parse("BLOG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BLOG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("BLOG_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("BLOG_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
