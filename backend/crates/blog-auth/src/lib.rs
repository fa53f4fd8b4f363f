pub mod auth_provider;
pub mod credential_resolver;
pub mod error;
pub mod federated_provider;
pub mod identity_toolkit_client;
pub mod identity_toolkit_config;
pub mod login_method;
pub mod provider_error_code;
pub mod verified_credential;

pub use auth_provider::AuthProvider;
pub use credential_resolver::CredentialResolver;
pub use error::{AuthError, Result};
pub use federated_provider::FederatedProvider;
pub use identity_toolkit_client::IdentityToolkitClient;
pub use identity_toolkit_config::IdentityToolkitConfig;
pub use login_method::{FederatedCredential, LoginMethod};
pub use provider_error_code::classify_provider_error;
pub use verified_credential::VerifiedCredential;
