//! Client for the server's `/session` resource

use crate::{IdentityError, Result as IdentityErrorResult};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde::{Deserialize, Serialize};

#[async_trait]
pub trait SessionEndpoint: Send + Sync {
    /// uid held by the session cookie, `None` when there is no session
    async fn current_uid(&self) -> IdentityErrorResult<Option<String>>;

    /// Issue or overwrite the session cookie for `uid`
    async fn establish(&self, uid: &str) -> IdentityErrorResult<()>;

    async fn end(&self) -> IdentityErrorResult<()>;
}

#[derive(Serialize)]
struct EstablishRequest<'a> {
    uid: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
    uid: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    code: Option<String>,
    message: Option<String>,
}

/// HTTP session client. Keeps its own cookie jar, like a browser tab would.
pub struct SessionClient {
    base_url: String,
    client: ReqwestClient,
}

impl SessionClient {
    pub fn new(base_url: &str) -> IdentityErrorResult<Self> {
        let client = ReqwestClient::builder().cookie_store(true).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self) -> String {
        format!("{}/session", self.base_url)
    }
}

/// Turn a non-success response into an error carrying the server's message
async fn rejection(operation: &str, response: Response) -> IdentityError {
    let status = response.status();
    let detail = match response.json::<ErrorResponse>().await {
        Ok(body) => format!(
            "{} {}",
            body.code.unwrap_or_default(),
            body.message.unwrap_or_default()
        )
        .trim()
        .to_string(),
        Err(_) => String::new(),
    };
    IdentityError::session_endpoint(format!("{operation} /session returned {status} {detail}"))
}

#[async_trait]
impl SessionEndpoint for SessionClient {
    async fn current_uid(&self) -> IdentityErrorResult<Option<String>> {
        let response = self.client.get(self.url()).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body: SessionResponse = response.json().await?;
                Ok(Some(body.uid))
            }
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(rejection("GET", response).await),
        }
    }

    async fn establish(&self, uid: &str) -> IdentityErrorResult<()> {
        let response = self
            .client
            .post(self.url())
            .json(&EstablishRequest { uid })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection("POST", response).await);
        }

        debug!("Session established for {uid}");
        Ok(())
    }

    async fn end(&self) -> IdentityErrorResult<()> {
        let response = self.client.delete(self.url()).send().await?;

        if !response.status().is_success() {
            return Err(rejection("DELETE", response).await);
        }

        Ok(())
    }
}
