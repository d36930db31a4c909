//! [`UserService`] backed by the security REST endpoints.
//!
//! - `GET {api}/v1/security/users` returns a JSON array of users
//! - `GET {api}/v1/security/groups` returns a JSON array of groups
//!
//! where `{api}` is [`BusinessConfig::api_url`].

use async_trait::async_trait;
use log::{debug, info};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::BusinessConfig;
use crate::http::{Client, HttpError};
use crate::principal::{GroupPrincipal, UserPrincipal};
use crate::services::UserService;

pub const USERS_PATH: &str = "/v1/security/users";
pub const GROUPS_PATH: &str = "/v1/security/groups";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserServiceError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to parse response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl From<HttpError> for UserServiceError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.message)
    }
}

#[derive(Debug, Clone)]
pub struct HttpUserService {
    config: BusinessConfig,
}

impl HttpUserService {
    pub fn new(config: BusinessConfig) -> Self {
        Self { config }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, UserServiceError> {
        let url = format!("{}{path}", self.config.api_url());
        debug!("GET {url}");

        let response = Client::get(&url)
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.is_success() {
            return Err(UserServiceError::Status {
                url,
                status: response.status,
            });
        }

        let items: Vec<T> = response.json().map_err(|e| UserServiceError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;
        info!("GET {url}: {} item(s)", items.len());
        Ok(items)
    }
}

#[async_trait]
impl UserService for HttpUserService {
    async fn get_users(&self) -> Result<Vec<UserPrincipal>, UserServiceError> {
        self.fetch_list(USERS_PATH).await
    }

    async fn get_groups(&self) -> Result<Vec<GroupPrincipal>, UserServiceError> {
        self.fetch_list(GROUPS_PATH).await
    }
}
