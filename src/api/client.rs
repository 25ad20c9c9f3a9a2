//! HTTP client for the panel backend.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, trace};
use url::Url;

use super::types::{
    BotAction, ManageRequest, ManageResponse, ServersResponse, UserbotRequest, UserbotResponse,
};

const GET_USERBOT_PATH: &str = "get_userbot";
const MANAGE_USERBOT_PATH: &str = "manage_userbot";
const SERVERS_STATUS_PATH: &str = "get_servers_status";

/// Errors that can occur while talking to the panel backend.
///
/// The display text of these errors is shown to the user as-is.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    #[error("invalid response: {0}")]
    Parse(String),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Operations the panel backend exposes to the client.
#[async_trait]
pub trait PanelApi: Send + Sync {
    /// Fetches the userbot owned by the session's user.
    async fn get_userbot(&self, init_data: &str) -> Result<UserbotResponse, ApiError>;

    /// Issues a lifecycle command for the session user's userbot.
    async fn manage_userbot(
        &self,
        init_data: &str,
        action: BotAction,
    ) -> Result<ManageResponse, ApiError>;

    /// Fetches resource usage of every host server.
    async fn get_servers_status(&self) -> Result<ServersResponse, ApiError>;
}

#[async_trait]
impl<T: PanelApi + ?Sized> PanelApi for Arc<T> {
    async fn get_userbot(&self, init_data: &str) -> Result<UserbotResponse, ApiError> {
        (**self).get_userbot(init_data).await
    }

    async fn manage_userbot(
        &self,
        init_data: &str,
        action: BotAction,
    ) -> Result<ManageResponse, ApiError> {
        (**self).manage_userbot(init_data, action).await
    }

    async fn get_servers_status(&self) -> Result<ServersResponse, ApiError> {
        (**self).get_servers_status().await
    }
}

/// `reqwest`-backed implementation of [`PanelApi`].
#[derive(Debug, Clone)]
pub struct HttpPanelApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPanelApi {
    /// Creates a client for the backend at `base_url`.
    ///
    /// Endpoint paths are resolved relative to the base URL, so a base of
    /// `https://host/app/` targets `https://host/app/get_userbot`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: with_trailing_slash(base_url),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    /// Decodes a JSON body regardless of HTTP status; the backend reports
    /// failures in-band with `success: false`.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        trace!("Response {}: {}", status, body);

        serde_json::from_str(&body).map_err(|e| {
            debug!("Failed to decode response with status {}: {}", status, e);
            ApiError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl PanelApi for HttpPanelApi {
    async fn get_userbot(&self, init_data: &str) -> Result<UserbotResponse, ApiError> {
        let url = self.endpoint(GET_USERBOT_PATH)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&UserbotRequest { init_data })
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn manage_userbot(
        &self,
        init_data: &str,
        action: BotAction,
    ) -> Result<ManageResponse, ApiError> {
        let url = self.endpoint(MANAGE_USERBOT_PATH)?;
        debug!("POST {} (action: {})", url, action);

        let response = self
            .client
            .post(url)
            .json(&ManageRequest { init_data, action })
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn get_servers_status(&self) -> Result<ServersResponse, ApiError> {
        let url = self.endpoint(SERVERS_STATUS_PATH)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        Self::decode(response).await
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_resolution() {
        let api = HttpPanelApi::new(Url::parse("https://panel.example.com").unwrap());
        assert_eq!(
            api.endpoint(GET_USERBOT_PATH).unwrap().as_str(),
            "https://panel.example.com/get_userbot"
        );

        let api = HttpPanelApi::new(Url::parse("https://panel.example.com/app").unwrap());
        assert_eq!(
            api.endpoint(SERVERS_STATUS_PATH).unwrap().as_str(),
            "https://panel.example.com/app/get_servers_status"
        );
    }

    #[test]
    fn test_api_error_display_is_raw_message() {
        let err = ApiError::Transport("connection refused".to_owned());
        assert_eq!(err.to_string(), "connection refused");
    }
}
