use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    domain::{
        game::{GameDetail, ResultPage},
        types::GameId,
    },
    encoder::PageRequest,
    models::config::ServerConfig,
    repository::errors::{RepositoryError, RepositoryResult},
};

pub mod errors;
pub mod game;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod translation;
pub mod video;

/// Read access to the game catalog.
#[async_trait]
pub trait GameReader: Send + Sync {
    async fn list_games(&self, request: &PageRequest) -> RepositoryResult<ResultPage>;
    /// Returns `None` when the catalog has no record with this id.
    async fn get_game(&self, id: GameId) -> RepositoryResult<Option<GameDetail>>;
    async fn list_screenshots(&self, id: GameId) -> RepositoryResult<Vec<String>>;
}

/// Finds an embeddable video for a free-text title.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Returns the id of at most one video.
    async fn find_video(&self, query: &str) -> RepositoryResult<Option<String>>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> RepositoryResult<String>;
}

/// Endpoints and credentials of the external services.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub rawg_api_url: String,
    pub rawg_api_key: String,
    pub youtube_api_url: String,
    pub youtube_api_key: Option<String>,
    pub translate_api_url: String,
    pub translate_api_key: Option<String>,
    pub request_timeout: Duration,
}

impl From<&ServerConfig> for ApiConfig {
    fn from(config: &ServerConfig) -> Self {
        let key = |value: &Option<String>| value.clone().filter(|k| !k.trim().is_empty());

        Self {
            rawg_api_url: config.rawg_api_url.clone(),
            rawg_api_key: config.rawg_api_key.clone(),
            youtube_api_url: config.youtube_api_url.clone(),
            youtube_api_key: key(&config.youtube_api_key),
            translate_api_url: config.translate_api_url.clone(),
            translate_api_key: key(&config.translate_api_key),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

/// Repository backed by the RAWG, YouTube and Google Translate HTTP APIs.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    config: ApiConfig,
}

impl HttpRepository {
    pub fn new(config: ApiConfig) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, config })
    }

    fn join(base: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Issues a GET and decodes the JSON body. A 404 yields `Ok(None)`.
    async fn get_json<T>(&self, url: &str, query: &[(&str, String)]) -> RepositoryResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(RepositoryError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let payload = serde_json::from_str::<T>(&body)?;
        Ok(Some(payload))
    }
}
