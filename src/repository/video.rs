//! Trailer lookup over the YouTube Data API.

use async_trait::async_trait;

use crate::{
    models::youtube::SearchResponse,
    repository::{
        HttpRepository, VideoSearch,
        errors::{RepositoryError, RepositoryResult},
    },
};

#[async_trait]
impl VideoSearch for HttpRepository {
    async fn find_video(&self, query: &str) -> RepositoryResult<Option<String>> {
        let Some(api_key) = self.config.youtube_api_key.clone() else {
            return Err(RepositoryError::NotConfigured("youtube_api_key"));
        };

        let url = Self::join(&self.config.youtube_api_url, "search");
        let params = [
            ("part", "snippet".to_string()),
            ("q", query.to_string()),
            ("key", api_key),
            ("maxResults", "1".to_string()),
            ("type", "video".to_string()),
            ("videoEmbeddable", "true".to_string()),
        ];

        let response = self.get_json::<SearchResponse>(&url, &params).await?;

        Ok(response.and_then(SearchResponse::first_video_id))
    }
}
