//! Text translation over the Google Cloud Translation v2 API.

use async_trait::async_trait;

use crate::{
    models::translate::TranslateResponse,
    repository::{
        HttpRepository, Translator,
        errors::{RepositoryError, RepositoryResult},
    },
};

#[async_trait]
impl Translator for HttpRepository {
    async fn translate(&self, text: &str, target_language: &str) -> RepositoryResult<String> {
        let Some(api_key) = self.config.translate_api_key.clone() else {
            return Err(RepositoryError::NotConfigured("translate_api_key"));
        };

        let params = [
            ("key", api_key),
            ("q", text.to_string()),
            ("target", target_language.to_string()),
        ];

        self.get_json::<TranslateResponse>(&self.config.translate_api_url, &params)
            .await?
            .and_then(TranslateResponse::into_text)
            .ok_or_else(|| RepositoryError::Parse("response has no translations".to_string()))
    }
}
