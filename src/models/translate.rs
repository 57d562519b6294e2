//! Payload returned by the Google Cloud Translation v2 API.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub data: TranslateData,
}

#[derive(Debug, Deserialize)]
pub struct TranslateData {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
}

impl TranslateResponse {
    pub fn into_text(self) -> Option<String> {
        self.data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
    }
}
