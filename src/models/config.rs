//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_rawg_api_url() -> String {
    "https://api.rawg.io/api".to_string()
}

fn default_youtube_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_translate_api_url() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    #[serde(default = "default_rawg_api_url")]
    pub rawg_api_url: String,
    pub rawg_api_key: String,
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,
    /// Video search is skipped when no key is configured.
    #[serde(default)]
    pub youtube_api_key: Option<String>,
    #[serde(default = "default_translate_api_url")]
    pub translate_api_url: String,
    /// Translation returns the original text when no key is configured.
    #[serde(default)]
    pub translate_api_key: Option<String>,
    /// Upper bound on every outbound request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}
