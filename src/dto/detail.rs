use serde::Serialize;

use crate::domain::game::{GameDetail, Trailer};
use crate::dto::catalog::GameCard;

#[derive(Debug, Serialize)]
pub struct TrailerView {
    pub embed_url: String,
    pub watch_url: String,
}

impl From<&Trailer> for TrailerView {
    fn from(trailer: &Trailer) -> Self {
        Self {
            embed_url: trailer.embed_url(),
            watch_url: trailer.watch_url(),
        }
    }
}

/// Data required to render the game detail template.
#[derive(Debug, Serialize)]
pub struct GameDetailPageData {
    pub game: GameDetail,
    pub stars: u8,
    /// Sanitized description, translated when requested and available.
    pub description_html: String,
    pub translated: bool,
    pub language: Option<String>,
    pub trailer: Option<TrailerView>,
    pub screenshots: Vec<String>,
    pub recommended: Vec<GameCard>,
}
