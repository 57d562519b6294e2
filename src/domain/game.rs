//! Game records as consumed by the catalog and detail views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{GameId, Score};

/// Minimal shape needed to render a game in a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub name: String,
    pub score: Option<Score>,
    pub image_url: Option<String>,
}

impl GameSummary {
    /// Filled stars out of five; games without a score get none.
    pub fn stars(&self) -> u8 {
        self.score.map(Score::stars).unwrap_or(0)
    }
}

/// Spotlight record shown when the hero pool cannot be fetched.
pub fn fallback_hero() -> GameSummary {
    GameSummary {
        id: GameId(3328),
        name: "The Witcher 3: Wild Hunt".to_string(),
        score: Some(Score(92)),
        image_url: Some(
            "https://media.rawg.io/media/games/456/456dea5e1c7e3cd07060c14e96612001.jpg"
                .to_string(),
        ),
    }
}

/// One page of results exactly as returned by the catalog API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultPage {
    pub items: Vec<GameSummary>,
    pub total_count: usize,
}

/// Genre reference carried by a detail record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub slug: String,
    pub name: String,
}

/// Share of users that picked a given rating bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub title: String,
    pub count: u64,
    pub percent: f64,
}

/// Full record of a single game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    pub id: GameId,
    pub name: String,
    pub description_html: Option<String>,
    pub score: Option<Score>,
    pub image_url: Option<String>,
    pub released: Option<NaiveDate>,
    pub playtime_hours: Option<u32>,
    pub esrb_rating: Option<String>,
    pub genres: Vec<Genre>,
    pub platforms: Vec<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub tags: Vec<String>,
    pub website: Option<String>,
    pub clip_url: Option<String>,
    pub screenshots: Vec<String>,
    pub ratings: Vec<RatingBreakdown>,
}

impl GameDetail {
    pub fn primary_genre(&self) -> Option<&Genre> {
        self.genres.first()
    }
}

/// Embeddable video shown on the detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Trailer {
    /// Direct clip URL supplied by the catalog record.
    Clip(String),
    /// Video id found by the video search collaborator.
    YouTube(String),
}

impl Trailer {
    /// URL suitable for an embedded player.
    pub fn embed_url(&self) -> String {
        match self {
            Trailer::Clip(url) => url.clone(),
            Trailer::YouTube(id) => format!("https://www.youtube.com/embed/{id}"),
        }
    }

    /// URL for opening the video outside the page.
    pub fn watch_url(&self) -> String {
        match self {
            Trailer::Clip(url) => url.clone(),
            Trailer::YouTube(id) => format!("https://www.youtube.com/watch?v={id}"),
        }
    }
}
