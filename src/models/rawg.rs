//! Payloads returned by the RAWG catalog API.
//!
//! Every field the application reads is declared here; anything optional in
//! practice is optional in the type so that missing data never fails a whole
//! response.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::game::{GameDetail, GameSummary, Genre, RatingBreakdown, ResultPage};
use crate::domain::types::{GameId, Score, TypeConstraintError};

#[derive(Debug, Deserialize)]
pub struct GamesPage {
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub results: Vec<Game>,
}

#[derive(Debug, Deserialize)]
pub struct Game {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub metacritic: Option<u32>,
    #[serde(default)]
    pub background_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Named {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GenreRef {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PlatformEntry {
    pub platform: Named,
}

#[derive(Debug, Deserialize)]
pub struct Clip {
    #[serde(default)]
    pub clip: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    pub image: String,
}

#[derive(Debug, Deserialize)]
pub struct Rating {
    pub title: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub percent: f64,
}

#[derive(Debug, Deserialize)]
pub struct GameDetails {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metacritic: Option<u32>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub released: Option<NaiveDate>,
    #[serde(default)]
    pub playtime: Option<u32>,
    #[serde(default)]
    pub esrb_rating: Option<Named>,
    #[serde(default)]
    pub genres: Vec<GenreRef>,
    #[serde(default)]
    pub platforms: Option<Vec<PlatformEntry>>,
    #[serde(default)]
    pub developers: Vec<Named>,
    #[serde(default)]
    pub publishers: Vec<Named>,
    #[serde(default)]
    pub tags: Vec<Named>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub clip: Option<Clip>,
    #[serde(default)]
    pub short_screenshots: Vec<Image>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

#[derive(Debug, Deserialize)]
pub struct ScreenshotsPage {
    #[serde(default)]
    pub results: Vec<Image>,
}

/// Out-of-range scores are treated as absent rather than failing the record.
fn score(value: Option<u32>) -> Option<Score> {
    value.and_then(|v| Score::new(v).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<Game> for GameSummary {
    type Error = TypeConstraintError;

    fn try_from(game: Game) -> Result<Self, Self::Error> {
        Ok(Self {
            id: GameId::new(game.id)?,
            name: game.name,
            score: score(game.metacritic),
            image_url: non_empty(game.background_image),
        })
    }
}

impl From<GamesPage> for ResultPage {
    fn from(page: GamesPage) -> Self {
        let items = page
            .results
            .into_iter()
            .filter_map(|game| {
                let id = game.id;
                GameSummary::try_from(game)
                    .map_err(|err| log::warn!("Skipping malformed game record {id}: {err}"))
                    .ok()
            })
            .collect();

        Self {
            items,
            total_count: page.count.unwrap_or(0),
        }
    }
}

impl TryFrom<GameDetails> for GameDetail {
    type Error = TypeConstraintError;

    fn try_from(game: GameDetails) -> Result<Self, Self::Error> {
        let names = |list: Vec<Named>| list.into_iter().map(|n| n.name).collect::<Vec<_>>();

        Ok(Self {
            id: GameId::new(game.id)?,
            name: game.name,
            description_html: non_empty(game.description),
            score: score(game.metacritic),
            image_url: non_empty(game.background_image),
            released: game.released,
            playtime_hours: game.playtime.filter(|hours| *hours > 0),
            esrb_rating: game.esrb_rating.map(|r| r.name),
            genres: game
                .genres
                .into_iter()
                .map(|g| Genre {
                    slug: g.slug,
                    name: g.name,
                })
                .collect(),
            platforms: game
                .platforms
                .unwrap_or_default()
                .into_iter()
                .map(|p| p.platform.name)
                .collect(),
            developers: names(game.developers),
            publishers: names(game.publishers),
            tags: names(game.tags),
            website: non_empty(game.website),
            clip_url: game.clip.and_then(|c| non_empty(c.clip)),
            screenshots: game.short_screenshots.into_iter().map(|s| s.image).collect(),
            ratings: game
                .ratings
                .into_iter()
                .map(|r| RatingBreakdown {
                    title: r.title,
                    count: r.count,
                    percent: r.percent,
                })
                .collect(),
        })
    }
}

impl From<ScreenshotsPage> for Vec<String> {
    fn from(page: ScreenshotsPage) -> Self {
        page.results.into_iter().map(|s| s.image).collect()
    }
}
