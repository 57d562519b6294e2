//! Filter values entered by the user and the static label lookups used to
//! translate them into catalog identifiers.

use serde::{Deserialize, Serialize};

/// Sort key sent to the catalog API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ordering {
    /// Highest critic score first.
    #[default]
    #[serde(rename = "-metacritic")]
    BestRated,
    /// Latest release date first.
    #[serde(rename = "-released")]
    MostRecent,
    /// Alphabetical by name.
    #[serde(rename = "name")]
    Alphabetical,
    /// Highest user rating first. Used for the hero pool and recommendations.
    #[serde(rename = "-rating")]
    TopRated,
}

impl Ordering {
    /// Orderings offered in the catalog form, in display order.
    pub const SELECTABLE: [Ordering; 3] = [
        Ordering::BestRated,
        Ordering::MostRecent,
        Ordering::Alphabetical,
    ];

    /// Value of the `ordering` query parameter.
    pub const fn as_param(self) -> &'static str {
        match self {
            Ordering::BestRated => "-metacritic",
            Ordering::MostRecent => "-released",
            Ordering::Alphabetical => "name",
            Ordering::TopRated => "-rating",
        }
    }

    /// Parses a query parameter value, returning `None` for unknown keys.
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim() {
            "-metacritic" => Some(Ordering::BestRated),
            "-released" => Some(Ordering::MostRecent),
            "name" => Some(Ordering::Alphabetical),
            "-rating" => Some(Ordering::TopRated),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Ordering::BestRated => "Best rated",
            Ordering::MostRecent => "Most recent",
            Ordering::Alphabetical => "Alphabetical (A-Z)",
            Ordering::TopRated => "Top rated",
        }
    }
}

/// User-facing filter values. Every text field may be blank, in which case
/// it does not take part in the request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    pub search_text: String,
    pub year: String,
    pub genre_label: String,
    pub platform_label: String,
    pub tag_slug: String,
    pub developer_slug: String,
    pub ordering: Ordering,
    pub min_score: String,
}

impl FilterSet {
    /// Returns a copy with a different ordering and every other field intact.
    pub fn with_ordering(&self, ordering: Ordering) -> Self {
        Self {
            ordering,
            ..self.clone()
        }
    }
}

/// Trims and lower-cases a label before it is looked up.
fn normalize_label(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Maps a platform name to the catalog platform identifier.
///
/// Unknown names are passed through normalized so that raw identifiers can be
/// supplied directly.
pub fn platform_code(input: &str) -> String {
    let normalized = normalize_label(input);
    let code = match normalized.as_str() {
        "ps2" | "playstation 2" => "15",
        "ps3" | "playstation 3" => "16",
        "ps4" | "playstation 4" => "18",
        "ps5" | "playstation 5" => "187",
        "xbox 360" => "14",
        "xbox one" => "1",
        "xbox series x" | "xbox series s" => "186",
        "pc" => "4",
        "nintendo switch" => "7",
        "wii u" => "8",
        "wii" => "11",
        "ds" => "9",
        "3ds" => "10",
        _ => return normalized,
    };
    code.to_string()
}

/// Maps a genre name to the catalog genre slug, passing unknown names through
/// normalized.
pub fn genre_slug(input: &str) -> String {
    let normalized = normalize_label(input);
    let slug = match normalized.as_str() {
        "rpg" => "role-playing-games-rpg",
        "action" => "action",
        "adventure" => "adventure",
        "strategy" => "strategy",
        "sports" => "sports",
        "shooter" => "shooter",
        "racing" => "racing",
        "puzzle" => "puzzle",
        _ => return normalized,
    };
    slug.to_string()
}
