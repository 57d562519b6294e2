use serde::Serialize;

use crate::domain::filter::Ordering;
use crate::domain::game::GameSummary;
use crate::forms::main::CatalogQuery;
use crate::pagination::Paginated;
use crate::services::catalog::LoadStatus;

/// Game as rendered in a list card or the hero banner.
#[derive(Clone, Debug, Serialize)]
pub struct GameCard {
    #[serde(flatten)]
    pub game: GameSummary,
    pub stars: u8,
}

impl From<GameSummary> for GameCard {
    fn from(game: GameSummary) -> Self {
        let stars = game.stars();
        Self { game, stars }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderingOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl OrderingOption {
    pub fn all(selected: Ordering) -> Vec<Self> {
        Ordering::SELECTABLE
            .iter()
            .map(|ordering| Self {
                value: ordering.as_param(),
                label: ordering.label(),
                selected: *ordering == selected,
            })
            .collect()
    }
}

/// Data required to render the catalog index template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    pub hero: Option<GameCard>,
    pub games: Paginated<GameCard>,
    pub status: LoadStatus,
    /// Filters echoed back into the form.
    pub query: CatalogQuery,
    /// Encoded filters appended to pagination links.
    pub filter_query: String,
    pub orderings: Vec<OrderingOption>,
}
