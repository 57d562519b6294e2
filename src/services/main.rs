use std::sync::Arc;

use crate::domain::filter::FilterSet;
use crate::dto::catalog::{GameCard, IndexPageData, OrderingOption};
use crate::forms::main::CatalogQuery;
use crate::repository::GameReader;
use crate::services::catalog::Catalog;

/// Loads the hero spotlight and the requested catalog page for the index.
///
/// Never fails: transport and parse problems surface as an empty list and
/// the fallback hero.
pub async fn load_index_page<R>(repo: Arc<R>, query: CatalogQuery) -> IndexPageData
where
    R: GameReader + 'static,
{
    let filters = FilterSet::from(&query);
    let catalog = Catalog::with_state(repo, filters, query.page());

    let state = catalog.mount().await;

    let query = CatalogQuery::from(&state.filters);
    let filter_query = query.to_filter_query();

    IndexPageData {
        hero: state.hero.clone().map(GameCard::from),
        games: state.games.clone().map(GameCard::from),
        status: state.status,
        orderings: OrderingOption::all(state.filters.ordering),
        query,
        filter_query,
    }
}
