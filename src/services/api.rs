use std::sync::Arc;

use crate::domain::filter::FilterSet;
use crate::forms::main::CatalogQuery;
use crate::repository::GameReader;
use crate::services::catalog::{Catalog, CatalogState};

/// Snapshot returned by the `/api/v1/games` endpoint.
pub async fn list_games<R>(repo: Arc<R>, query: CatalogQuery) -> Arc<CatalogState>
where
    R: GameReader + 'static,
{
    let catalog = Catalog::with_state(repo, FilterSet::from(&query), query.page());
    catalog.mount().await
}
