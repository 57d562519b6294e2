//! Catalog access over the RAWG HTTP API.

use async_trait::async_trait;

use crate::{
    domain::{
        game::{GameDetail, ResultPage},
        types::GameId,
    },
    encoder::PageRequest,
    models::rawg::{GameDetails, GamesPage, ScreenshotsPage},
    repository::{
        GameReader, HttpRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl HttpRepository {
    fn rawg_query(&self, mut pairs: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        pairs.insert(0, ("key", self.config.rawg_api_key.clone()));
        pairs
    }
}

#[async_trait]
impl GameReader for HttpRepository {
    async fn list_games(&self, request: &PageRequest) -> RepositoryResult<ResultPage> {
        let url = Self::join(&self.config.rawg_api_url, "games");
        let query = self.rawg_query(request.query_pairs());

        let page = self
            .get_json::<GamesPage>(&url, &query)
            .await?
            .ok_or(RepositoryError::Status(404))?;

        Ok(ResultPage::from(page))
    }

    async fn get_game(&self, id: GameId) -> RepositoryResult<Option<GameDetail>> {
        let url = Self::join(&self.config.rawg_api_url, &format!("games/{id}"));
        let query = self.rawg_query(Vec::new());

        match self.get_json::<GameDetails>(&url, &query).await? {
            Some(details) => Ok(Some(GameDetail::try_from(details)?)),
            None => Ok(None),
        }
    }

    async fn list_screenshots(&self, id: GameId) -> RepositoryResult<Vec<String>> {
        let url = Self::join(&self.config.rawg_api_url, &format!("games/{id}/screenshots"));
        let query = self.rawg_query(Vec::new());

        let screenshots = self
            .get_json::<ScreenshotsPage>(&url, &query)
            .await?
            .map(Vec::<String>::from)
            .unwrap_or_default();

        Ok(screenshots)
    }
}
