//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::game::{GameDetail, ResultPage};
use crate::domain::types::GameId;
use crate::encoder::PageRequest;
use crate::repository::errors::RepositoryResult;
use crate::repository::{GameReader, Translator, VideoSearch};

mock! {
    pub Repository {}

    #[async_trait]
    impl GameReader for Repository {
        async fn list_games(&self, request: &PageRequest) -> RepositoryResult<ResultPage>;
        async fn get_game(&self, id: GameId) -> RepositoryResult<Option<GameDetail>>;
        async fn list_screenshots(&self, id: GameId) -> RepositoryResult<Vec<String>>;
    }

    #[async_trait]
    impl VideoSearch for Repository {
        async fn find_video(&self, query: &str) -> RepositoryResult<Option<String>>;
    }

    #[async_trait]
    impl Translator for Repository {
        async fn translate(&self, text: &str, target_language: &str) -> RepositoryResult<String>;
    }
}
