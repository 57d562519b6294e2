//! Services sitting between the HTTP routes and the repositories.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;
pub mod catalog;
pub mod detail;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Entity not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
