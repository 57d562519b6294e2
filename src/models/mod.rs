//! Wire models of the external services and the server configuration.

pub mod config;
pub mod rawg;
pub mod translate;
pub mod youtube;
