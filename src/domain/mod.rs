//! Domain types used by the catalog and detail views.

pub mod filter;
pub mod game;
pub mod types;
