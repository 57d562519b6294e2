//! Query-string forms submitted by the browser.

pub mod game;
pub mod main;
