use serde::Deserialize;
use validator::Validate;

/// Query parameters of the game detail page.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct DetailQuery {
    /// Target language of the description, e.g. `es`.
    #[validate(length(min = 2, max = 10))]
    pub lang: Option<String>,
}

impl DetailQuery {
    /// Requested translation language, if present and well-formed.
    pub fn language(&self) -> Option<&str> {
        if let Err(err) = self.validate() {
            log::warn!("Ignoring invalid detail query: {err}");
            return None;
        }

        self.lang
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
    }
}
