//! Turns user-facing filter values into catalog API requests.
//!
//! Encoding never fails: blank fields are dropped and anything else is passed
//! through, so a malformed year or an unknown platform shows up as an empty
//! result page rather than a local error.

use crate::domain::filter::{FilterSet, Ordering, genre_slug, platform_code};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Lower bound of the score band the hero is picked from.
pub const HERO_MIN_SCORE: u8 = 85;
pub const HERO_PAGE_SIZE: usize = 20;
/// The hero page is drawn uniformly from `1..=HERO_MAX_PAGE`.
pub const HERO_MAX_PAGE: usize = 3;
pub const RECOMMENDED_PAGE_SIZE: usize = 10;

/// Fully encoded request for the `games` list endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
    pub ordering: Ordering,
    /// Filter parameters in the order they are sent. Never contains blank values.
    pub filters: Vec<(&'static str, String)>,
}

impl PageRequest {
    fn new(page: usize, page_size: usize, ordering: Ordering) -> Self {
        Self {
            page: page.max(1),
            page_size,
            ordering,
            filters: Vec::new(),
        }
    }

    /// Adds `name=value` unless the value is blank.
    fn filter(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.filters.push((name, value));
        }
        self
    }

    /// All query parameters of the request, excluding credentials.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("ordering", self.ordering.as_param().to_string()),
            ("page_size", self.page_size.to_string()),
            ("page", self.page.to_string()),
        ];
        pairs.extend(self.filters.iter().cloned());
        pairs
    }

    /// Value of a single filter parameter, if present.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Encodes the catalog filters for the given page.
pub fn encode(filters: &FilterSet, page: usize) -> PageRequest {
    let mut request = PageRequest::new(page, DEFAULT_ITEMS_PER_PAGE, filters.ordering);

    if let Some(search) = non_blank(&filters.search_text) {
        request = request.filter("search", search);
    }
    if let Some(year) = non_blank(&filters.year) {
        request = request.filter("dates", format!("{year}-01-01,{year}-12-31"));
    }
    if let Some(genre) = non_blank(&filters.genre_label) {
        request = request.filter("genres", genre_slug(genre));
    }
    if let Some(platform) = non_blank(&filters.platform_label) {
        request = request.filter("platforms", platform_code(platform));
    }
    if let Some(tag) = non_blank(&filters.tag_slug) {
        request = request.filter("tags", tag);
    }
    if let Some(developer) = non_blank(&filters.developer_slug) {
        request = request.filter("developers", developer);
    }

    request
}

/// Request for the pool of high-score games the hero is drawn from.
pub fn encode_hero(page: usize) -> PageRequest {
    PageRequest::new(page, HERO_PAGE_SIZE, Ordering::TopRated)
        .filter("metacritic", format!("{HERO_MIN_SCORE},100"))
}

/// Request for games related to a detail record, optionally by genre slug.
pub fn encode_recommended(genre: Option<&str>) -> PageRequest {
    let request = PageRequest::new(1, RECOMMENDED_PAGE_SIZE, Ordering::TopRated);
    match genre.and_then(non_blank) {
        Some(slug) => request.filter("genres", slug),
        None => request,
    }
}
