//! Local post-processing of a page returned by the catalog API.

use crate::domain::filter::FilterSet;
use crate::domain::game::{GameSummary, ResultPage};
use crate::pagination::{Paginated, total_pages};

/// Applies the local name and score filters and attaches pagination data.
///
/// Filtering only ever removes items; the page count is derived from the
/// untouched `total_count` reported by the API.
pub fn refine(
    raw: ResultPage,
    filters: &FilterSet,
    page_size: usize,
    current_page: usize,
) -> Paginated<GameSummary> {
    let mut items = raw.items;

    let search = filters.search_text.trim().to_lowercase();
    if !search.is_empty() {
        items.retain(|game| game.name.to_lowercase().contains(&search));
    }

    if !filters.min_score.trim().is_empty() {
        let min_score = parse_leading_int(&filters.min_score);
        items.retain(|game| match (game.score, min_score) {
            (Some(score), Some(min)) => i64::from(score.get()) >= min,
            _ => false,
        });
    }

    Paginated::new(
        items,
        current_page,
        total_pages(raw.total_count, page_size),
    )
}

/// Reads an optionally signed run of leading digits, ignoring anything after
/// it. Returns `None` when no digits can be read.
fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len]
        .parse::<i64>()
        .ok()
        .map(|value| sign * value)
}
