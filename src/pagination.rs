use serde::Serialize;

/// Number of games requested per catalog page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 15;
/// Upper bound on the number of pages offered, whatever the true count is.
pub const MAX_TOTAL_PAGES: usize = 500;
/// Pages shown on each side of the current one.
pub const DEFAULT_PAGE_RADIUS: usize = 2;

/// Number of pages needed for `total_count` items, capped at [`MAX_TOTAL_PAGES`].
pub fn total_pages(total_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_count.div_ceil(per_page).min(MAX_TOTAL_PAGES)
}

/// Builds the visible page tokens. `None` marks an elided run of pages.
///
/// The first and last pages are always present; the window around
/// `current_page` is clipped to `[2, total_pages - 1]`.
fn get_pages(total_pages: usize, current_page: usize, radius: usize) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = vec![Some(1)];

    if last_page == 1 {
        return pages;
    }

    let mid_start = current_page.saturating_sub(radius).max(2);
    let mid_end = current_page.saturating_add(radius).min(last_page - 1);

    if mid_start > 2 {
        pages.push(None);
    }
    pages.extend((mid_start..=mid_end).map(Some));

    if mid_end < last_page - 1 {
        pages.push(None);
    }
    pages.push(Some(last_page));

    pages
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Wraps `items` and clamps `current_page` into `[1, total_pages]`.
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        Self::with_radius(items, current_page, total_pages, DEFAULT_PAGE_RADIUS)
    }

    pub fn with_radius(
        items: Vec<T>,
        current_page: usize,
        total_pages: usize,
        radius: usize,
    ) -> Self {
        let current_page = current_page.clamp(1, total_pages.max(1));

        let pages = get_pages(total_pages, current_page, radius);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 1, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Converts the items while keeping the page bookkeeping.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::empty()
    }
}
