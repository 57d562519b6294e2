use serde::{Deserialize, Serialize};

use crate::domain::filter::{FilterSet, Ordering};

/// Catalog filters as submitted by the filter form and carried in links.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CatalogQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub year: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub genre: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub platform: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub developer: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ordering: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub min_score: String,
    #[serde(default, skip_serializing)]
    pub page: Option<usize>,
}

impl CatalogQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Encodes the filters (without the page) for use in links.
    pub fn to_filter_query(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_else(|err| {
            log::error!("Failed to encode catalog filters: {err}");
            String::new()
        })
    }
}

impl From<&CatalogQuery> for FilterSet {
    fn from(query: &CatalogQuery) -> Self {
        let ordering = if query.ordering.trim().is_empty() {
            Ordering::default()
        } else {
            Ordering::from_param(&query.ordering).unwrap_or_else(|| {
                log::warn!("Unknown ordering '{}', using default", query.ordering);
                Ordering::default()
            })
        };

        Self {
            search_text: query.search.clone(),
            year: query.year.clone(),
            genre_label: query.genre.clone(),
            platform_label: query.platform.clone(),
            tag_slug: query.tag.clone(),
            developer_slug: query.developer.clone(),
            ordering,
            min_score: query.min_score.clone(),
        }
    }
}

impl From<&FilterSet> for CatalogQuery {
    fn from(filters: &FilterSet) -> Self {
        Self {
            search: filters.search_text.clone(),
            year: filters.year.clone(),
            genre: filters.genre_label.clone(),
            platform: filters.platform_label.clone(),
            tag: filters.tag_slug.clone(),
            developer: filters.developer_slug.clone(),
            ordering: filters.ordering.as_param().to_string(),
            min_score: filters.min_score.clone(),
            page: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_maps_to_filter_set() {
        let query = CatalogQuery {
            search: "zelda".to_string(),
            platform: "switch".to_string(),
            ordering: "name".to_string(),
            page: Some(3),
            ..CatalogQuery::default()
        };

        let filters = FilterSet::from(&query);

        assert_eq!(filters.search_text, "zelda");
        assert_eq!(filters.platform_label, "switch");
        assert_eq!(filters.ordering, Ordering::Alphabetical);
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn unknown_ordering_falls_back_to_default() {
        let query = CatalogQuery {
            ordering: "-added".to_string(),
            ..CatalogQuery::default()
        };

        assert_eq!(FilterSet::from(&query).ordering, Ordering::BestRated);
    }

    #[test]
    fn filter_query_skips_blank_fields_and_page() {
        let filters = FilterSet {
            search_text: "the witcher".to_string(),
            year: "2015".to_string(),
            ..FilterSet::default()
        };

        let encoded = CatalogQuery::from(&filters).to_filter_query();

        assert_eq!(encoded, "search=the+witcher&year=2015&ordering=-metacritic");
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(CatalogQuery::default().page(), 1);
        let query = CatalogQuery {
            page: Some(0),
            ..CatalogQuery::default()
        };
        assert_eq!(query.page(), 1);
    }
}
