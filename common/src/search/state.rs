use news_client::ResultSet;
use serde::Serialize;

use super::pagination::{Pagination, PAGE_SIZE};

/// Per-request view model: the query, where we are in its result pages and
/// the articles on the current page.
#[derive(Debug, Clone, Serialize)]
pub struct SearchState {
    pub query: String,
    #[serde(flatten)]
    pub pagination: Pagination,
    pub results: ResultSet,
}

impl SearchState {
    pub fn new(query: impl Into<String>, current_page: u32, results: ResultSet) -> Self {
        let pagination = Pagination::new(
            current_page,
            PAGE_SIZE,
            results.total_results,
            results.articles.len(),
        );

        Self {
            query: query.into(),
            pagination,
            results,
        }
    }

    /// State for the landing page, before anything has been searched.
    pub fn blank() -> Self {
        Self {
            query: String::new(),
            pagination: Pagination::blank(PAGE_SIZE),
            results: ResultSet::default(),
        }
    }
}
