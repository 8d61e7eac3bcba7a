//! Search orchestration shared by the HTML and JSON surfaces.

pub mod pagination;
pub mod state;

use std::{fmt, str::FromStr};

use news_client::{NewsClient, NewsQuery};
use serde::{de, Deserialize, Deserializer};
use tracing::debug;

use crate::error::AppError;
pub use pagination::{Pagination, PAGE_SIZE};
pub use state::SearchState;

/// Serde deserialization decorator to map empty Strings to None,
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

/// Raw `?q=..&page=..` parameters. `page` stays a string so a malformed value
/// can be reported as a validation error instead of a query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<String>,
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
}

impl TryFrom<SearchParams> for SearchRequest {
    type Error = AppError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let page = match params.page.as_deref() {
            None => 1,
            Some(raw) => match raw.parse::<u32>() {
                Ok(page) if page >= 1 => page,
                _ => {
                    return Err(AppError::Validation(format!(
                        "Invalid page number: {raw}"
                    )))
                }
            },
        };

        Ok(Self {
            query: params.q.unwrap_or_default(),
            page,
        })
    }
}

/// Fetches the requested page from the news API and builds its view model.
pub async fn run_search(
    client: &NewsClient,
    request: SearchRequest,
) -> Result<SearchState, AppError> {
    let results = client
        .search(&NewsQuery {
            query: &request.query,
            page_size: PAGE_SIZE,
            page: request.page,
        })
        .await?;

    let state = SearchState::new(request.query, request.page, results);
    let meta = &state.pagination;
    debug!(
        query = %state.query,
        current_page = meta.current_page,
        total_pages = meta.total_pages,
        previous_page = ?meta.previous_page,
        next_page = ?meta.next_page,
        has_previous = meta.has_previous,
        has_next = meta.has_next,
        total_results = state.results.total_results,
        "Search state computed"
    );

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use news_client::ApiKey;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn params(q: Option<&str>, page: Option<&str>) -> SearchParams {
        SearchParams {
            q: q.map(String::from),
            page: page.map(String::from),
        }
    }

    #[test]
    fn defaults_to_first_page_and_empty_query() {
        let request = SearchRequest::try_from(params(None, None)).unwrap();

        assert_eq!(
            request,
            SearchRequest {
                query: String::new(),
                page: 1
            }
        );
    }

    #[test]
    fn parses_page_numbers() {
        let request = SearchRequest::try_from(params(Some("rust"), Some("4"))).unwrap();

        assert_eq!(request.query, "rust");
        assert_eq!(request.page, 4);
    }

    #[test]
    fn rejects_malformed_pages() {
        for raw in ["abc", "0", "-2", "1.5", " 3", "3 "] {
            let result = SearchRequest::try_from(params(Some("rust"), Some(raw)));
            assert!(
                matches!(result, Err(AppError::Validation(_))),
                "page = {raw}"
            );
        }
    }

    #[test]
    fn empty_page_parameter_counts_as_absent() {
        let parsed: SearchParams = serde_json::from_str(r#"{"q":"rust","page":""}"#).unwrap();
        assert_eq!(parsed.page, None);
        assert_eq!(SearchRequest::try_from(parsed).unwrap().page, 1);
    }

    #[tokio::test]
    async fn builds_state_from_upstream_results() {
        let mock_server = MockServer::start().await;
        let client = NewsClient::new(ApiKey::new("test-token"), &mock_server.uri()).unwrap();

        Mock::given(method("GET"))
            .and(path("/everything"))
            .and(query_param("q", "rust"))
            .and(query_param("page", "2"))
            .and(query_param("pageSize", "20"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"status":"ok","totalResults":45,"articles":[]}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = run_search(
            &client,
            SearchRequest {
                query: "rust".into(),
                page: 2,
            },
        )
        .await
        .unwrap();

        assert_eq!(state.query, "rust");
        assert_eq!(state.pagination.total_pages, 3);
        assert_eq!(state.pagination.previous_page, Some(1));
        assert_eq!(state.pagination.next_page, Some(3));
    }

    #[tokio::test]
    async fn upstream_failures_become_app_errors() {
        let mock_server = MockServer::start().await;
        let client = NewsClient::new(ApiKey::new("test-token"), &mock_server.uri()).unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = run_search(
            &client,
            SearchRequest {
                query: "rust".into(),
                page: 1,
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::Upstream(_))));
    }
}
