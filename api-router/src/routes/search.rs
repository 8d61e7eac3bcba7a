use axum::{
    extract::{Query, State},
    Json,
};
use common::search::{run_search, SearchParams, SearchRequest, SearchState};

use crate::{api_state::ApiState, error::ApiError};

/// JSON rendering of the same search view model the HTML pages use.
pub async fn search(
    State(state): State<ApiState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchState>, ApiError> {
    let request = SearchRequest::try_from(params)?;
    let search = run_search(&state.news_client, request).await?;

    Ok(Json(search))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use news_client::{ApiKey, NewsClient};
    use serde_json::Value;
    use tower::ServiceExt;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::{api_routes_v1, api_state::ApiState};

    fn test_app(base_url: &str) -> Router {
        let client = NewsClient::new(ApiKey::new("test-key"), base_url).unwrap();
        let state = ApiState::new(Arc::new(client));
        api_routes_v1().with_state(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn returns_search_state_as_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/everything"))
            .and(query_param("q", "rust"))
            .and(query_param("page", "3"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"status":"ok","totalResults":45,"articles":[]}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let (status, body) = get_json(test_app(&mock_server.uri()), "/search?q=rust&page=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query"], "rust");
        assert_eq!(body["current_page"], 3);
        assert_eq!(body["total_pages"], 3);
        assert_eq!(body["previous_page"], 2);
        assert_eq!(body["next_page"], 0);
        assert_eq!(body["is_last_page"], true);
        assert_eq!(body["results"]["total_results"], 45);
    }

    #[tokio::test]
    async fn malformed_page_is_a_bad_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let (status, body) = get_json(test_app(&mock_server.uri()), "/search?page=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn upstream_failure_hides_the_upstream_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("apiKeyInvalid"))
            .mount(&mock_server)
            .await;

        let (status, body) = get_json(test_app(&mock_server.uri()), "/search?q=rust").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to get news");
    }

    #[tokio::test]
    async fn liveness_endpoint_answers() {
        let (status, body) = get_json(test_app("http://127.0.0.1:9"), "/live").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
