use api_state::ApiState;
use axum::{extract::FromRef, routing::get, Router};
use routes::{liveness::live, search::search};

pub mod api_state;
pub mod error;
mod routes;

/// Router for API functionality, version 1
pub fn api_routes_v1<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    Router::new()
        .route("/live", get(live))
        .route("/search", get(search))
}
