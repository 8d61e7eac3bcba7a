use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use common::search::{run_search, SearchParams, SearchRequest, SearchState};
use serde::Serialize;

use crate::{
    html_state::HtmlState,
    middlewares::response_middleware::{HtmlError, TemplateResponse},
};

/// Context for `search/base.html`.
#[derive(Serialize)]
pub struct SearchPageData {
    #[serde(flatten)]
    pub search: SearchState,
    /// False on the landing page, where no search has been run yet.
    pub searched: bool,
}

pub async fn search_result_handler(
    State(state): State<HtmlState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, HtmlError> {
    let request = SearchRequest::try_from(params)?;
    let search = run_search(&state.news_client, request).await?;

    Ok(TemplateResponse::new_template(
        "search/base.html",
        SearchPageData {
            search,
            searched: true,
        },
    ))
}
