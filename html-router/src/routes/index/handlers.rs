use axum::response::IntoResponse;
use common::search::SearchState;

use crate::{
    middlewares::response_middleware::{HtmlError, TemplateResponse},
    routes::search::SearchPageData,
};

pub async fn index_handler() -> Result<impl IntoResponse, HtmlError> {
    Ok(TemplateResponse::new_template(
        "search/base.html",
        SearchPageData {
            search: SearchState::blank(),
            searched: false,
        },
    ))
}
