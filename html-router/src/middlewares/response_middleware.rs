use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    Extension,
};
use common::{
    error::AppError,
    utils::template_engine::{ProvidesTemplateEngine, Value},
};
use minijinja::context;
use serde::Serialize;
use tracing::error;

#[derive(Clone, Debug)]
pub enum TemplateKind {
    Full(String),
    Error(StatusCode),
}

/// A page to be rendered by [`with_template_response`] once the handler returns.
#[derive(Clone)]
pub struct TemplateResponse {
    template_kind: TemplateKind,
    context: Value,
}

impl TemplateResponse {
    pub fn new_template<T: Serialize>(name: impl Into<String>, context: T) -> Self {
        Self {
            template_kind: TemplateKind::Full(name.into()),
            context: Value::from_serialize(&context),
        }
    }

    pub fn error(status: StatusCode, title: &str, description: &str) -> Self {
        let ctx = context! {
            status_code => status.as_u16(),
            title => title,
            description => description
        };
        Self {
            template_kind: TemplateKind::Error(status),
            context: ctx,
        }
    }

    pub fn not_found() -> Self {
        Self::error(
            StatusCode::NOT_FOUND,
            "Page Not Found",
            "The page you're looking for doesn't exist.",
        )
    }

    pub fn server_error() -> Self {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "Something went wrong on our end.",
        )
    }

    pub fn news_unavailable() -> Self {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "News Unavailable",
            "We couldn't fetch news right now. Please try again in a moment.",
        )
    }

    pub fn bad_request(message: &str) -> Self {
        Self::error(StatusCode::BAD_REQUEST, "Bad Request", message)
    }
}

impl IntoResponse for TemplateResponse {
    fn into_response(self) -> Response {
        Extension(self).into_response()
    }
}

pub async fn with_template_response<S>(State(state): State<S>, req: Request, next: Next) -> Response
where
    S: ProvidesTemplateEngine + Clone + Send + Sync + 'static,
{
    let response = next.run(req).await;

    let Some(template_response) = response.extensions().get::<TemplateResponse>().cloned() else {
        return response;
    };
    let template_engine = state.template_engine();

    match &template_response.template_kind {
        TemplateKind::Full(name) => match template_engine.render(name, &template_response.context)
        {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                error!("Failed to render template '{}': {:?}", name, e);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback_error())).into_response()
            }
        },
        TemplateKind::Error(status) => {
            match template_engine.render("errors/error.html", &template_response.context) {
                Ok(html) => (*status, Html(html)).into_response(),
                Err(e) => {
                    error!("Critical: Failed to render 'errors/error.html': {:?}", e);
                    // Fallback HTML, but use the intended status code
                    (*status, Html(fallback_error())).into_response()
                }
            }
        }
    }
}

#[derive(Debug)]
pub enum HtmlError {
    AppError(AppError),
}

impl From<AppError> for HtmlError {
    fn from(err: AppError) -> Self {
        Self::AppError(err)
    }
}

impl From<minijinja::Error> for HtmlError {
    fn from(err: minijinja::Error) -> Self {
        Self::AppError(AppError::Template(err))
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        match self {
            Self::AppError(err) => match err {
                AppError::Validation(msg) => TemplateResponse::bad_request(&msg).into_response(),
                AppError::Upstream(err) => {
                    error!("News API error: {}", err);
                    TemplateResponse::news_unavailable().into_response()
                }
                AppError::Template(err) => {
                    error!("Template error: {}", err);
                    TemplateResponse::server_error().into_response()
                }
            },
        }
    }
}

fn fallback_error() -> String {
    r#"
    <html>
        <body>
            <div class="container">
                <h1>Error</h1>
                <p>Sorry, something went wrong displaying this page.</p>
            </div>
        </body>
    </html>
    "#
    .to_string()
}
