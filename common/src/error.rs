use thiserror::Error;

// Core internal errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("News API error: {0}")]
    Upstream(#[from] news_client::Error),
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}
