//! Client for the news search API's `everything` endpoint.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiKey, NewsClient, NewsQuery};
pub use error::Error;
pub use models::{Article, ResultSet, Source};
