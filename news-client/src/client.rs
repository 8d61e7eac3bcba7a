use std::{fmt, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::{error::Error, models::ResultSet};

const EVERYTHING_ENDPOINT: &str = "everything";

/// Credential for the news API.
///
/// `Debug` only ever shows the redacted form; use [`ApiKey::expose`] where
/// the raw value is needed.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Masked form that keeps only the last four characters.
    pub fn redacted(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 4 {
            return "****".to_string();
        }
        let tail: String = chars.iter().skip(chars.len().saturating_sub(4)).collect();
        format!("********{tail}")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.redacted()).finish()
    }
}

/// Query parameters for one page of an `everything` search.
#[derive(Debug, Clone)]
pub struct NewsQuery<'a> {
    /// Search term, forwarded as-is (may be empty).
    pub query: &'a str,
    /// How many articles to return (per page).
    pub page_size: u32,
    /// The number of the page which should be returned.
    ///
    /// Paging starts with `1`.
    pub page: u32,
}

/// Client that fetches articles from the news API.
#[derive(Clone)]
pub struct NewsClient {
    api_key: ApiKey,
    url: Url,
    timeout: Duration,
    language: String,
    sort_by: String,
    client: reqwest::Client,
}

impl NewsClient {
    /// Create a client against the given API base url, e.g. `https://newsapi.org/v2`.
    pub fn new(api_key: ApiKey, base_url: &str) -> Result<Self, Error> {
        let url = Url::parse(base_url).map_err(|e| Error::InvalidUrlBase(Some(e)))?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrlBase(None));
        }

        Ok(Self {
            api_key,
            url,
            timeout: Duration::from_secs(10),
            language: "en".to_string(),
            sort_by: "publishedAt".to_string(),
            client: reqwest::Client::new(),
        })
    }

    /// Configures the timeout.
    ///
    /// The timeout defaults to 10s.
    #[must_use = "dropped changed client"]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use = "dropped changed client"]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use = "dropped changed client"]
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    /// Fetch one page of articles matching the query.
    pub async fn search(&self, query: &NewsQuery<'_>) -> Result<ResultSet, Error> {
        let url = self.build_url(query, self.api_key.expose())?;
        let redacted_url = self.loggable_url(query)?;
        info!(url = %redacted_url, "Requesting news articles");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %redacted_url, error = %e, "News API request failed");
                Error::Unavailable(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                url = %redacted_url,
                status = status.as_u16(),
                body = %body,
                "News API returned an error status"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        // The request timeout also covers the body, a stall there is still an outage
        let raw_response = response.bytes().await.map_err(|e| {
            warn!(url = %redacted_url, error = %e, "Failed to read news API response");
            if e.is_timeout() {
                Error::Unavailable(e)
            } else {
                Error::Fetching(e)
            }
        })?;
        let deserializer = &mut serde_json::Deserializer::from_slice(&raw_response);
        let mut results: ResultSet =
            serde_path_to_error::deserialize(deserializer).map_err(|error| {
                let path = error.path().to_string();
                warn!(url = %redacted_url, path = %path, error = %error, "Failed to decode news API response");
                Error::Decoding {
                    path,
                    source: error,
                }
            })?;

        let page_size = usize::try_from(query.page_size).unwrap_or(usize::MAX);
        if results.articles.len() > page_size {
            warn!(
                received = results.articles.len(),
                page_size, "News API returned more articles than requested; truncating"
            );
            results.articles.truncate(page_size);
        }

        Ok(results)
    }

    /// The request url with the key masked, safe to log.
    fn loggable_url(&self, params: &NewsQuery<'_>) -> Result<Url, Error> {
        self.build_url(params, &self.api_key.redacted())
    }

    fn build_url(&self, params: &NewsQuery<'_>, api_key: &str) -> Result<Url, Error> {
        let mut url = self.url.clone();

        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrlBase(None))?
            .pop_if_empty()
            .push(EVERYTHING_ENDPOINT);

        url.query_pairs_mut()
            .append_pair("q", params.query)
            .append_pair("pageSize", &params.page_size.to_string())
            .append_pair("page", &params.page.to_string())
            .append_pair("apiKey", api_key)
            .append_pair("sortBy", &self.sort_by)
            .append_pair("language", &self.language);

        Ok(url)
    }
}

impl fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsClient")
            .field("api_key", &self.api_key)
            .field("url", &self.url.as_str())
            .field("timeout", &self.timeout)
            .field("language", &self.language)
            .field("sort_by", &self.sort_by)
            .finish_non_exhaustive()
    }
}
