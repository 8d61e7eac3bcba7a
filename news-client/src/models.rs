use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One page of results for one query, as returned by the news API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub status: String,

    #[serde(rename(deserialize = "totalResults"))]
    pub total_results: u64,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub articles: Vec<Article>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// A news article
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub source: Source,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub author: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub url: String,

    #[serde(
        default,
        rename(deserialize = "urlToImage"),
        deserialize_with = "deserialize_null_default"
    )]
    pub image_url: String,

    #[serde(rename(deserialize = "publishedAt"))]
    pub published_at: DateTime<Utc>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Provider-assigned identifier, absent for most smaller outlets.
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
