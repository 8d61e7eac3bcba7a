use std::time::Duration;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use news_client::{ApiKey, NewsClient};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    /// Credential for the news API, `APIKEY` in the environment.
    #[serde(rename = "apikey")]
    pub news_api_key: ApiKey,
    #[serde(rename = "port", default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_news_api_url")]
    pub news_api_url: String,
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
    #[serde(default = "default_news_language")]
    pub news_language: String,
    #[serde(default = "default_news_sort_by")]
    pub news_sort_by: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

impl AppConfig {
    /// Builds the news API client described by this configuration.
    pub fn news_client(&self) -> Result<NewsClient, news_client::Error> {
        Ok(
            NewsClient::new(self.news_api_key.clone(), &self.news_api_url)?
                .with_timeout(Duration::from_secs(self.upstream_timeout_secs))
                .with_language(&self.news_language)
                .with_sort_by(&self.news_sort_by),
        )
    }
}

fn default_http_port() -> u16 {
    9000
}

fn default_news_api_url() -> String {
    "https://newsapi.org/v2".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    10
}

fn default_news_language() -> String {
    "en".to_string()
}

fn default_news_sort_by() -> String {
    "publishedAt".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

/// Values given on the command line, applied on top of file and environment.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub http_port: Option<u16>,
}

pub fn get_config(overrides: ConfigOverrides) -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default());

    build_config(builder, overrides)
}

fn build_config(
    builder: ConfigBuilder<DefaultState>,
    overrides: ConfigOverrides,
) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = builder
        .set_override_option("apikey", overrides.api_key)?
        .set_override_option("port", overrides.http_port.map(i64::from))?
        .build()?
        .try_deserialize()?;

    if config.news_api_key.is_empty() {
        return Err(ConfigError::Message("apikey must be set".to_string()));
    }

    Ok(config)
}
