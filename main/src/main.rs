use api_router::{api_routes_v1, api_state::ApiState};
use axum::{extract::FromRef, Router};
use clap::Parser;
use common::utils::config::{get_config, AppConfig, ConfigOverrides};
use html_router::{html_routes, html_state::HtmlState};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Server-rendered search front end for the news API.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// News API access key; falls back to the APIKEY environment variable
    #[arg(long = "apikey")]
    api_key: Option<String>,

    /// Port to listen on; falls back to the PORT environment variable, then 9000
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_result = dotenv::dotenv();

    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .ok();

    // Not fatal, the key may come from the environment or the command line
    if let Err(e) = dotenv_result {
        debug!("No .env file loaded: {}", e);
    }

    let cli = Cli::parse();

    // Get config
    let config = get_config(ConfigOverrides {
        api_key: cli.api_key,
        http_port: cli.port,
    })
    .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!(api_key = ?config.news_api_key, "Using news API key");

    let app = build_app(&config).inspect_err(|e| error!("Failed to start: {}", e))?;

    info!("Starting server listening on 0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port))
        .await
        .inspect_err(|e| error!("Failed to bind port {}: {}", config.http_port, e))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app(config: &AppConfig) -> Result<Router, Box<dyn std::error::Error>> {
    let news_client = Arc::new(config.news_client()?);

    let html_state = HtmlState::new_with_resources(config.clone(), news_client.clone(), None);
    html_state.verify_templates()?;

    let api_state = ApiState::new(news_client);

    // Create Axum router
    let app = Router::new()
        .nest("/api/v1", api_routes_v1())
        .merge(html_routes(&html_state))
        .with_state(AppState {
            api_state,
            html_state,
        })
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

#[derive(Clone, FromRef)]
struct AppState {
    api_state: ApiState,
    html_state: HtmlState,
}
