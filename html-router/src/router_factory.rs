use axum::{extract::FromRef, middleware::from_fn_with_state, Router};
use tower_http::{compression::CompressionLayer, services::ServeDir};
use tracing::debug;

use crate::{
    html_state::HtmlState,
    middlewares::response_middleware::{with_template_response, TemplateResponse},
};

pub struct RouterFactory<S> {
    app_state: HtmlState,
    public_routers: Vec<Router<S>>,
    public_assets_config: Option<AssetsConfig>,
    compression_enabled: bool,
}

struct AssetsConfig {
    path: String,      // URL path for assets
    directory: String, // Directory on disk
}

impl<S> RouterFactory<S>
where
    S: Clone + Send + Sync + 'static,
    HtmlState: FromRef<S>,
{
    pub fn new(app_state: &HtmlState) -> Self {
        Self {
            app_state: app_state.to_owned(),
            public_routers: Vec::new(),
            public_assets_config: None,
            compression_enabled: false,
        }
    }

    // Add a serving of assets
    pub fn with_public_assets(mut self, path: &str, directory: &str) -> Self {
        self.public_assets_config = Some(AssetsConfig {
            path: path.to_string(),
            directory: directory.to_string(),
        });
        self
    }

    // Add a public router that will be merged at the root level
    pub fn add_public_routes(mut self, routes: Router<S>) -> Self {
        self.public_routers.push(routes);
        self
    }

    /// Enables response compression when building the router.
    pub const fn with_compression(mut self) -> Self {
        self.compression_enabled = true;
        self
    }

    pub fn build(self) -> Router<S> {
        // Build the "App" router (Pages)
        let mut app_router = Router::new();

        for router in self.public_routers {
            app_router = app_router.merge(router);
        }

        app_router = app_router.fallback(|| async { TemplateResponse::not_found() });

        // Turn TemplateResponses into rendered HTML
        app_router = app_router.layer(from_fn_with_state(
            self.app_state.clone(),
            with_template_response::<HtmlState>,
        ));

        // Build the Final router, starting with assets (bypassing app middleware)
        let mut final_router = Router::new();

        if let Some(assets_config) = self.public_assets_config {
            debug!("Assets: Serving from filesystem: {:?}", assets_config.directory);
            final_router =
                final_router.nest_service(&assets_config.path, ServeDir::new(assets_config.directory));
        }

        // Merge the App router
        final_router = final_router.merge(app_router);

        // Apply Global Middleware (Compression), negotiated via Accept-Encoding
        if self.compression_enabled {
            final_router = final_router.layer(CompressionLayer::new());
        }

        final_router
    }
}
