use common::create_template_engine;
use common::utils::config::AppConfig;
use common::utils::template_engine::{ProvidesTemplateEngine, TemplateEngine};
use news_client::NewsClient;
use std::sync::Arc;
use tracing::debug;

/// Templates that must load for the site to render anything.
pub const REQUIRED_TEMPLATES: &[&str] = &["search/base.html", "errors/error.html"];

#[derive(Clone)]
pub struct HtmlState {
    pub news_client: Arc<NewsClient>,
    pub templates: Arc<TemplateEngine>,
    pub config: AppConfig,
}

impl HtmlState {
    pub fn new_with_resources(
        config: AppConfig,
        news_client: Arc<NewsClient>,
        template_engine: Option<Arc<TemplateEngine>>,
    ) -> Self {
        let templates =
            template_engine.unwrap_or_else(|| Arc::new(create_template_engine!("templates")));
        debug!("Template engine configured for html_router.");

        Self {
            news_client,
            templates,
            config,
        }
    }

    /// Loads every required template once so a broken install fails at startup.
    pub fn verify_templates(&self) -> Result<(), minijinja::Error> {
        self.templates.verify(REQUIRED_TEMPLATES)
    }
}

impl ProvidesTemplateEngine for HtmlState {
    fn template_engine(&self) -> &Arc<TemplateEngine> {
        &self.templates
    }
}
