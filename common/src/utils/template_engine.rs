use chrono::DateTime;
pub use minijinja::{path_loader, Environment, Value};
pub use minijinja_autoreload::AutoReloader;
pub use minijinja_contrib;
pub use minijinja_embed;
use std::sync::Arc;
use url::Url;

pub trait ProvidesTemplateEngine {
    fn template_engine(&self) -> &Arc<TemplateEngine>;
}

#[derive(Clone)]
pub enum TemplateEngine {
    // Use AutoReload for debug builds (debug_assertions is true)
    #[cfg(debug_assertions)]
    AutoReload(Arc<AutoReloader>),
    // Use Embedded for release builds (debug_assertions is false)
    #[cfg(not(debug_assertions))]
    Embedded(Arc<Environment<'static>>),
}

/// Registers the filters shared by every template environment.
pub fn add_filters(env: &mut Environment<'_>) {
    minijinja_contrib::add_to_environment(env);
    env.add_filter("published_date", published_date);
    env.add_filter("safe_url", safe_url);
}

/// Formats an RFC 3339 timestamp as e.g. `June 3, 2024`.
///
/// Values that don't parse are passed through untouched.
pub fn published_date(value: String) -> String {
    DateTime::parse_from_rfc3339(&value)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or(value)
}

/// Keeps `http` and `https` links, replaces anything else with `#`.
///
/// Article links come straight from the news API and end up in `href` and
/// `src` attributes, where a `javascript:` url would run in the page.
pub fn safe_url(value: String) -> String {
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => value,
        _ => "#".to_string(),
    }
}

#[macro_export]
macro_rules! create_template_engine {
    // Macro takes the relative path to the templates dir as input
    ($relative_path:expr) => {{
        // Code for debug builds (AutoReload)
        #[cfg(debug_assertions)]
        {
            // These lines execute in the CALLING crate's context
            let crate_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            let template_path = crate_dir.join($relative_path);
            let reloader = $crate::utils::template_engine::AutoReloader::new(move |notifier| {
                let mut env = $crate::utils::template_engine::Environment::new();
                env.set_loader($crate::utils::template_engine::path_loader(&template_path));
                notifier.set_fast_reload(true);
                notifier.watch_path(&template_path, true);
                $crate::utils::template_engine::add_filters(&mut env);
                Ok(env)
            });
            $crate::utils::template_engine::TemplateEngine::AutoReload(std::sync::Arc::new(
                reloader,
            ))
        }
        // Code for release builds (Embedded)
        #[cfg(not(debug_assertions))]
        {
            // These lines also execute in the CALLING crate's context
            let mut env = $crate::utils::template_engine::Environment::new();
            $crate::utils::template_engine::minijinja_embed::load_templates!(&mut env);
            $crate::utils::template_engine::add_filters(&mut env);
            $crate::utils::template_engine::TemplateEngine::Embedded(std::sync::Arc::new(env))
        }
    }};
}

impl TemplateEngine {
    pub fn render(&self, name: &str, ctx: &Value) -> Result<String, minijinja::Error> {
        match self {
            // Only compile this arm for debug builds
            #[cfg(debug_assertions)]
            Self::AutoReload(reloader) => {
                let env = reloader.acquire_env()?;
                env.get_template(name)?.render(ctx)
            }
            // Only compile this arm for release builds
            #[cfg(not(debug_assertions))]
            Self::Embedded(env) => env.get_template(name)?.render(ctx),
        }
    }

    /// Loads and compiles each named template, failing on the first that is
    /// missing or has a syntax error.
    pub fn verify(&self, names: &[&str]) -> Result<(), minijinja::Error> {
        match self {
            #[cfg(debug_assertions)]
            Self::AutoReload(reloader) => {
                let env = reloader.acquire_env()?;
                for name in names {
                    env.get_template(name)?;
                }
                Ok(())
            }
            #[cfg(not(debug_assertions))]
            Self::Embedded(env) => {
                for name in names {
                    env.get_template(name)?;
                }
                Ok(())
            }
        }
    }
}
