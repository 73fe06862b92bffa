//! CLI command handlers. Each command is in its own file.

mod check;
mod config_path;
mod url;

pub use check::run_check;
#[cfg(test)]
pub(crate) use check::render_check;
pub use config_path::run_config_path;
pub use url::run_url;

use anyhow::Result;
use redir_core::config::{self, REDIRECT_MIDDLEWARE};
use redir_core::options::BASEURL_KEY;
use redir_core::{InMemoryDriver, RedirectMiddleware};

use super::SourceArgs;

/// Build the redirect middleware from `--baseurl`, `--config`, or the default config file.
pub(crate) fn build_middleware(source: &SourceArgs) -> Result<RedirectMiddleware<InMemoryDriver>> {
    let mut options = match &source.config {
        Some(path) => config::load_from_path(path)?.middleware_options(REDIRECT_MIDDLEWARE),
        None if source.baseurl.is_some() => Default::default(),
        None => config::load_or_init()?.middleware_options(REDIRECT_MIDDLEWARE),
    };
    if let Some(baseurl) = &source.baseurl {
        options.insert(BASEURL_KEY.to_string(), baseurl.clone().into());
    }
    tracing::debug!("redirect options: {:?}", options);
    Ok(RedirectMiddleware::from_options(InMemoryDriver::new(), &options)?)
}
