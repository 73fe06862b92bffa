//! `redir url` – print redirect URLs for object paths.

use anyhow::Result;

use super::build_middleware;
use crate::cli::SourceArgs;

pub fn run_url(source: &SourceArgs, paths: &[String]) -> Result<()> {
    let middleware = build_middleware(source)?;
    for path in paths {
        let url = middleware.redirect_url(None, path)?;
        tracing::info!(path = %path, url = %url, "redirect url");
        println!("{url}");
    }
    Ok(())
}
