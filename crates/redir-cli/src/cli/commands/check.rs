//! `redir check` – validate the redirect configuration.

use anyhow::Result;
use redir_core::{InMemoryDriver, RedirectMiddleware};
use serde::Serialize;

use super::build_middleware;
use crate::cli::SourceArgs;

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    scheme: &'a str,
    host: &'a str,
    base_path: &'a str,
}

pub fn run_check(source: &SourceArgs, json: bool) -> Result<()> {
    let middleware = build_middleware(source)?;
    println!("{}", render_check(&middleware, json)?);
    Ok(())
}

/// Text or JSON summary of the parsed base URL.
pub(crate) fn render_check(
    middleware: &RedirectMiddleware<InMemoryDriver>,
    json: bool,
) -> Result<String> {
    let report = CheckReport {
        scheme: middleware.scheme(),
        host: middleware.host(),
        base_path: middleware.base_path(),
    };
    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(format!(
        "{:<10} {}\n{:<10} {}\n{:<10} {}",
        "SCHEME", report.scheme, "HOST", report.host, "BASE PATH", report.base_path
    ))
}
