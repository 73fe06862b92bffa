//! Redirect-on-read middleware.
//!
//! Wraps a storage driver and, instead of serving object bytes, answers reads
//! with an absolute URL on a CDN or reverse proxy that fronts the same objects.
//! The base URL is parsed once at construction into `(scheme, host, base_path)`
//! and never mutated, so one instance can be shared by any number of
//! concurrent callers.

use crate::driver::RequestContext;
use crate::error::RedirectError;
use crate::options::{Options, RedirectOptions};

/// Storage middleware that maps object paths to redirect URLs.
#[derive(Debug, Clone)]
pub struct RedirectMiddleware<D> {
    next: D,
    scheme: String,
    host: String,
    base_path: String,
}

impl<D> RedirectMiddleware<D> {
    /// Build the middleware from typed options, validating the base URL.
    pub fn new(next: D, options: &RedirectOptions) -> Result<Self, RedirectError> {
        // Surrounding whitespace is ignored, as the URL parser does.
        let raw = options.baseurl.trim();
        let parsed = url::Url::parse(raw).map_err(|e| match e {
            url::ParseError::RelativeUrlWithoutBase => RedirectError::MissingScheme,
            url::ParseError::EmptyHost => RedirectError::MissingHost,
            other => RedirectError::InvalidBaseUrl(other),
        })?;

        let scheme = parsed.scheme();
        if scheme.is_empty() {
            return Err(RedirectError::MissingScheme);
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(RedirectError::MissingHost);
        }
        let (host, base_path) = split_authority_and_path(raw);
        if host.is_empty() {
            return Err(RedirectError::MissingHost);
        }
        let host = host.to_string();
        let base_path = base_path.to_string();

        tracing::debug!(scheme, host = %host, base_path = %base_path, "redirect middleware configured");

        Ok(Self {
            next,
            scheme: scheme.to_string(),
            host,
            base_path,
        })
    }

    /// Build the middleware from a generic options mapping (`baseurl` key).
    pub fn from_options(next: D, options: &Options) -> Result<Self, RedirectError> {
        let options = RedirectOptions::from_options(options)?;
        Self::new(next, &options)
    }

    /// Compose the redirect URL for `path`.
    ///
    /// Slashes at the seam between the base path and `path` collapse to a
    /// single `/`; the rest of `path` is passed through verbatim. `request`
    /// is not consulted. Never fails for a constructed instance.
    pub fn redirect_url(
        &self,
        _request: Option<&RequestContext>,
        path: &str,
    ) -> Result<String, RedirectError> {
        let base = self.base_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(format!("{}://{}{}/{}", self.scheme, self.host, base, path))
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Network authority as configured, including `:port` when one was given.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path prefix exactly as configured (may be empty, may end in `/`).
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The wrapped storage driver.
    pub fn next(&self) -> &D {
        &self.next
    }
}

/// Host (with any port, without userinfo) and path of the raw base URL, as written.
///
/// The parser only validates: it drops default ports, resolves dot segments
/// and percent-encodes the path, none of which may leak into redirect URLs.
fn split_authority_and_path(raw: &str) -> (&str, &str) {
    let Some((_, rest)) = raw.split_once("://") else {
        return ("", "");
    };
    let authority_end = rest
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    let path = if tail.starts_with('/') {
        let path_end = tail.find(|c| matches!(c, '?' | '#')).unwrap_or(tail.len());
        &tail[..path_end]
    } else {
        ""
    };
    (host, path)
}
