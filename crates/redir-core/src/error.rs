//! Construction errors for the redirect middleware.

use thiserror::Error;

/// Misconfiguration detected while building a [`crate::RedirectMiddleware`].
///
/// None of these are retriable: the driver must refuse to start with the
/// offending configuration. The `Display` strings are matched by operators'
/// scripts, so they must not change.
#[derive(Debug, Error)]
pub enum RedirectError {
    /// The `baseurl` option is absent.
    #[error("no baseurl provided")]
    MissingBaseUrl,
    /// The `baseurl` option is present but is not a string.
    #[error("baseurl must be a string")]
    BaseUrlNotString,
    /// The base URL has no scheme (e.g. `example.com`).
    #[error("no scheme specified for redirect baseurl")]
    MissingScheme,
    /// The base URL has a scheme but no host (e.g. `https://` or `foo:bar`).
    #[error("no host specified for redirect baseurl")]
    MissingHost,
    /// Any other URL parser failure (bad port, invalid IPv6 literal, ...).
    #[error("invalid redirect baseurl: {0}")]
    InvalidBaseUrl(#[source] url::ParseError),
}
