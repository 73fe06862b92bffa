//! Middleware options: the generic string-keyed mapping a driver hands to a
//! middleware, and the typed view the redirect middleware extracts from it.

use crate::error::RedirectError;

/// Generic middleware options as read from the `[middleware.<name>]` table of
/// the config file.
pub type Options = toml::Table;

/// Option key holding the redirect base URL.
pub const BASEURL_KEY: &str = "baseurl";

/// Typed options for [`crate::RedirectMiddleware`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectOptions {
    /// Absolute URL whose scheme, host and path prefix every redirect shares.
    pub baseurl: String,
}

impl RedirectOptions {
    pub fn new(baseurl: impl Into<String>) -> Self {
        Self {
            baseurl: baseurl.into(),
        }
    }

    /// Extract the redirect options from a generic options mapping.
    ///
    /// Fails with [`RedirectError::MissingBaseUrl`] when `baseurl` is absent and
    /// [`RedirectError::BaseUrlNotString`] when it holds a non-string value.
    /// The URL itself is validated later, by [`crate::RedirectMiddleware::new`].
    pub fn from_options(options: &Options) -> Result<Self, RedirectError> {
        let value = options
            .get(BASEURL_KEY)
            .ok_or(RedirectError::MissingBaseUrl)?;
        let baseurl = value.as_str().ok_or(RedirectError::BaseUrlNotString)?;
        Ok(Self::new(baseurl))
    }
}
