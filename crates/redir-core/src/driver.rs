//! Storage driver seam.
//!
//! The redirect middleware sits in front of a [`StorageDriver`] and forwards
//! everything except `redirect_url` to it. [`InMemoryDriver`] is the simplest
//! backend: it serves bytes itself and never redirects.

use std::collections::BTreeMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::error::RedirectError;
use crate::redirect::RedirectMiddleware;

/// Per-request information a driver may use to pick a redirect target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// HTTP method of the incoming request, if known.
    pub method: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestContext {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First value of header `name` (ASCII case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("path not found: {0}")]
    PathNotFound(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error(transparent)]
    Redirect(#[from] RedirectError),
}

/// Object storage backend.
pub trait StorageDriver: Send + Sync {
    /// Short identifier, e.g. "inmemory" or "redirect".
    fn name(&self) -> &str;

    fn get_content(&self, path: &str) -> Result<Vec<u8>, DriverError>;

    fn put_content(&self, path: &str, content: &[u8]) -> Result<(), DriverError>;

    fn delete(&self, path: &str) -> Result<(), DriverError>;

    /// URL the caller should redirect to for reading `path`, or `None` when
    /// the driver serves the bytes itself.
    fn redirect_url(
        &self,
        request: Option<&RequestContext>,
        path: &str,
    ) -> Result<Option<String>, DriverError>;
}

/// Volatile driver backed by a map of path to bytes.
#[derive(Debug, Default)]
pub struct InMemoryDriver {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_path(path: &str) -> Result<(), DriverError> {
        if path.is_empty() || !path.starts_with('/') {
            return Err(DriverError::InvalidPath(path.to_string()));
        }
        Ok(())
    }
}

impl StorageDriver for InMemoryDriver {
    fn name(&self) -> &str {
        "inmemory"
    }

    fn get_content(&self, path: &str) -> Result<Vec<u8>, DriverError> {
        Self::check_path(path)?;
        let objects = self.objects.read().unwrap_or_else(|e| e.into_inner());
        objects
            .get(path)
            .cloned()
            .ok_or_else(|| DriverError::PathNotFound(path.to_string()))
    }

    fn put_content(&self, path: &str, content: &[u8]) -> Result<(), DriverError> {
        Self::check_path(path)?;
        let mut objects = self.objects.write().unwrap_or_else(|e| e.into_inner());
        objects.insert(path.to_string(), content.to_vec());
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<(), DriverError> {
        Self::check_path(path)?;
        let mut objects = self.objects.write().unwrap_or_else(|e| e.into_inner());
        objects
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| DriverError::PathNotFound(path.to_string()))
    }

    fn redirect_url(
        &self,
        _request: Option<&RequestContext>,
        _path: &str,
    ) -> Result<Option<String>, DriverError> {
        Ok(None)
    }
}

impl<D: StorageDriver> StorageDriver for RedirectMiddleware<D> {
    fn name(&self) -> &str {
        "redirect"
    }

    fn get_content(&self, path: &str) -> Result<Vec<u8>, DriverError> {
        self.next().get_content(path)
    }

    fn put_content(&self, path: &str, content: &[u8]) -> Result<(), DriverError> {
        self.next().put_content(path, content)
    }

    fn delete(&self, path: &str) -> Result<(), DriverError> {
        self.next().delete(path)
    }

    fn redirect_url(
        &self,
        request: Option<&RequestContext>,
        path: &str,
    ) -> Result<Option<String>, DriverError> {
        let url = RedirectMiddleware::redirect_url(self, request, path)?;
        Ok(Some(url))
    }
}
