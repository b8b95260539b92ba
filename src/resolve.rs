//! Resource-name-to-URI resolution.
//!
//! The loader never assumes where assets live. Hosts inject a resolver that
//! maps logical file names (already carrying any resource-directory prefix)
//! onto loadable URIs.

use thiserror::Error;
use url::Url;

/// Errors that can occur while resolving a logical asset name.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid asset path {path:?}: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

/// Maps a logical asset path to a loadable URI.
///
/// Implementations wrap whatever the host uses for asset addressing - a
/// static file root, a CDN base, an application-bundle scheme - and expose it
/// through one uniform call so the loader stays free of ambient globals.
pub trait ResourceResolver: Send + Sync {
    /// Resolve a relative asset path to a full URI.
    fn resolve(&self, path: &str) -> Result<Url, ResolveError>;
}

/// Resolver that joins asset paths onto a fixed base URL.
#[derive(Debug, Clone)]
pub struct BaseUrlResolver {
    base: Url,
}

impl BaseUrlResolver {
    /// Create a resolver rooted at `base`.
    ///
    /// A base without a trailing slash would make `Url::join` replace its
    /// last segment instead of appending, so one is added when missing.
    pub fn new(mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { base }
    }
}

impl ResourceResolver for BaseUrlResolver {
    fn resolve(&self, path: &str) -> Result<Url, ResolveError> {
        self.base.join(path).map_err(|source| ResolveError::InvalidPath {
            path: path.to_string(),
            source,
        })
    }
}
