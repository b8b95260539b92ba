//! Sequential CSS/JS asset loading with aggregated failure reporting.
//!
//! Given an optional resource directory plus lists of stylesheet and script
//! file names, [`AssetLoader`] injects stylesheet links into a document head
//! (deferred, fire-and-forget) and downloads scripts strictly one at a time,
//! resolving with the list of files that failed to load. The document head,
//! the name-to-URI resolver, and the single-script fetch primitive are
//! injected collaborators, so the loader works against any host.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use asset_loader::{
//!     AssetLoader, BaseUrlResolver, HttpScriptFetcher, LoadRequest, LoaderConfig, MemoryHead,
//! };
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let resolver = BaseUrlResolver::new("https://app.example/static/".parse()?);
//! let fetcher = HttpScriptFetcher::new(&LoaderConfig::default())?;
//! let loader = AssetLoader::new(Arc::new(resolver), Arc::new(fetcher), Arc::new(MemoryHead::new()));
//!
//! let report = loader
//!     .load(
//!         LoadRequest::new(Some("resource/pkg".into()))
//!             .with_js(["app.js", "widgets.js"])
//!             .with_css(["theme.css"]),
//!     )
//!     .await;
//! assert!(report.is_success(), "failed: {:?}", report.failed);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod resolve;
pub mod script;
pub mod style;
mod util;

pub use loader::{
    AssetLoader, LoadEvent, LoadReport, LoadRequest, LoaderConfig, DEFAULT_REQUEST_TIMEOUT,
};
pub use resolve::{BaseUrlResolver, ResolveError, ResourceResolver};
pub use script::{FetchError, HttpScriptFetcher, ScriptFetcher};
pub use style::{MemoryHead, StyleTarget};
