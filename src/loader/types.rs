//! Asset loader types, configuration, and events.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default request timeout for the bundled HTTP fetcher.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One load request: a resource directory plus the CSS and JS file lists.
///
/// Absent lists are treated as empty. Each list is deduplicated (stable,
/// first occurrence wins) before any work starts.
#[derive(Debug, Clone, Default)]
pub struct LoadRequest {
    /// Optional path segment prepended to every file name.
    pub resource_dir: Option<String>,
    /// Scripts to load sequentially, in order.
    pub js_files: Vec<String>,
    /// Stylesheets to inject, fire-and-forget.
    pub css_files: Vec<String>,
}

impl LoadRequest {
    pub fn new(resource_dir: Option<String>) -> Self {
        Self {
            resource_dir,
            ..Self::default()
        }
    }

    pub fn with_js(mut self, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.js_files.extend(files.into_iter().map(Into::into));
        self
    }

    pub fn with_css(mut self, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.css_files.extend(files.into_iter().map(Into::into));
        self
    }
}

/// Result of a load: the scripts that did not load.
///
/// `failed` holds logical file names from the request's deduplicated script
/// list, in attempt order. An empty list signals total success. Stylesheet
/// outcomes are never reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub failed: Vec<String>,
}

impl LoadReport {
    /// Whether every script settled successfully.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Events emitted during a load when an event channel is installed.
#[derive(Debug, Clone)]
pub enum LoadEvent {
    /// A script fetch was issued.
    ScriptStarted { file: String },
    /// A script fetch settled successfully.
    ScriptLoaded { file: String },
    /// A script fetch settled with a non-success outcome.
    ScriptFailed { file: String, error: String },
    /// A stylesheet insertion was scheduled (outcome is never observed).
    StylesheetQueued { file: String },
}

/// Configuration for the loader and its bundled HTTP fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Per-request timeout for script fetches.
    #[serde(with = "duration_secs")]
    pub request_timeout: Duration,
    /// User agent sent by the bundled HTTP fetcher.
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: concat!("asset-loader/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        d.as_secs().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}
