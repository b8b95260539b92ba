//! Document-head stylesheet insertion.
//!
//! Stylesheet injection is fire-and-forget: the loader schedules insertions
//! and never looks at the result, so the trait's error only feeds logging.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use url::Url;

/// Inserts stylesheet links into a document head.
///
/// Implementations wrap the host's DOM (or equivalent) head-mutation
/// capability. Errors are logged by the loader and otherwise ignored.
#[async_trait]
pub trait StyleTarget: Send + Sync {
    /// Append one `<link rel="stylesheet">` referencing `uri`.
    async fn append_link(&self, uri: Url) -> anyhow::Result<()>;
}

/// In-memory head that records appended links.
///
/// Useful for headless hosts and tests that only need to observe which
/// stylesheets were injected.
#[derive(Default)]
pub struct MemoryHead {
    links: Arc<Mutex<Vec<Url>>>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the links appended so far, in insertion order.
    pub async fn links(&self) -> Vec<Url> {
        self.links.lock().await.clone()
    }
}

#[async_trait]
impl StyleTarget for MemoryHead {
    async fn append_link(&self, uri: Url) -> anyhow::Result<()> {
        self.links.lock().await.push(uri);
        Ok(())
    }
}
