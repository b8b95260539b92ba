//! Sequential asset loading service.
//!
//! Injects stylesheet links fire-and-forget, then loads scripts strictly one
//! at a time so later scripts can depend on earlier ones having executed.
//! Separated from host concerns - the document head, URI resolution, and the
//! fetch primitive are injected collaborators.

mod types;

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::resolve::ResourceResolver;
use crate::script::ScriptFetcher;
use crate::style::StyleTarget;
use crate::util::{dedup_files, prefixed};

pub use types::{LoadEvent, LoadReport, LoadRequest, LoaderConfig, DEFAULT_REQUEST_TIMEOUT};

/// A script queued for loading: the caller's logical name plus the
/// resource-directory-prefixed path handed to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingScript {
    logical: String,
    path: String,
}

/// What the loader should do next.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Issue a fetch for this script.
    Fetch(PendingScript),
    /// Queue drained but an attempt is still in flight; wait for it to
    /// settle. Unreachable while loading stays one-at-a-time, kept as a
    /// safety state.
    Waiting,
    /// Every script has settled; report.
    Done,
}

/// Queue, in-flight counter, and failure list for one load invocation.
///
/// Created when a load begins and discarded once the report is produced;
/// never reused across requests.
struct LoaderState {
    pending: VecDeque<PendingScript>,
    in_flight: usize,
    failed: Vec<String>,
}

impl LoaderState {
    fn new(resource_dir: Option<&str>, js_files: &[String]) -> Self {
        let pending = dedup_files(js_files)
            .into_iter()
            .map(|logical| PendingScript {
                path: prefixed(resource_dir, &logical),
                logical,
            })
            .collect();
        Self {
            pending,
            in_flight: 0,
            failed: Vec::new(),
        }
    }

    /// Decide the next transition. Popping a script counts it as in flight
    /// until [`LoaderState::settle`] runs.
    fn step(&mut self) -> Step {
        match self.pending.pop_front() {
            Some(script) => {
                self.in_flight += 1;
                Step::Fetch(script)
            }
            None if self.in_flight > 0 => Step::Waiting,
            None => Step::Done,
        }
    }

    /// Record one settled attempt.
    fn settle(&mut self, script: &PendingScript, success: bool) {
        if !success {
            self.failed.push(script.logical.clone());
        }
        self.in_flight -= 1;
    }
}

/// Service that loads an application's CSS and JS assets.
///
/// One instance can serve many [`load`](AssetLoader::load) calls; per-call
/// state lives inside the call itself.
pub struct AssetLoader {
    resolver: Arc<dyn ResourceResolver>,
    fetcher: Arc<dyn ScriptFetcher>,
    style: Arc<dyn StyleTarget>,
    event_tx: Option<mpsc::Sender<LoadEvent>>,
}

impl AssetLoader {
    /// Create a new loader from its three collaborators.
    pub fn new(
        resolver: Arc<dyn ResourceResolver>,
        fetcher: Arc<dyn ScriptFetcher>,
        style: Arc<dyn StyleTarget>,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            style,
            event_tx: None,
        }
    }

    /// Install a channel for progress events.
    pub fn with_events(mut self, event_tx: mpsc::Sender<LoadEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    async fn emit(&self, event: LoadEvent) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event).await;
        }
    }

    /// Load the requested assets.
    ///
    /// Stylesheet insertions are scheduled on the task queue and never
    /// awaited. Scripts load strictly in list order, each only after the
    /// previous attempt settled. The returned report lists the scripts whose
    /// attempts did not succeed; it is produced exactly once, after every
    /// script has settled - immediately, when the script list is empty.
    pub async fn load(&self, request: LoadRequest) -> LoadReport {
        let resource_dir = request.resource_dir.as_deref();

        self.queue_stylesheets(resource_dir, &request.css_files)
            .await;

        let mut state = LoaderState::new(resource_dir, &request.js_files);

        loop {
            let script = match state.step() {
                Step::Fetch(script) => script,
                Step::Waiting => {
                    // Cannot happen while fetches are awaited one at a time.
                    tracing::warn!("asset queue drained with a fetch still in flight");
                    break;
                }
                Step::Done => break,
            };

            tracing::debug!(file = %script.path, "loading script");
            self.emit(LoadEvent::ScriptStarted {
                file: script.logical.clone(),
            })
            .await;

            match self.fetch_script(&script).await {
                Ok(()) => {
                    state.settle(&script, true);
                    self.emit(LoadEvent::ScriptLoaded {
                        file: script.logical.clone(),
                    })
                    .await;
                }
                Err(error) => {
                    tracing::warn!(file = %script.path, %error, "script load failed");
                    state.settle(&script, false);
                    self.emit(LoadEvent::ScriptFailed {
                        file: script.logical.clone(),
                        error: error.to_string(),
                    })
                    .await;
                }
            }
        }

        LoadReport {
            failed: state.failed,
        }
    }

    /// Resolve and fetch one script, collapsing every failure mode into a
    /// printable error.
    async fn fetch_script(&self, script: &PendingScript) -> anyhow::Result<()> {
        let uri = self.resolver.resolve(&script.path)?;
        self.fetcher.fetch(&uri).await?;
        Ok(())
    }

    /// Schedule stylesheet insertions on future task-queue ticks.
    ///
    /// Deferred rather than synchronous so bulk injection does not stall the
    /// caller. No outcome is observed: resolution and insertion failures are
    /// logged and dropped.
    async fn queue_stylesheets(&self, resource_dir: Option<&str>, css_files: &[String]) {
        for logical in dedup_files(css_files) {
            let path = prefixed(resource_dir, &logical);
            let uri = match self.resolver.resolve(&path) {
                Ok(uri) => uri,
                Err(error) => {
                    tracing::debug!(file = %path, %error, "skipping unresolvable stylesheet");
                    continue;
                }
            };

            let style = self.style.clone();
            tokio::spawn(async move {
                if let Err(error) = style.append_link(uri).await {
                    tracing::debug!(%error, "stylesheet insertion failed");
                }
            });

            self.emit(LoadEvent::StylesheetQueued { file: logical }).await;
        }
    }
}
