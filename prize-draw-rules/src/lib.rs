//! Appointment-rule loading.
//!
//! Rules live in a read-only JSON resource shaped as
//! `[{ "prizeId": "...", "personUid": "..." }, ...]`. Loading is fail-open:
//! an absent or malformed file yields an empty rule set, which disables
//! prioritization without ever blocking or corrupting a draw. [`RuleStore`]
//! keeps the current rule set behind a watch channel and can follow file
//! changes, so a draw always reads a fully materialized snapshot.

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher as _};
use prize_draw_core::AppointRule;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

pub use crate::error::RulesError;

/// Editors and atomic-save tools emit bursts of events for one write; reload
/// once per burst.
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(200);

/// Reads and parses the rule file. Callers who want the fail-open behavior
/// use [`load_rules_or_default`] instead.
pub async fn load_rules(path: &Path) -> Result<Vec<AppointRule>, RulesError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Fail-open loading: any failure is logged and treated as an empty rule
/// set, so the draw degrades to an unconstrained one instead of stopping.
pub async fn load_rules_or_default(path: &Path) -> Vec<AppointRule> {
    match load_rules(path).await {
        Ok(rules) => {
            debug!("loaded {} appointment rules from {}", rules.len(), path.display());
            rules
        }
        Err(error) => {
            warn!(
                "failed to load appointment rules from {}, continuing without rules: {error}",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Holds the current rule set and hands out snapshots and watch receivers.
pub struct RuleStore {
    path: PathBuf,
    sender: Arc<watch::Sender<Vec<AppointRule>>>,
    _watcher: Option<RecommendedWatcher>,
}

impl RuleStore {
    /// Loads the rule file once (fail-open) and stores the result.
    pub async fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let rules = load_rules_or_default(&path).await;
        let (sender, _) = watch::channel(rules);
        Self {
            path,
            sender: Arc::new(sender),
            _watcher: None,
        }
    }

    /// Like [`RuleStore::new`], but also follows the file: every change
    /// triggers a debounced fail-open reload that is published through the
    /// watch channel.
    pub async fn watch(path: impl Into<PathBuf>) -> Result<Self, RulesError> {
        let mut store = Self::new(path).await;
        let (event_tx, mut event_rx) = mpsc::channel(1);
        let mut watcher =
            notify::recommended_watcher(move |event: Result<notify::Event, notify::Error>| {
                match event {
                    Ok(event)
                        if event.kind.is_create()
                            || event.kind.is_modify()
                            || event.kind.is_remove() =>
                    {
                        // A full channel already implies a pending reload.
                        let _ = event_tx.try_send(());
                    }
                    Ok(_) => {}
                    Err(error) => warn!("rule file watcher error: {error}"),
                }
            })?;
        watcher.watch(&store.path, RecursiveMode::NonRecursive)?;
        store._watcher = Some(watcher);

        let sender = Arc::clone(&store.sender);
        let path = store.path.clone();
        tokio::spawn(async move {
            while event_rx.recv().await.is_some() {
                tokio::time::sleep(RELOAD_DEBOUNCE).await;
                while event_rx.try_recv().is_ok() {}
                sender.send_replace(load_rules_or_default(&path).await);
            }
        });
        Ok(store)
    }

    /// Re-reads the rule file immediately. Absent or malformed data resets
    /// the store to an empty rule set.
    pub async fn reload(&self) {
        self.sender.send_replace(load_rules_or_default(&self.path).await);
    }

    /// The current rule set, fully materialized for one draw.
    #[must_use]
    pub fn snapshot(&self) -> Vec<AppointRule> {
        self.sender.borrow().clone()
    }

    /// Reactive interface: receivers observe every published rule update.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<AppointRule>> {
        self.sender.subscribe()
    }
}
