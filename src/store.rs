//! Holds the most recently derived dashboard view.
//!
//! Refreshes may overlap. Each one takes a ticket before fetching and hands it
//! back on commit; a commit whose ticket is older than the one already applied
//! is discarded, so a slow response never overwrites a newer one.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

use crate::config::DashboardConfig;
use crate::snapshot::Snapshot;
use crate::{derive_dashboard, DashboardView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    Superseded,
}

/// A snapshot and the view derived from it, replaced as one unit.
#[derive(Debug)]
pub struct LoadedSnapshot {
    pub ticket: RefreshTicket,
    pub snapshot: Snapshot,
    pub view: DashboardView,
    pub committed_at_ms: i64,
}

#[derive(Default)]
struct StoreState {
    issued: u64,
    current: Option<Arc<LoadedSnapshot>>,
}

#[derive(Default)]
pub struct SnapshotStore {
    state: Mutex<StoreState>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn begin_refresh(&self) -> RefreshTicket {
        let mut guard = self.state.lock().await;
        guard.issued += 1;
        RefreshTicket(guard.issued)
    }

    pub async fn commit(
        &self,
        ticket: RefreshTicket,
        snapshot: Snapshot,
        config: &DashboardConfig,
    ) -> CommitOutcome {
        let mut guard = self.state.lock().await;
        if let Some(current) = guard.current.as_ref() {
            if current.ticket >= ticket {
                tracing::warn!(
                    ticket = ticket.sequence(),
                    current = current.ticket.sequence(),
                    "discarding superseded refresh"
                );
                return CommitOutcome::Superseded;
            }
        }

        let view = derive_dashboard(&snapshot, config);
        guard.current = Some(Arc::new(LoadedSnapshot {
            ticket,
            snapshot,
            view,
            committed_at_ms: current_timestamp_ms(),
        }));
        tracing::info!(ticket = ticket.sequence(), "dashboard snapshot applied");
        CommitOutcome::Applied
    }

    pub async fn current(&self) -> Option<Arc<LoadedSnapshot>> {
        let guard = self.state.lock().await;
        guard.current.clone()
    }
}

fn current_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as i64)
        .unwrap_or(0)
}
