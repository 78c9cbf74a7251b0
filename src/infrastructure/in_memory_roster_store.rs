use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::billing_team::BillingTeam;
use crate::domain::ports::RosterStore;

/// In-process implementation of RosterStore
///
/// Holds the latest snapshot per team. Whoever owns the store pushes fresh
/// snapshots with [`upsert`](Self::upsert); refresh requests are counted so
/// that owner can poll them.
#[derive(Default)]
pub struct InMemoryRosterStore {
    teams: RwLock<HashMap<String, BillingTeam>>,
    refresh_requests: AtomicUsize,
}

impl InMemoryRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces the snapshot for `team.id`
    pub fn upsert(&self, team: BillingTeam) {
        let mut teams = self.teams.write().unwrap_or_else(|p| p.into_inner());
        teams.insert(team.id.clone(), team);
    }

    /// Drops a team snapshot, returning the store to its loading state
    pub fn remove(&self, team_id: &str) -> Option<BillingTeam> {
        let mut teams = self.teams.write().unwrap_or_else(|p| p.into_inner());
        teams.remove(team_id)
    }

    /// Number of refresh requests received so far
    pub fn refresh_requests(&self) -> usize {
        self.refresh_requests.load(Ordering::SeqCst)
    }
}

impl RosterStore for InMemoryRosterStore {
    fn billing_team(&self, team_id: &str) -> Option<BillingTeam> {
        let teams = self.teams.read().unwrap_or_else(|p| p.into_inner());
        teams.get(team_id).cloned()
    }

    fn request_refresh(&self, team_id: &str) {
        tracing::debug!(team_id, "Roster refresh requested");
        self.refresh_requests.fetch_add(1, Ordering::SeqCst);
    }
}
