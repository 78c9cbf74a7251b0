//! Recording fakes for the members controller ports

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use billing_team_members::domain::billing_team::{BillingTeam, BillingTeamEvent, BillingTeamRole};
use billing_team_members::domain::ports::{
    AnalyticsSink, BackendError, BillingBackend, IdentityProvider, NotificationSink,
};
use billing_team_members::infrastructure::InMemoryRosterStore;
use billing_team_members::members::{MembershipController, MembershipPorts};
use tokio::sync::Semaphore;

pub struct FixedIdentity(pub Option<String>);

impl IdentityProvider for FixedIdentity {
    fn viewer_id(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifications {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingNotifications {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingNotifications {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingAnalytics {
    pub events: Mutex<Vec<BillingTeamEvent>>,
}

impl RecordingAnalytics {
    pub fn events(&self) -> Vec<BillingTeamEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn track(&self, event: BillingTeamEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Remove { team_id: String, member_id: String },
    UpdateRole { team_id: String, member_id: String, role: BillingTeamRole },
}

/// Billing backend that records calls, optionally fails, and optionally
/// blocks each call until a permit is released
#[derive(Default)]
pub struct FakeBackend {
    pub calls: Mutex<Vec<BackendCall>>,
    pub fail: bool,
    pub gate: Option<Semaphore>,
}

impl FakeBackend {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn release(&self, permits: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(permits);
        }
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn respond(&self, call: BackendCall) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate open").forget();
        }
        if self.fail {
            Err(BackendError::Rejected {
                status: 403,
                message: "forbidden".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BillingBackend for FakeBackend {
    async fn remove_member(&self, team_id: &str, member_id: &str) -> Result<(), BackendError> {
        self.respond(BackendCall::Remove {
            team_id: team_id.to_string(),
            member_id: member_id.to_string(),
        })
        .await
    }

    async fn update_member_role(
        &self,
        team_id: &str,
        member_id: &str,
        role: BillingTeamRole,
    ) -> Result<(), BackendError> {
        self.respond(BackendCall::UpdateRole {
            team_id: team_id.to_string(),
            member_id: member_id.to_string(),
            role,
        })
        .await
    }
}

pub struct Harness {
    pub roster: Arc<InMemoryRosterStore>,
    pub backend: Arc<FakeBackend>,
    pub notifications: Arc<RecordingNotifications>,
    pub analytics: Arc<RecordingAnalytics>,
    pub controller: MembershipController,
}

/// Controller for `team` seen by `viewer`, with recording fakes around it
pub fn harness(team: BillingTeam, viewer: Option<&str>, backend: FakeBackend) -> Harness {
    billing_team_members::telemetry::init_tracing();

    let team_id = team.id.clone();
    let roster = Arc::new(InMemoryRosterStore::new());
    roster.upsert(team);

    let backend = Arc::new(backend);
    let notifications = Arc::new(RecordingNotifications::default());
    let analytics = Arc::new(RecordingAnalytics::default());

    let ports = MembershipPorts {
        roster: roster.clone(),
        identity: Arc::new(FixedIdentity(viewer.map(str::to_string))),
        backend: backend.clone(),
        notifications: notifications.clone(),
        analytics: analytics.clone(),
    };

    Harness {
        roster,
        backend,
        notifications,
        analytics,
        controller: MembershipController::new(team_id, ports),
    }
}
