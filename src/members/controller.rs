use std::collections::HashSet;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use super::errors::{MembershipError, MembershipResult};
use super::messages;
use super::permissions::{can_manage, is_admin};
use super::view::MembersTable;
use crate::domain::billing_team::{BillingAction, BillingTeamEvent, BillingTeamRole, Member};
use crate::domain::ports::{
    AnalyticsSink, BillingBackend, IdentityProvider, NotificationSink, RosterStore,
};

/// What to do when an action is started for a member that already has one
/// in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateActionPolicy {
    /// Dispatch anyway. Only the row's loading state guards against double
    /// submission, and the first completion clears it for both actions.
    #[default]
    Allow,
    /// Refuse with [`MembershipError::ActionInFlight`] without calling the
    /// billing service
    Reject,
}

impl FromStr for DuplicateActionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(DuplicateActionPolicy::Allow),
            "reject" => Ok(DuplicateActionPolicy::Reject),
            other => Err(format!("Unknown duplicate action policy: {}", other)),
        }
    }
}

/// Collaborators the controller talks to
#[derive(Clone)]
pub struct MembershipPorts {
    pub roster: Arc<dyn RosterStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub backend: Arc<dyn BillingBackend>,
    pub notifications: Arc<dyn NotificationSink>,
    pub analytics: Arc<dyn AnalyticsSink>,
}

/// Controller behind one billing team's members panel
///
/// Derives viewer permissions and row state from the roster store on every
/// call, dispatches role changes and removals to the billing service, and
/// tracks which members have an action in flight.
///
/// # Example
/// ```no_run
/// # use billing_team_members::members::{MembershipController, MembershipPorts};
/// # async fn demo(ports: MembershipPorts) {
/// let controller = MembershipController::new("team-1", ports);
///
/// if let Some(table) = controller.table() {
///     println!("{}", table.heading);
/// }
/// let _ = controller.remove_member("member-7", "member7@example.com").await;
/// # }
/// ```
pub struct MembershipController {
    team_id: String,
    ports: MembershipPorts,
    policy: DuplicateActionPolicy,
    in_flight: Mutex<HashSet<String>>,
}

impl MembershipController {
    /// Creates a controller for `team_id` with the default duplicate policy
    pub fn new(team_id: impl Into<String>, ports: MembershipPorts) -> Self {
        Self {
            team_id: team_id.into(),
            ports,
            policy: DuplicateActionPolicy::default(),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub fn with_policy(mut self, policy: DuplicateActionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    pub fn policy(&self) -> DuplicateActionPolicy {
        self.policy
    }

    /// Whether the current viewer may manage members of this team
    ///
    /// False while the roster is not loaded.
    pub fn viewer_is_admin(&self) -> bool {
        let viewer_id = self.ports.identity.viewer_id();
        self.ports
            .roster
            .billing_team(&self.team_id)
            .map(|team| is_admin(viewer_id.as_deref(), &team))
            .unwrap_or(false)
    }

    /// Members table for the current viewer, `None` while loading
    pub fn table(&self) -> Option<MembersTable> {
        let team = self.ports.roster.billing_team(&self.team_id)?;
        let viewer_id = self.ports.identity.viewer_id();
        let in_flight = self.lock_in_flight().clone();

        Some(MembersTable::build(&team, viewer_id.as_deref(), &in_flight))
    }

    pub fn is_in_flight(&self, member_id: &str) -> bool {
        self.lock_in_flight().contains(member_id)
    }

    /// Ids of members with an action in flight, sorted
    pub fn in_flight(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.lock_in_flight().iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Handles a click on a row menu entry
    ///
    /// Re-checks the same gates used to render the menu, records the click,
    /// then dispatches. For [`BillingAction::Remove`] the caller is expected
    /// to have obtained the user's confirmation first.
    pub async fn select_action(&self, member_id: &str, action: BillingAction) -> MembershipResult<()> {
        let target = self.authorize(member_id, action)?;
        if action.is_disabled_for(target.role) {
            tracing::debug!(
                team_id = %self.team_id,
                member_id,
                ?action,
                role = %target.role,
                "Refusing disabled menu action"
            );
            return Err(MembershipError::NotPermitted {
                action,
                member_id: member_id.to_string(),
            });
        }

        self.ports.analytics.track(BillingTeamEvent::ActionClicked {
            action: action.click_event_name().to_string(),
        });

        match action.target_role() {
            Some(role) => self.change_role(member_id, &target.email, role).await,
            None => self.remove_member(member_id, &target.email).await,
        }
    }

    /// Removes a member from the team
    ///
    /// Refused with [`MembershipError::NotPermitted`] unless the viewer may
    /// manage the member. Otherwise notifies the user of the outcome in every
    /// case. On success the removal is tracked and the roster store is asked
    /// to refresh.
    pub async fn remove_member(&self, member_id: &str, email: &str) -> MembershipResult<()> {
        self.authorize(member_id, BillingAction::Remove)?;
        let _in_flight = self.begin(member_id)?;
        tracing::info!(team_id = %self.team_id, member_id, "Removing member from billing team");

        match self.ports.backend.remove_member(&self.team_id, member_id).await {
            Ok(()) => {
                tracing::info!(team_id = %self.team_id, member_id, "Member removed");
                self.ports.notifications.success(messages::MEMBER_REMOVED);
                self.ports.analytics.track(BillingTeamEvent::MemberRemoved {
                    email: email.to_string(),
                    team_id: self.team_id.clone(),
                });
                self.ports.roster.request_refresh(&self.team_id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(team_id = %self.team_id, member_id, error = %e, "Failed to remove member");
                self.ports.notifications.error(messages::REMOVE_FAILED);
                Err(MembershipError::ActionFailed {
                    member_id: member_id.to_string(),
                })
            }
        }
    }

    /// Changes a member's role
    ///
    /// Refused with [`MembershipError::NotPermitted`] unless the viewer may
    /// manage the member. Otherwise notifies the user of the outcome in every
    /// case. On success the change is tracked and the roster store is asked
    /// to refresh.
    pub async fn change_role(
        &self,
        member_id: &str,
        email: &str,
        role: BillingTeamRole,
    ) -> MembershipResult<()> {
        let action = match role {
            BillingTeamRole::Admin => BillingAction::PromoteToAdmin,
            _ => BillingAction::DemoteToMember,
        };
        self.authorize(member_id, action)?;
        let _in_flight = self.begin(member_id)?;
        tracing::info!(team_id = %self.team_id, member_id, %role, "Changing billing team role");

        match self
            .ports
            .backend
            .update_member_role(&self.team_id, member_id, role)
            .await
        {
            Ok(()) => {
                tracing::info!(team_id = %self.team_id, member_id, %role, "Role changed");
                self.ports.notifications.success(&messages::role_changed(role));
                self.ports.analytics.track(BillingTeamEvent::RoleChanged {
                    email: email.to_string(),
                    role,
                    team_id: self.team_id.clone(),
                });
                self.ports.roster.request_refresh(&self.team_id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(team_id = %self.team_id, member_id, %role, error = %e, "Failed to change role");
                self.ports.notifications.error(messages::ROLE_CHANGE_FAILED);
                Err(MembershipError::ActionFailed {
                    member_id: member_id.to_string(),
                })
            }
        }
    }

    /// Checks against a fresh roster snapshot that the viewer is an admin and
    /// `member_id` is a manageable member other than the viewer
    fn authorize(&self, member_id: &str, action: BillingAction) -> MembershipResult<Member> {
        let team = self
            .ports
            .roster
            .billing_team(&self.team_id)
            .ok_or_else(|| MembershipError::TeamNotLoaded(self.team_id.clone()))?;
        let viewer_id = self.ports.identity.viewer_id();
        let viewer_is_admin = is_admin(viewer_id.as_deref(), &team);

        match team.member(member_id) {
            Some(target) if can_manage(viewer_id.as_deref(), viewer_is_admin, target) => {
                Ok(target.clone())
            }
            _ => {
                tracing::debug!(
                    team_id = %self.team_id,
                    member_id,
                    ?action,
                    viewer_is_admin,
                    "Refusing member action"
                );
                Err(MembershipError::NotPermitted {
                    action,
                    member_id: member_id.to_string(),
                })
            }
        }
    }

    /// Marks `member_id` in flight until the returned guard is dropped
    fn begin(&self, member_id: &str) -> MembershipResult<InFlightGuard<'_>> {
        let mut in_flight = self.lock_in_flight();
        let newly_marked = in_flight.insert(member_id.to_string());

        if !newly_marked {
            match self.policy {
                DuplicateActionPolicy::Reject => {
                    return Err(MembershipError::ActionInFlight(member_id.to_string()));
                }
                DuplicateActionPolicy::Allow => {
                    tracing::warn!(
                        team_id = %self.team_id,
                        member_id,
                        "Dispatching action while another is in flight for the same member"
                    );
                }
            }
        }

        Ok(InFlightGuard {
            set: &self.in_flight,
            member_id: member_id.to_string(),
        })
    }

    fn lock_in_flight(&self) -> MutexGuard<'_, HashSet<String>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Clears a member's in-flight marker when the action completes or its
/// future is dropped
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<String>>,
    member_id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&self.member_id);
    }
}
