use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use super::member::Member;

/// Read-only snapshot of a billing team
///
/// The roster is owned by the external store; this type is what the
/// controller reads on every call and never mutates.
///
/// # Invariants
/// - Member ids are unique (keys of `members`)
/// - Billing exclusion is a property of the team, not of the member
///
/// # Example
/// ```
/// use billing_team_members::domain::billing_team::{BillingTeam, BillingTeamRole, Member};
///
/// let team = BillingTeam::new("t1")
///     .with_member(Member::new("m1", "ada@example.com", BillingTeamRole::Admin))
///     .with_billing_exclude("m1");
///
/// assert_eq!(team.member_count(), 1);
/// assert!(team.is_billing_excluded("m1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingTeam {
    pub id: String,
    #[serde(default)]
    pub members: HashMap<String, Member>,
    #[serde(default)]
    pub billing_exclude: BTreeSet<String>,
}

impl BillingTeam {
    /// Creates an empty team snapshot
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            members: HashMap::new(),
            billing_exclude: BTreeSet::new(),
        }
    }

    /// Adds a member, replacing any existing entry with the same id
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.insert(member.id.clone(), member);
        self
    }

    /// Marks a member id as excluded from billing
    pub fn with_billing_exclude(mut self, member_id: impl Into<String>) -> Self {
        self.billing_exclude.insert(member_id.into());
        self
    }

    /// Looks up a member by id
    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.get(member_id)
    }

    /// Returns true if the member is billed for free
    pub fn is_billing_excluded(&self, member_id: &str) -> bool {
        self.billing_exclude.contains(member_id)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Members ordered by joining date, undated members last, ties by id
    pub fn members_by_joining_date(&self) -> Vec<&Member> {
        let mut members: Vec<&Member> = self.members.values().collect();
        members.sort_by(|a, b| {
            let by_date = match (a.joining_date, b.joining_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            by_date.then_with(|| a.id.cmp(&b.id))
        });
        members
    }
}
