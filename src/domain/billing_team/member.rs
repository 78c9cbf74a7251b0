use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::BillingTeamRole;

/// A member entry in a billing team roster
///
/// Deserializes from the roster store's JSON shape (`camelCase` keys with
/// `joiningDate` as epoch milliseconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub role: BillingTeamRole,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub joining_date: Option<DateTime<Utc>>,
}

impl Member {
    /// Creates a member with only the required fields set
    ///
    /// # Example
    /// ```
    /// use billing_team_members::domain::billing_team::{BillingTeamRole, Member};
    ///
    /// let member = Member::new("m1", "ada@example.com", BillingTeamRole::Admin);
    /// assert_eq!(member.display_name(), "User");
    /// ```
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: BillingTeamRole) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            email: email.into(),
            photo_url: None,
            role,
            joining_date: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    pub fn with_joining_date(mut self, joined: DateTime<Utc>) -> Self {
        self.joining_date = Some(joined);
        self
    }

    /// Name shown in the members table, `"User"` when none is known
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("User")
    }
}
