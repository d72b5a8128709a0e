use std::fmt;
use std::str::FromStr;

use crate::error::ParseUserStatusError;
use crate::ids::UserId;
use crate::record::Record;

/// Account status of a user.
///
/// Parsing is exact: only `"Active"` and `"Inactive"` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    /// Get all available statuses
    pub fn all() -> &'static [UserStatus] {
        &[UserStatus::Active, UserStatus::Inactive]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ParseUserStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(UserStatus::Active),
            "Inactive" => Ok(UserStatus::Inactive),
            other => Err(ParseUserStatusError::new(other)),
        }
    }
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Name of the role this user holds. Not checked against the role
    /// collection.
    pub role: String,
    pub status: UserStatus,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        role: impl Into<String>,
        status: UserStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            status,
        }
    }

    /// Field input equivalent to this record, as a form would submit it.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            role: self.role.clone(),
            status: self.status.as_str().to_string(),
        }
    }
}

impl Record for User {
    type Id = UserId;

    const KIND: &'static str = "user";

    fn id(&self) -> UserId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Unvalidated user fields as collected from input.
///
/// `status` stays textual so that an unknown status reaches validation
/// instead of failing to parse at the edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserDraft {
    pub name: String,
    pub role: String,
    pub status: String,
}

impl UserDraft {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            status: status.into(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_is_exact() {
        assert_eq!("Active".parse::<UserStatus>().unwrap(), UserStatus::Active);
        assert_eq!(
            "Inactive".parse::<UserStatus>().unwrap(),
            UserStatus::Inactive
        );

        let err = "Pending".parse::<UserStatus>().unwrap_err();
        assert_eq!(err.value(), "Pending");
        assert!("active".parse::<UserStatus>().is_err());
        assert!(" Active".parse::<UserStatus>().is_err());
    }

    #[test]
    fn status_display_round_trips() {
        for status in UserStatus::all() {
            assert_eq!(status.to_string().parse::<UserStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn draft_mirrors_record_fields() {
        let user = User::new(7, "Alice", "Admin", UserStatus::Inactive);
        let draft = user.to_draft();

        assert_eq!(draft, UserDraft::new("Alice", "Admin", "Inactive"));
        assert_eq!(user.id(), UserId(7));
        assert_eq!(Record::name(&user), "Alice");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn user_serializes_with_plain_id() {
        let user = User::new(3, "Cara", "User", UserStatus::Active);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["status"], "Active");
    }
}
