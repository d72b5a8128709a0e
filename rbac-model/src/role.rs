use crate::ids::RoleId;
use crate::record::Record;

/// A stored role and its ordered permission list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub permissions: Vec<String>,
}

impl Role {
    pub fn new<I, S>(id: impl Into<RoleId>, name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    pub fn to_draft(&self) -> RoleDraft {
        RoleDraft {
            name: self.name.clone(),
            permissions: self.permissions.clone(),
        }
    }
}

impl Record for Role {
    type Id = RoleId;

    const KIND: &'static str = "role";

    fn id(&self) -> RoleId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Unvalidated role fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleDraft {
    pub name: String,
    pub permissions: Vec<String>,
}

impl RoleDraft {
    pub fn new<I, S>(name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }
}
