//! Field rules applied by create and update before the store is touched.
//!
//! Names are measured in characters after trimming, but the stored value
//! is the input exactly as submitted.

use rbac_model::{Role, RoleDraft, RoleId, User, UserDraft, UserId, UserStatus};

use crate::error::ValidationError;

/// Minimum trimmed length of user and role names.
pub const MIN_NAME_CHARS: usize = 2;

/// A user draft that passed validation, with its status parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    name: String,
    role: String,
    status: UserStatus,
}

impl ValidUser {
    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            role: self.role,
            status: self.status,
        }
    }
}

/// A role draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRole {
    name: String,
    permissions: Vec<String>,
}

impl ValidRole {
    pub fn into_role(self, id: RoleId) -> Role {
        Role {
            id,
            name: self.name,
            permissions: self.permissions,
        }
    }
}

pub fn validate_user(draft: UserDraft) -> Result<ValidUser, ValidationError> {
    if !has_min_chars(&draft.name) {
        return Err(ValidationError::UserNameTooShort);
    }

    if draft.role.trim().is_empty() {
        return Err(ValidationError::RoleRequired);
    }

    let status = draft
        .status
        .parse::<UserStatus>()
        .map_err(|err| ValidationError::InvalidStatus(err.value().to_string()))?;

    Ok(ValidUser {
        name: draft.name,
        role: draft.role,
        status,
    })
}

pub fn validate_role(draft: RoleDraft) -> Result<ValidRole, ValidationError> {
    if !has_min_chars(&draft.name) {
        return Err(ValidationError::RoleNameTooShort);
    }

    if draft.permissions.is_empty() {
        return Err(ValidationError::PermissionsRequired);
    }

    if let Some(index) = draft.permissions.iter().position(|p| p.trim().is_empty()) {
        return Err(ValidationError::BlankPermission { index });
    }

    Ok(ValidRole {
        name: draft.name,
        permissions: draft.permissions,
    })
}

fn has_min_chars(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_CHARS
}
