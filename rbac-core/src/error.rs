use std::fmt;

use thiserror::Error;

/// Field-rule violations reported by create and update operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters long")]
    UserNameTooShort,

    #[error("Role is required")]
    RoleRequired,

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Role name must be at least 2 characters long")]
    RoleNameTooShort,

    #[error("At least one permission is required")]
    PermissionsRequired,

    #[error("Permissions cannot contain blank entries")]
    BlankPermission { index: usize },
}

impl ValidationError {
    /// Name of the input field the rule applies to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::UserNameTooShort | ValidationError::RoleNameTooShort => "name",
            ValidationError::RoleRequired => "role",
            ValidationError::InvalidStatus(_) => "status",
            ValidationError::PermissionsRequired | ValidationError::BlankPermission { .. } => {
                "permissions"
            }
        }
    }
}

/// The entity type an access-layer error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Role,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "User"),
            EntityKind::Role => write!(f, "Role"),
        }
    }
}

/// Errors surfaced by the access layer.
///
/// The mock never recovers from these; every one propagates to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u64 },

    /// Failure of a backend other than the in-memory mock.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AdminError {
    pub fn user_not_found(id: impl Into<u64>) -> Self {
        AdminError::NotFound {
            kind: EntityKind::User,
            id: id.into(),
        }
    }

    pub fn role_not_found(id: impl Into<u64>) -> Self {
        AdminError::NotFound {
            kind: EntityKind::Role,
            id: id.into(),
        }
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::NotFound { .. })
    }

    /// Check if this is a field validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, AdminError::Validation(_))
    }

    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            AdminError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
