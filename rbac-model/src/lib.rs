//! Core data model definitions shared across the RBAC admin crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod record;
pub mod role;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use error::ParseUserStatusError;
pub use ids::{RoleId, UserId};
pub use record::Record;
pub use role::{Role, RoleDraft};
pub use user::{User, UserDraft, UserStatus};
