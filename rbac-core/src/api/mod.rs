//! Access layer
//!
//! The list/create/update/delete operations that mediate every read and
//! write of a collection. Views depend on the traits only, so they run the
//! same way against [`MockAdminApi`] and against test doubles.

mod mock;

pub use mock::MockAdminApi;

use async_trait::async_trait;
use rbac_model::{Role, RoleDraft, RoleId, User, UserDraft, UserId};

use crate::error::AdminError;

/// Operations on the users collection.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Snapshot of every user, in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, AdminError>;

    /// Validate the draft, assign an id, and append the new user.
    async fn create_user(&self, draft: UserDraft) -> Result<User, AdminError>;

    /// Validate the draft and overwrite the user with `id` in full.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, AdminError>;

    /// Remove the user with `id`. Succeeds when no such user exists.
    async fn delete_user(&self, id: UserId) -> Result<(), AdminError>;
}

/// Operations on the roles collection. Roles cannot be deleted.
#[async_trait]
pub trait RolesApi: Send + Sync {
    async fn list_roles(&self) -> Result<Vec<Role>, AdminError>;

    async fn create_role(&self, draft: RoleDraft) -> Result<Role, AdminError>;

    async fn update_role(&self, id: RoleId, draft: RoleDraft) -> Result<Role, AdminError>;
}
