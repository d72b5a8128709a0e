use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use rbac_model::{Role, RoleDraft, RoleId, User, UserDraft, UserId};
use tracing::{debug, info};

use super::{RolesApi, UsersApi};
use crate::error::AdminError;
use crate::latency::{FixedLatency, Latency};
use crate::store::{AdminStore, IdStrategy};
use crate::validation::{validate_role, validate_user};

/// In-memory access layer with simulated latency.
///
/// Every operation awaits the injected [`Latency`] first, then validates
/// its input, then performs one step against the [`AdminStore`].
#[derive(Clone)]
pub struct MockAdminApi {
    store: Arc<AdminStore>,
    latency: Arc<dyn Latency>,
}

impl fmt::Debug for MockAdminApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockAdminApi")
            .field("store", &Arc::strong_count(&self.store))
            .field("latency", &self.latency)
            .finish()
    }
}

impl MockAdminApi {
    pub fn new(store: Arc<AdminStore>, latency: Arc<dyn Latency>) -> Self {
        Self { store, latency }
    }

    /// Seeded store, monotonic ids, default 500ms latency.
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(AdminStore::seeded(IdStrategy::default())),
            Arc::new(FixedLatency::default()),
        )
    }

    /// Replace the latency source (primarily for tests).
    pub fn with_latency(mut self, latency: Arc<dyn Latency>) -> Self {
        self.latency = latency;
        self
    }

    pub fn store(&self) -> &Arc<AdminStore> {
        &self.store
    }
}

#[async_trait]
impl UsersApi for MockAdminApi {
    async fn list_users(&self) -> Result<Vec<User>, AdminError> {
        self.latency.delay().await;
        let users = self.store.users().await.snapshot();
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    async fn create_user(&self, draft: UserDraft) -> Result<User, AdminError> {
        self.latency.delay().await;
        let valid = validate_user(draft)?;

        let user = self
            .store
            .users_mut()
            .await
            .insert_with(|id| valid.into_user(id));

        info!(user.id = %user.id, user.name = %user.name, "created user");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, AdminError> {
        self.latency.delay().await;
        let user = validate_user(draft)?.into_user(id);

        self.store
            .users_mut()
            .await
            .replace(user.clone())
            .ok_or_else(|| AdminError::user_not_found(id))?;

        info!(user.id = %id, "updated user");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), AdminError> {
        self.latency.delay().await;
        let removed = self.store.users_mut().await.remove(id);

        if removed == 0 {
            debug!(user.id = %id, "delete matched no user");
        } else {
            info!(user.id = %id, removed, "deleted user");
        }
        Ok(())
    }
}

#[async_trait]
impl RolesApi for MockAdminApi {
    async fn list_roles(&self) -> Result<Vec<Role>, AdminError> {
        self.latency.delay().await;
        let roles = self.store.roles().await.snapshot();
        debug!(count = roles.len(), "listed roles");
        Ok(roles)
    }

    async fn create_role(&self, draft: RoleDraft) -> Result<Role, AdminError> {
        self.latency.delay().await;
        let valid = validate_role(draft)?;

        let role = self
            .store
            .roles_mut()
            .await
            .insert_with(|id| valid.into_role(id));

        info!(
            role.id = %role.id,
            role.name = %role.name,
            permissions = role.permissions.len(),
            "created role"
        );
        Ok(role)
    }

    async fn update_role(&self, id: RoleId, draft: RoleDraft) -> Result<Role, AdminError> {
        self.latency.delay().await;
        let role = validate_role(draft)?.into_role(id);

        self.store
            .roles_mut()
            .await
            .replace(role.clone())
            .ok_or_else(|| AdminError::role_not_found(id))?;

        info!(role.id = %id, "updated role");
        Ok(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::CountingLatency;
    use crate::store::seed;

    fn api_with(latency: Arc<CountingLatency>) -> MockAdminApi {
        MockAdminApi::new(
            Arc::new(AdminStore::seeded(IdStrategy::Monotonic)),
            latency,
        )
    }

    #[tokio::test]
    async fn every_operation_waits_once() {
        let latency = Arc::new(CountingLatency::new());
        let api = api_with(latency.clone());

        api.list_users().await.unwrap();
        api.create_user(UserDraft::new("Cara", "User", "Active"))
            .await
            .unwrap();
        let _ = api
            .update_user(UserId(99), UserDraft::new("Ghost", "User", "Active"))
            .await;
        api.delete_user(UserId(99)).await.unwrap();
        api.list_roles().await.unwrap();
        let _ = api.create_role(RoleDraft::default()).await;

        assert_eq!(latency.calls(), 6);
    }

    #[tokio::test]
    async fn invalid_update_of_missing_id_reports_validation_first() {
        let api = api_with(Arc::new(CountingLatency::new()));

        let err = api
            .update_user(UserId(99), UserDraft::new("A", "User", "Active"))
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn failed_create_leaves_store_untouched() {
        let api = api_with(Arc::new(CountingLatency::new()));

        let err = api
            .create_role(RoleDraft::new("Auditor", Vec::<String>::new()))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(api.list_roles().await.unwrap(), seed::roles());
    }

    #[test]
    fn debug_names_the_latency_source() {
        let api = MockAdminApi::seeded();
        let rendered = format!("{api:?}");
        assert!(rendered.contains("FixedLatency"));
    }
}
