//! In-memory store backing the mock access layer.
//!
//! The store is an explicit object: callers construct it (seeded or empty)
//! and hand it to [`MockAdminApi`](crate::api::MockAdminApi). Nothing is
//! process-global, so each test can own a fresh instance.

mod collection;
mod id_strategy;
pub mod seed;

pub use collection::Collection;
pub use id_strategy::IdStrategy;

use rbac_model::{Role, User};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Users and roles collections behind async locks.
///
/// Each mutation takes the write lock for a single step, so concurrent
/// callers never observe a partial write.
#[derive(Debug)]
pub struct AdminStore {
    users: RwLock<Collection<User>>,
    roles: RwLock<Collection<Role>>,
}

impl AdminStore {
    pub fn new(users: Collection<User>, roles: Collection<Role>) -> Self {
        Self {
            users: RwLock::new(users),
            roles: RwLock::new(roles),
        }
    }

    /// Store holding the two seed users and two seed roles.
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::new(
            Collection::with_records(strategy, seed::users()),
            Collection::with_records(strategy, seed::roles()),
        )
    }

    pub fn empty(strategy: IdStrategy) -> Self {
        Self::new(Collection::new(strategy), Collection::new(strategy))
    }

    pub async fn users(&self) -> RwLockReadGuard<'_, Collection<User>> {
        self.users.read().await
    }

    pub async fn users_mut(&self) -> RwLockWriteGuard<'_, Collection<User>> {
        self.users.write().await
    }

    pub async fn roles(&self) -> RwLockReadGuard<'_, Collection<Role>> {
        self.roles.read().await
    }

    pub async fn roles_mut(&self) -> RwLockWriteGuard<'_, Collection<Role>> {
        self.roles.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_has_two_records_per_collection() {
        let store = AdminStore::seeded(IdStrategy::Monotonic);
        assert_eq!(store.users().await.len(), 2);
        assert_eq!(store.roles().await.len(), 2);
    }

    #[tokio::test]
    async fn empty_store_starts_ids_at_one() {
        let store = AdminStore::empty(IdStrategy::Monotonic);
        let role = store
            .roles_mut()
            .await
            .insert_with(|id| Role::new(id, "Viewer", ["Read"]));
        assert_eq!(role.id.get(), 1);
    }
}
