use std::sync::Arc;

use tracing::info;

use super::roles::RoleListView;
use super::users::UserListView;
use crate::api::{RolesApi, UsersApi};

/// Both management panels, mounted against one access layer.
#[derive(Debug)]
pub struct Dashboard {
    pub users: UserListView,
    pub roles: RoleListView,
}

impl Dashboard {
    pub async fn mount<A>(api: Arc<A>) -> Self
    where
        A: UsersApi + RolesApi + 'static,
    {
        let users_api: Arc<dyn UsersApi> = api.clone();
        let roles_api: Arc<dyn RolesApi> = api;

        let users = UserListView::mount(users_api, roles_api.clone()).await;
        let roles = RoleListView::mount(roles_api).await;

        info!(
            users = users.users().len(),
            roles = roles.roles().len(),
            "dashboard mounted"
        );
        Self { users, roles }
    }
}
