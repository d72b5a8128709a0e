use std::sync::Arc;

use rbac_core::api::{MockAdminApi, RolesApi, UsersApi};
use rbac_core::latency::NoLatency;
use rbac_core::store::{AdminStore, IdStrategy, seed};
use rbac_core::{AdminError, EntityKind, RoleDraft, RoleId, User, UserDraft, UserId, UserStatus};
use rbac_core::ValidationError;

fn seeded() -> MockAdminApi {
    MockAdminApi::new(
        Arc::new(AdminStore::seeded(IdStrategy::Monotonic)),
        Arc::new(NoLatency),
    )
}

#[tokio::test]
async fn seed_scenario_appends_cara_as_third_user() {
    let api = seeded();

    let cara = api
        .create_user(UserDraft::new("Cara", "User", "Active"))
        .await
        .unwrap();

    assert_eq!(cara, User::new(3, "Cara", "User", UserStatus::Active));
    let users = api.list_users().await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2], cara);
}

#[tokio::test]
async fn monotonic_ids_never_repeat_after_delete() {
    let api = seeded();
    let mut seen = vec![1, 2];

    for name in ["Cara", "Dan", "Eve"] {
        let user = api
            .create_user(UserDraft::new(name, "User", "Active"))
            .await
            .unwrap();
        assert!(seen.iter().all(|&id| user.id.get() > id));
        seen.push(user.id.get());
        api.delete_user(user.id).await.unwrap();
    }

    assert_eq!(seen, [1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn count_plus_one_reuses_ids_like_the_legacy_scheme() {
    let api = MockAdminApi::new(
        Arc::new(AdminStore::seeded(IdStrategy::CountPlusOne)),
        Arc::new(NoLatency),
    );

    api.delete_user(UserId(1)).await.unwrap();
    let cara = api
        .create_user(UserDraft::new("Cara", "User", "Active"))
        .await
        .unwrap();

    // One live record left, so the new id collides with Bob.
    assert_eq!(cara.id, UserId(2));
    let ids: Vec<_> = api.list_users().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, [UserId(2), UserId(2)]);
}

#[tokio::test]
async fn created_fields_equal_input() {
    let api = seeded();
    let role = api
        .create_role(RoleDraft::new("Auditor", ["Read", "Export"]))
        .await
        .unwrap();

    assert_eq!(role.id, RoleId(3));
    assert_eq!(role.name, "Auditor");
    assert_eq!(role.permissions, ["Read", "Export"]);
}

#[tokio::test]
async fn user_name_needs_two_characters() {
    let api = seeded();

    let err = api
        .create_user(UserDraft::new("A", "User", "Active"))
        .await
        .unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::UserNameTooShort));
    assert_eq!(err.to_string(), "validation error: Name must be at least 2 characters long");

    let err = api
        .create_user(UserDraft::new("  A  ", "User", "Active"))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    assert!(api.create_user(UserDraft::new("Al", "User", "Active")).await.is_ok());
}

#[tokio::test]
async fn status_must_be_active_or_inactive() {
    let api = seeded();

    let err = api
        .create_user(UserDraft::new("Cara", "User", "Pending"))
        .await
        .unwrap_err();
    assert_eq!(
        err.validation(),
        Some(&ValidationError::InvalidStatus("Pending".into()))
    );
    assert_eq!(
        err.validation().map(ToString::to_string).as_deref(),
        Some("Invalid status: Pending")
    );

    for status in ["Active", "Inactive"] {
        let user = api
            .create_user(UserDraft::new("Cara", "User", status))
            .await
            .unwrap();
        assert_eq!(user.status.as_str(), status);
    }
}

#[tokio::test]
async fn role_is_required() {
    let api = seeded();
    let err = api
        .create_user(UserDraft::new("Cara", "   ", "Active"))
        .await
        .unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::RoleRequired));
}

#[tokio::test]
async fn role_needs_a_permission() {
    let api = seeded();

    let err = api
        .create_role(RoleDraft::new("Auditor", Vec::<String>::new()))
        .await
        .unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::PermissionsRequired));

    let err = api
        .create_role(RoleDraft::new("Auditor", ["Read", " "]))
        .await
        .unwrap_err();
    assert_eq!(
        err.validation(),
        Some(&ValidationError::BlankPermission { index: 1 })
    );
    assert_eq!(
        err.validation().map(ToString::to_string).as_deref(),
        Some("Permissions cannot contain blank entries")
    );

    assert!(api.create_role(RoleDraft::new("Auditor", ["Read"])).await.is_ok());
}

#[tokio::test]
async fn update_of_missing_id_is_not_found_and_changes_nothing() {
    let api = seeded();

    let err = api
        .update_user(UserId(42), UserDraft::new("Ghost", "User", "Active"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err,
        AdminError::NotFound {
            kind: EntityKind::User,
            id: 42
        }
    );
    assert_eq!(err.to_string(), "User 42 not found");
    assert_eq!(api.list_users().await.unwrap(), seed::users());

    let err = api
        .update_role(RoleId(42), RoleDraft::new("Ghost", ["Read"]))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Role 42 not found");
    assert_eq!(api.list_roles().await.unwrap(), seed::roles());
}

#[tokio::test]
async fn delete_of_missing_id_succeeds_and_changes_nothing() {
    let api = seeded();

    api.delete_user(UserId(42)).await.unwrap();

    assert_eq!(api.list_users().await.unwrap(), seed::users());
}

#[tokio::test]
async fn status_only_update_keeps_everything_else() {
    let api = seeded();
    let draft = UserDraft::new("Cara", "User", "Active");
    let created = api.create_user(draft.clone()).await.unwrap();

    let updated = api
        .update_user(created.id, draft.with_status("Inactive"))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.role, created.role);
    assert_eq!(updated.status, UserStatus::Inactive);
    assert_eq!(api.list_users().await.unwrap()[2], updated);
}

#[tokio::test]
async fn update_overwrites_role_in_place() {
    let api = seeded();

    api.update_role(RoleId(2), RoleDraft::new("Reader", ["Read", "List"]))
        .await
        .unwrap();

    let roles = api.list_roles().await.unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[1].name, "Reader");
    assert!(roles[1].has_permission("List"));
}

#[tokio::test]
async fn role_names_are_not_checked_against_roles() {
    let api = seeded();
    let user = api
        .create_user(UserDraft::new("Cara", "Nonexistent", "Active"))
        .await
        .unwrap();
    assert_eq!(user.role, "Nonexistent");
}

#[tokio::test]
async fn empty_store_starts_at_one() {
    let api = MockAdminApi::new(
        Arc::new(AdminStore::empty(IdStrategy::Monotonic)),
        Arc::new(NoLatency),
    );
    assert!(api.list_users().await.unwrap().is_empty());

    let user = api
        .create_user(UserDraft::new("Cara", "User", "Active"))
        .await
        .unwrap();
    assert_eq!(user.id, UserId(1));
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let api = Arc::new(seeded());

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let api = api.clone();
            tokio::spawn(async move {
                api.create_user(UserDraft::new(format!("User {n}"), "User", "Active"))
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id.get());
    }
    ids.sort_unstable();
    assert_eq!(ids, (3..=10).collect::<Vec<_>>());
}
