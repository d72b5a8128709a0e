//! View state for the two management panels.
//!
//! Each panel owns a [`ListState`] and a form. A successful submit yields
//! [`ListEffect`]s applied in order: first an optimistic [`Patch`], then a
//! [`ListEffect::Reload`] whose result replaces the patched collection.
//! Deletes patch locally and skip the reload.

mod dashboard;
mod form;
mod list;
mod roles;
mod users;

pub use dashboard::Dashboard;
pub use form::{FormPhase, FormState, SubmitOutcome};
pub use list::{ListEffect, ListPhase, ListState, Patch};
pub use roles::{
    ADD_ROLE_FAILED, LOAD_ROLES_FAILED, RoleForm, RoleListView, RoleSubmission,
    UPDATE_ROLE_FAILED, parse_permissions,
};
pub use users::{
    ADD_USER_FAILED, DELETE_USER_FAILED, LOAD_USERS_FAILED, UPDATE_USER_FAILED, UserForm,
    UserListView, UserSubmission,
};

/// Badge text for a list header, e.g. "2 Users".
pub fn count_label(count: usize, noun: &str) -> String {
    format!("{count} {noun}")
}

/// Single-letter avatar for a record name; `?` when the name is empty.
pub fn avatar_initial(name: &str) -> char {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_initials() {
        assert_eq!(count_label(2, "Users"), "2 Users");
        assert_eq!(avatar_initial("bob"), 'B');
        assert_eq!(avatar_initial(""), '?');
    }
}
