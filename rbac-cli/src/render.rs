//! Plain-text rendering of the dashboard panels.

use std::fmt::Write;

use rbac_core::views::{
    Dashboard, ListPhase, RoleListView, UserListView, avatar_initial, count_label,
};

pub fn dashboard(dashboard: &Dashboard) -> String {
    let mut out = users(&dashboard.users);
    out.push('\n');
    out.push_str(&roles(&dashboard.roles));
    out
}

pub fn users(view: &UserListView) -> String {
    let mut out = String::new();
    header(&mut out, "User Management", &count_label(view.users().len(), "Users"));

    match view.phase() {
        ListPhase::Loading => line(&mut out, "Loading users..."),
        ListPhase::Failed(message) => line(&mut out, &format!("Error: {message}")),
        ListPhase::Ready if view.users().is_empty() => {
            line(&mut out, "No users found");
            line(&mut out, "Get started by creating a new user.");
        }
        ListPhase::Ready => {
            for user in view.users() {
                line(
                    &mut out,
                    &format!(
                        "[{}] #{} {}  {}  {}",
                        avatar_initial(&user.name),
                        user.id,
                        user.name,
                        user.role,
                        user.status
                    ),
                );
            }
        }
    }

    let form = view.form();
    let label = form.state().submit_label(view.editing().is_some(), "User");
    let _ = writeln!(
        out,
        "{label}: name={:?} role={:?} status={:?}",
        form.name(),
        form.role(),
        form.status()
    );
    match form.role_options_phase() {
        ListPhase::Loading => line(&mut out, "Loading roles..."),
        ListPhase::Failed(message) => line(&mut out, &format!("Error: {message}")),
        ListPhase::Ready => {
            let names: Vec<&str> = form.role_options().iter().map(|r| r.name.as_str()).collect();
            line(&mut out, &format!("Role options: {}", names.join(", ")));
        }
    }
    if let Some(error) = form.state().error() {
        line(&mut out, &format!("Error: {error}"));
    }
    out
}

pub fn roles(view: &RoleListView) -> String {
    let mut out = String::new();
    header(&mut out, "Role Management", &count_label(view.roles().len(), "Roles"));

    match view.phase() {
        ListPhase::Loading => line(&mut out, "Loading roles..."),
        ListPhase::Failed(message) => line(&mut out, &format!("Error: {message}")),
        ListPhase::Ready if view.roles().is_empty() => {
            line(&mut out, "No roles found");
            line(&mut out, "Get started by creating a new role.");
        }
        ListPhase::Ready => {
            for role in view.roles() {
                line(
                    &mut out,
                    &format!(
                        "[{}] #{} {}  {}",
                        avatar_initial(&role.name),
                        role.id,
                        role.name,
                        role.permissions.join(", ")
                    ),
                );
            }
        }
    }

    let form = view.form();
    let label = form.state().submit_label(view.editing().is_some(), "Role");
    let _ = writeln!(
        out,
        "{label}: name={:?} permissions={:?}",
        form.name(),
        form.permissions_text()
    );
    if let Some(error) = form.state().error() {
        line(&mut out, &format!("Error: {error}"));
    }
    out
}

fn header(out: &mut String, title: &str, badge: &str) {
    let _ = writeln!(out, "== {title} == ({badge})");
}

fn line(out: &mut String, text: &str) {
    let _ = writeln!(out, "  {text}");
}
