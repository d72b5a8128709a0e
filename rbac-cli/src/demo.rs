//! Scripted walk through the seeded dashboard.

use std::fmt::Write;

use rbac_core::UserId;
use rbac_core::views::{Dashboard, SubmitOutcome};

use crate::render;

/// Create Cara, promote Bob, delete Alice and add an Auditor role,
/// rendering the panels after each step.
pub async fn run(dashboard: &mut Dashboard) -> String {
    let mut out = String::new();
    step(&mut out, "Initial state", render::dashboard(dashboard));

    let users = &mut dashboard.users;
    let form = users.form_mut();
    form.set_name("Cara");
    form.set_role("User");
    form.set_status("Active");
    let created = users.submit().await;
    step(&mut out, &headline("Create Cara", &created), render::users(users));

    if users.edit(UserId(2)) {
        users.form_mut().set_status("Active");
        let updated = users.submit().await;
        step(&mut out, &headline("Activate Bob", &updated), render::users(users));
    }

    users.delete(UserId(1)).await;
    step(&mut out, "Delete Alice", render::users(users));

    let roles = &mut dashboard.roles;
    roles.form_mut().set_name("Auditor");
    roles.form_mut().set_permissions_text("Read, Export");
    let added = roles.submit().await;
    step(&mut out, &headline("Add Auditor role", &added), render::roles(roles));

    out
}

fn headline<T>(title: &str, outcome: &SubmitOutcome<T>) -> String {
    match outcome {
        SubmitOutcome::Saved(_) => format!("{title}: saved"),
        SubmitOutcome::Failed(message) => format!("{title}: {message}"),
        SubmitOutcome::Refused => format!("{title}: refused"),
    }
}

fn step(out: &mut String, title: &str, panel: String) {
    let _ = writeln!(out, "--- {title} ---");
    out.push_str(&panel);
    out.push('\n');
}
