//! Records every seeded store starts with.

use rbac_model::{Role, User, UserStatus};

pub fn users() -> Vec<User> {
    vec![
        User::new(1, "Alice", "Admin", UserStatus::Active),
        User::new(2, "Bob", "User", UserStatus::Inactive),
    ]
}

pub fn roles() -> Vec<Role> {
    vec![
        Role::new(1, "Admin", ["Read", "Write", "Delete"]),
        Role::new(2, "User", ["Read"]),
    ]
}
