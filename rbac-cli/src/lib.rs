//! Terminal front end for the RBAC admin dashboard.
//!
//! The `rbac-admin` binary mounts a [`Dashboard`](rbac_core::views::Dashboard)
//! against the in-memory access layer and drives it either from stdin
//! ([`shell`]) or through a fixed scenario ([`demo`]).
#![allow(missing_docs)]

pub mod app;
pub mod demo;
pub mod render;
pub mod shell;
