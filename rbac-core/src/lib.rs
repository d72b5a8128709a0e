//! Core library for the RBAC admin dashboard.
//!
//! The crate is split along the two vertical slices of the dashboard (users
//! and roles), each built from the same layers:
//!
//! - [`store`]: explicit in-memory collections with a configurable
//!   [`IdStrategy`](store::IdStrategy)
//! - [`api`]: the asynchronous access layer ([`UsersApi`](api::UsersApi),
//!   [`RolesApi`](api::RolesApi)) and its in-memory mock
//! - [`validation`]: field rules applied before any mutation
//! - [`views`]: list and form state machines, including the optimistic
//!   patch followed by a forced reload
//!
//! Simulated network latency is injected through [`latency::Latency`] so
//! tests never sleep.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rbac_core::api::{MockAdminApi, UsersApi};
//! use rbac_core::latency::NoLatency;
//! use rbac_core::store::{AdminStore, IdStrategy};
//! use rbac_model::UserDraft;
//!
//! # async fn run() -> Result<(), rbac_core::AdminError> {
//! let store = Arc::new(AdminStore::seeded(IdStrategy::Monotonic));
//! let api = MockAdminApi::new(store, Arc::new(NoLatency));
//! let cara = api.create_user(UserDraft::new("Cara", "User", "Active")).await?;
//! assert_eq!(cara.id.get(), 3);
//! # Ok(())
//! # }
//! ```
#![allow(missing_docs)]

pub mod api;
pub mod error;
pub mod latency;
pub mod store;
pub mod validation;
pub mod views;

pub use error::{AdminError, EntityKind, Result, ValidationError};
pub use rbac_model::{Record, Role, RoleDraft, RoleId, User, UserDraft, UserId, UserStatus};
