use rbac_model::Record;
use tracing::{debug, error};

use crate::error::AdminError;

/// Lifecycle of a list view's collection.
///
/// An empty collection and a populated one are both `Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Ready,
    /// Carries the generic message shown to the user.
    Failed(String),
}

impl ListPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListPhase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ListPhase::Ready)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Local change applied to a list before server state is refetched.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T: Record> {
    /// A record was created; add it to the end.
    Append(T),
    /// A record was updated; swap it in by id.
    Replace(T),
    /// A record was deleted; filter it out by id.
    Remove(T::Id),
}

/// What a form submit asks of its list view, applied in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEffect<T: Record> {
    Patch(Patch<T>),
    /// Refetch the whole collection and leave edit mode.
    Reload,
}

/// Collection, edit target and phase owned by a list view.
#[derive(Debug, Clone)]
pub struct ListState<T: Record> {
    records: Vec<T>,
    editing: Option<T>,
    phase: ListPhase,
}

impl<T: Record> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> ListState<T> {
    /// A list starts out loading: views fetch on mount.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            editing: None,
            phase: ListPhase::Loading,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn editing(&self) -> Option<&T> {
        self.editing.as_ref()
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn set_editing(&mut self, editing: Option<T>) {
        self.editing = editing;
    }

    pub fn begin_load(&mut self) {
        self.phase = ListPhase::Loading;
    }

    /// Settle a load. On failure the previous records stay in memory but
    /// the phase reports `failure_message`.
    pub fn finish_load(&mut self, result: Result<Vec<T>, AdminError>, failure_message: &str) {
        match result {
            Ok(records) => {
                debug!(kind = T::KIND, count = records.len(), "list loaded");
                self.records = records;
                self.phase = ListPhase::Ready;
            }
            Err(err) => {
                error!(kind = T::KIND, error = %err, "list load failed");
                self.phase = ListPhase::Failed(failure_message.to_string());
            }
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = ListPhase::Failed(message.into());
    }

    pub fn apply_patch(&mut self, patch: Patch<T>) {
        match patch {
            Patch::Append(record) => self.records.push(record),
            Patch::Replace(record) => {
                let id = record.id();
                for slot in self.records.iter_mut().filter(|r| r.id() == id) {
                    *slot = record.clone();
                }
            }
            Patch::Remove(id) => self.records.retain(|record| record.id() != id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbac_model::{User, UserId, UserStatus};

    fn user(id: u64, name: &str) -> User {
        User::new(id, name, "User", UserStatus::Active)
    }

    #[test]
    fn starts_loading_and_settles_ready_even_when_empty() {
        let mut list = ListState::<User>::new();
        assert!(list.phase().is_loading());

        list.finish_load(Ok(Vec::new()), "Failed to load users");
        assert!(list.phase().is_ready());
        assert!(list.is_empty());
    }

    #[test]
    fn failed_load_keeps_previous_records() {
        let mut list = ListState::new();
        list.finish_load(Ok(vec![user(1, "Alice")]), "Failed to load users");

        list.begin_load();
        list.finish_load(Err(AdminError::Internal("offline".into())), "Failed to load users");

        assert_eq!(list.phase().error(), Some("Failed to load users"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn patches_append_replace_and_remove() {
        let mut list = ListState::new();
        list.finish_load(Ok(vec![user(1, "Alice"), user(2, "Bob")]), "");

        list.apply_patch(Patch::Append(user(3, "Cara")));
        list.apply_patch(Patch::Replace(user(2, "Robert")));
        list.apply_patch(Patch::Remove(UserId(1)));

        let names: Vec<_> = list.records().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Robert", "Cara"]);
    }
}
