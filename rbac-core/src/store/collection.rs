use rbac_model::Record;
use tracing::warn;

use super::IdStrategy;

/// Ordered in-memory records of one entity type.
///
/// Insertion order is preserved; snapshots are returned in that order.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: Vec<T>,
    strategy: IdStrategy,
    high_water: u64,
}

impl<T: Record> Collection<T> {
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_records(strategy, Vec::new())
    }

    pub fn with_records(strategy: IdStrategy, records: Vec<T>) -> Self {
        let high_water: u64 = records
            .iter()
            .map(|record| Into::<u64>::into(record.id()))
            .max()
            .unwrap_or(0);

        Self {
            records,
            strategy,
            high_water,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shallow copy of the current records.
    pub fn snapshot(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Assign the next id, build the record with it, and append it.
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(T::Id) -> T,
    {
        let raw = self.strategy.next_id(self.records.len(), self.high_water);
        let id = T::Id::from(raw);

        if self.contains(id) {
            warn!(
                kind = T::KIND,
                id = raw,
                strategy = %self.strategy,
                "assigned id already held by a live record"
            );
        }

        let record = build(id);
        self.high_water = self.high_water.max(raw);
        self.records.push(record.clone());
        record
    }

    /// Overwrite the first record whose id matches. Returns the previous
    /// value, or `None` (and leaves the collection untouched) on a miss.
    pub fn replace(&mut self, record: T) -> Option<T> {
        let id = record.id();
        let slot = self.records.iter_mut().find(|existing| existing.id() == id)?;
        Some(std::mem::replace(slot, record))
    }

    /// Drop every record with the id. Returns how many were removed.
    pub fn remove(&mut self, id: T::Id) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        before - self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbac_model::{User, UserId, UserStatus};

    fn user(id: u64, name: &str) -> User {
        User::new(id, name, "User", UserStatus::Active)
    }

    fn seeded(strategy: IdStrategy) -> Collection<User> {
        Collection::with_records(strategy, vec![user(1, "Alice"), user(2, "Bob")])
    }

    #[test]
    fn monotonic_ids_survive_deletion() {
        let mut users = seeded(IdStrategy::Monotonic);
        assert_eq!(users.remove(UserId(2)), 1);

        let created = users.insert_with(|id| User::new(id, "Cara", "User", UserStatus::Active));
        assert_eq!(created.id, UserId(3));

        assert_eq!(users.remove(UserId(3)), 1);
        let next = users.insert_with(|id| User::new(id, "Dan", "User", UserStatus::Active));
        assert_eq!(next.id, UserId(4));
    }

    #[test]
    fn count_plus_one_reuses_ids_after_deletion() {
        let mut users = seeded(IdStrategy::CountPlusOne);
        users.remove(UserId(1));

        // one record left (id 2); the legacy scheme hands out 2 again
        let created = users.insert_with(|id| User::new(id, "Cara", "User", UserStatus::Active));
        assert_eq!(created.id, UserId(2));
        assert_eq!(users.len(), 2);
        assert_eq!(
            users.snapshot().iter().filter(|u| u.id == UserId(2)).count(),
            2
        );
    }

    #[test]
    fn replace_targets_first_match_and_ignores_misses() {
        let mut users = seeded(IdStrategy::Monotonic);

        let previous = users.replace(user(2, "Robert")).unwrap();
        assert_eq!(previous.name, "Bob");
        assert_eq!(users.get(UserId(2)).unwrap().name, "Robert");

        assert!(users.replace(user(9, "Ghost")).is_none());
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn remove_on_missing_id_is_a_no_op() {
        let mut users = seeded(IdStrategy::Monotonic);
        assert_eq!(users.remove(UserId(42)), 0);
        assert_eq!(users.snapshot(), vec![user(1, "Alice"), user(2, "Bob")]);
    }
}
