//! Generic in-memory document collection.
//!
//! Provides the record-store operations the repository adapters are built
//! on: point lookup, filtered lookup, insert with a store-generated id,
//! field update, delete, and set-based array mutation (add-if-absent and
//! remove-by-value). Mutations are visible to the next caller immediately;
//! there is no caching layer.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

/// A record held by a [`MemoryCollection`].
pub trait Document: Clone + Send + Sync + 'static {
    /// The record's unique identifier.
    fn id(&self) -> Uuid;
}

/// One collection of documents guarded by a read-write lock.
///
/// Lock poisoning is recovered rather than propagated: a panic while
/// holding the guard cannot leave the map in a torn state because every
/// mutation is applied through a single closure call.
#[derive(Debug)]
pub struct MemoryCollection<T> {
    records: RwLock<HashMap<Uuid, T>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Document> MemoryCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, T>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All records in the collection, in no particular order.
    pub fn find(&self) -> Vec<T> {
        self.read().values().cloned().collect()
    }

    /// Point lookup by identifier.
    pub fn find_by_id(&self, id: Uuid) -> Option<T> {
        self.read().get(&id).cloned()
    }

    /// Every record matching the predicate.
    pub fn find_where(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.read()
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Insert a new record built around a store-generated identifier.
    pub fn insert(&self, build: impl FnOnce(Uuid) -> T) -> T {
        let mut records = self.write();
        let mut id = Uuid::new_v4();
        while records.contains_key(&id) {
            id = Uuid::new_v4();
        }
        let record = build(id);
        records.insert(id, record.clone());
        record
    }

    /// Apply a field update, returning the updated record.
    pub fn update_by_id(&self, id: Uuid, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut records = self.write();
        let record = records.get_mut(&id)?;
        apply(record);
        Some(record.clone())
    }

    /// Delete a record, returning it.
    pub fn delete_by_id(&self, id: Uuid) -> Option<T> {
        self.write().remove(&id)
    }

    /// Add `value` to the array field of every record matching `filter`,
    /// skipping records already holding it.
    pub fn add_to_relation_set<V>(
        &self,
        filter: impl Fn(&T) -> bool,
        field: impl Fn(&mut T) -> &mut Vec<V>,
        value: V,
    ) where
        V: PartialEq + Copy,
    {
        let mut records = self.write();
        for record in records.values_mut() {
            if !filter(record) {
                continue;
            }
            let set = field(record);
            if !set.contains(&value) {
                set.push(value);
            }
        }
    }

    /// Remove `value` from the array field of every record matching
    /// `filter`; records without the value are untouched.
    pub fn remove_from_relation_set<V>(
        &self,
        filter: impl Fn(&T) -> bool,
        field: impl Fn(&mut T) -> &mut Vec<V>,
        value: V,
    ) where
        V: PartialEq + Copy,
    {
        let mut records = self.write();
        for record in records.values_mut() {
            if !filter(record) {
                continue;
            }
            field(record).retain(|existing| *existing != value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Uuid,
        label: String,
        tags: Vec<Uuid>,
    }

    impl Document for Note {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn note(collection: &MemoryCollection<Note>, label: &str) -> Note {
        collection.insert(|id| Note {
            id,
            label: label.to_owned(),
            tags: Vec::new(),
        })
    }

    #[rstest]
    fn insert_generates_distinct_ids() {
        let collection = MemoryCollection::new();
        let a = note(&collection, "a");
        let b = note(&collection, "b");
        assert_ne!(a.id, b.id);
        assert_eq!(collection.find().len(), 2);
    }

    #[rstest]
    fn update_by_id_returns_the_updated_record() {
        let collection = MemoryCollection::new();
        let created = note(&collection, "before");
        let updated = collection
            .update_by_id(created.id, |record| record.label = "after".to_owned())
            .expect("record exists");
        assert_eq!(updated.label, "after");
        assert_eq!(
            collection.find_by_id(created.id).expect("record exists").label,
            "after"
        );
    }

    #[rstest]
    fn update_by_id_misses_unknown_records() {
        let collection: MemoryCollection<Note> = MemoryCollection::new();
        assert!(collection.update_by_id(Uuid::new_v4(), |_| {}).is_none());
    }

    #[rstest]
    fn delete_by_id_returns_the_removed_record() {
        let collection = MemoryCollection::new();
        let created = note(&collection, "gone");
        let removed = collection.delete_by_id(created.id).expect("record exists");
        assert_eq!(removed, created);
        assert!(collection.find_by_id(created.id).is_none());
    }

    #[rstest]
    fn find_where_filters_records() {
        let collection = MemoryCollection::new();
        note(&collection, "keep");
        note(&collection, "drop");
        let kept = collection.find_where(|record| record.label == "keep");
        assert_eq!(kept.len(), 1);
    }

    #[rstest]
    fn add_to_relation_set_is_idempotent() {
        let collection = MemoryCollection::new();
        let created = note(&collection, "tagged");
        let tag = Uuid::new_v4();
        for _ in 0..2 {
            collection.add_to_relation_set(
                |record| record.id == created.id,
                |record| &mut record.tags,
                tag,
            );
        }
        assert_eq!(
            collection.find_by_id(created.id).expect("record exists").tags,
            vec![tag]
        );
    }

    #[rstest]
    fn remove_from_relation_set_tolerates_absent_values() {
        let collection = MemoryCollection::new();
        let created = note(&collection, "untagged");
        collection.remove_from_relation_set(|_| true, |record| &mut record.tags, Uuid::new_v4());
        assert!(collection.find_by_id(created.id).expect("record exists").tags.is_empty());
    }

    #[rstest]
    fn relation_mutations_respect_the_filter() {
        let collection = MemoryCollection::new();
        let first = note(&collection, "first");
        let second = note(&collection, "second");
        let tag = Uuid::new_v4();
        collection.add_to_relation_set(
            |record| record.id == first.id,
            |record| &mut record.tags,
            tag,
        );
        assert_eq!(collection.find_by_id(first.id).expect("exists").tags, vec![tag]);
        assert!(collection.find_by_id(second.id).expect("exists").tags.is_empty());
    }
}
