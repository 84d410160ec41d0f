//! The generic list-management engine
//!
//! A [`ListStore`] answers queries and performs validated mutations over one
//! [`Collection`]. It holds no collection state itself, only the record
//! type's validation ruleset: callers own the collection value, pass it in,
//! and receive a new value back from every mutation. Queries are pure reads.
//!
//! All operations are synchronous and run to completion; mutations are
//! atomic in the sense that a failed operation returns an error and the
//! caller's collection value is untouched.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::core::collection::Collection;
use crate::core::entity::{Record, RecordId};
use crate::core::error::StoreError;
use crate::core::query::{ListQuery, SortDirection};
use crate::core::validation::Ruleset;

/// Query and mutation engine for one record type
pub struct ListStore<T: Record> {
    ruleset: Ruleset,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> ListStore<T> {
    /// Create a store with the record type's validation ruleset
    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            _marker: PhantomData,
        }
    }

    /// Filter and sort a collection.
    ///
    /// Applies, in order: free-text search over the record type's
    /// searchable fields (case-insensitive substring), exact-match field
    /// filters (blank values are no-ops), then a stable sort by the query's
    /// sort field. Ties and records missing the sort field keep their
    /// relative input order; a sort field no record has leaves the sequence
    /// in input order.
    ///
    /// Pure read: the collection is never modified.
    pub fn query(&self, collection: &Collection<T>, query: &ListQuery) -> Vec<T> {
        let mut results: Vec<T> = collection
            .iter()
            .filter(|record| Self::matches(record, query))
            .cloned()
            .collect();

        if let Some(sort) = &query.sort {
            results.sort_by(|a, b| {
                let ordering = Self::compare_field(a, b, &sort.field);
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        results
    }

    /// Validate a draft and append it as a new record.
    ///
    /// The new record's id is `max(existing ids, 0) + 1`, never one that was
    /// already used this session. On validation failure the error map holds
    /// every failing field and the input collection is unchanged.
    pub fn create(
        &self,
        collection: &Collection<T>,
        draft: T::Draft,
    ) -> Result<(Collection<T>, T), StoreError> {
        let draft = self.normalize(draft)?;
        let id = collection.next_id();
        let record = T::from_draft(id, draft);

        let mut next = collection.clone();
        next.push(record.clone());
        tracing::debug!(
            resource = T::resource_name_singular(),
            id,
            "record created"
        );
        Ok((next, record))
    }

    /// Validate a draft and replace the record at `id`, preserving its
    /// position. All other records are untouched.
    pub fn update(
        &self,
        collection: &Collection<T>,
        id: RecordId,
        draft: T::Draft,
    ) -> Result<(Collection<T>, T), StoreError> {
        if !collection.contains(id) {
            return Err(StoreError::NotFound {
                resource: T::resource_name_singular(),
                id,
            });
        }

        let draft = self.normalize(draft)?;
        let record = T::from_draft(id, draft);

        let mut next = collection.clone();
        next.replace(record.clone());
        tracing::debug!(
            resource = T::resource_name_singular(),
            id,
            "record updated"
        );
        Ok((next, record))
    }

    /// Remove the record at `id`. Remaining records keep their ids and
    /// relative order; removed ids are never reassigned.
    pub fn remove(
        &self,
        collection: &Collection<T>,
        id: RecordId,
    ) -> Result<Collection<T>, StoreError> {
        let mut next = collection.clone();
        if !next.remove(id) {
            return Err(StoreError::NotFound {
                resource: T::resource_name_singular(),
                id,
            });
        }
        tracing::debug!(
            resource = T::resource_name_singular(),
            id,
            "record removed"
        );
        Ok(next)
    }

    /// Run the ruleset over a draft: serialize to JSON, normalize and
    /// validate, deserialize the normalized payload back.
    fn normalize(&self, draft: T::Draft) -> Result<T::Draft, StoreError> {
        let payload =
            serde_json::to_value(&draft).map_err(|e| StoreError::Serialization {
                resource: T::resource_name_singular(),
                message: e.to_string(),
            })?;
        let normalized = self.ruleset.apply(payload).map_err(StoreError::Validation)?;
        serde_json::from_value(normalized).map_err(|e| StoreError::Serialization {
            resource: T::resource_name_singular(),
            message: e.to_string(),
        })
    }

    fn matches(record: &T, query: &ListQuery) -> bool {
        if let Some(term) = query.search.as_deref() {
            let term = term.trim();
            if !term.is_empty() {
                let needle = term.to_lowercase();
                let hit = T::searchable_fields().iter().any(|field| {
                    record
                        .field_value(field)
                        .is_some_and(|value| value.matches_search(&needle))
                });
                if !hit {
                    return false;
                }
            }
        }

        for (field, expected) in &query.filters {
            if expected.is_blank() {
                continue;
            }
            match record.field_value(field) {
                Some(actual) if actual == *expected => {}
                _ => return false,
            }
        }

        true
    }

    fn compare_field(a: &T, b: &T, field: &str) -> Ordering {
        match (a.field_value(field), b.field_value(field)) {
            (Some(a), Some(b)) => a.sort_cmp(&b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::validation::validators::required;
    use crate::core::validation::{FieldRule, Ruleset};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Gadget {
        id: RecordId,
        name: String,
        tier: String,
        weight: f64,
    }

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct GadgetDraft {
        name: String,
        tier: String,
        weight: f64,
    }

    impl Record for Gadget {
        type Draft = GadgetDraft;

        fn resource_name() -> &'static str {
            "gadgets"
        }

        fn resource_name_singular() -> &'static str {
            "gadget"
        }

        fn searchable_fields() -> &'static [&'static str] {
            &["name"]
        }

        fn id(&self) -> RecordId {
            self.id
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "id" => Some(FieldValue::from(self.id)),
                "name" => Some(FieldValue::from(self.name.clone())),
                "tier" => Some(FieldValue::from(self.tier.clone())),
                "weight" => Some(FieldValue::from(self.weight)),
                _ => None,
            }
        }

        fn from_draft(id: RecordId, draft: Self::Draft) -> Self {
            Self {
                id,
                name: draft.name,
                tier: draft.tier,
                weight: draft.weight,
            }
        }
    }

    fn store() -> ListStore<Gadget> {
        ListStore::new(
            Ruleset::new().rule(FieldRule::new("name").check(required("Name is required"))),
        )
    }

    fn draft(name: &str, tier: &str, weight: f64) -> GadgetDraft {
        GadgetDraft {
            name: name.to_string(),
            tier: tier.to_string(),
            weight,
        }
    }

    fn seeded() -> Collection<Gadget> {
        let store = store();
        let c = Collection::new();
        let (c, _) = store.create(&c, draft("Anvil", "heavy", 40.0)).unwrap();
        let (c, _) = store.create(&c, draft("Bolt", "light", 0.1)).unwrap();
        let (c, _) = store.create(&c, draft("Crane", "heavy", 900.0)).unwrap();
        c
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let c = seeded();
        let ids: Vec<RecordId> = c.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_create_rejects_invalid_draft_and_leaves_collection_alone() {
        let store = store();
        let c = seeded();
        let err = store.create(&c, draft("", "light", 1.0)).unwrap_err();
        match err {
            StoreError::Validation(errors) => {
                assert_eq!(errors.get("name"), Some("Name is required"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_query_search_and_filter_compose() {
        let store = store();
        let c = seeded();
        let query = ListQuery::new().search("a").filter("tier", "heavy");
        let names: Vec<String> = store
            .query(&c, &query)
            .into_iter()
            .map(|g| g.name)
            .collect();
        // "a" matches Anvil and Crane; tier narrows nothing further here
        assert_eq!(names, vec!["Anvil", "Crane"]);
    }

    #[test]
    fn test_query_blank_filter_is_no_constraint() {
        let store = store();
        let c = seeded();
        let query = ListQuery::new().filter("tier", "");
        assert_eq!(store.query(&c, &query).len(), 3);
    }

    #[test]
    fn test_query_sort_descending() {
        let store = store();
        let c = seeded();
        let query = ListQuery::new().sort_expr("weight:desc");
        let weights: Vec<f64> = store.query(&c, &query).iter().map(|g| g.weight).collect();
        assert_eq!(weights, vec![900.0, 40.0, 0.1]);
    }

    #[test]
    fn test_query_unknown_sort_field_keeps_input_order() {
        let store = store();
        let c = seeded();
        let query = ListQuery::new().sort_expr("wingspan:asc");
        let names: Vec<String> = store
            .query(&c, &query)
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["Anvil", "Bolt", "Crane"]);
    }

    #[test]
    fn test_query_sort_is_stable_on_ties() {
        let store = store();
        let c = seeded();
        let query = ListQuery::new().sort_expr("tier:asc");
        let names: Vec<String> = store
            .query(&c, &query)
            .into_iter()
            .map(|g| g.name)
            .collect();
        // Anvil and Crane tie on "heavy" and keep their input order
        assert_eq!(names, vec!["Anvil", "Crane", "Bolt"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = store();
        let c = seeded();
        let (c, updated) = store.update(&c, 2, draft("Bolt M8", "light", 0.2)).unwrap();
        assert_eq!(updated.id, 2);
        let names: Vec<&str> = c.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Anvil", "Bolt M8", "Crane"]);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let store = store();
        let c = seeded();
        let err = store.update(&c, 99, draft("x", "light", 1.0)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 99, .. }));
    }

    #[test]
    fn test_remove_then_create_never_reuses_ids() {
        let store = store();
        let c = seeded();
        let c = store.remove(&c, 3).unwrap();
        let (c, created) = store.create(&c, draft("Derrick", "heavy", 1200.0)).unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_remove_missing_id_is_not_found() {
        let store = store();
        let c = seeded();
        assert!(matches!(
            store.remove(&c, 42),
            Err(StoreError::NotFound { id: 42, .. })
        ));
    }
}
