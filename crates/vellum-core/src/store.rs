//! The external record-store boundary.
//!
//! The registry never writes through this interface; it only reads
//! snapshots and, at configuration time, cross-checks field coverage.

use crate::{registry::Registry, render::{Record, Value}};
use serde::Serialize;
use std::collections::BTreeSet;
use vellum_schema::{err, error::ErrorTree};

///
/// Filter
///
/// Minimal selection language for `list`. Anything richer belongs to the
/// host framework's query layer.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Filter {
    All,
    Eq { field: String, value: Value },
}

impl Filter {
    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::Eq {
            field: field.into(),
            value,
        }
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Eq { field, value } => record.get(field) == Some(value),
        }
    }
}

///
/// RecordStore
///
/// External persistence collaborator. Implementations live in the host
/// framework; tests use in-memory doubles.
///

pub trait RecordStore {
    fn get(&self, model: &str, id: &str) -> Option<Record>;

    /// Lazy sequence of records for a model. Implementations should not
    /// materialize the whole set up front.
    fn list<'a>(&'a self, model: &str, filter: Filter) -> Box<dyn Iterator<Item = Record> + 'a>;

    fn fields_of(&self, model: &str) -> BTreeSet<String>;
}

/// Configuration check: every field the registry declares for a model
/// must exist in the store's reported field set. Collects all mismatches.
pub fn check_store(registry: &Registry, store: &dyn RecordStore) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    for model in registry.models() {
        let reported = store.fields_of(&model.name);
        for field in model.fields.names() {
            if !reported.contains(field) {
                err!(
                    errs,
                    "store is missing field '{field}' for model '{}'",
                    model.name
                );
            }
        }
    }

    errs.result()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use vellum_schema::{
        node::{FieldDef, ModelDef},
        types::SemanticType,
    };

    // In-memory store double keyed by (model, id).
    #[derive(Default)]
    struct MemStore {
        records: BTreeMap<(String, String), Record>,
        fields: BTreeMap<String, BTreeSet<String>>,
    }

    impl RecordStore for MemStore {
        fn get(&self, model: &str, id: &str) -> Option<Record> {
            self.records
                .get(&(model.to_string(), id.to_string()))
                .cloned()
        }

        fn list<'a>(
            &'a self,
            model: &str,
            filter: Filter,
        ) -> Box<dyn Iterator<Item = Record> + 'a> {
            let model = model.to_string();
            Box::new(
                self.records
                    .iter()
                    .filter(move |((m, _), _)| *m == model)
                    .map(|(_, r)| r.clone())
                    .filter(move |r| filter.matches(r)),
            )
        }

        fn fields_of(&self, model: &str) -> BTreeSet<String> {
            self.fields.get(model).cloned().unwrap_or_default()
        }
    }

    fn registry() -> Registry {
        Registry::builder()
            .model(
                ModelDef::new("hosts")
                    .field(FieldDef::new("ip", SemanticType::Text))
                    .field(FieldDef::new("owner", SemanticType::Reference)),
            )
            .finish()
            .unwrap()
    }

    #[test]
    fn check_store_accepts_a_superset() {
        let registry = registry();
        let mut store = MemStore::default();
        store.fields.insert(
            "hosts".to_string(),
            ["ip", "owner", "extra"].iter().map(|s| (*s).to_string()).collect(),
        );

        assert!(check_store(&registry, &store).is_ok());
    }

    #[test]
    fn check_store_flags_each_missing_field() {
        let registry = registry();
        let store = MemStore::default(); // reports no fields at all

        let errs = check_store(&registry, &store).unwrap_err();
        assert_eq!(errs.len(), 2);
        assert!(errs.to_string().contains("missing field 'ip'"));
        assert!(errs.to_string().contains("missing field 'owner'"));
    }

    #[test]
    fn eq_filter_selects_matching_records() {
        let mut store = MemStore::default();
        let a = Record::new("hosts").with("ip", Value::text("10.0.0.1"));
        let b = Record::new("hosts").with("ip", Value::text("10.0.0.2"));
        store
            .records
            .insert(("hosts".to_string(), "1".to_string()), a);
        store
            .records
            .insert(("hosts".to_string(), "2".to_string()), b);

        let hits: Vec<Record> = store
            .list("hosts", Filter::eq("ip", Value::text("10.0.0.2")))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].get("ip"), Some(&Value::text("10.0.0.2")));

        let all: Vec<Record> = store.list("hosts", Filter::All).collect();
        assert_eq!(all.len(), 2);
    }
}
