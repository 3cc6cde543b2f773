//! In-memory stand-ins for the document-count store.
//!
//! Mirrors the shape of the production client: a client holds databases by name, the
//! `mirrulations` database holds `dockets`, `documents` and `comments` collections, and each
//! collection answers `count_documents({})` with a fixed number.
//!
//! ```
//! use mirr_core::{constants::DATABASE_NAME, ingestion_counts};
//! use mirr_mocks::create_mock_store;
//!
//! let client = create_mock_store(1, 20, 300);
//! let database = client.database(DATABASE_NAME).unwrap();
//! let counts = ingestion_counts(database).unwrap();
//! assert_eq!(counts.comments, 300);
//! ```

use mirr_core::constants::DATABASE_NAME;
use mirr_core::{Collection, CountError, CountResult, CountStore, DocumentCounter};
use serde_json::Value;
use std::collections::HashMap;

/// A collection that always reports the same count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockDocumentCount {
    count: u64,
}

impl MockDocumentCount {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

impl DocumentCounter for MockDocumentCount {
    /// Only the match-all filter `{}` is accepted.
    fn count_documents(&self, filter: &Value) -> CountResult<u64> {
        match filter {
            Value::Object(map) if map.is_empty() => Ok(self.count),
            other => Err(CountError::InvalidFilter(other.to_string())),
        }
    }
}

/// A database of mock collections.
#[derive(Clone, Debug, Default)]
pub struct MockDatabase {
    collections: HashMap<Collection, MockDocumentCount>,
}

impl MockDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a collection reporting `count`.
    pub fn with_collection(mut self, collection: Collection, count: u64) -> Self {
        self.collections
            .insert(collection, MockDocumentCount::new(count));
        self
    }
}

impl CountStore for MockDatabase {
    fn collection(&self, collection: Collection) -> Option<&dyn DocumentCounter> {
        self.collections
            .get(&collection)
            .map(|counter| counter as &dyn DocumentCounter)
    }
}

/// A client holding mock databases by name.
#[derive(Clone, Debug, Default)]
pub struct MockClient {
    databases: HashMap<String, MockDatabase>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_database(mut self, name: impl Into<String>, database: MockDatabase) -> Self {
        self.databases.insert(name.into(), database);
        self
    }

    pub fn database(&self, name: &str) -> Option<&MockDatabase> {
        self.databases.get(name)
    }
}

/// Builds a client whose `mirrulations` database reports the given counts.
pub fn create_mock_store(docket_count: u64, document_count: u64, comment_count: u64) -> MockClient {
    let database = MockDatabase::new()
        .with_collection(Collection::Dockets, docket_count)
        .with_collection(Collection::Documents, document_count)
        .with_collection(Collection::Comments, comment_count);

    MockClient::new().with_database(DATABASE_NAME, database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirr_core::{ingestion_counts, IngestionCounts};
    use serde_json::json;

    #[test]
    fn mock_store_reports_counts() {
        let client = create_mock_store(2, 10, 50);
        let database = client.database("mirrulations").expect("mirrulations database");

        assert_eq!(
            ingestion_counts(database).expect("counts"),
            IngestionCounts {
                dockets: 2,
                documents: 10,
                comments: 50,
            }
        );
    }

    #[test]
    fn each_collection_counts_independently() {
        let client = create_mock_store(2, 10, 50);
        let database = client.database(DATABASE_NAME).expect("database");

        let comments = database
            .collection(Collection::Comments)
            .expect("comments collection");
        assert_eq!(comments.count_documents(&json!({})).expect("count"), 50);
    }

    #[test]
    fn unknown_database_is_absent() {
        let client = create_mock_store(0, 0, 0);
        assert!(client.database("regulations").is_none());
    }

    #[test]
    fn non_empty_filter_is_rejected() {
        let counter = MockDocumentCount::new(5);

        for filter in [json!({"agencyId": "EPA"}), json!(null), json!([])] {
            let err = counter.count_documents(&filter).expect_err("filter rejected");
            assert!(matches!(err, CountError::InvalidFilter(_)), "{filter}");
        }
    }

    #[test]
    fn partial_database_reports_missing_collection() {
        let database = MockDatabase::new().with_collection(Collection::Dockets, 1);

        let err = ingestion_counts(&database).expect_err("missing collections");
        match err {
            CountError::MissingCollection(collection) => {
                assert_eq!(collection, Collection::Documents)
            }
            other => panic!("expected MissingCollection, got {other:?}"),
        }
    }
}
