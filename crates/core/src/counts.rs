//! Document counts used to report ingestion progress.
//!
//! The count store itself lives outside this crate (a MongoDB database named
//! [`DATABASE_NAME`](crate::constants::DATABASE_NAME) in production). Callers implement
//! [`CountStore`] over whatever client they hold; `mirr-mocks` provides an in-memory one.

use crate::{CountError, CountResult};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

/// The collections records are counted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Dockets,
    Documents,
    Comments,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Dockets,
        Collection::Documents,
        Collection::Comments,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Dockets => "dockets",
            Collection::Documents => "documents",
            Collection::Comments => "comments",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single collection that can count its documents.
pub trait DocumentCounter {
    /// Counts documents matching `filter`. Progress reporting only passes the match-all
    /// filter `{}`.
    fn count_documents(&self, filter: &Value) -> CountResult<u64>;
}

/// A database exposing the three record collections.
pub trait CountStore {
    fn collection(&self, collection: Collection) -> Option<&dyn DocumentCounter>;
}

/// Number of stored records of each kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IngestionCounts {
    pub dockets: u64,
    pub documents: u64,
    pub comments: u64,
}

/// Counts every record in each collection of `store`.
///
/// # Errors
///
/// Returns `CountError::MissingCollection` if the store lacks one of the collections, or the
/// counter's own error if counting fails.
pub fn ingestion_counts(store: &dyn CountStore) -> CountResult<IngestionCounts> {
    let match_all = json!({});
    let mut counts = IngestionCounts::default();

    for collection in Collection::ALL {
        let counter = store
            .collection(collection)
            .ok_or(CountError::MissingCollection(collection))?;
        let count = counter.count_documents(&match_all)?;

        match collection {
            Collection::Dockets => counts.dockets = count,
            Collection::Documents => counts.documents = count,
            Collection::Comments => counts.comments = count,
        }
    }

    tracing::info!(
        dockets = counts.dockets,
        documents = counts.documents,
        comments = counts.comments,
        "ingestion counts"
    );

    Ok(counts)
}
