use crate::counts::Collection;

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("unsupported record type: {0}")]
    UnsupportedRecordType(String),
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("invalid storage path: {0}")]
    InvalidPath(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type PathResult<T> = std::result::Result<T, PathError>;

#[derive(Debug, thiserror::Error)]
pub enum CountError {
    #[error("collection not found: {0}")]
    MissingCollection(Collection),
    #[error("count filter must be an empty object, got {0}")]
    InvalidFilter(String),
    #[error("document count backend failed: {0}")]
    Backend(String),
}

pub type CountResult<T> = std::result::Result<T, CountError>;
