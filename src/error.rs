//! Error types and result types for document store operations.

use thiserror::Error;

/// Represents all possible errors returned by the document store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentStoreError {
    /// A required field was never supplied while building a document.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// A specialized `Result` type for document store operations.
///
/// This type alias is used throughout the crate to indicate operations that may fail
/// with a [`DocumentStoreError`].
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;
