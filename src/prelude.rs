//! Convenient re-exports of commonly used types.
//!
//! Import this prelude module to quickly access the most frequently used types
//! without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use docstore::prelude::*;
//! ```

pub use crate::{
    document::{Author, Document, DocumentBuilder},
    error::{DocumentStoreError, DocumentStoreResult},
    query::{SearchRequest, SearchRequestBuilder},
    store::{DocumentStore, DocumentStoreBuilder},
};
