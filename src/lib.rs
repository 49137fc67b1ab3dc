//! An embedded in-memory document store.
//!
//! This crate provides a small, synchronous document store that lives entirely
//! inside the owning process. It exposes three operations:
//!
//! - **Upsert** ([`store::DocumentStore::save`]) - Insert or fully replace a document keyed by its id
//! - **Point lookup** ([`store::DocumentStore::find_by_id`]) - Retrieve a document by exact id
//! - **Filtered search** ([`store::DocumentStore::search`]) - Sequential scan with multi-criteria predicates
//!
//! Documents carry a title, free-form content, an author, and a creation
//! timestamp. Search requests combine independently optional filters on title
//! prefix, content substring, author id, and creation time range.
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::prelude::*;
//! use chrono::Utc;
//!
//! let mut store = DocumentStore::new();
//!
//! let saved = store.save(
//!     Document::builder()
//!         .title("Release notes")
//!         .content("Initial release.")
//!         .author(Author::new("jdoe", "Jane Doe"))
//!         .created(Utc::now())
//!         .build()
//!         .unwrap(),
//! );
//!
//! let found = store.find_by_id(&saved.id);
//! assert!(found.is_some());
//!
//! let results = store.search(
//!     &SearchRequest::builder()
//!         .title_prefixes(["Release"])
//!         .build(),
//! );
//! assert_eq!(results.len(), 1);
//! ```
//!
//! # Threading
//!
//! The store is single-threaded by design: mutation requires `&mut` access and
//! no internal locking is performed. Callers that need to share a store across
//! threads must wrap it in their own `Mutex` or `RwLock`.

pub mod document;
pub mod error;
pub mod prelude;
pub mod query;
pub mod store;
