//! The in-memory document store.
//!
//! This module provides [`DocumentStore`], a single-threaded store that owns a
//! mapping from document id to [`Document`] and exposes three operations:
//!
//! - [`save`](DocumentStore::save) - Insert or fully replace a document
//! - [`search`](DocumentStore::search) - Sequential scan with predicate filters
//! - [`find_by_id`](DocumentStore::find_by_id) - Point lookup by exact id
//!
//! # Performance
//!
//! Searches scan every stored document (no indexing). For the intended
//! embedded, small-dataset usage this is typically acceptable.
//!
//! # Thread Safety
//!
//! The store performs no internal locking; `save` requires `&mut` access, so
//! sharing a store across threads requires external synchronization.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::{
    document::{Author, Document},
    query::SearchRequest,
};

/// An in-memory document store keyed by document id.
///
/// A freshly constructed store is empty. Documents are never deleted; they
/// are only ever inserted or replaced through [`save`](DocumentStore::save).
///
/// # Example
///
/// ```ignore
/// use docstore::prelude::*;
/// use chrono::Utc;
///
/// let mut store = DocumentStore::new();
/// let saved = store.save(
///     Document::builder()
///         .title("Doc1")
///         .content("Content1")
///         .author(Author::new("Author1", "Author1"))
///         .created(Utc::now())
///         .build()
///         .unwrap(),
/// );
/// assert_eq!(store.find_by_id(&saved.id), Some(saved));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    /// The storage map: document id -> document.
    documents: HashMap<String, Document>,
}

impl DocumentStore {
    /// Creates a new empty document store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a `DocumentStore` with custom options.
    pub fn builder() -> DocumentStoreBuilder {
        DocumentStoreBuilder::default()
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Inserts or fully replaces a document, keyed by its resolved id.
    ///
    /// If the input id is empty a fresh random UUID string is assigned;
    /// otherwise the id is reused verbatim and any existing entry under it is
    /// overwritten. The `created` timestamp is stored unchanged.
    ///
    /// The stored author id mirrors the author name; the caller-supplied
    /// author id is discarded.
    ///
    /// Returns the stored document value.
    pub fn save(&mut self, document: Document) -> Document {
        let id = if document.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            document.id
        };

        let stored = Document {
            id: id.clone(),
            title: document.title,
            content: document.content,
            author: Author::new(document.author.name.clone(), document.author.name),
            created: document.created,
        };

        debug!(doc_id = %id, "storing document");
        self.documents.insert(id, stored.clone());

        stored
    }

    /// Returns every stored document matching the request.
    ///
    /// Passing `None` returns an empty vector. An empty request, by contrast,
    /// matches every document; see [`SearchRequest::matches`] for the filter
    /// semantics. Result order follows the internal map's iteration order and
    /// is not stable.
    pub fn search<'a>(&self, request: impl Into<Option<&'a SearchRequest>>) -> Vec<Document> {
        let Some(request) = request.into() else {
            return Vec::new();
        };

        let matched = self
            .documents
            .values()
            .filter(|document| request.matches(document))
            .cloned()
            .collect::<Vec<_>>();

        debug!(count = matched.len(), "search finished");
        matched
    }

    /// Returns the document stored under `id`, if any.
    ///
    /// An unknown id is a normal outcome, reported as `None`.
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        debug!(doc_id = %id, "looking up document");
        self.documents.get(id).cloned()
    }
}

/// Builder for constructing [`DocumentStore`] instances.
#[derive(Debug, Default)]
pub struct DocumentStoreBuilder {
    capacity: Option<usize>,
}

impl DocumentStoreBuilder {
    /// Pre-allocates room for at least `capacity` documents.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Builds and returns a new [`DocumentStore`] instance.
    pub fn build(self) -> DocumentStore {
        DocumentStore {
            documents: match self.capacity {
                Some(capacity) => HashMap::with_capacity(capacity),
                None => HashMap::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{DateTime, Duration, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn base_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap()
    }

    fn fixture_document(
        id: &str,
        title: &str,
        content: &str,
        author: &str,
        seconds_ago: i64,
    ) -> Document {
        Document::builder()
            .id(id)
            .title(title)
            .content(content)
            .author(Author::new(author, author))
            .created(base_instant() - Duration::seconds(seconds_ago))
            .build()
            .unwrap()
    }

    fn seeded_store() -> DocumentStore {
        let mut store = DocumentStore::new();
        store.save(fixture_document("1", "Doc1", "Content1", "Author1", 3600));
        store.save(fixture_document("2", "Doc2", "Content2", "Author2", 3600));
        store.save(fixture_document("3", "Doc3", "Content3", "Author1", 7200));
        store.save(fixture_document("4", "Doc4", "Content4", "Author4", 5600));
        store
    }

    fn titles(documents: &[Document]) -> HashSet<String> {
        documents
            .iter()
            .map(|document| document.title.clone())
            .collect()
    }

    #[test]
    fn save_generates_distinct_ids_for_documents_without_one() {
        let mut store = DocumentStore::new();
        let unsaved = Document::builder()
            .title("New Document")
            .content("Sample content")
            .author(Author::new("", "John Doe"))
            .created(base_instant())
            .build()
            .unwrap();

        let first = store.save(unsaved.clone());
        let second = store.save(unsaved.clone());

        assert!(!first.id.is_empty());
        assert!(Uuid::parse_str(&first.id).is_ok());
        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
        assert_eq!(first.title, unsaved.title);
        assert_eq!(first.content, unsaved.content);
    }

    #[test]
    fn save_preserves_an_explicit_id() {
        let mut store = DocumentStore::new();
        let explicit_id = Uuid::new_v4().to_string();

        let saved = store.save(fixture_document(
            &explicit_id,
            "Existing Document",
            "Existing content",
            "Alice",
            0,
        ));

        assert_eq!(saved.id, explicit_id);
        assert!(store.find_by_id(&explicit_id).is_some());
    }

    #[test]
    fn save_passes_the_created_timestamp_through_unchanged() {
        let mut store = DocumentStore::new();
        let created = base_instant() - Duration::seconds(42);

        let saved = store.save(fixture_document("1", "Doc1", "Content1", "Author1", 42));

        assert_eq!(saved.created, created);
        assert_eq!(store.find_by_id("1").unwrap().created, created);
    }

    #[test]
    fn save_derives_the_stored_author_id_from_the_author_name() {
        // Current behavior: the caller-supplied author id is discarded and the
        // stored author id mirrors the author name.
        let mut store = DocumentStore::new();
        let document = Document::builder()
            .id("1")
            .title("Doc1")
            .content("Content1")
            .author(Author::new("original-id", "Jane Doe"))
            .created(base_instant())
            .build()
            .unwrap();

        let saved = store.save(document);

        assert_eq!(saved.author, Author::new("Jane Doe", "Jane Doe"));
        assert_eq!(
            store.find_by_id("1").unwrap().author,
            Author::new("Jane Doe", "Jane Doe")
        );
    }

    #[test]
    fn save_overwrites_the_previous_value_under_the_same_id() {
        let mut store = DocumentStore::new();
        store.save(fixture_document("7", "First", "First content", "Author1", 0));
        store.save(fixture_document("7", "Second", "Second content", "Author1", 0));

        assert_eq!(store.len(), 1);
        let found = store.find_by_id("7").unwrap();
        assert_eq!(found.title, "Second");
        assert_eq!(found.content, "Second content");
    }

    #[test]
    fn search_without_a_request_returns_nothing() {
        let store = seeded_store();
        assert!(store.search(None).is_empty());
    }

    #[test]
    fn search_with_an_empty_request_returns_every_document() {
        let store = seeded_store();
        let results = store.search(&SearchRequest::default());

        assert_eq!(
            titles(&results),
            HashSet::from(["Doc1".into(), "Doc2".into(), "Doc3".into(), "Doc4".into()])
        );
    }

    #[test]
    fn search_by_title_prefix() {
        let store = seeded_store();
        let request = SearchRequest::builder().title_prefixes(["Doc1"]).build();

        let results = store.search(&request);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Doc1");
    }

    #[test]
    fn search_by_content_substring() {
        let store = seeded_store();
        let request = SearchRequest::builder()
            .contains_contents(["Content2"])
            .build();

        let results = store.search(&request);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].content, "Content2");
    }

    #[test]
    fn search_by_author_id() {
        let store = seeded_store();
        let request = SearchRequest::builder().author_ids(["Author1"]).build();

        let results = store.search(&request);

        assert_eq!(
            titles(&results),
            HashSet::from(["Doc1".into(), "Doc3".into()])
        );
    }

    #[test]
    fn search_by_created_range() {
        let store = seeded_store();
        // Brackets only the document created 5600 seconds before the base
        // instant.
        let request = SearchRequest::builder()
            .created_from(base_instant() - Duration::seconds(7199))
            .created_to(base_instant() - Duration::seconds(3601))
            .build();

        let results = store.search(&request);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Doc4");
    }

    #[test]
    fn search_with_an_unknown_prefix_returns_nothing() {
        let store = seeded_store();
        let request = SearchRequest::builder()
            .title_prefixes(["NonExistent"])
            .build();

        assert!(store.search(&request).is_empty());
    }

    #[test]
    fn search_combines_filter_categories() {
        let store = seeded_store();
        let request = SearchRequest::builder()
            .title_prefixes(["Doc"])
            .author_ids(["Author1"])
            .build();

        let results = store.search(&request);

        assert_eq!(
            titles(&results),
            HashSet::from(["Doc1".into(), "Doc3".into()])
        );
    }

    #[test]
    fn find_by_id_returns_the_stored_document() {
        let store = seeded_store();

        let found = store.find_by_id("1");

        assert_eq!(found.unwrap().title, "Doc1");
    }

    #[test]
    fn find_by_id_returns_none_for_an_unknown_id() {
        let store = seeded_store();
        assert_eq!(store.find_by_id("999"), None);
    }

    #[test]
    fn builder_constructs_an_empty_store() {
        let store = DocumentStore::builder().with_capacity(16).build();
        assert!(store.is_empty());
    }
}
