//! Document and author value types.
//!
//! This module provides the value types held by the store. Both are plain
//! immutable records; [`Document`] additionally offers a fluent builder for
//! field-by-field construction.
//!
//! # Example
//!
//! ```ignore
//! use docstore::document::{Author, Document};
//! use chrono::Utc;
//!
//! let document = Document::builder()
//!     .title("Meeting notes")
//!     .content("Agreed on the Q3 roadmap.")
//!     .author(Author::new("jdoe", "Jane Doe"))
//!     .created(Utc::now())
//!     .build()?;
//! # Ok::<(), docstore::error::DocumentStoreError>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DocumentStoreError, DocumentStoreResult};

/// Creator metadata attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// The author's identifier.
    pub id: String,
    /// The author's display name.
    pub name: String,
}

impl Author {
    /// Creates a new author with the given id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A stored record with id, title, content, author, and creation timestamp.
///
/// An empty `id` marks a document that has not been assigned an identifier
/// yet; [`DocumentStore::save`](crate::store::DocumentStore::save) generates
/// one in that case. The `created` timestamp is caller-supplied and passed
/// through unchanged by every store operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique key of the document within a store.
    pub id: String,
    /// The document title.
    pub title: String,
    /// The document body.
    pub content: String,
    /// The document's creator.
    pub author: Author,
    /// When the document was created.
    pub created: DateTime<Utc>,
}

impl Document {
    /// Creates a new builder for constructing a document.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }
}

/// Builder for constructing [`Document`] values.
///
/// Every field except `id` is required; [`build`](DocumentBuilder::build)
/// reports the first missing one. Leaving `id` unset produces a document with
/// an empty id, which the store treats as "assign an id on save".
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    id: Option<String>,
    title: Option<String>,
    content: Option<String>,
    author: Option<Author>,
    created: Option<DateTime<Utc>>,
}

impl DocumentBuilder {
    /// Sets the document id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the document body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the document's author.
    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Builds and returns the final document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::MissingField`] if `title`, `content`,
    /// `author`, or `created` was never set.
    pub fn build(self) -> DocumentStoreResult<Document> {
        Ok(Document {
            id: self.id.unwrap_or_default(),
            title: self
                .title
                .ok_or(DocumentStoreError::MissingField("title"))?,
            content: self
                .content
                .ok_or(DocumentStoreError::MissingField("content"))?,
            author: self
                .author
                .ok_or(DocumentStoreError::MissingField("author"))?,
            created: self
                .created
                .ok_or(DocumentStoreError::MissingField("created"))?,
        })
    }
}
