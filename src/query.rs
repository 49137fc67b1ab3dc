//! Search request construction and predicate matching.
//!
//! A [`SearchRequest`] carries four independently optional filter categories:
//! title prefixes, content substrings, author ids, and a creation time range.
//! Categories combine with logical AND; the values listed within a category
//! combine with logical OR. A category left empty imposes no constraint, so
//! the default request matches every document.
//!
//! # Example
//!
//! ```ignore
//! use docstore::query::SearchRequest;
//! use chrono::Utc;
//!
//! let request = SearchRequest::builder()
//!     .title_prefixes(["Report"])
//!     .author_ids(["jdoe"])
//!     .created_to(Utc::now())
//!     .build();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// A filter describing which documents a search should return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Title prefixes; a document's title must start with at least one.
    pub title_prefixes: Vec<String>,
    /// Content substrings; a document's content must contain at least one.
    pub contains_contents: Vec<String>,
    /// Author ids; a document's author id must equal at least one.
    pub author_ids: Vec<String>,
    /// Inclusive lower bound on the creation timestamp.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the creation timestamp.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a new builder for fluent request construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    /// Returns `true` if the document satisfies every filter category of this
    /// request.
    ///
    /// All comparisons are case-sensitive and both timestamp bounds are
    /// inclusive.
    pub fn matches(&self, document: &Document) -> bool {
        self.matches_title(document)
            && self.matches_content(document)
            && self.matches_author(document)
            && self.matches_created(document)
    }

    fn matches_title(&self, document: &Document) -> bool {
        self.title_prefixes.is_empty()
            || self
                .title_prefixes
                .iter()
                .any(|prefix| document.title.starts_with(prefix.as_str()))
    }

    fn matches_content(&self, document: &Document) -> bool {
        self.contains_contents.is_empty()
            || self
                .contains_contents
                .iter()
                .any(|content| document.content.contains(content.as_str()))
    }

    fn matches_author(&self, document: &Document) -> bool {
        self.author_ids.is_empty()
            || self
                .author_ids
                .iter()
                .any(|author_id| document.author.id == *author_id)
    }

    fn matches_created(&self, document: &Document) -> bool {
        if let Some(from) = self.created_from {
            if document.created < from {
                return false;
            }
        }
        if let Some(to) = self.created_to {
            if document.created > to {
                return false;
            }
        }
        true
    }
}

/// Builder for constructing [`SearchRequest`] values.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Sets the title prefixes to filter on.
    pub fn title_prefixes(
        mut self,
        prefixes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.request.title_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the content substrings to filter on.
    pub fn contains_contents(
        mut self,
        contents: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.request.contains_contents = contents.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the author ids to filter on.
    pub fn author_ids(mut self, author_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.request.author_ids = author_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the inclusive lower bound on the creation timestamp.
    pub fn created_from(mut self, created_from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(created_from);
        self
    }

    /// Sets the inclusive upper bound on the creation timestamp.
    pub fn created_to(mut self, created_to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(created_to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}
