//! Article domain model.
//!
//! # Responsibility
//! - Define the immutable join record between one author and one magazine.
//!
//! # Invariants
//! - `id`, `author_id`, `magazine_id` and `title` are fixed at construction.
//! - `title` length stays within `TITLE_MIN_CHARS..=TITLE_MAX_CHARS`.
//! - Whether the referenced author/magazine actually exist is the registry's
//!   check; this record only guarantees shape.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// Immutable join record: one author, one magazine, one title.
///
/// No mutation API exists; every field is read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleWire")]
pub struct Article {
    id: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

impl Article {
    /// Lower bound for article titles, in chars.
    pub const TITLE_MIN_CHARS: usize = 5;
    /// Upper bound for article titles, in chars.
    pub const TITLE_MAX_CHARS: usize = 50;

    /// Creates an article with a generated stable id.
    ///
    /// # Errors
    /// - `NilEntityId` when either referenced id is the nil uuid.
    /// - `TitleLength` when the title falls outside the permitted bound.
    pub fn new(
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), author_id, magazine_id, title)
    }

    /// Creates an article with a caller-provided stable id.
    ///
    /// # Errors
    /// - `NilEntityId` when any id is the nil uuid.
    /// - `TitleLength` when the title falls outside the permitted bound.
    pub fn with_id(
        id: ArticleId,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if id.is_nil() || author_id.is_nil() || magazine_id.is_nil() {
            return Err(ValidationError::NilEntityId);
        }
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id,
            author_id,
            magazine_id,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Checks the title length bound without constructing a record.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let length = title.chars().count();
    if !(Article::TITLE_MIN_CHARS..=Article::TITLE_MAX_CHARS).contains(&length) {
        return Err(ValidationError::TitleLength { length });
    }
    Ok(())
}

#[derive(Deserialize)]
struct ArticleWire {
    id: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

impl TryFrom<ArticleWire> for Article {
    type Error = ValidationError;

    fn try_from(wire: ArticleWire) -> Result<Self, Self::Error> {
        Self::with_id(wire.id, wire.author_id, wire.magazine_id, wire.title)
    }
}
