//! Publishing domain model.
//!
//! # Responsibility
//! - Define the canonical Author/Magazine/Article records.
//! - Enforce construction-time shape constraints before any record exists.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil uuid.
//! - Author name and Article title/author/magazine are fixed for the record
//!   lifetime; Magazine name/category mutate only through validating
//!   methods.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article;
pub mod author;
pub mod magazine;

use article::Article;
use magazine::Magazine;

/// Shape-constraint violations raised at record construction or mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Caller-supplied id was the nil uuid.
    NilEntityId,
    /// Author name was empty after trimming.
    EmptyAuthorName,
    /// Magazine name was empty after trimming.
    EmptyMagazineName,
    /// Magazine category was empty after trimming.
    EmptyMagazineCategory,
    /// Magazine rename fell outside the editorial name bound.
    MagazineNameLength { length: usize },
    /// Article title fell outside the permitted length bound.
    TitleLength { length: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilEntityId => write!(f, "entity id must not be the nil uuid"),
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::EmptyMagazineName => write!(f, "magazine name must not be empty"),
            Self::EmptyMagazineCategory => write!(f, "magazine category must not be empty"),
            Self::MagazineNameLength { length } => write!(
                f,
                "magazine name must be {}-{} characters, got {length}",
                Magazine::NAME_MIN_CHARS,
                Magazine::NAME_MAX_CHARS
            ),
            Self::TitleLength { length } => write!(
                f,
                "article title must be {}-{} characters, got {length}",
                Article::TITLE_MIN_CHARS,
                Article::TITLE_MAX_CHARS
            ),
        }
    }
}

impl Error for ValidationError {}
