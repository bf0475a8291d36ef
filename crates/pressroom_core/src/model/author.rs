//! Author domain model.
//!
//! # Responsibility
//! - Define the identity anchor for written articles.
//!
//! # Invariants
//! - `id` is stable and never reused for another author.
//! - `name` is fixed at construction; no mutation API exists.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an author.
pub type AuthorId = Uuid;

/// Identity anchor for written articles.
///
/// Fields stay private so the immutability contract is enforced by the type:
/// once constructed, an author's name can only be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorWire")]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Creates an author with a generated stable id.
    ///
    /// # Errors
    /// - `EmptyAuthorName` when `name` is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided stable id.
    ///
    /// Used by callers that already hold an external identity.
    ///
    /// # Errors
    /// - `NilEntityId` when `id` is the nil uuid.
    /// - `EmptyAuthorName` when `name` is empty after trimming.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NilEntityId);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize)]
struct AuthorWire {
    id: AuthorId,
    name: String,
}

impl TryFrom<AuthorWire> for Author {
    type Error = ValidationError;

    fn try_from(wire: AuthorWire) -> Result<Self, Self::Error> {
        Self::with_id(wire.id, wire.name)
    }
}

#[cfg(test)]
mod tests {
    use super::Author;
    use crate::model::ValidationError;
    use uuid::Uuid;

    #[test]
    fn new_generates_non_nil_id() {
        let author = Author::new("Ada").expect("valid name should construct");
        assert!(!author.id().is_nil());
        assert_eq!(author.name(), "Ada");
    }

    #[test]
    fn rejects_empty_and_blank_names() {
        assert_eq!(
            Author::new("").expect_err("empty name must be rejected"),
            ValidationError::EmptyAuthorName
        );
        assert_eq!(
            Author::new("   ").expect_err("blank name must be rejected"),
            ValidationError::EmptyAuthorName
        );
    }

    #[test]
    fn with_id_rejects_nil_uuid() {
        let err = Author::with_id(Uuid::nil(), "Ada").expect_err("nil id must be rejected");
        assert_eq!(err, ValidationError::NilEntityId);
    }
}
