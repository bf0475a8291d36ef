//! Magazine domain model.
//!
//! # Responsibility
//! - Define the publication anchor articles are filed under.
//! - Keep name/category mutation behind validating methods.
//!
//! # Invariants
//! - `id` is stable and never reused for another magazine.
//! - `name` and `category` are never empty.
//! - `rename` additionally enforces the editorial name bound; creation does
//!   not, so externally sourced titles longer than the bound stay legal.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// Publication anchor for articles, labeled with an editorial category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MagazineWire")]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Lower bound for renamed magazine names, in chars.
    pub const NAME_MIN_CHARS: usize = 2;
    /// Upper bound for renamed magazine names, in chars.
    pub const NAME_MAX_CHARS: usize = 16;

    /// Creates a magazine with a generated stable id.
    ///
    /// # Errors
    /// - `EmptyMagazineName` when `name` is empty after trimming.
    /// - `EmptyMagazineCategory` when `category` is empty after trimming.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided stable id.
    ///
    /// # Errors
    /// - `NilEntityId` when `id` is the nil uuid.
    /// - `EmptyMagazineName` / `EmptyMagazineCategory` on blank fields.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NilEntityId);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyMagazineName);
        }
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ValidationError::EmptyMagazineCategory);
        }
        Ok(Self { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the magazine name.
    ///
    /// # Contract
    /// - The new name must be `NAME_MIN_CHARS..=NAME_MAX_CHARS` chars long.
    /// - On error the current name is left unchanged.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        let length = name.chars().count();
        if !(Self::NAME_MIN_CHARS..=Self::NAME_MAX_CHARS).contains(&length) {
            return Err(ValidationError::MagazineNameLength { length });
        }
        self.name = name;
        Ok(())
    }

    /// Replaces the editorial category.
    ///
    /// # Contract
    /// - The new category must be non-empty after trimming.
    /// - On error the current category is left unchanged.
    pub fn recategorize(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ValidationError::EmptyMagazineCategory);
        }
        self.category = category;
        Ok(())
    }
}

#[derive(Deserialize)]
struct MagazineWire {
    id: MagazineId,
    name: String,
    category: String,
}

impl TryFrom<MagazineWire> for Magazine {
    type Error = ValidationError;

    fn try_from(wire: MagazineWire) -> Result<Self, Self::Error> {
        Self::with_id(wire.id, wire.name, wire.category)
    }
}

#[cfg(test)]
mod tests {
    use super::Magazine;
    use crate::model::ValidationError;

    #[test]
    fn new_keeps_name_and_category() {
        let magazine =
            Magazine::new("Tech Weekly", "Technology").expect("valid fields should construct");
        assert_eq!(magazine.name(), "Tech Weekly");
        assert_eq!(magazine.category(), "Technology");
    }

    #[test]
    fn creation_accepts_names_longer_than_rename_bound() {
        let magazine = Magazine::new("Health & Wellness", "Health")
            .expect("creation does not apply the rename bound");
        assert_eq!(magazine.name(), "Health & Wellness");
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            Magazine::new(" ", "Health").expect_err("blank name must be rejected"),
            ValidationError::EmptyMagazineName
        );
        assert_eq!(
            Magazine::new("Pulse", "").expect_err("blank category must be rejected"),
            ValidationError::EmptyMagazineCategory
        );
    }

    #[test]
    fn rename_enforces_editorial_bound() {
        let mut magazine = Magazine::new("Pulse", "Health").expect("valid magazine");

        let too_short = magazine.rename("P").expect_err("one char name must be rejected");
        assert_eq!(too_short, ValidationError::MagazineNameLength { length: 1 });
        assert_eq!(magazine.name(), "Pulse");

        let too_long = magazine
            .rename("An Unreasonably Long Name")
            .expect_err("oversized name must be rejected");
        assert!(matches!(
            too_long,
            ValidationError::MagazineNameLength { length: 25 }
        ));

        magazine.rename("Pulse Monthly").expect("in-bound rename should succeed");
        assert_eq!(magazine.name(), "Pulse Monthly");
    }

    #[test]
    fn recategorize_rejects_blank_category() {
        let mut magazine = Magazine::new("Pulse", "Health").expect("valid magazine");
        let err = magazine
            .recategorize("  ")
            .expect_err("blank category must be rejected");
        assert_eq!(err, ValidationError::EmptyMagazineCategory);
        assert_eq!(magazine.category(), "Health");

        magazine
            .recategorize("Lifestyle")
            .expect("non-empty category should be accepted");
        assert_eq!(magazine.category(), "Lifestyle");
    }
}
