//! Press registry contract and in-memory backend.
//!
//! # Responsibility
//! - Hold every author, magazine and article of one publishing domain.
//! - Guard reference integrity: an article is only accepted when both of its
//!   referenced entities are already registered.
//!
//! # Invariants
//! - Listings preserve creation order; articles preserve publication order.
//! - The registry is append-only: entities are never removed.
//! - A rejected write leaves the registry unchanged.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry write/lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Model-level shape constraint violation.
    Validation(ValidationError),
    /// Article referenced an author id that is not registered.
    AuthorNotFound(AuthorId),
    /// Article or mutation referenced a magazine id that is not registered.
    MagazineNotFound(MagazineId),
    /// Author id already registered.
    DuplicateAuthor(AuthorId),
    /// Magazine id already registered.
    DuplicateMagazine(MagazineId),
    /// Article id already published.
    DuplicateArticle(ArticleId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::DuplicateAuthor(id) => write!(f, "author already registered: {id}"),
            Self::DuplicateMagazine(id) => write!(f, "magazine already registered: {id}"),
            Self::DuplicateArticle(id) => write!(f, "article already published: {id}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RegistryError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage contract for one publishing domain.
///
/// The registry owns its entities; callers refer to them by stable id and
/// read them back as borrowed records. Backends must keep `authors()`,
/// `magazines()` and `articles()` in creation/publication order, since the
/// query layer derives its deterministic ordering rules from those slices.
pub trait PressRegistry {
    /// Registers one author, rejecting duplicate ids.
    fn register_author(&mut self, author: Author) -> RegistryResult<AuthorId>;

    /// Registers one magazine, rejecting duplicate ids.
    fn register_magazine(&mut self, magazine: Magazine) -> RegistryResult<MagazineId>;

    /// Appends one article after verifying both of its references resolve.
    ///
    /// This is the only operation that establishes an author-magazine
    /// association.
    fn publish_article(&mut self, article: Article) -> RegistryResult<ArticleId>;

    /// Returns one author by id.
    fn author(&self, id: AuthorId) -> Option<&Author>;

    /// Returns one magazine by id.
    fn magazine(&self, id: MagazineId) -> Option<&Magazine>;

    /// Returns one article by id.
    fn article(&self, id: ArticleId) -> Option<&Article>;

    /// All authors in registration order.
    fn authors(&self) -> &[Author];

    /// All magazines in registration order.
    fn magazines(&self) -> &[Magazine];

    /// All articles in publication order.
    fn articles(&self) -> &[Article];

    /// Renames one magazine through its validating mutator.
    fn rename_magazine(&mut self, id: MagazineId, name: &str) -> RegistryResult<()>;

    /// Recategorizes one magazine through its validating mutator.
    fn recategorize_magazine(&mut self, id: MagazineId, category: &str) -> RegistryResult<()>;

    fn article_count(&self) -> usize {
        self.articles().len()
    }

    fn is_empty(&self) -> bool {
        self.articles().is_empty() && self.authors().is_empty() && self.magazines().is_empty()
    }
}

/// Vec-backed registry for single-process, in-memory use.
///
/// Linear scans are deliberate: domain volumes are small and the vectors
/// double as the creation-order record the query layer depends on.
#[derive(Debug, Default)]
pub struct InMemoryPressRegistry {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl InMemoryPressRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.iter_mut().find(|m| m.id() == id)
    }
}

impl PressRegistry for InMemoryPressRegistry {
    fn register_author(&mut self, author: Author) -> RegistryResult<AuthorId> {
        let id = author.id();
        if self.author(id).is_some() {
            return Err(RegistryError::DuplicateAuthor(id));
        }
        self.authors.push(author);
        Ok(id)
    }

    fn register_magazine(&mut self, magazine: Magazine) -> RegistryResult<MagazineId> {
        let id = magazine.id();
        if self.magazine(id).is_some() {
            return Err(RegistryError::DuplicateMagazine(id));
        }
        self.magazines.push(magazine);
        Ok(id)
    }

    fn publish_article(&mut self, article: Article) -> RegistryResult<ArticleId> {
        if self.author(article.author_id()).is_none() {
            return Err(RegistryError::AuthorNotFound(article.author_id()));
        }
        if self.magazine(article.magazine_id()).is_none() {
            return Err(RegistryError::MagazineNotFound(article.magazine_id()));
        }
        let id = article.id();
        if self.article(id).is_some() {
            return Err(RegistryError::DuplicateArticle(id));
        }
        self.articles.push(article);
        Ok(id)
    }

    fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|a| a.id() == id)
    }

    fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|m| m.id() == id)
    }

    fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id() == id)
    }

    fn authors(&self) -> &[Author] {
        &self.authors
    }

    fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn rename_magazine(&mut self, id: MagazineId, name: &str) -> RegistryResult<()> {
        let magazine = self
            .magazine_mut(id)
            .ok_or(RegistryError::MagazineNotFound(id))?;
        magazine.rename(name)?;
        Ok(())
    }

    fn recategorize_magazine(&mut self, id: MagazineId, category: &str) -> RegistryResult<()> {
        let magazine = self
            .magazine_mut(id)
            .ok_or(RegistryError::MagazineNotFound(id))?;
        magazine.recategorize(category)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryPressRegistry, PressRegistry, RegistryError};
    use crate::model::article::Article;
    use crate::model::author::Author;
    use crate::model::magazine::Magazine;
    use crate::model::ValidationError;
    use uuid::Uuid;

    fn seeded_registry() -> (InMemoryPressRegistry, Uuid, Uuid) {
        let mut registry = InMemoryPressRegistry::new();
        let author_id = registry
            .register_author(Author::new("Ada").expect("valid author"))
            .expect("author should register");
        let magazine_id = registry
            .register_magazine(Magazine::new("Tech Weekly", "Technology").expect("valid magazine"))
            .expect("magazine should register");
        (registry, author_id, magazine_id)
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = InMemoryPressRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.article_count(), 0);
    }

    #[test]
    fn publish_requires_registered_author_and_magazine() {
        let (mut registry, author_id, magazine_id) = seeded_registry();

        let unknown = Uuid::new_v4();
        let orphan_author = Article::new(unknown, magazine_id, "Valid title").expect("valid shape");
        let err = registry
            .publish_article(orphan_author)
            .expect_err("unknown author must be rejected");
        assert_eq!(err, RegistryError::AuthorNotFound(unknown));
        assert_eq!(registry.article_count(), 0);

        let orphan_magazine = Article::new(author_id, unknown, "Valid title").expect("valid shape");
        let err = registry
            .publish_article(orphan_magazine)
            .expect_err("unknown magazine must be rejected");
        assert_eq!(err, RegistryError::MagazineNotFound(unknown));
        assert_eq!(registry.article_count(), 0);
    }

    #[test]
    fn publish_appends_in_publication_order() {
        let (mut registry, author_id, magazine_id) = seeded_registry();

        let first = Article::new(author_id, magazine_id, "The Future of AI").expect("valid");
        let second = Article::new(author_id, magazine_id, "Exploring Robotics").expect("valid");
        let first_id = registry.publish_article(first).expect("first publish");
        let second_id = registry.publish_article(second).expect("second publish");

        let titles: Vec<&str> = registry.articles().iter().map(|a| a.title()).collect();
        assert_eq!(titles, vec!["The Future of AI", "Exploring Robotics"]);
        assert_eq!(registry.articles()[0].id(), first_id);
        assert_eq!(registry.articles()[1].id(), second_id);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let (mut registry, author_id, magazine_id) = seeded_registry();

        let same_author = Author::with_id(author_id, "Impostor").expect("valid shape");
        assert!(matches!(
            registry.register_author(same_author),
            Err(RegistryError::DuplicateAuthor(id)) if id == author_id
        ));

        let same_magazine =
            Magazine::with_id(magazine_id, "Copycat", "Technology").expect("valid shape");
        assert!(matches!(
            registry.register_magazine(same_magazine),
            Err(RegistryError::DuplicateMagazine(id)) if id == magazine_id
        ));

        let article = Article::new(author_id, magazine_id, "First headline").expect("valid");
        let article_id = registry.publish_article(article).expect("first publish");
        let replay = Article::with_id(article_id, author_id, magazine_id, "Replayed title")
            .expect("valid shape");
        assert!(matches!(
            registry.publish_article(replay),
            Err(RegistryError::DuplicateArticle(id)) if id == article_id
        ));
        assert_eq!(registry.article_count(), 1);
    }

    #[test]
    fn rename_and_recategorize_resolve_and_validate() {
        let (mut registry, _, magazine_id) = seeded_registry();

        registry
            .rename_magazine(magazine_id, "Tech Monthly")
            .expect("in-bound rename should succeed");
        assert_eq!(
            registry.magazine(magazine_id).expect("magazine exists").name(),
            "Tech Monthly"
        );

        let err = registry
            .rename_magazine(magazine_id, "T")
            .expect_err("undersized rename must be rejected");
        assert_eq!(
            err,
            RegistryError::Validation(ValidationError::MagazineNameLength { length: 1 })
        );

        let missing = Uuid::new_v4();
        let err = registry
            .rename_magazine(missing, "Whatever")
            .expect_err("unknown magazine must be rejected");
        assert_eq!(err, RegistryError::MagazineNotFound(missing));

        registry
            .recategorize_magazine(magazine_id, "Science")
            .expect("valid category should be accepted");
        assert_eq!(
            registry
                .magazine(magazine_id)
                .expect("magazine exists")
                .category(),
            "Science"
        );
    }
}
