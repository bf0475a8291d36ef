//! Publishing use-case service.
//!
//! # Responsibility
//! - Provide enrollment/publication entry points over one registry.
//! - Compute every derived relationship query (author-side, magazine-side,
//!   registry-wide).
//!
//! # Invariants
//! - Queries never mutate; failed operations leave the registry unchanged.
//! - Deduplicating queries return first-contribution order.
//! - Entities with zero articles yield empty results, never errors.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::press_registry::{PressRegistry, RegistryError, RegistryResult};
use log::debug;
use std::collections::{HashMap, HashSet};

/// An author becomes a contributing author of a magazine with strictly more
/// than this many articles in it.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Use-case facade over a press registry backend.
pub struct PressService<R: PressRegistry> {
    registry: R,
}

impl<R: PressRegistry> PressService<R> {
    /// Creates a service using the provided registry backend.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Consumes the service, returning the registry.
    pub fn into_registry(self) -> R {
        self.registry
    }

    /// Registers a new author by name.
    ///
    /// # Contract
    /// - Validates the name through the model constructor.
    /// - Returns the new stable author id.
    pub fn enroll_author(&mut self, name: impl Into<String>) -> RegistryResult<AuthorId> {
        let author = Author::new(name)?;
        let id = self.registry.register_author(author)?;
        debug!("event=author_enrolled module=core author={id}");
        Ok(id)
    }

    /// Registers a new magazine by name and category.
    ///
    /// # Contract
    /// - Validates both fields through the model constructor.
    /// - Returns the new stable magazine id.
    pub fn launch_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RegistryResult<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        let id = self.registry.register_magazine(magazine)?;
        debug!("event=magazine_launched module=core magazine={id}");
        Ok(id)
    }

    /// Publishes a new article by an author in a magazine.
    ///
    /// # Contract
    /// - Validates the title through the model constructor.
    /// - Both referenced entities must already be registered.
    /// - On any failure nothing is recorded.
    pub fn add_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RegistryResult<ArticleId> {
        let article = Article::new(author_id, magazine_id, title)?;
        let id = self.registry.publish_article(article)?;
        debug!(
            "event=article_published module=core article={id} author={author_id} \
             magazine={magazine_id} total={}",
            self.registry.article_count()
        );
        Ok(id)
    }

    /// Articles written by one author, in publication order.
    pub fn author_articles(&self, author_id: AuthorId) -> RegistryResult<Vec<&Article>> {
        self.require_author(author_id)?;
        Ok(self
            .registry
            .articles()
            .iter()
            .filter(|article| article.author_id() == author_id)
            .collect())
    }

    /// Distinct magazines one author has written for.
    ///
    /// Ordered by the author's first contribution to each magazine.
    pub fn author_magazines(&self, author_id: AuthorId) -> RegistryResult<Vec<&Magazine>> {
        let articles = self.author_articles(author_id)?;
        let mut seen = HashSet::new();
        let magazines = articles
            .iter()
            .filter(|article| seen.insert(article.magazine_id()))
            // Publication guarantees the reference resolves.
            .filter_map(|article| self.registry.magazine(article.magazine_id()))
            .collect();
        Ok(magazines)
    }

    /// Distinct categories one author has written under.
    ///
    /// Ordered like `author_magazines`; empty when the author has no
    /// articles.
    pub fn topic_areas(&self, author_id: AuthorId) -> RegistryResult<Vec<&str>> {
        let magazines = self.author_magazines(author_id)?;
        let mut seen = HashSet::new();
        let categories = magazines
            .iter()
            .map(|magazine| magazine.category())
            .filter(|category| seen.insert(*category))
            .collect();
        Ok(categories)
    }

    /// Articles published in one magazine, in publication order.
    pub fn magazine_articles(&self, magazine_id: MagazineId) -> RegistryResult<Vec<&Article>> {
        self.require_magazine(magazine_id)?;
        Ok(self
            .registry
            .articles()
            .iter()
            .filter(|article| article.magazine_id() == magazine_id)
            .collect())
    }

    /// Distinct authors who have written for one magazine.
    ///
    /// Ordered by each author's first contribution to the magazine.
    pub fn contributors(&self, magazine_id: MagazineId) -> RegistryResult<Vec<&Author>> {
        let articles = self.magazine_articles(magazine_id)?;
        let mut seen = HashSet::new();
        let authors = articles
            .iter()
            .filter(|article| seen.insert(article.author_id()))
            // Publication guarantees the reference resolves.
            .filter_map(|article| self.registry.author(article.author_id()))
            .collect();
        Ok(authors)
    }

    /// Titles of one magazine's articles, in publication order.
    pub fn article_titles(&self, magazine_id: MagazineId) -> RegistryResult<Vec<&str>> {
        let articles = self.magazine_articles(magazine_id)?;
        Ok(articles.iter().map(|article| article.title()).collect())
    }

    /// Authors with strictly more than `CONTRIBUTING_AUTHOR_THRESHOLD`
    /// articles in one magazine.
    ///
    /// Ordered by each author's first contribution; empty when nobody
    /// qualifies.
    pub fn contributing_authors(&self, magazine_id: MagazineId) -> RegistryResult<Vec<&Author>> {
        let articles = self.magazine_articles(magazine_id)?;
        let mut first_seen: Vec<AuthorId> = Vec::new();
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in &articles {
            let count = counts.entry(article.author_id()).or_insert(0);
            if *count == 0 {
                first_seen.push(article.author_id());
            }
            *count += 1;
        }

        let qualified = first_seen
            .into_iter()
            .filter(|author_id| counts[author_id] > CONTRIBUTING_AUTHOR_THRESHOLD)
            // Publication guarantees the reference resolves.
            .filter_map(|author_id| self.registry.author(author_id))
            .collect();
        Ok(qualified)
    }

    /// The magazine with the most published articles.
    ///
    /// # Contract
    /// - Returns `None` when the registry holds no articles.
    /// - Ties are broken in favor of the earliest-registered magazine.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let articles = self.registry.articles();
        if articles.is_empty() {
            return None;
        }

        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in self.registry.magazines() {
            let count = articles
                .iter()
                .filter(|article| article.magazine_id() == magazine.id())
                .count();
            // Strict comparison keeps the earliest magazine on ties.
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((magazine, count));
            }
        }
        best.map(|(magazine, _)| magazine)
    }

    /// Renames one magazine.
    pub fn rename_magazine(&mut self, magazine_id: MagazineId, name: &str) -> RegistryResult<()> {
        self.registry.rename_magazine(magazine_id, name)?;
        debug!("event=magazine_renamed module=core magazine={magazine_id}");
        Ok(())
    }

    /// Recategorizes one magazine.
    pub fn recategorize_magazine(
        &mut self,
        magazine_id: MagazineId,
        category: &str,
    ) -> RegistryResult<()> {
        self.registry.recategorize_magazine(magazine_id, category)?;
        debug!("event=magazine_recategorized module=core magazine={magazine_id}");
        Ok(())
    }

    fn require_author(&self, id: AuthorId) -> RegistryResult<&Author> {
        self.registry.author(id).ok_or(RegistryError::AuthorNotFound(id))
    }

    fn require_magazine(&self, id: MagazineId) -> RegistryResult<&Magazine> {
        self.registry
            .magazine(id)
            .ok_or(RegistryError::MagazineNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::PressService;
    use crate::repo::press_registry::{InMemoryPressRegistry, PressRegistry, RegistryError};
    use uuid::Uuid;

    fn service() -> PressService<InMemoryPressRegistry> {
        PressService::new(InMemoryPressRegistry::new())
    }

    #[test]
    fn queries_reject_unknown_ids() {
        let press = service();
        let unknown = Uuid::new_v4();

        assert_eq!(
            press.author_articles(unknown).expect_err("unknown author"),
            RegistryError::AuthorNotFound(unknown)
        );
        assert_eq!(
            press.article_titles(unknown).expect_err("unknown magazine"),
            RegistryError::MagazineNotFound(unknown)
        );
    }

    #[test]
    fn zero_article_entities_yield_empty_results() {
        let mut press = service();
        let author_id = press.enroll_author("Ada").expect("author enrolls");
        let magazine_id = press
            .launch_magazine("Tech Weekly", "Technology")
            .expect("magazine launches");

        assert!(press.author_articles(author_id).expect("query runs").is_empty());
        assert!(press.author_magazines(author_id).expect("query runs").is_empty());
        assert!(press.topic_areas(author_id).expect("query runs").is_empty());
        assert!(press.magazine_articles(magazine_id).expect("query runs").is_empty());
        assert!(press.contributors(magazine_id).expect("query runs").is_empty());
        assert!(press.article_titles(magazine_id).expect("query runs").is_empty());
        assert!(press
            .contributing_authors(magazine_id)
            .expect("query runs")
            .is_empty());
        assert!(press.top_publisher().is_none());
    }

    #[test]
    fn add_article_requires_registered_references() {
        let mut press = service();
        let author_id = press.enroll_author("Ada").expect("author enrolls");
        let unknown = Uuid::new_v4();

        let err = press
            .add_article(author_id, unknown, "A valid title")
            .expect_err("unknown magazine must be rejected");
        assert_eq!(err, RegistryError::MagazineNotFound(unknown));
        assert_eq!(press.registry().article_count(), 0);
    }
}
