//! Core domain logic for the pressroom publishing model.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::ValidationError;
pub use repo::press_registry::{
    InMemoryPressRegistry, PressRegistry, RegistryError, RegistryResult,
};
pub use service::press_service::{PressService, CONTRIBUTING_AUTHOR_THRESHOLD};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
