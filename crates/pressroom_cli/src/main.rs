//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pressroom_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use pressroom_core::{InMemoryPressRegistry, PressRegistry};

fn main() {
    let registry = InMemoryPressRegistry::new();
    println!("pressroom_core version={}", pressroom_core::core_version());
    println!("pressroom_core articles={}", registry.article_count());
}
