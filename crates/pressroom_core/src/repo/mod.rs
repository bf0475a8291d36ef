//! Registry layer contracts and in-memory implementation.
//!
//! # Responsibility
//! - Define the storage contract every press registry backend satisfies.
//! - Keep entity bookkeeping (creation order, reference integrity) behind
//!   one boundary.
//!
//! # Invariants
//! - Write paths validate before mutating; a failed write leaves the
//!   registry unchanged.
//! - Registry APIs return semantic errors (`*NotFound`, `Duplicate*`) in
//!   addition to wrapped model validation errors.

pub mod press_registry;
