//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into the publishing query/operation surface.
//! - Keep callers decoupled from registry backend details.

pub mod press_service;
