//! # Domain Layer
//!
//! Completion data model, consultation prompts, tool catalogue and errors.
//! This layer is independent of external frameworks and infrastructure.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
