//! Database-agnostic domain for the Hacks Anuais goal tracker.
//!
//! This crate owns the goal data model, the goal store service, the pure
//! progress calculator, and the snapshot envelope used for persistence.
//! Storage backends implement the repository traits defined here.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod progress;

pub use errors::{Error, Result};
