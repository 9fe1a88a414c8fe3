//! # Padron Domain
//!
//! Domain types and models for the empadronamiento portal.
//!
//! This crate contains:
//! - Validated value types for the daily-report pipeline (station numbers,
//!   counters, transaction digits)
//! - Wire records exchanged with the remote portal API
//! - Session and user types
//! - The shared error type and `Result` alias
//!
//! ## Architecture
//! - No dependencies on other padron crates
//! - Only external dependencies allowed
//! - Pure data, no I/O

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
