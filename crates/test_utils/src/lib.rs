//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! FNOL routing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim records, including the reference scenarios
//! - `builders`: Builder for claim records with sensible defaults
//! - `assertions`: Assertion helpers for routing and validation outcomes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
