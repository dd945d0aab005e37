//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the fraud auditor test suite.
//!
//! # Modules
//!
//! - `database`: in-memory SQLite pool helpers
//! - `builders`: builder pattern for test claims
//! - `fixtures`: canned CSV content for ingestion tests

pub mod database;
pub mod builders;
pub mod fixtures;

pub use database::*;
pub use builders::*;
pub use fixtures::*;
