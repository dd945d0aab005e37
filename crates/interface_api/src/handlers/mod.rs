//! Request handlers

pub mod claims;
pub mod health;
pub mod ingest;
pub mod stats;
