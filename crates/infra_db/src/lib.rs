//! Infrastructure Database Layer
//!
//! This crate provides database access for the fraud auditor on SQLite using
//! SQLx. It follows the repository pattern: handlers and the ingestion
//! pipeline receive an explicitly constructed pool and go through
//! [`ClaimsRepository`] for every operation, with a connection acquired per
//! operation and the full-replace load wrapped in a single transaction.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool_from_url, init_schema, ClaimsRepository};
//!
//! let pool = create_pool_from_url("sqlite:claims.db").await?;
//! init_schema(&pool).await?;
//! let repo = ClaimsRepository::new(pool);
//! ```

pub mod pool;
pub mod schema;
pub mod error;
pub mod repositories;

pub use pool::{DatabasePool, DatabaseConfig, create_pool, create_pool_from_url};
pub use schema::init_schema;
pub use error::DatabaseError;
pub use repositories::claims::{
    ClaimFilter, ClaimRecord, ClaimStats, ClaimsRepository, ScoreDistribution, DEFAULT_PAGE_SIZE,
};
