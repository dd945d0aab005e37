//! Claims Domain
//!
//! This crate implements the claim entity for the fraud auditor, the review
//! status lifecycle, and the per-batch fraud scoring heuristic.
//!
//! # Review Lifecycle
//!
//! ```text
//! New -> Under Review -> Closed
//! ```
//!
//! Claims are created in bulk by the ingestion pipeline; only `status` is
//! mutable afterwards, via the review workflow.

pub mod claim;
pub mod scoring;
pub mod error;

pub use claim::{Claim, ClaimStatus, sequence_claim_id};
pub use scoring::{normalize_amount, score_batch, FLAG_THRESHOLD, MAX_SCORE};
pub use error::ClaimError;
