//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Unrecognized claim status: {0}")]
    UnknownStatus(String),
}
