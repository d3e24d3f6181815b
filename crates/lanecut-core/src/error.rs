//! Error types for LaneCut.

use thiserror::Error;

/// Main error type for LaneCut operations.
///
/// Nearly everything in the engine is total: operations on unknown ids are
/// no-ops and out-of-range values saturate. Media-duration parsing is the
/// one place a caller can hand us something unusable.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid media duration: {0}")]
    InvalidDuration(String),
}

/// Result type alias for LaneCut operations.
pub type Result<T> = std::result::Result<T, Error>;
