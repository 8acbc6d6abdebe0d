//! Error types for digest operations.

use thiserror::Error;

/// Errors surfaced while feeding input to the digest engine.
///
/// The hash arithmetic itself cannot fail; every error here originates from
/// the surrounding I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// The input source could not be opened or a read failed mid-stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for digest operations.
pub type Result<T> = std::result::Result<T, Error>;
