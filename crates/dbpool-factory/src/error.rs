//! Driver error types.

use thiserror::Error;

/// Errors raised by a driver or data source while establishing a connection.
///
/// Acquisition strategies propagate these unmodified. Translating them into
/// pool-level semantics (retry, backoff, eviction) is the pool engine's job,
/// not this crate's.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DriverError {
    /// The endpoint rejected the supplied credentials.
    #[error("authentication rejected: {0}")]
    AuthenticationRejected(String),

    /// The endpoint could not be reached.
    #[error("endpoint unreachable: {0}")]
    Unreachable(String),

    /// The driver did not understand the connect URL.
    #[error("malformed connect URL: {0}")]
    MalformedUrl(String),

    /// The connection has already been closed.
    #[error("connection is closed")]
    Closed,

    /// Any other failure reported by the endpoint.
    #[error("connection failed: {0}")]
    Other(String),
}
