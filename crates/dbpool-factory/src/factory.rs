//! The connection acquisition capability.

use std::fmt;

use crate::connection::Connection;
use crate::error::DriverError;

/// A strategy for creating new physical database connections.
///
/// The pool engine holds one of these and invokes it whenever a new physical
/// connection is needed. Implementations are constructed once per pool
/// configuration, are immutable afterwards, and must be safe to share across
/// concurrent callers.
///
/// The `Display` bound is part of the contract: the textual representation of
/// a configured factory must include its target identifier (connect URL or
/// data source name) so configuration can be asserted without inspecting
/// internals.
pub trait ConnectionFactory: Send + Sync + fmt::Display {
    /// Create exactly one new physical connection, right now.
    ///
    /// No retry, no backoff, no caching; blocking behavior and timeouts
    /// belong to the underlying endpoint's configuration. Any failure from
    /// the endpoint propagates unmodified.
    fn create_connection(&self) -> Result<Box<dyn Connection>, DriverError>;
}
