//! # dbpool-testing
//!
//! Test infrastructure for connection-pool development.
//!
//! This crate provides what the acquisition-strategy tests need without a
//! real database:
//!
//! - A process-wide, lock-guarded [`MessageLog`] for asserting the relative
//!   order of operations performed by concurrent threads
//! - Mock driver, data source, and connection implementations that record
//!   the credentials observed at connect time
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dbpool_factory::{ConnectionFactory, DriverConnectionFactory, Properties};
//! use dbpool_testing::MockDriver;
//!
//! let driver = Arc::new(MockDriver::new());
//! let factory = DriverConnectionFactory::new(driver.clone(), "mock:primary", Properties::new())
//!     .user("app_rw");
//!
//! factory.create_connection().unwrap();
//! assert_eq!(driver.last_attempt().unwrap().properties.get("user"), Some("app_rw"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod message_log;
pub mod mock;

pub use message_log::{MessageLog, MessageLogGuard};
pub use mock::{DriverAttempt, MockConnection, MockDataSource, MockDriver, SourceAttempt};
