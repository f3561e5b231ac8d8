//! # dbpool-factory
//!
//! Connection acquisition strategies for database connection pools.
//!
//! A pool engine needs a way to turn configuration plus a credential pair
//! into one live physical connection, without caring whether the other end
//! is a raw driver or a pre-configured data source. This crate provides
//! that boundary:
//!
//! - [`ConnectionFactory`] — the acquisition capability the pool engine holds
//! - [`DriverConnectionFactory`] — acquisition through a low-level [`Driver`]
//! - [`DataSourceConnectionFactory`] — acquisition through a [`DataSource`]
//! - [`AggregateError`] / [`DriverErrorList`] — batched failure reporting for
//!   operations that must attempt many independent sub-operations (such as
//!   closing every pooled connection during shutdown) without discarding any
//!   individual error
//!
//! The pool engine itself (borrow/return, eviction, validation scheduling)
//! lives elsewhere and calls in only through these contracts.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dbpool_factory::{ConnectionFactory, DriverConnectionFactory, Properties};
//!
//! let mut props = Properties::new();
//! props.set("application_name", "pool-demo");
//!
//! let factory = DriverConnectionFactory::new(driver, "db://db-1.internal:5432/app", props)
//!     .user("app_rw")
//!     .password("s3cret");
//!
//! let conn = factory.create_connection()?;
//! // Connection is owned by the caller; the factory keeps no reference.
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod aggregate;
pub mod connection;
pub mod datasource;
pub mod driver;
pub mod error;
pub mod factory;

pub use aggregate::{AggregateError, BoxedCause, DriverErrorList};
pub use connection::{Connection, PROP_PASSWORD, PROP_USER, Properties};
pub use datasource::{DataSource, DataSourceConnectionFactory};
pub use driver::{Driver, DriverConnectionFactory};
pub use error::DriverError;
pub use factory::ConnectionFactory;
