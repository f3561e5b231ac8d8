//! Mock endpoints for acquisition-strategy tests.
//!
//! The mocks record what they observed at connect time so tests can assert
//! exactly which credentials a strategy sent, without a database instance.

use parking_lot::Mutex;

use dbpool_factory::{Connection, DataSource, Driver, DriverError, Properties};

/// One observed [`Driver::connect`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverAttempt {
    /// URL passed to the driver.
    pub url: String,
    /// The exact property set the driver saw.
    pub properties: Properties,
}

/// One observed [`DataSource`] acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAttempt {
    /// User supplied to `connect_as`, or `None` when the default path was
    /// taken.
    pub user: Option<String>,
    /// Password bytes supplied to `connect_as`; `None` when unset, which is
    /// distinct from `Some(vec![])`.
    pub password: Option<Vec<u8>>,
}

/// A driver that records every connect attempt.
///
/// By default every attempt succeeds with a fresh [`MockConnection`];
/// [`fail_with`](Self::fail_with) scripts a failure instead. Only URLs with
/// the `mock:` scheme are accepted.
#[derive(Default)]
pub struct MockDriver {
    attempts: Mutex<Vec<DriverAttempt>>,
    fail_with: Mutex<Option<DriverError>>,
}

impl MockDriver {
    /// Create a driver that accepts every connect attempt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent connect attempt fail with `error`.
    pub fn fail_with(&self, error: DriverError) {
        *self.fail_with.lock() = Some(error);
    }

    /// Every connect attempt observed so far, in order.
    #[must_use]
    pub fn attempts(&self) -> Vec<DriverAttempt> {
        self.attempts.lock().clone()
    }

    /// The most recent connect attempt.
    #[must_use]
    pub fn last_attempt(&self) -> Option<DriverAttempt> {
        self.attempts.lock().last().cloned()
    }
}

impl Driver for MockDriver {
    fn connect(
        &self,
        url: &str,
        properties: &Properties,
    ) -> Result<Box<dyn Connection>, DriverError> {
        if !self.accepts_url(url) {
            return Err(DriverError::MalformedUrl(url.to_owned()));
        }
        self.attempts.lock().push(DriverAttempt {
            url: url.to_owned(),
            properties: properties.clone(),
        });
        if let Some(error) = self.fail_with.lock().clone() {
            return Err(error);
        }
        Ok(Box::new(MockConnection::new()))
    }

    fn accepts_url(&self, url: &str) -> bool {
        url.starts_with("mock:")
    }
}

/// A data source that records every acquisition.
pub struct MockDataSource {
    name: String,
    attempts: Mutex<Vec<SourceAttempt>>,
    fail_with: Mutex<Option<DriverError>>,
}

impl MockDataSource {
    /// Create a data source with the given identity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attempts: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    /// Make every subsequent acquisition fail with `error`.
    pub fn fail_with(&self, error: DriverError) {
        *self.fail_with.lock() = Some(error);
    }

    /// Every acquisition observed so far, in order.
    #[must_use]
    pub fn attempts(&self) -> Vec<SourceAttempt> {
        self.attempts.lock().clone()
    }

    /// The most recent acquisition.
    #[must_use]
    pub fn last_attempt(&self) -> Option<SourceAttempt> {
        self.attempts.lock().last().cloned()
    }

    fn finish(&self) -> Result<Box<dyn Connection>, DriverError> {
        if let Some(error) = self.fail_with.lock().clone() {
            return Err(error);
        }
        Ok(Box::new(MockConnection::new()))
    }
}

impl DataSource for MockDataSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn connect(&self) -> Result<Box<dyn Connection>, DriverError> {
        self.attempts.lock().push(SourceAttempt {
            user: None,
            password: None,
        });
        self.finish()
    }

    fn connect_as(
        &self,
        user: &str,
        password: Option<&[u8]>,
    ) -> Result<Box<dyn Connection>, DriverError> {
        self.attempts.lock().push(SourceAttempt {
            user: Some(user.to_owned()),
            password: password.map(<[u8]>::to_vec),
        });
        self.finish()
    }
}

/// A connection whose close behavior is scripted.
#[derive(Debug, Default)]
pub struct MockConnection {
    closed: bool,
    fail_on_close: Option<DriverError>,
}

impl MockConnection {
    /// Create an open connection that closes cleanly.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a connection whose first `close` fails with `error`.
    #[must_use]
    pub fn failing_close(error: DriverError) -> Self {
        Self {
            closed: false,
            fail_on_close: Some(error),
        }
    }

    /// Whether `close` has completed successfully.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Connection for MockConnection {
    fn close(&mut self) -> Result<(), DriverError> {
        if self.closed {
            return Err(DriverError::Closed);
        }
        if let Some(error) = self.fail_on_close.take() {
            return Err(error);
        }
        self.closed = true;
        Ok(())
    }

    fn is_valid(&self) -> bool {
        !self.closed
    }
}
