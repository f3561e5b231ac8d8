//! Driver-backed connection acquisition.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::connection::{Connection, PROP_PASSWORD, PROP_USER, Properties};
use crate::error::DriverError;
use crate::factory::ConnectionFactory;

/// A low-level database driver endpoint.
///
/// The single capability acquisition strategies depend on: turn a connect URL
/// and a property set into one live connection. Blocking behavior and
/// timeouts belong to the driver's own configuration, not to this interface.
pub trait Driver: Send + Sync {
    /// Open one physical connection to `url`.
    ///
    /// Credentials, when supplied, arrive under the [`PROP_USER`] and
    /// [`PROP_PASSWORD`] property keys.
    fn connect(
        &self,
        url: &str,
        properties: &Properties,
    ) -> Result<Box<dyn Connection>, DriverError>;

    /// Check whether this driver understands the given URL.
    fn accepts_url(&self, url: &str) -> bool {
        let _ = url;
        true
    }
}

/// Creates connections through a [`Driver`], optionally overriding the
/// configured credentials.
///
/// The property map is shared and read at call time, so configuration applied
/// after construction is observed by later acquisitions. An override user,
/// when set, takes precedence over any `user` entry in the properties. An
/// absent override password leaves the configured `password` entry untouched;
/// absent is never replaced with an empty string.
pub struct DriverConnectionFactory {
    driver: Arc<dyn Driver>,
    url: String,
    properties: Arc<Mutex<Properties>>,
    user: Option<String>,
    password: Option<String>,
}

impl DriverConnectionFactory {
    /// Create a factory over a driver, connect URL, and property set.
    #[must_use]
    pub fn new(
        driver: Arc<impl Driver + 'static>,
        url: impl Into<String>,
        properties: Properties,
    ) -> Self {
        Self::with_shared_properties(driver, url, Arc::new(Mutex::new(properties)))
    }

    /// Create a factory over a property set shared with configuration code.
    ///
    /// Late configuration through the shared handle is picked up by
    /// subsequent [`create_connection`](ConnectionFactory::create_connection)
    /// calls.
    #[must_use]
    pub fn with_shared_properties(
        driver: Arc<impl Driver + 'static>,
        url: impl Into<String>,
        properties: Arc<Mutex<Properties>>,
    ) -> Self {
        let driver: Arc<dyn Driver> = driver;
        Self {
            driver,
            url: url.into(),
            properties,
            user: None,
            password: None,
        }
    }

    /// Set the user to connect as, overriding any configured `user` property.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the password used together with the override user.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// The connect URL this factory targets.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Handle to the shared property map.
    #[must_use]
    pub fn properties(&self) -> Arc<Mutex<Properties>> {
        Arc::clone(&self.properties)
    }
}

impl ConnectionFactory for DriverConnectionFactory {
    fn create_connection(&self) -> Result<Box<dyn Connection>, DriverError> {
        // Snapshot under the lock; the driver never sees the shared map.
        let properties = match &self.user {
            Some(user) => {
                let mut properties = self.properties.lock().clone();
                properties.set(PROP_USER, user.clone());
                if let Some(password) = &self.password {
                    properties.set(PROP_PASSWORD, password.clone());
                }
                properties
            }
            None => self.properties.lock().clone(),
        };

        tracing::debug!(url = %self.url, "creating connection via driver");
        self.driver.connect(&self.url, &properties)
    }
}

impl fmt::Display for DriverConnectionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DriverConnectionFactory [{}]", self.url)
    }
}

impl fmt::Debug for DriverConnectionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose sensitive data in debug output
        f.debug_struct("DriverConnectionFactory")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct NullDriver;

    impl Driver for NullDriver {
        fn connect(
            &self,
            _url: &str,
            _properties: &Properties,
        ) -> Result<Box<dyn Connection>, DriverError> {
            Err(DriverError::Unreachable("null driver".into()))
        }
    }

    #[test]
    fn test_display_includes_url() {
        let factory =
            DriverConnectionFactory::new(Arc::new(NullDriver), "db://db-1:5432/app", Properties::new());

        assert_eq!(factory.to_string(), "DriverConnectionFactory [db://db-1:5432/app]");
    }

    #[test]
    fn test_debug_redacts_password() {
        let factory =
            DriverConnectionFactory::new(Arc::new(NullDriver), "db://db-1:5432/app", Properties::new())
                .user("alice")
                .password("hunter2");

        let rendered = format!("{factory:?}");
        assert!(rendered.contains("alice"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_driver_failure_propagates_unmodified() {
        let factory =
            DriverConnectionFactory::new(Arc::new(NullDriver), "db://db-1:5432/app", Properties::new());

        let err = factory.create_connection().unwrap_err();
        assert_eq!(err, DriverError::Unreachable("null driver".into()));
    }
}
