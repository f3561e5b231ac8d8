//! Data-source-backed connection acquisition.

use std::fmt;
use std::sync::Arc;

use crate::connection::Connection;
use crate::error::DriverError;
use crate::factory::ConnectionFactory;

/// A pre-configured connection provider.
///
/// Unlike a [`Driver`](crate::Driver), a data source carries its own target
/// and configuration; callers only choose whether to supply credentials.
pub trait DataSource: Send + Sync {
    /// Identity of this source, used in diagnostics.
    fn name(&self) -> &str;

    /// Open one connection using the source's default credential policy.
    fn connect(&self) -> Result<Box<dyn Connection>, DriverError>;

    /// Open one connection as `user`.
    ///
    /// An absent password is passed through as absent; the source must not
    /// substitute an empty password for it. An empty byte slice is a real
    /// (empty) password.
    fn connect_as(
        &self,
        user: &str,
        password: Option<&[u8]>,
    ) -> Result<Box<dyn Connection>, DriverError>;
}

/// Creates connections through a [`DataSource`], optionally overriding the
/// source's default credentials.
///
/// With an override user set, every acquisition goes through
/// [`DataSource::connect_as`], even when the override password is absent.
/// Without one, acquisition delegates entirely to the source's default path.
pub struct DataSourceConnectionFactory {
    source: Arc<dyn DataSource>,
    user: Option<String>,
    password: Option<Vec<u8>>,
}

impl DataSourceConnectionFactory {
    /// Create a factory delegating entirely to the source's default policy.
    #[must_use]
    pub fn new(source: Arc<impl DataSource + 'static>) -> Self {
        let source: Arc<dyn DataSource> = source;
        Self {
            source,
            user: None,
            password: None,
        }
    }

    /// Set the user to connect as instead of the source default.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the password bytes used together with the override user.
    ///
    /// An empty byte string is a real (empty) password, distinct from leaving
    /// the password unset.
    #[must_use]
    pub fn password(mut self, password: impl Into<Vec<u8>>) -> Self {
        self.password = Some(password.into());
        self
    }
}

impl ConnectionFactory for DataSourceConnectionFactory {
    fn create_connection(&self) -> Result<Box<dyn Connection>, DriverError> {
        tracing::debug!(source = %self.source.name(), "creating connection via data source");
        match &self.user {
            Some(user) => self.source.connect_as(user, self.password.as_deref()),
            None => self.source.connect(),
        }
    }
}

impl fmt::Display for DataSourceConnectionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataSourceConnectionFactory [{}]", self.source.name())
    }
}

impl fmt::Debug for DataSourceConnectionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose sensitive data in debug output
        f.debug_struct("DataSourceConnectionFactory")
            .field("source", &self.source.name())
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct NullSource;

    impl DataSource for NullSource {
        fn name(&self) -> &str {
            "reporting-replica"
        }

        fn connect(&self) -> Result<Box<dyn Connection>, DriverError> {
            Err(DriverError::Unreachable("null source".into()))
        }

        fn connect_as(
            &self,
            _user: &str,
            _password: Option<&[u8]>,
        ) -> Result<Box<dyn Connection>, DriverError> {
            Err(DriverError::AuthenticationRejected("null source".into()))
        }
    }

    #[test]
    fn test_display_includes_source_name() {
        let factory = DataSourceConnectionFactory::new(Arc::new(NullSource));
        assert_eq!(factory.to_string(), "DataSourceConnectionFactory [reporting-replica]");
    }

    #[test]
    fn test_debug_redacts_password() {
        let factory = DataSourceConnectionFactory::new(Arc::new(NullSource))
            .user("alice")
            .password(*b"hunter2");

        let rendered = format!("{factory:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_source_failure_propagates_unmodified() {
        let factory = DataSourceConnectionFactory::new(Arc::new(NullSource)).user("alice");

        let err = factory.create_connection().unwrap_err();
        assert_eq!(err, DriverError::AuthenticationRejected("null source".into()));
    }
}
