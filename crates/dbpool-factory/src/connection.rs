//! Connection and property types shared by all acquisition strategies.

use std::collections::HashMap;
use std::fmt;

use crate::error::DriverError;

/// Conventional property key for the connecting user.
pub const PROP_USER: &str = "user";

/// Conventional property key for the connecting password.
pub const PROP_PASSWORD: &str = "password";

/// A live physical database connection.
///
/// Returned by [`ConnectionFactory::create_connection`](crate::ConnectionFactory::create_connection)
/// and owned entirely by the caller; the factory retains no reference and
/// performs no bookkeeping. The two operations here are what a pool engine
/// needs from a connection it manages. `Debug` is required so pooled
/// connections can appear in diagnostics and test output.
pub trait Connection: Send + fmt::Debug {
    /// Close the connection, releasing any server-side resources.
    fn close(&mut self) -> Result<(), DriverError>;

    /// Check whether the connection is still usable.
    ///
    /// A lightweight local check, not a server round-trip.
    fn is_valid(&self) -> bool {
        true
    }
}

/// Key/value configuration handed to a [`Driver`](crate::Driver) at connect
/// time.
///
/// Credentials conventionally live under the [`PROP_USER`] and
/// [`PROP_PASSWORD`] keys; everything else is driver-defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Create an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, returning the previous value if one was present.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Remove a property, returning its value if one was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Check whether a property is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the properties in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut props = Properties::new();
        assert!(props.is_empty());

        assert_eq!(props.set(PROP_USER, "alice"), None);
        assert_eq!(props.set(PROP_USER, "bob"), Some("alice".into()));
        assert_eq!(props.get(PROP_USER), Some("bob"));
        assert_eq!(props.len(), 1);

        assert_eq!(props.remove(PROP_USER), Some("bob".into()));
        assert_eq!(props.get(PROP_USER), None);
        assert!(!props.contains(PROP_USER));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut props = Properties::new();
        props.set("database", "app");

        let snapshot = props.clone();
        props.set("database", "other");

        assert_eq!(snapshot.get("database"), Some("app"));
    }
}
