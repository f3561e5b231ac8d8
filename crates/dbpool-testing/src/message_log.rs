//! Process-wide diagnostic message log.
//!
//! Tests that exercise concurrent code need to assert the relative order in
//! which events happened across threads. The log serializes every operation
//! through one mutex, so entries reflect the order writes completed and no
//! entry is ever interleaved with another.

use std::backtrace::Backtrace;
use std::error::Error;

use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};

static GLOBAL: Lazy<MessageLog> = Lazy::new(MessageLog::new);

/// A lock-guarded, ordered log of recorded events.
///
/// One shared instance lives for the whole process via
/// [`MessageLog::global`]; tests that need isolation construct their own and
/// inject it. Reading entries other than through [`snapshot`](Self::snapshot)
/// or a held [`lock`](Self::lock) guard is a correctness bug: the structure
/// may be mutated concurrently.
#[derive(Default)]
pub struct MessageLog {
    entries: Mutex<Vec<String>>,
}

impl MessageLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide log, initialized on first use.
    #[must_use]
    pub fn global() -> &'static MessageLog {
        &GLOBAL
    }

    /// Append one composed entry: the event text, and when an error is
    /// supplied, its description, its source chain, and a captured backtrace
    /// rendering.
    pub fn record(&self, event: &str, error: Option<&(dyn Error + 'static)>) {
        let entry = compose(event, error);
        self.entries.lock().push(entry);
    }

    /// Remove and return the most recently recorded entry.
    ///
    /// `None` on an empty log means "nothing to report"; it is not an error.
    pub fn pop(&self) -> Option<String> {
        self.entries.lock().pop()
    }

    /// A copy of the current entries in recording order.
    ///
    /// The copy is taken under the lock and is unaffected by concurrent
    /// subsequent mutation.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Discard all entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Number of entries currently recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Hold the log's lock across several operations.
    ///
    /// Lets a test inspect and drain atomically, with no other thread
    /// interleaving. The lock releases when the guard drops, so an unbalanced
    /// unlock cannot occur even on cleanup paths.
    pub fn lock(&self) -> MessageLogGuard<'_> {
        MessageLogGuard {
            entries: self.entries.lock(),
        }
    }
}

/// Exclusive access to a [`MessageLog`] for multi-step inspection.
pub struct MessageLogGuard<'a> {
    entries: MutexGuard<'a, Vec<String>>,
}

impl MessageLogGuard<'_> {
    /// Remove and return the most recently recorded entry.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// Discard all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entries in recording order, valid while the guard is held.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

fn compose(event: &str, error: Option<&(dyn Error + 'static)>) -> String {
    let Some(error) = error else {
        return event.to_owned();
    };

    let mut entry = format!("{event}: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        entry.push_str("\ncaused by: ");
        entry.push_str(&cause.to_string());
        source = cause.source();
    }
    entry.push('\n');
    entry.push_str(&Backtrace::force_capture().to_string());
    entry
}
