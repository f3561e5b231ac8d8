//! Aggregate error types for batched failure reporting.
//!
//! When a caller performs many independent sub-operations (closing every
//! pooled connection during shutdown, for example) it collects each failure
//! as it occurs and raises one aggregate value at the end, instead of raising
//! per item and silently dropping the rest.
//!
//! An absent cause list is distinct from an empty one throughout: `None`
//! means no information was recorded, `Some(vec![])` means zero failures
//! occurred.

use std::error::Error;
use std::fmt;

use crate::error::DriverError;

/// Boxed cause stored by [`AggregateError`].
pub type BoxedCause = Box<dyn Error + Send + Sync + 'static>;

/// An error carrying an optional message and an ordered list of zero or more
/// underlying causes.
///
/// No cause is privileged as "the" cause, so [`Error::source`] returns
/// `None`; callers that want a single representative should use
/// [`DriverErrorList`] instead. The stored sequence preserves insertion order
/// and is never deduplicated.
#[derive(Debug)]
pub struct AggregateError {
    message: Option<String>,
    causes: Option<Vec<BoxedCause>>,
}

impl AggregateError {
    /// Create an aggregate from an optional message and optional cause list.
    ///
    /// Both are stored verbatim; `None` round-trips as `None`, never
    /// normalized to an empty value.
    #[must_use]
    pub fn new(message: Option<String>, causes: Option<Vec<BoxedCause>>) -> Self {
        Self { message, causes }
    }

    /// The message passed at construction, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The causes passed at construction, in insertion order, if any.
    #[must_use]
    pub fn cause_list(&self) -> Option<&[BoxedCause]> {
        self.causes.as_deref()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.causes) {
            (Some(message), _) => f.write_str(message),
            (None, Some(causes)) if causes.len() == 1 => f.write_str("aggregate of 1 error"),
            (None, Some(causes)) => write!(f, "aggregate of {} errors", causes.len()),
            (None, None) => f.write_str("aggregate error"),
        }
    }
}

impl Error for AggregateError {}

/// An aggregate constrained to [`DriverError`] causes, substitutable wherever
/// a single-cause error is expected.
///
/// The narrow view: [`Error::source`] returns the first recorded cause, so
/// error-chain walking written for single-cause failures keeps working. The
/// wide view: [`cause_list`](Self::cause_list) exposes every cause in the
/// order it occurred.
#[derive(Debug)]
pub struct DriverErrorList {
    causes: Option<Vec<DriverError>>,
}

impl DriverErrorList {
    /// Create a list from an optional ordered cause sequence.
    ///
    /// `None` is the only way to produce the absent state; collecting via
    /// [`FromIterator`] always records a list, even an empty one.
    #[must_use]
    pub fn new(causes: Option<Vec<DriverError>>) -> Self {
        Self { causes }
    }

    /// The first recorded cause, if the list is present and non-empty.
    #[must_use]
    pub fn representative(&self) -> Option<&DriverError> {
        self.causes.as_ref().and_then(|causes| causes.first())
    }

    /// Every recorded cause in the order it occurred, if any were recorded.
    #[must_use]
    pub fn cause_list(&self) -> Option<&[DriverError]> {
        self.causes.as_deref()
    }

    /// Consume the list, yielding the recorded causes.
    #[must_use]
    pub fn into_cause_list(self) -> Option<Vec<DriverError>> {
        self.causes
    }
}

impl FromIterator<DriverError> for DriverErrorList {
    fn from_iter<I: IntoIterator<Item = DriverError>>(iter: I) -> Self {
        Self {
            causes: Some(iter.into_iter().collect()),
        }
    }
}

impl fmt::Display for DriverErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.causes.as_deref() {
            None => f.write_str("connection failures (causes not recorded)"),
            Some([]) => f.write_str("0 connection failures"),
            Some([only]) => write!(f, "1 connection failure, first: {only}"),
            Some([first, rest @ ..]) => {
                write!(f, "{} connection failures, first: {first}", rest.len() + 1)
            }
        }
    }
}

impl Error for DriverErrorList {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.representative()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_message_round_trips_verbatim() {
        let err = AggregateError::new(Some("shutdown failed".into()), None);
        assert_eq!(err.message(), Some("shutdown failed"));

        let err = AggregateError::new(None, None);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_absent_causes_stay_absent() {
        let err = AggregateError::new(None, None);
        assert!(err.cause_list().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_empty_causes_stay_empty() {
        let err = AggregateError::new(None, Some(Vec::new()));
        assert_eq!(err.cause_list().map(<[_]>::len), Some(0));
    }

    #[test]
    fn test_causes_preserve_order() {
        let causes: Vec<BoxedCause> = vec![
            Box::new(DriverError::Unreachable("db-1".into())),
            Box::new(DriverError::Unreachable("db-2".into())),
            Box::new(DriverError::Closed),
        ];
        let err = AggregateError::new(Some("3 failures".into()), Some(causes));

        let list = err.cause_list().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].to_string(), "endpoint unreachable: db-1");
        assert_eq!(list[1].to_string(), "endpoint unreachable: db-2");
        assert_eq!(list[2].to_string(), "connection is closed");
    }

    #[test]
    fn test_base_aggregate_privileges_no_cause() {
        let causes: Vec<BoxedCause> = vec![Box::new(DriverError::Closed)];
        let err = AggregateError::new(None, Some(causes));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_display_uses_message_when_present() {
        let err = AggregateError::new(Some("batch close failed".into()), Some(Vec::new()));
        assert_eq!(err.to_string(), "batch close failed");
    }

    #[test]
    fn test_display_without_message_counts_causes() {
        let err = AggregateError::new(None, Some(vec![Box::new(DriverError::Closed) as BoxedCause]));
        assert_eq!(err.to_string(), "aggregate of 1 error");

        let err = AggregateError::new(
            None,
            Some(vec![
                Box::new(DriverError::Closed) as BoxedCause,
                Box::new(DriverError::Unreachable("db-1".into())) as BoxedCause,
            ]),
        );
        assert_eq!(err.to_string(), "aggregate of 2 errors");
    }

    #[test]
    fn test_representative_is_first_cause() {
        let list = DriverErrorList::new(Some(vec![
            DriverError::AuthenticationRejected("alice".into()),
            DriverError::Unreachable("db-2".into()),
        ]));

        assert_eq!(
            list.representative(),
            Some(&DriverError::AuthenticationRejected("alice".into()))
        );
        assert_eq!(list.cause_list().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_source_mirrors_representative() {
        let list = DriverErrorList::new(Some(vec![
            DriverError::Unreachable("db-1".into()),
            DriverError::Closed,
        ]));

        let source = list.source().unwrap();
        assert_eq!(source.to_string(), "endpoint unreachable: db-1");
    }

    #[test]
    fn test_absent_list_has_no_representative() {
        let list = DriverErrorList::new(None);
        assert!(list.representative().is_none());
        assert!(list.cause_list().is_none());
        assert!(list.source().is_none());
    }

    #[test]
    fn test_zero_causes_is_legal_and_distinct_from_absent() {
        let list = DriverErrorList::new(Some(Vec::new()));
        assert!(list.representative().is_none());
        assert_eq!(list.cause_list().map(<[_]>::len), Some(0));
        assert_eq!(list.to_string(), "0 connection failures");
    }

    #[test]
    fn test_collecting_records_a_list_even_when_empty() {
        let list: DriverErrorList = std::iter::empty().collect();
        assert_eq!(list.cause_list().map(<[_]>::len), Some(0));
    }

    #[test]
    fn test_list_display_is_singular_for_one_cause() {
        let list: DriverErrorList = vec![DriverError::Closed].into_iter().collect();
        assert_eq!(list.to_string(), "1 connection failure, first: connection is closed");
    }

    #[test]
    fn test_display_names_count_and_first() {
        let list: DriverErrorList = vec![
            DriverError::Unreachable("db-1".into()),
            DriverError::Closed,
            DriverError::Closed,
        ]
        .into_iter()
        .collect();

        assert_eq!(
            list.to_string(),
            "3 connection failures, first: endpoint unreachable: db-1"
        );
    }
}
