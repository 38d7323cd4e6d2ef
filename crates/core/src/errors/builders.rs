//! Builder methods for creating errors with context

use super::failure::Failure;
use super::types::{BoxError, Error};

// Helper methods for creating errors with context
impl Error {
    /// Translate a declared failure into its ambient form.
    ///
    /// An `std::io::Error` becomes [`Error::UncheckedIo`]; anything else,
    /// including an ambient `Error` from an earlier translation, is wrapped
    /// in [`Error::Undeclared`].
    #[must_use]
    pub fn undeclared<E>(failure: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::from_boxed(failure.into(), Vec::new())
    }

    /// Translate a failure set, carrying its suppressed failures along
    #[must_use]
    pub fn from_failure<E>(failure: Failure<E>) -> Self
    where
        E: Into<BoxError>,
    {
        let (primary, suppressed) = failure.into_parts();
        Self::from_boxed(
            primary.into(),
            suppressed.into_iter().map(Into::into).collect(),
        )
    }

    /// Translate an already boxed failure
    #[must_use]
    pub fn from_boxed(source: BoxError, suppressed: Vec<BoxError>) -> Self {
        match source.downcast::<std::io::Error>() {
            Ok(io) => Error::UncheckedIo {
                source: *io,
                suppressed,
                context: None,
            },
            Err(source) => Error::Undeclared {
                source,
                suppressed,
                context: None,
            },
        }
    }

    /// Attach a description of the failed operation to a translated error.
    ///
    /// The wrapped declared failure stays the cause. Errors that were not
    /// translated are returned unchanged.
    #[must_use]
    pub fn with_context(mut self, description: impl Into<String>) -> Self {
        match &mut self {
            Error::Undeclared { context, .. } | Error::UncheckedIo { context, .. } => {
                *context = Some(description.into());
            }
            _ => {}
        }
        self
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(parameter: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }

    /// Create an invalid argument error for a missing value
    #[must_use]
    pub fn missing_argument(parameter: &'static str) -> Self {
        Self::invalid_argument(parameter, "value is required")
    }

    /// Create an unbound type error
    #[must_use]
    pub fn unbound_type(descriptor: impl Into<String>, variable: impl Into<String>) -> Self {
        Error::UnboundType {
            descriptor: descriptor.into(),
            variable: variable.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Whether this failure was produced at a translation boundary
    pub fn is_translated(&self) -> bool {
        matches!(self, Error::Undeclared { .. } | Error::UncheckedIo { .. })
    }

    /// The declared failure wrapped by a translated error
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::Undeclared { source, .. } => Some(source.as_ref()),
            Error::UncheckedIo { source, .. } => {
                Some(source as &(dyn std::error::Error + Send + Sync + 'static))
            }
            _ => None,
        }
    }

    /// Description attached with [`Error::with_context`]
    pub fn context(&self) -> Option<&str> {
        match self {
            Error::Undeclared { context, .. } | Error::UncheckedIo { context, .. } => {
                context.as_deref()
            }
            _ => None,
        }
    }

    /// Secondary failures recorded during resource cleanup
    pub fn suppressed(&self) -> &[BoxError] {
        match self {
            Error::Undeclared { suppressed, .. } | Error::UncheckedIo { suppressed, .. } => {
                suppressed
            }
            _ => &[],
        }
    }

    /// Downcast the wrapped declared failure to a concrete type
    pub fn cause_as<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.cause().and_then(|cause| cause.downcast_ref::<E>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io;

    #[derive(Debug, PartialEq)]
    struct DomainError(&'static str);

    impl fmt::Display for DomainError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "domain: {}", self.0)
        }
    }

    impl std::error::Error for DomainError {}

    #[test]
    fn test_io_failure_becomes_unchecked_io() {
        let error = Error::undeclared(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(error, Error::UncheckedIo { .. }));
        assert!(error.is_translated());
        assert_eq!(
            error.cause_as::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_domain_failure_becomes_undeclared() {
        let error = Error::undeclared(DomainError("bad"));
        assert!(matches!(error, Error::Undeclared { .. }));
        assert_eq!(error.cause_as::<DomainError>(), Some(&DomainError("bad")));
        assert_eq!(error.to_string(), "undeclared failure: domain: bad");
    }

    #[test]
    fn test_ambient_error_is_wrapped_again() {
        let inner = Error::undeclared(DomainError("bad"));
        let outer = Error::undeclared(inner);

        let cause = outer.cause_as::<Error>().expect("inner ambient error");
        assert!(cause.is_translated());
        assert_eq!(cause.cause_as::<DomainError>(), Some(&DomainError("bad")));
    }

    #[test]
    fn test_failure_set_keeps_suppressed() {
        let mut failure = Failure::new(io::Error::other("action"));
        failure.add_suppressed(io::Error::other("release"));

        let error = Error::from_failure(failure);
        assert_eq!(error.cause().unwrap().to_string(), "action");
        assert_eq!(error.suppressed().len(), 1);
        assert_eq!(error.suppressed()[0].to_string(), "release");
    }

    #[test]
    fn test_context_keeps_cause_and_skips_validation_errors() {
        let error = Error::undeclared(DomainError("bad")).with_context("loading");
        assert_eq!(error.context(), Some("loading"));
        assert_eq!(error.cause_as::<DomainError>(), Some(&DomainError("bad")));
        assert_eq!(error.to_string(), "undeclared failure: loading: domain: bad");

        let error = Error::missing_argument("after").with_context("composing");
        assert_eq!(error.context(), None);
    }

    #[test]
    fn test_validation_errors_are_not_translated() {
        let error = Error::missing_argument("after");
        assert!(!error.is_translated());
        assert!(error.cause().is_none());
        assert!(error.suppressed().is_empty());
        assert_eq!(
            error.to_string(),
            "invalid argument 'after': value is required"
        );
    }
}
