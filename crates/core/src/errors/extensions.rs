//! Extension traits for error handling

use super::types::{BoxError, Error, Result};

/// Extension trait for moving declared failures into ambient form
pub trait ResultExt<T> {
    /// Translate the declared failure, if any
    fn or_rethrow(self) -> Result<T>;

    /// Add context to a declared failure before translating it
    fn rethrow_with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<BoxError>,
{
    fn or_rethrow(self) -> Result<T> {
        self.map_err(Error::undeclared)
    }

    fn rethrow_with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::from_boxed(e.into(), Vec::new()).with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_or_rethrow_passes_values_through() {
        let ok: std::result::Result<i32, io::Error> = Ok(7);
        assert_eq!(ok.or_rethrow().unwrap(), 7);
    }

    #[test]
    fn test_or_rethrow_translates_failure() {
        let failed: std::result::Result<i32, io::Error> = Err(io::Error::other("fail"));
        let error = failed.or_rethrow().unwrap_err();
        assert!(matches!(error, Error::UncheckedIo { .. }));
    }

    #[test]
    fn test_rethrow_with_context() {
        let failed: std::result::Result<(), String> = Err("disk full".to_string());
        let error = failed
            .rethrow_with_context(|| "writing snapshot".to_string())
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "undeclared failure: writing snapshot: disk full"
        );
        assert_eq!(error.context(), Some("writing snapshot"));
        assert_eq!(error.cause().unwrap().to_string(), "disk full");
    }

    #[test]
    fn test_rethrow_with_context_keeps_io_cause() {
        let failed: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let error = failed
            .rethrow_with_context(|| "opening".to_string())
            .unwrap_err();

        assert!(matches!(error, Error::UncheckedIo { .. }));
        assert_eq!(
            error.cause_as::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
        assert_eq!(error.to_string(), "unchecked I/O failure: opening: gone");
    }
}
