//! Core error type definitions

/// Boxed declared failure, as carried across translation boundaries
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for operations that report ambient failures
pub type Result<T> = std::result::Result<T, Error>;

/// Ambient failure type for failable operations using thiserror
///
/// Declared failures travel as the `E` of a `Result<T, E>` until they reach
/// a translation boundary, where they become exactly one of the translated
/// variants below. Argument validation failures are raised directly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A declared failure that crossed a translation boundary
    #[error("undeclared failure: {}{source}", context_prefix(.context))]
    Undeclared {
        #[source]
        source: BoxError,
        suppressed: Vec<BoxError>,
        context: Option<String>,
    },

    /// A declared I/O failure that crossed a translation boundary
    #[error("unchecked I/O failure: {}{source}", context_prefix(.context))]
    UncheckedIo {
        #[source]
        source: std::io::Error,
        suppressed: Vec<BoxError>,
        context: Option<String>,
    },

    /// Missing or malformed argument at a composition or construction call
    #[error("invalid argument '{parameter}': {message}")]
    InvalidArgument {
        parameter: &'static str,
        message: String,
    },

    /// A type token was built from a type that still has unbound variables
    #[error("type '{descriptor}' is not fully parameterized: unbound variable '{variable}'")]
    UnboundType { descriptor: String, variable: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

fn context_prefix(context: &Option<String>) -> String {
    context
        .as_deref()
        .map(|context| format!("{context}: "))
        .unwrap_or_default()
}
