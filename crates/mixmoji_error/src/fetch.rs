//! Metadata fetch error types.

/// Kinds of metadata fetch errors.
///
/// Distinguishes timeouts from HTTP status failures from generic transport
/// failures so callers can report each differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FetchErrorKind {
    /// The request exceeded the configured timeout
    #[display("Request timed out")]
    Timeout,
    /// The server answered with a non-2xx, non-304 status
    #[display("HTTP status {}", _0)]
    Status(u16),
    /// Connection, TLS, or body-read failure
    #[display("Transport failure: {}", _0)]
    Transport(String),
}

/// Fetch error with location tracking.
///
/// # Examples
///
/// ```
/// use mixmoji_error::{FetchError, FetchErrorKind};
///
/// let err = FetchError::new(FetchErrorKind::Status(503));
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The kind of error that occurred
    pub kind: FetchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FetchError {
    /// Create a new fetch error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
