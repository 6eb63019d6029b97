//! Lookup error types.

/// Kinds of lookup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LookupErrorKind {
    /// A query was made before any metadata was loaded
    #[display("Metadata not loaded")]
    NotLoaded,
}

/// Lookup error with location tracking.
///
/// # Examples
///
/// ```
/// use mixmoji_error::{LookupError, LookupErrorKind};
///
/// let err = LookupError::new(LookupErrorKind::NotLoaded);
/// assert!(format!("{}", err).contains("not loaded"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Lookup Error: {} at line {} in {}", kind, line, file)]
pub struct LookupError {
    /// The kind of error that occurred
    pub kind: LookupErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LookupError {
    /// Create a new lookup error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LookupErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
