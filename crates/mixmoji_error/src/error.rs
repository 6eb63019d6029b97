//! Top-level error wrapper types.

use crate::{ConfigError, FetchError, JsonError, LookupError, StorageError};

/// The foundation error enum for the Mixmoji workspace.
///
/// # Examples
///
/// ```
/// use mixmoji_error::{MixmojiError, FetchError, FetchErrorKind};
///
/// let fetch_err = FetchError::new(FetchErrorKind::Timeout);
/// let err: MixmojiError = fetch_err.into();
/// assert!(format!("{}", err).contains("Fetch Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MixmojiErrorKind {
    /// Metadata fetch error
    #[from(FetchError)]
    Fetch(FetchError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Lookup error
    #[from(LookupError)]
    Lookup(LookupError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Mixmoji error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mixmoji_error::{MixmojiResult, ConfigError};
///
/// fn might_fail() -> MixmojiResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mixmoji Error: {}", _0)]
pub struct MixmojiError(Box<MixmojiErrorKind>);

impl MixmojiError {
    /// Create a new error from a kind.
    pub fn new(kind: MixmojiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MixmojiErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MixmojiErrorKind
impl<T> From<T> for MixmojiError
where
    T: Into<MixmojiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Mixmoji operations.
///
/// # Examples
///
/// ```
/// use mixmoji_error::{MixmojiResult, JsonError};
///
/// fn parse_metadata() -> MixmojiResult<String> {
///     Err(JsonError::new("unexpected end of input"))?
/// }
/// ```
pub type MixmojiResult<T> = std::result::Result<T, MixmojiError>;
