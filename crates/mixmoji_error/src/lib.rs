//! Error types for the Mixmoji plugin.
//!
//! This crate provides the foundation error types used throughout the Mixmoji
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use mixmoji_error::{MixmojiResult, FetchError, FetchErrorKind};
//!
//! fn fetch_metadata() -> MixmojiResult<String> {
//!     Err(FetchError::new(FetchErrorKind::Timeout))?
//! }
//!
//! match fetch_metadata() {
//!     Ok(body) => println!("Got: {}", body),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod fetch;
mod json;
mod lookup;
mod storage;

pub use config::ConfigError;
pub use error::{MixmojiError, MixmojiErrorKind, MixmojiResult};
pub use fetch::{FetchError, FetchErrorKind};
pub use json::JsonError;
pub use lookup::{LookupError, LookupErrorKind};
pub use storage::{StorageError, StorageErrorKind};
