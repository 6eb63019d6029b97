//! Mixmoji - Emoji-Combination Chat-Bot Plugin
//!
//! Mixmoji fetches the public emoji-combination metadata feed, caches it
//! locally with conditional-revalidation semantics, and answers
//! codepoint-pair lookups with a combination image URL for a chat-bot host
//! to render.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mixmoji::{MixmojiPlugin, PluginConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let plugin = Arc::new(MixmojiPlugin::new(PluginConfig::default()));
//!     plugin.bootstrap().await?;
//!     let scheduler = plugin.spawn_scheduler();
//!
//!     // Wire plugin.mix(..) and plugin.refresh_now(..) into the host's
//!     // command dispatch; render the returned replies as messages.
//!     println!("{}", plugin.mix("😂🐶")?);
//!
//!     if let Some(handle) = scheduler {
//!         handle.abort();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Mixmoji is organized as a workspace with focused crates:
//!
//! - `mixmoji_core` - Codepoint encoding, metadata model, in-memory store
//! - `mixmoji_cache` - On-disk cache with conditional revalidation
//! - `mixmoji_bot` - Plugin lifecycle, configuration, command replies
//! - `mixmoji_error` - Error types
//!
//! This crate (`mixmoji`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use mixmoji_bot::{CommandReply, MIX_USAGE, MixmojiPlugin, PluginConfig, PluginConfigBuilder};
pub use mixmoji_cache::{CacheDescriptor, MetadataCache, RefreshOutcome};
pub use mixmoji_core::{
    Combination, EmojiEntry, MetadataDocument, MetadataStore, encode, encode_char,
};
pub use mixmoji_error::{
    ConfigError, FetchError, FetchErrorKind, JsonError, LookupError, LookupErrorKind,
    MixmojiError, MixmojiErrorKind, MixmojiResult, StorageError, StorageErrorKind,
};
