//! Core types for the Mixmoji plugin.
//!
//! This crate provides the codepoint encoder, the parsed metadata document
//! model, and the in-memory metadata store shared by the cache and bot layers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod codepoint;
mod document;
mod store;

pub use codepoint::{encode, encode_char};
pub use document::{Combination, EmojiEntry, MetadataDocument};
pub use store::MetadataStore;
