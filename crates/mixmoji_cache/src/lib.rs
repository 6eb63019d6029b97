//! On-disk metadata caching with conditional revalidation.
//!
//! This crate owns the metadata file and its sidecar cache descriptor,
//! fetching the upstream document with `If-None-Match` / `If-Modified-Since`
//! revalidation and publishing new content durably before updating the
//! descriptor.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod descriptor;

pub use cache::{MetadataCache, RefreshOutcome};
pub use descriptor::CacheDescriptor;
