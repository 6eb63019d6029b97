//! Refresh orchestration and host-facing commands for the Mixmoji plugin.
//!
//! The command-dispatch host registers its own commands and message
//! rendering; this crate supplies the plugin lifecycle (bootstrap, periodic
//! refresh, manual refresh) and the reply values those commands produce.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod config;
mod plugin;

pub use commands::{CommandReply, MIX_USAGE};
pub use config::{PluginConfig, PluginConfigBuilder};
pub use plugin::MixmojiPlugin;
