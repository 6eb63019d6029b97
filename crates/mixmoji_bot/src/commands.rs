//! Host-facing command replies.
//!
//! Wrong input and missing combinations are expected user conditions, so
//! they are reply values rather than errors; the host renders the `Display`
//! form for plain-text chat surfaces.

use crate::MixmojiPlugin;
use mixmoji_core::encode_char;
use mixmoji_error::MixmojiResult;

/// Usage hint for the mix command.
pub const MIX_USAGE: &str = "Send exactly two emoji, e.g. 😂🐶";

/// Reply value for a host-dispatched command.
///
/// # Examples
///
/// ```
/// use mixmoji_bot::CommandReply;
///
/// let reply = CommandReply::Image("https://example.com/blend.png".to_string());
/// assert_eq!(format!("{}", reply), "https://example.com/blend.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandReply {
    /// A combination image reference for the host to render
    #[display("{}", _0)]
    Image(String),
    /// No combination exists for the requested pair
    #[display("No combination found for that pair")]
    NotFound,
    /// The input was not exactly two emoji
    #[display("{}", _0)]
    Usage(&'static str),
}

impl MixmojiPlugin {
    /// Look up the combination image for a two-emoji input.
    ///
    /// Requires exactly two scalar values; anything else yields a usage
    /// reply. The pair is looked up base-first
    /// (`data[first].combinations[second]`), serving the latest rendering
    /// when one is flagged, else the first.
    ///
    /// # Errors
    ///
    /// Fails with `NotLoaded` when called before bootstrap.
    #[tracing::instrument(skip(self, text))]
    pub fn mix(&self, text: &str) -> MixmojiResult<CommandReply> {
        let mut scalars = text.trim().chars();
        let (first, second) = match (scalars.next(), scalars.next(), scalars.next()) {
            (Some(first), Some(second), None) => (first, second),
            _ => return Ok(CommandReply::Usage(MIX_USAGE)),
        };

        let snapshot = self.store().snapshot()?;
        let reply = snapshot
            .entry(&encode_char(first))
            .and_then(|entry| entry.combination(&encode_char(second)))
            .map(|combination| CommandReply::Image(combination.g_static_url.clone()))
            .unwrap_or(CommandReply::NotFound);

        tracing::debug!(found = matches!(reply, CommandReply::Image(_)), "Combination lookup");
        Ok(reply)
    }

    /// The base emoji the loaded metadata covers.
    ///
    /// # Errors
    ///
    /// Fails with `NotLoaded` when called before bootstrap.
    pub fn supported(&self) -> MixmojiResult<Vec<String>> {
        self.store().supported()
    }
}
