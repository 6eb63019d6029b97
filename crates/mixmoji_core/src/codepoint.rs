//! Codepoint string derivation.
//!
//! Combination metadata is keyed by lowercase hyphen-joined hex codepoint
//! strings derived from Unicode scalar values. Iterating `chars()` walks
//! scalar values directly, so an astral emoji like U+1F600 yields the single
//! segment `1f600` rather than a surrogate pair.

/// Encode a single scalar value as a lowercase hex codepoint segment.
///
/// # Examples
///
/// ```
/// assert_eq!(mixmoji_core::encode_char('😀'), "1f600");
/// assert_eq!(mixmoji_core::encode_char('a'), "61");
/// ```
pub fn encode_char(c: char) -> String {
    format!("{:x}", c as u32)
}

/// Encode a character as a lowercase hyphen-joined hex codepoint string.
///
/// Callers supply single-grapheme input; text carrying more than one scalar
/// value is passed through as a joined multi-segment string rather than
/// rejected.
///
/// # Examples
///
/// ```
/// assert_eq!(mixmoji_core::encode("😀"), "1f600");
/// assert_eq!(mixmoji_core::encode("❤️"), "2764-fe0f");
/// ```
pub fn encode(text: &str) -> String {
    text.chars()
        .map(encode_char)
        .collect::<Vec<_>>()
        .join("-")
}
