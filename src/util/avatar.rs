//! Sender avatar derivation.
//!
//! Both helpers are pure: the same email and palette always yield the same
//! color and glyph.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use crate::config::DEFAULT_PALETTE;

/// Glyph shown for senders without an email.
pub const UNKNOWN_GLYPH: &str = "?";

/// Sum over the characters of `email` of each one's leading UTF-16 code
/// unit, hashing `"?"` for an empty email.
///
/// Characters outside the BMP contribute only their high surrogate.
pub fn email_hash(email: &str) -> u64 {
    let source = if email.is_empty() { UNKNOWN_GLYPH } else { email };
    source.chars().map(|c| u64::from(c.encode_utf16(&mut [0; 2])[0])).sum()
}

/// Pick the avatar background for `email` from `palette`.
///
/// An empty palette falls back to the default accent color.
pub fn avatar_color<'a>(email: &str, palette: &'a [String]) -> &'a str {
    if palette.is_empty() {
        return DEFAULT_PALETTE[0];
    }
    #[allow(clippy::cast_possible_truncation)]
    let index = (email_hash(email) % palette.len() as u64) as usize;
    &palette[index]
}

/// Uppercased first character of `email`, or `"?"` when empty.
pub fn avatar_letter(email: &str) -> String {
    email
        .chars()
        .next()
        .map_or_else(|| UNKNOWN_GLYPH.to_owned(), |c| c.to_uppercase().collect())
}
