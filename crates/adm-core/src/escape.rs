//! Reserved escape markers and the alphabet guard.
//!
//! The encoder smuggles formatting intent through a generic JSON serializer
//! by wrapping fragments in private marker characters, then rewrites them in
//! a second pass. That pass is only sound if no legitimate content contains
//! a marker, so every caller-supplied alphabet and every constructed string
//! goes through the checks in this module.

use crate::error::ValueError;

/// Brackets a typed literal; the repair pass strips the adjacent JSON quote
/// and then the marker itself.
pub const REMOVE_QUOTE: char = '\u{1F603}';

/// Stands in for a literal `"` inside a typed payload.
pub const SET_QUOTE: char = '\u{2661}';

/// First and last element of a sequence that must render as a multiset.
pub const REPLACE_BRACES: char = '\u{1F618}';

/// Delimiter wrapped around typed payloads in load-dataset mode.
pub const PAYLOAD_DELIMITER: char = '"';

/// The three markers consumed by the repair pass.
pub const ESCAPE_MARKERS: [char; 3] = [REMOVE_QUOTE, SET_QUOTE, REPLACE_BRACES];

/// Characters a generation alphabet must never contain.
pub const RESERVED_SYMBOLS: [char; 4] = [REMOVE_QUOTE, SET_QUOTE, REPLACE_BRACES, PAYLOAD_DELIMITER];

/// Reject an alphabet that contains a marker or the payload delimiter.
///
/// Every character of `alphabet` is one symbol that a generator may draw.
pub fn check_alphabet(alphabet: &str) -> Result<(), ValueError> {
    for symbol in alphabet.chars() {
        if let Some(marker) = RESERVED_SYMBOLS.iter().find(|m| **m == symbol) {
            return Err(ValueError::EscapeMarkerCollision {
                symbol: symbol.to_string(),
                marker: *marker,
            });
        }
    }
    Ok(())
}

/// Reject text that would confuse the repair pass.
///
/// Unlike [`check_alphabet`] this allows `"`, which the JSON serializer
/// escapes on its own.
pub fn check_text(text: &str) -> Result<(), ValueError> {
    match text.chars().find(|c| ESCAPE_MARKERS.contains(c)) {
        Some(marker) => Err(ValueError::EscapeMarkerCollision {
            symbol: text.to_string(),
            marker,
        }),
        None => Ok(()),
    }
}
