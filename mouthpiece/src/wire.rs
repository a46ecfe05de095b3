//! The pipe-delimited voice-record codec.
//!
//! Engines report each voice as a single `identifier|name|language` string.
//! Exactly two delimiters separate the three fields; the language field is
//! everything after the second delimiter and may itself contain `|`. There
//! is no escaping, so an identifier or name containing the delimiter
//! mis-splits silently, an inherited property of the wire format that is
//! kept and isolated here rather than papered over.

use crate::types::Voice;

/// The field separator used in voice wire records.
pub const VOICE_FIELD_DELIMITER: char = '|';

/// Decode one `identifier|name|language` record into a [`Voice`].
///
/// Splits on the first delimiter, then on the next one following it; the
/// remainder is the language. Returns `None` when either delimiter is
/// missing; callers skip such records.
///
/// ## Examples
///
/// ```
/// use mouthpiece::wire::parse_voice_record;
///
/// let voice = parse_voice_record("com.apple.voice.1|Alex|en-US").unwrap();
/// assert_eq!(voice.identifier, "com.apple.voice.1");
/// assert_eq!(voice.name, "Alex");
/// assert_eq!(voice.language, "en-US");
/// ```
pub fn parse_voice_record(record: &str) -> Option<Voice> {
    let (identifier, rest) = record.split_once(VOICE_FIELD_DELIMITER)?;
    let (name, language) = rest.split_once(VOICE_FIELD_DELIMITER)?;

    Some(Voice {
        identifier: identifier.to_string(),
        name: name.to_string(),
        language: language.to_string(),
    })
}

/// Encode a [`Voice`] back into its wire record.
///
/// The inverse of [`parse_voice_record`] for well-formed voices. Fields
/// containing the delimiter are written as-is (no escaping exists).
pub fn encode_voice_record(voice: &Voice) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        voice.identifier,
        voice.name,
        voice.language,
        sep = VOICE_FIELD_DELIMITER
    )
}

// ============================================================================
// Tests
// ============================================================================
