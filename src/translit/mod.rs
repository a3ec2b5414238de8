//! Cyrillic-to-Latin transliteration engine.
//!
//! A pure, context-sensitive character transducer: per-language layered
//! mapping tables resolve into position-aware profiles, a single scan pass
//! applies them with word-boundary and neighbor context, and a final pass
//! normalizes leftover Cyrillic homoglyphs.

mod config;
mod homoglyph;
mod profile;
mod scan;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::language::{Language, OutputMode};
use crate::unicode::{is_cyrillic, nfc};

use profile::Profile;

/// Transliterate Cyrillic `input` into Latin script.
///
/// Non-Cyrillic characters pass through unchanged; word structure and
/// casing are preserved. The call is deterministic and never fails; empty
/// input yields an empty string.
pub fn romanize(input: &str, language: Language, mode: OutputMode) -> String {
    if input.is_empty() {
        return String::new();
    }

    let _span = debug_span!("romanize", lang = language.code(), ?mode).entered();

    let chars: Vec<char> = nfc(input).chars().collect();
    let profile = Profile::get(language, mode);
    let scanned = scan::scan(&chars, profile);
    let output = homoglyph::replace_homoglyphs(&scanned);

    let leftover = output.chars().filter(|&c| is_cyrillic(c)).count();
    if leftover > 0 {
        debug!(leftover, "characters outside the {} alphabet passed through", language.name());
    }

    output
}
