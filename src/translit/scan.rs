//! Contextual Scanner: single left-to-right pass over normalized input.
//!
//! Tracks word boundaries, preserves case through digraph substitution, and
//! applies language-specific overrides (Belarusian е, Ukrainian зг, the
//! Russian word-final ый merge, apostrophe elision) ahead of the plain
//! initial/medial map lookup.

use super::profile::Profile;
use crate::language::{Language, OutputMode};
use crate::unicode::{is_apostrophe, lower_char};

/// Vowels that leave a following Belarusian `е` plain (`e` instead of `ie`).
const BE_VOWELS: [char; 13] = [
    'а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я', 'і', 'ї', 'є',
];

pub(crate) fn scan(chars: &[char], profile: &Profile) -> String {
    let mut out = String::with_capacity(chars.len() * 2);
    let mut at_word_start = true;

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch.is_whitespace() {
            out.push(ch);
            at_word_start = true;
            i += 1;
            continue;
        }

        let lower = lower_char(ch);
        let capitalized = ch.is_uppercase();
        let prev = i.checked_sub(1).map(|p| lower_char(chars[p]));
        let next = chars.get(i + 1).map(|&c| lower_char(c));

        // Overrides run first; they may trump the initial/medial split and
        // may consume a lookahead character.
        let mut target: Option<&str> = None;
        let mut consumed = 1;
        match profile.language {
            Language::Be if lower == 'е' => {
                target = Some(if at_word_start {
                    "ye"
                } else if !prev.is_some_and(|p| BE_VOWELS.contains(&p)) {
                    "ie"
                } else {
                    "e"
                });
            }
            Language::Uk if lower == 'г' && prev == Some('з') => {
                target = Some("gh");
            }
            Language::Ru if lower == 'ы' && next == Some('й') && word_ends_after(chars, i + 1) => {
                target = Some(match profile.mode {
                    OutputMode::Diacritics => "yy",
                    OutputMode::Ascii => "yi",
                });
                consumed = 2;
            }
            _ if profile.language.elides_apostrophes() && is_apostrophe(ch) => {
                target = Some("");
            }
            _ => {}
        }

        let mapped = target.or_else(|| {
            let map = if at_word_start {
                &profile.initial
            } else {
                &profile.medial
            };
            map.get(&lower).map(String::as_str)
        });

        match mapped {
            Some(t) => {
                push_cased(&mut out, t, capitalized);
                at_word_start = false;
            }
            // Unknown character: copy verbatim. The boundary flag is left
            // untouched so punctuation between a space and a word does not
            // suppress word-initial treatment.
            None => out.push(ch),
        }
        i += consumed;
    }

    out
}

/// True when the character after `idx` ends the word (end of input or a
/// non-letter).
fn word_ends_after(chars: &[char], idx: usize) -> bool {
    chars.get(idx + 1).map_or(true, |c| !c.is_alphabetic())
}

/// Append `target`, upper-casing its first character when the source
/// character was capitalized. A single-character target is thereby fully
/// capitalized; a digraph keeps its tail lowercase.
fn push_cased(out: &mut String, target: &str, capitalized: bool) {
    if !capitalized {
        out.push_str(target);
        return;
    }
    let mut cs = target.chars();
    if let Some(first) = cs.next() {
        out.extend(first.to_uppercase());
        out.push_str(cs.as_str());
    }
}
