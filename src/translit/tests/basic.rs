use crate::language::{Language, OutputMode};
use crate::translit::romanize;

use super::ro;

#[test]
fn empty_input() {
    assert_eq!(ro("", Language::Ru), "");
}

#[test]
fn latin_input_is_unchanged() {
    assert_eq!(ro("privet mir!", Language::Ru), "privet mir!");
    for language in Language::ALL {
        assert_eq!(ro("hello, world 42", language), "hello, world 42");
    }
}

#[test]
fn whitespace_structure_is_preserved() {
    assert_eq!(ro("год  2024,\tтест", Language::Ru), "god  2024,\ttest");
}

#[test]
fn repeated_calls_are_identical() {
    let input = "Свет и тьма";
    let first = ro(input, Language::Ru);
    for _ in 0..3 {
        assert_eq!(ro(input, Language::Ru), first);
    }
}

#[test]
fn decomposed_input_matches_precomposed() {
    // й written as и + combining breve
    assert_eq!(ro("и\u{0306}од", Language::Ru), ro("йод", Language::Ru));
}

#[test]
fn mixed_script_passes_latin_through() {
    assert_eq!(ro("Windows платформа", Language::Ru), "Windows platforma");
}

#[test]
fn unmapped_homoglyphs_become_latin() {
    // ј is not in the Russian tables; the homoglyph pass picks it up.
    assert_eq!(ro("јазз", Language::Ru), "jazz");
}

#[test]
fn unmapped_non_homoglyphs_pass_through() {
    // Ukrainian і is neither in the Russian tables nor a listed homoglyph.
    assert_eq!(ro("міф", Language::Ru), "mіf");
}

#[test]
fn mode_defaults_to_diacritics() {
    assert_eq!(
        romanize("ўсход", Language::Be, OutputMode::default()),
        "ŭskhod"
    );
}
