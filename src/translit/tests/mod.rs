mod basic;
mod kk;

use crate::language::{Language, OutputMode};
use crate::translit::romanize;

fn ro(text: &str, language: Language) -> String {
    romanize(text, language, OutputMode::Diacritics)
}

fn ro_ascii(text: &str, language: Language) -> String {
    romanize(text, language, OutputMode::Ascii)
}
