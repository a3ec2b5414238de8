//! Context-sensitive Cyrillic-to-Latin transliteration ("romanization")
//! for Russian, Ukrainian, Belarusian, Bulgarian, Kazakh, Kyrgyz,
//! Macedonian, Serbian, Tajik, and Mongolian, in diacritic-preserving and
//! ASCII-only output modes.

pub mod language;
pub mod trace_init;
pub mod translit;
pub mod unicode;

pub use language::{Language, OutputMode, UnknownLanguageError};
pub use translit::romanize;
