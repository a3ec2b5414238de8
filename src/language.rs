//! Supported language variants and output modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A Cyrillic-alphabet language with its own romanization overlay.
///
/// The set is closed: routing by an open string code happens only at the
/// `FromStr` boundary, so a mistyped code is a parse error instead of a
/// silent fall-through to "no overlay".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    Uk,
    Be,
    Bg,
    Kk,
    Ky,
    Mk,
    Sr,
    Tg,
    Mn,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::Ru,
        Language::Uk,
        Language::Be,
        Language::Bg,
        Language::Kk,
        Language::Ky,
        Language::Mk,
        Language::Sr,
        Language::Tg,
        Language::Mn,
    ];

    /// ISO 639-1 code, as used in the mapping-table config.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Uk => "uk",
            Language::Be => "be",
            Language::Bg => "bg",
            Language::Kk => "kk",
            Language::Ky => "ky",
            Language::Mk => "mk",
            Language::Sr => "sr",
            Language::Tg => "tg",
            Language::Mn => "mn",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Ru => "Russian",
            Language::Uk => "Ukrainian",
            Language::Be => "Belarusian",
            Language::Bg => "Bulgarian",
            Language::Kk => "Kazakh",
            Language::Ky => "Kyrgyz",
            Language::Mk => "Macedonian",
            Language::Sr => "Serbian",
            Language::Tg => "Tajik",
            Language::Mn => "Mongolian",
        }
    }

    /// Whether the orthography uses the apostrophe as a separator rather
    /// than a letter. For these languages apostrophe-like characters are
    /// elided from the output.
    pub fn elides_apostrophes(&self) -> bool {
        matches!(
            self,
            Language::Uk | Language::Be | Language::Kk | Language::Tg
        )
    }

    /// Stable index into per-(language, mode) cache slots.
    pub(crate) fn index(&self) -> usize {
        Self::ALL.iter().position(|l| l == self).unwrap_or(0)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported language code: {0:?}")]
pub struct UnknownLanguageError(pub String);

impl FromStr for Language {
    type Err = UnknownLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.code() == s)
            .ok_or_else(|| UnknownLanguageError(s.to_string()))
    }
}

/// Output repertoire: keep diacritics (`ŭ`, `ö`, `ḥ`) or restrict to 7-bit
/// ASCII, substituting digraphs or plain letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Diacritics,
    Ascii,
}

impl OutputMode {
    pub(crate) fn index(&self) -> usize {
        match self {
            OutputMode::Diacritics => 0,
            OutputMode::Ascii => 1,
        }
    }
}
