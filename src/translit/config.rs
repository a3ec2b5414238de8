//! Mapping-table configuration: TOML schema, parsing, validation.
//!
//! Tables are layered: a `[base]` map shared by all languages, a global
//! `[initial]` word-start overlay, and per-language `[lang.<code>]` overlays
//! with `any`/`initial`/`medial`/`ascii` sub-tables. The profile resolver
//! merges them in that order.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::language::Language;
use crate::unicode::lower_char;

pub(crate) const DEFAULT_TABLES_TOML: &str = include_str!("default_tables.toml");

#[derive(Debug, Deserialize)]
pub(crate) struct TableConfig {
    pub base: BTreeMap<String, String>,
    #[serde(default)]
    pub initial: BTreeMap<String, String>,
    #[serde(default)]
    pub lang: BTreeMap<String, LangOverlay>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LangOverlay {
    /// Applies to both positions.
    #[serde(default)]
    pub any: BTreeMap<String, String>,
    /// Word-initial position only; wins over the global `[initial]` overlay.
    #[serde(default)]
    pub initial: BTreeMap<String, String>,
    /// Non-initial position only.
    #[serde(default)]
    pub medial: BTreeMap<String, String>,
    /// ASCII mode, both positions, applied last.
    #[serde(default)]
    pub ascii: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[base] table is empty")]
    EmptyBase,
    #[error("key {key:?} in [{table}] is not a single lowercase character")]
    BadKey { table: String, key: String },
    #[error("unknown language section: [lang.{0}]")]
    UnknownLanguage(String),
    #[error("missing language section: [lang.{0}]")]
    MissingLanguage(&'static str),
}

/// Parse TOML text into a validated `TableConfig`.
pub(crate) fn parse_tables_toml(toml_str: &str) -> Result<TableConfig, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.base.is_empty() {
        return Err(TableConfigError::EmptyBase);
    }

    validate_keys("base", &config.base)?;
    validate_keys("initial", &config.initial)?;

    for (code, overlay) in &config.lang {
        if code.parse::<Language>().is_err() {
            return Err(TableConfigError::UnknownLanguage(code.clone()));
        }
        validate_keys(&format!("lang.{code}.any"), &overlay.any)?;
        validate_keys(&format!("lang.{code}.initial"), &overlay.initial)?;
        validate_keys(&format!("lang.{code}.medial"), &overlay.medial)?;
        validate_keys(&format!("lang.{code}.ascii"), &overlay.ascii)?;
    }

    for language in Language::ALL {
        if !config.lang.contains_key(language.code()) {
            return Err(TableConfigError::MissingLanguage(language.code()));
        }
    }

    Ok(config)
}

fn validate_keys(
    table: &str,
    map: &BTreeMap<String, String>,
) -> Result<(), TableConfigError> {
    for key in map.keys() {
        let mut chars = key.chars();
        let ok = matches!((chars.next(), chars.next()), (Some(c), None) if lower_char(c) == c);
        if !ok {
            return Err(TableConfigError::BadKey {
                table: table.to_string(),
                key: key.clone(),
            });
        }
    }
    Ok(())
}
