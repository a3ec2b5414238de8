//! Language Profile Resolver.
//!
//! Builds the (initial, medial) character-map pair for a (language, mode)
//! by merging table layers in a fixed order, then caches the result in a
//! static slot so concurrent callers share one read-only profile.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_tables_toml, TableConfig, DEFAULT_TABLES_TOML};
use crate::language::{Language, OutputMode};

/// Resolved character maps for one (language, mode) pair.
///
/// Both maps are total over the language's alphabet; characters absent from
/// both (digits, Latin letters, punctuation) pass through the scanner
/// unchanged.
pub(crate) struct Profile {
    pub language: Language,
    pub mode: OutputMode,
    /// Applies to the first character of a word.
    pub initial: HashMap<char, String>,
    /// Applies everywhere else.
    pub medial: HashMap<char, String>,
}

const SLOTS: usize = Language::ALL.len() * 2;

impl Profile {
    /// Get or build the cached profile for a (language, mode) pair.
    pub fn get(language: Language, mode: OutputMode) -> &'static Profile {
        const SLOT: OnceLock<Profile> = OnceLock::new();
        static CACHE: [OnceLock<Profile>; SLOTS] = [SLOT; SLOTS];

        CACHE[language.index() * 2 + mode.index()]
            .get_or_init(|| Profile::build(language, mode, tables()))
    }

    fn build(language: Language, mode: OutputMode, tables: &TableConfig) -> Profile {
        let overlay = tables
            .lang
            .get(language.code())
            .expect("table config is validated at load");

        let mut initial = HashMap::new();
        let mut medial = HashMap::new();

        apply(&mut initial, &tables.base);
        apply(&mut medial, &tables.base);
        apply(&mut initial, &tables.initial);
        apply(&mut initial, &overlay.any);
        apply(&mut medial, &overlay.any);
        apply(&mut initial, &overlay.initial);
        apply(&mut medial, &overlay.medial);
        if mode == OutputMode::Ascii {
            apply(&mut initial, &overlay.ascii);
            apply(&mut medial, &overlay.ascii);
        }

        debug!(
            lang = language.code(),
            ?mode,
            initial = initial.len(),
            medial = medial.len(),
            "profile built"
        );

        Profile {
            language,
            mode,
            initial,
            medial,
        }
    }
}

/// Parsed embedded tables; validated once, shared by every profile build.
fn tables() -> &'static TableConfig {
    static INSTANCE: OnceLock<TableConfig> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_tables_toml(DEFAULT_TABLES_TOML).expect("default tables TOML must be valid")
    })
}

fn apply(map: &mut HashMap<char, String>, layer: &BTreeMap<String, String>) {
    for (key, value) in layer {
        if let Some(c) = key.chars().next() {
            map.insert(c, value.clone());
        }
    }
}
