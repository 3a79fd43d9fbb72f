use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::country::Country;

/// Partial translation table for one piece of UI text.
///
/// Keys are language codes (`de`, `fr`, `ja`, `zh`, `pt` today); missing
/// languages are expected and fall back to English at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: BTreeMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one language entry (builder-style, for fixture tables).
    pub fn with(mut self, language: &str, text: &str) -> Self {
        self.entries.insert(language.to_string(), text.to_string());
        self
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries.get(language).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a piece of UI text for a country.
///
/// English-content countries get `english` unconditionally; the table is
/// not consulted even when it has an entry for their language. Everyone
/// else gets their language's entry, or `english` when the table has none.
/// Total: always returns one of its inputs.
pub fn resolve<'a>(country: &Country, english: &'a str, translations: &'a Translations) -> &'a str {
    if country.use_english_content {
        return english;
    }
    translations.get(&country.language).unwrap_or(english)
}
