use std::collections::HashMap;

use podkit_core::text::{Localize, TextKey};
use podkit_ports::error::ParseError;

/// Key-to-string table layered over the built-in English defaults. Keys the
/// table does not cover fall back to the key's default text, so a partial
/// translation never drops an alarm label.
#[derive(Debug, Clone, Default)]
pub struct TextCatalog {
    entries: HashMap<String, String>,
}

impl TextCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a flat JSON object of key id to translated text.
    pub fn from_json_str(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json)
            .map(Self::with_entries)
            .map_err(|e| ParseError::InvalidJson(e.to_string()))
    }
}

impl Localize for TextCatalog {
    fn resolve(&self, key: &TextKey) -> String {
        match self.entries.get(key.id) {
            Some(text) => text.clone(),
            None => key.default_text.to_string(),
        }
    }
}
