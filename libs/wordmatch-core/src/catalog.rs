//! Word-pair catalog keyed by language and category.

use indexmap::IndexMap;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::rng;
use crate::types::WordPair;

/// Catalog entry key: language plus category, both display strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogKey {
    pub language: String,
    pub category: String,
}

/// Read-mostly store of word-pair lists, iterated in load order.
///
/// Several source files may map to the same (language, category) key; their
/// lists merge by concatenation. After the load phase the catalog is only
/// read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordPairCatalog {
    entries: IndexMap<CatalogKey, Vec<WordPair>>,
}

impl WordPairCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append pairs under the key, creating the entry on first use.
    /// Duplicate keys merge by concatenation; no deduplication happens.
    pub fn add_entries(&mut self, language: &str, category: &str, pairs: Vec<WordPair>) {
        let key = CatalogKey {
            language: language.to_string(),
            category: category.to_string(),
        };
        self.entries.entry(key).or_default().extend(pairs);
    }

    /// Distinct languages in first-occurrence order.
    pub fn list_languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = Vec::new();
        for key in self.entries.keys() {
            if !languages.contains(&key.language.as_str()) {
                languages.push(&key.language);
            }
        }
        languages
    }

    /// Categories available for a language, in catalog order.
    pub fn list_categories(&self, language: &str) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|key| key.language == language)
            .map(|key| key.category.as_str())
            .collect()
    }

    /// The pair list for the exact key.
    pub fn lookup(&self, language: &str, category: &str) -> Result<&[WordPair], GameError> {
        self.entries
            .iter()
            .find(|(key, _)| key.language == language && key.category == category)
            .map(|(_, pairs)| pairs.as_slice())
            .ok_or_else(|| GameError::ListNotFound {
                language: language.to_string(),
                category: category.to_string(),
            })
    }

    /// Uniformly random category for the language, or `None` when the
    /// language has no entries. Backs the host's "surprise me" deal.
    pub fn pick_random_category(&self, language: &str) -> Option<&str> {
        self.pick_random_category_with_rng(language, &mut rng::time_seeded())
    }

    /// Random pick with a caller-supplied generator (deterministic in tests).
    pub fn pick_random_category_with_rng<R: Rng + ?Sized>(
        &self,
        language: &str,
        rng: &mut R,
    ) -> Option<&str> {
        self.list_categories(language).choose(rng).copied()
    }

    /// Number of (language, category) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
