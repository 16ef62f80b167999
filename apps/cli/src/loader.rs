//! Word-pair directory loader.
//!
//! Expected layout: `<root>/<Language>/<Category>/*.txt`, one word pair per
//! line (see `wordmatch_core::parser` for the line format). Files mapping
//! to the same (language, category) key merge by concatenation.

use std::fs;
use std::path::Path;

use anyhow::Context;
use wordmatch_core::{parser, WordPairCatalog};

/// Scan a data root into a catalog.
///
/// A file that fails to read or parse is logged and skipped so one bad
/// file cannot take down the rest of the catalog; only a missing or
/// unreadable root is an error.
pub fn load_catalog(root: &Path) -> anyhow::Result<WordPairCatalog> {
    let mut catalog = WordPairCatalog::new();

    let languages = fs::read_dir(root)
        .with_context(|| format!("word-pair root {} is not readable", root.display()))?;

    for lang_entry in languages.flatten() {
        let lang_path = lang_entry.path();
        if !lang_path.is_dir() {
            continue;
        }
        let Some(language) = dir_name(&lang_path) else {
            continue;
        };

        let categories = match fs::read_dir(&lang_path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("skipping {}: {}", lang_path.display(), err);
                continue;
            }
        };
        for cat_entry in categories.flatten() {
            let cat_path = cat_entry.path();
            if !cat_path.is_dir() {
                continue;
            }
            let Some(category) = dir_name(&cat_path) else {
                continue;
            };
            load_category(&mut catalog, &language, &category, &cat_path);
        }
    }

    Ok(catalog)
}

/// Read every `*.txt` file in one category directory.
fn load_category(catalog: &mut WordPairCatalog, language: &str, category: &str, dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("skipping {}: {}", dir.display(), err);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "txt") {
            continue;
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("skipping {}: {}", path.display(), err);
                continue;
            }
        };
        match parser::parse(&content) {
            Ok(pairs) => {
                tracing::debug!(
                    "loaded {} pairs from {} into {}/{}",
                    pairs.len(),
                    path.display(),
                    language,
                    category
                );
                catalog.add_entries(language, category, pairs);
            }
            Err(err) => tracing::warn!("skipping {}: {}", path.display(), err),
        }
    }
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(String::from)
}
