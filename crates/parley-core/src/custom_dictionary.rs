use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parley_config::dictionary::DictionaryConfig;
use serde::Deserialize;
use serde_json::Value;

use crate::error::StoreError;
use crate::json_file;

/// On-disk form: locale -> words in insertion order, duplicates kept.
/// Locales are decoded one at a time so a malformed entry only hides its
/// own locale.
type Document = BTreeMap<String, Value>;

/// User overrides of the spellchecker, persisted as two JSON files.
///
/// Nothing is cached: every call reads the backing file, and every mutation
/// rewrites it whole. A missing or unparsable file reads as empty, a locale
/// whose entry is not a list of strings reads as empty and is replaced on
/// the next mutation of that locale.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    ignored_path: PathBuf,
    added_path: PathBuf,
}

impl DictionaryStore {
    pub fn new(ignored_path: impl Into<PathBuf>, added_path: impl Into<PathBuf>) -> Self {
        Self {
            ignored_path: ignored_path.into(),
            added_path: added_path.into(),
        }
    }

    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(config.ignored_path(), config.added_path())
    }

    pub fn ignored_path(&self) -> &Path {
        &self.ignored_path
    }

    pub fn added_path(&self) -> &Path {
        &self.added_path
    }

    /// Append to the ignored list of `locale`
    pub fn ignore(&self, word: &str, locale: &str) -> Result<(), StoreError> {
        tracing::debug!("Ignoring '{}' for {}", word, locale);
        append(&self.ignored_path, word, locale)
    }

    /// Append to the learned list of `locale`
    pub fn learn(&self, word: &str, locale: &str) -> Result<(), StoreError> {
        tracing::debug!("Learning '{}' for {}", word, locale);
        append(&self.added_path, word, locale)
    }

    /// Remove the first occurrence of `word` from the learned list.
    ///
    /// The file is rewritten even when nothing was removed, and an unknown
    /// locale gets an empty entry. The ignored list is left alone.
    pub fn unlearn(&self, word: &str, locale: &str) -> Result<(), StoreError> {
        update(&self.added_path, locale, |words| {
            if let Some(index) = words.iter().position(|w| w == word) {
                words.remove(index);
                tracing::debug!("Unlearned '{}' for {}", word, locale);
            }
        })
    }

    pub fn is_ignored(&self, word: &str, locale: &str) -> bool {
        contains(&self.ignored_path, word, locale)
    }

    pub fn is_added(&self, word: &str, locale: &str) -> bool {
        contains(&self.added_path, word, locale)
    }

    pub fn ignored_words(&self, locale: &str) -> Vec<String> {
        words(&self.ignored_path, locale)
    }

    pub fn learned_words(&self, locale: &str) -> Vec<String> {
        words(&self.added_path, locale)
    }
}

fn append(path: &Path, word: &str, locale: &str) -> Result<(), StoreError> {
    update(path, locale, |words| words.push(word.to_string()))
}

/// Read-modify-write of one locale, other locales are written back as read
fn update(
    path: &Path,
    locale: &str,
    edit: impl FnOnce(&mut Vec<String>),
) -> Result<(), StoreError> {
    let mut document: Document = json_file::read_or_default(path);
    let mut list = locale_words(&document, path, locale);
    edit(&mut list);
    document.insert(locale.to_string(), Value::from(list));
    json_file::write(path, &document)
}

fn contains(path: &Path, word: &str, locale: &str) -> bool {
    words(path, locale).iter().any(|w| w == word)
}

fn words(path: &Path, locale: &str) -> Vec<String> {
    let document: Document = json_file::read_or_default(path);
    locale_words(&document, path, locale)
}

fn locale_words(document: &Document, path: &Path, locale: &str) -> Vec<String> {
    let Some(value) = document.get(locale) else {
        return Vec::new();
    };

    Vec::<String>::deserialize(value).unwrap_or_else(|e| {
        tracing::warn!(
            "{} has a malformed entry for {} ({}), using empty",
            path.display(),
            locale,
            e
        );
        Vec::new()
    })
}
