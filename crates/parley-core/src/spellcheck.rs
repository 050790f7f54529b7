use parley_types::MenuRequest;

use crate::custom_dictionary::DictionaryStore;

/// Contraction fragments the engine wrongly flags ("couldn" in "couldn't")
pub const SKIP_WORDS: [&str; 15] = [
    "ain", "couldn", "didn", "doesn", "hadn", "hasn", "mightn", "mustn", "needn", "oughtn",
    "shan", "shouldn", "wasn", "weren", "wouldn",
];

/// External spellcheck engine
pub trait SpellChecker: Send + Sync {
    fn is_misspelled(&self, word: &str) -> bool;

    /// Corrections for a misspelled word, most confident first
    fn corrections(&self, word: &str) -> Vec<String>;
}

/// Engine answers relayed by the host along with a request
#[derive(Debug, Clone, Default)]
pub struct HostVerdict {
    pub misspelled: bool,
    pub corrections: Vec<String>,
}

impl HostVerdict {
    pub fn new(misspelled: bool) -> Self {
        Self {
            misspelled,
            corrections: Vec::new(),
        }
    }

    pub fn from_request(request: &MenuRequest) -> Self {
        Self {
            misspelled: request.is_over_misspelling(),
            corrections: request.dictionary_suggestions.clone(),
        }
    }
}

impl SpellChecker for HostVerdict {
    fn is_misspelled(&self, _word: &str) -> bool {
        self.misspelled
    }

    fn corrections(&self, _word: &str) -> Vec<String> {
        self.corrections.clone()
    }
}

/// Spellcheck decision for the page: skip list, then the user's custom
/// dictionary, then the engine
pub struct SpellCheckProvider<'a, S> {
    engine: S,
    locale: &'a str,
    dictionary: Option<&'a DictionaryStore>,
}

impl<'a, S: SpellChecker> SpellCheckProvider<'a, S> {
    pub fn new(engine: S, locale: &'a str) -> Self {
        Self {
            engine,
            locale,
            dictionary: None,
        }
    }

    pub fn with_dictionary(mut self, dictionary: &'a DictionaryStore) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// True when `text` should not be flagged
    pub fn spell_check(&self, text: &str) -> bool {
        if SKIP_WORDS.contains(&text) {
            return true;
        }

        if let Some(dictionary) = self.dictionary
            && (dictionary.is_ignored(text, self.locale) || dictionary.is_added(text, self.locale))
        {
            return true;
        }

        !self.engine.is_misspelled(text)
    }
}
