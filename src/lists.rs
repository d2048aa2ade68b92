//! Per-language white-lists and black-lists.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, TokenizerError};
use crate::language::Language;

/// Ordered set of distinct lower-cased words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl WordList {
    /// Insert a word; returns false when it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() || self.lookup.contains(&word) {
            return false;
        }
        self.lookup.insert(word.clone());
        self.words.push(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// White-list and black-list words keyed by concrete language.
///
/// Only the black-list takes part in filtering. The white-list is stored
/// for callers and reserved for an inclusion override.
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    blacklist: HashMap<Language, WordList>,
    whitelist: HashMap<Language, WordList>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words to `language`'s black-list, returning how many were new.
    pub fn add_blacklist<I, S>(&mut self, language: Language, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        add_words(&mut self.blacklist, language, words)
    }

    /// Add words to `language`'s white-list, returning how many were new.
    pub fn add_whitelist<I, S>(&mut self, language: Language, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        add_words(&mut self.whitelist, language, words)
    }

    pub fn blacklist(&self, language: Language) -> Option<&WordList> {
        self.blacklist.get(&language)
    }

    pub fn whitelist(&self, language: Language) -> Option<&WordList> {
        self.whitelist.get(&language)
    }

    /// Whether `word` is black-listed for `language`. For `Auto` a hit in
    /// any language's black-list counts.
    pub fn is_blacklisted(&self, language: Language, word: &str) -> bool {
        if language.is_auto() {
            return self.blacklist.values().any(|list| list.contains(word));
        }
        self.blacklist
            .get(&language)
            .is_some_and(|list| list.contains(word))
    }
}

fn add_words<I, S>(
    lists: &mut HashMap<Language, WordList>,
    language: Language,
    words: I,
) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if language.is_auto() {
        return Err(TokenizerError::InvalidArgument(
            "word lists are kept per concrete language, not for auto".to_string(),
        ));
    }
    let list = lists.entry(language).or_default();
    let mut added = 0;
    for word in words {
        if list.insert(word.as_ref()) {
            added += 1;
        }
    }
    Ok(added)
}
