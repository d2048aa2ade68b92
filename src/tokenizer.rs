//! The split, normalize, filter, count and rank pipeline.

use std::collections::HashMap;
use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::config::{TokenizerConfig, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use crate::detect;
use crate::error::Result;
use crate::html::{HtmlExtractor, ScraperExtractor};
use crate::language::{DefaultStopWords, Language, StopWordProvider};
use crate::lists::{ListStore, WordList};
use crate::token::Token;
use crate::tokenize::{flatten_whitespace, Bounds, Separators};

/// Configurable text tokenizer.
///
/// An instance is meant for one owner using it sequentially: setters,
/// `load_*` and [`Tokenizer::tokenize`] all take `&mut self`. Separate
/// instances share nothing and can run on different threads.
pub struct Tokenizer {
    min_length: usize,
    max_length: usize,
    ignore_digits: bool,
    language: Language,
    separators: Separators,
    lists: ListStore,
    text: String,
    tokens: Vec<Token>,
    stop_words: Box<dyn StopWordProvider>,
    html: Box<dyn HtmlExtractor>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(DefaultStopWords), Box::new(ScraperExtractor::new()))
    }

    /// Use `stop_words` instead of the built-in stop-word data.
    pub fn with_stop_words(stop_words: impl StopWordProvider + 'static) -> Self {
        Self::with_collaborators(Box::new(stop_words), Box::new(ScraperExtractor::new()))
    }

    pub fn with_collaborators(
        stop_words: Box<dyn StopWordProvider>,
        html: Box<dyn HtmlExtractor>,
    ) -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            ignore_digits: false,
            language: Language::Auto,
            separators: Separators::default(),
            lists: ListStore::new(),
            text: String::new(),
            tokens: Vec::new(),
            stop_words,
            html,
        }
    }

    /// Apply `config` on top of this tokenizer's current settings.
    pub fn apply_config(&mut self, config: &TokenizerConfig) -> Result<()> {
        self.set_min_length(config.min_length);
        self.set_max_length(config.max_length);
        self.set_ignore_digits(config.ignore_digits);
        self.set_language(config.language);
        for &ch in &config.separators {
            self.add_separator(ch);
        }
        for (&language, words) in &config.blacklist {
            self.add_blacklist_words(language, words)?;
        }
        for (&language, words) in &config.whitelist {
            self.add_whitelist_words(language, words)?;
        }
        Ok(())
    }

    /// Fresh tokenizer with default collaborators and `config` applied.
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        let mut tokenizer = Self::new();
        tokenizer.apply_config(config)?;
        Ok(tokenizer)
    }

    pub fn set_min_length(&mut self, length: usize) {
        self.min_length = length;
    }

    pub fn set_max_length(&mut self, length: usize) {
        self.max_length = length;
    }

    pub fn set_ignore_digits(&mut self, ignore: bool) {
        self.ignore_digits = ignore;
    }

    pub fn add_separator(&mut self, ch: char) {
        self.separators.add(ch);
    }

    pub fn add_blacklist_word(&mut self, language: Language, word: &str) -> Result<()> {
        self.lists.add_blacklist(language, [word])?;
        Ok(())
    }

    pub fn add_blacklist_words<I, S>(&mut self, language: Language, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lists.add_blacklist(language, words)?;
        Ok(())
    }

    /// White-list words are stored but do not affect filtering.
    pub fn add_whitelist_word(&mut self, language: Language, word: &str) -> Result<()> {
        self.lists.add_whitelist(language, [word])?;
        Ok(())
    }

    pub fn add_whitelist_words<I, S>(&mut self, language: Language, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lists.add_whitelist(language, words)?;
        Ok(())
    }

    /// Set the active language. [`Tokenizer::tokenize`] re-detects the
    /// language on every run, so this only affects [`Tokenizer::is_accepted`]
    /// calls made before the next run.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Store `text` for the next run, with all whitespace turned into spaces.
    pub fn load_text(&mut self, text: &str) {
        self.text = flatten_whitespace(text);
    }

    /// Store the visible text of `markup` for the next run. On failure the
    /// previously loaded text is kept.
    pub fn load_html(&mut self, markup: &str) -> Result<()> {
        let visible = self.html.visible_text(markup)?;
        self.text = flatten_whitespace(&visible);
        Ok(())
    }

    /// Run the pipeline over the loaded text, replacing any earlier tokens.
    pub fn tokenize(&mut self) {
        self.language = detect::detect(&self.text);
        let defaults = self.stop_words.stop_words(self.language);
        match self.lists.add_blacklist(self.language, &defaults) {
            Ok(added) => debug!(language = %self.language, added, "merged default stop words"),
            Err(err) => warn!("could not merge stop words: {err}"),
        }

        if self.min_length > self.max_length {
            warn!(
                min = self.min_length,
                max = self.max_length,
                "min length exceeds max length, no fragment can pass"
            );
        }

        let bounds = Bounds {
            min_length: self.min_length,
            max_length: self.max_length,
            ignore_digits: self.ignore_digits,
        };
        let mut counts: HashMap<String, usize> = HashMap::new();
        for fragment in self.separators.split(&self.text) {
            let Some(candidate) = bounds.normalize(fragment) else {
                continue;
            };
            if !self.is_accepted(&candidate) {
                continue;
            }
            *counts.entry(candidate).or_insert(0) += 1;
        }

        let mut tokens: Vec<Token> = counts
            .into_iter()
            .map(|(value, count)| Token::new(value, count))
            .collect();
        tokens.sort_by(|a, b| {
            b.count()
                .cmp(&a.count())
                .then_with(|| a.value().cmp(b.value()))
        });
        info!(
            language = %self.language,
            distinct = tokens.len(),
            "tokenized text"
        );
        self.tokens = tokens;
    }

    /// Whether a normalized candidate survives the black-list of the active
    /// language, or of every language while the active one is `Auto`.
    pub fn is_accepted(&self, candidate: &str) -> bool {
        !self.lists.is_blacklisted(self.language, candidate)
    }

    /// All tokens from the last run, by count descending then value ascending.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The first `n` of [`Tokenizer::tokens`].
    pub fn top_tokens(&self, n: usize) -> &[Token] {
        &self.tokens[..n.min(self.tokens.len())]
    }

    pub fn write_tokens<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_list(out, self.tokens())
    }

    pub fn write_top_tokens<W: Write>(&self, out: &mut W, n: usize) -> io::Result<()> {
        write_list(out, self.top_tokens(n))
    }

    pub fn print_tokens(&self) -> io::Result<()> {
        self.write_tokens(&mut io::stdout().lock())
    }

    pub fn print_top_tokens(&self, n: usize) -> io::Result<()> {
        self.write_top_tokens(&mut io::stdout().lock(), n)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn ignore_digits(&self) -> bool {
        self.ignore_digits
    }

    pub fn separators(&self) -> &[char] {
        self.separators.as_slice()
    }

    pub fn blacklist(&self, language: Language) -> Option<&WordList> {
        self.lists.blacklist(language)
    }

    pub fn whitelist(&self, language: Language) -> Option<&WordList> {
        self.lists.whitelist(language)
    }

    /// Text the next run will process.
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn write_list<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        write!(out, "{token} ")?;
    }
    out.flush()
}
