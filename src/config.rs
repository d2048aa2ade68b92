//! File-backed tokenizer configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::Language;

pub const DEFAULT_MIN_LENGTH: usize = 2;
pub const DEFAULT_MAX_LENGTH: usize = 25;

/// Settings applied to a fresh [`crate::Tokenizer`].
///
/// ```json
/// {
///   "min_length": 3,
///   "separators": ["_"],
///   "blacklist": { "en": ["lorem", "ipsum"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Shortest accepted fragment, inclusive.
    pub min_length: usize,
    /// Longest accepted fragment, inclusive.
    pub max_length: usize,
    /// Drop fragments made only of digits.
    pub ignore_digits: bool,
    /// Initial language. Detection overwrites it on every run.
    pub language: Language,
    /// Separators added on top of the built-in set.
    pub separators: Vec<char>,
    pub blacklist: BTreeMap<Language, Vec<String>>,
    pub whitelist: BTreeMap<Language, Vec<String>>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            ignore_digits: false,
            language: Language::Auto,
            separators: Vec::new(),
            blacklist: BTreeMap::new(),
            whitelist: BTreeMap::new(),
        }
    }
}

impl TokenizerConfig {
    /// Load from a JSON file; absent fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenizerError;

    #[test]
    fn missing_fields_use_defaults() {
        let config: TokenizerConfig = serde_json::from_str(r#"{"min_length": 4}"#).unwrap();
        assert_eq!(config.min_length, 4);
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.language, Language::Auto);
        assert!(config.separators.is_empty());
    }

    #[test]
    fn reads_lists_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        fs::write(
            &path,
            r#"{"separators": ["_"], "blacklist": {"en": ["lorem"], "uk": ["пан"]}}"#,
        )
        .unwrap();
        let config = TokenizerConfig::from_json_file(&path).unwrap();
        assert_eq!(config.separators, vec!['_']);
        assert_eq!(config.blacklist[&Language::En], vec!["lorem"]);
        assert_eq!(config.blacklist[&Language::Ua], vec!["пан"]);
    }

    #[test]
    fn unknown_language_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        fs::write(&path, r#"{"blacklist": {"xx": ["a"]}}"#).unwrap();
        let err = TokenizerConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, TokenizerError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = TokenizerConfig::from_json_file(Path::new("/nonexistent/t.json")).unwrap_err();
        assert!(matches!(err, TokenizerError::Io(_)));
    }
}
