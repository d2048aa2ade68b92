//! Supported languages and the stop-word data behind them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stop_words::LANGUAGE;

use crate::error::TokenizerError;

/// Closed set of languages the tokenizer knows about, plus the `Auto`
/// sentinel asking for detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Auto,
    En,
    Ru,
    #[serde(alias = "uk")]
    Ua,
}

impl Language {
    /// Concrete languages in registry order. Detection ties resolve to the
    /// earliest entry, so this order is part of the observable behavior.
    pub const CONCRETE: [Language; 3] = [Language::En, Language::Ru, Language::Ua];

    pub fn is_auto(self) -> bool {
        self == Language::Auto
    }

    /// Letter whose frequency in this language sits around 2-5% and is
    /// rare or absent in the others. `None` for `Auto`.
    pub fn marker_letter(self) -> Option<char> {
        match self {
            Language::Auto => None,
            Language::En => Some('y'),
            Language::Ru => Some('ы'),
            Language::Ua => Some('і'),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Auto => "auto",
            Language::En => "en",
            Language::Ru => "ru",
            Language::Ua => "ua",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Language::Auto),
            "en" | "english" => Ok(Language::En),
            "ru" | "russian" => Ok(Language::Ru),
            "ua" | "uk" | "ukrainian" => Ok(Language::Ua),
            other => Err(TokenizerError::InvalidArgument(format!(
                "unsupported language: {other:?}"
            ))),
        }
    }
}

/// Source of the default stop words merged into a language's black-list
/// after detection.
pub trait StopWordProvider: Send + Sync {
    fn stop_words(&self, language: Language) -> Vec<String>;
}

/// Stop words from the `stop-words` crate, with a built-in Ukrainian list.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStopWords;

impl StopWordProvider for DefaultStopWords {
    fn stop_words(&self, language: Language) -> Vec<String> {
        let lang = match language {
            Language::Auto => return Vec::new(),
            Language::En => LANGUAGE::English,
            Language::Ru => LANGUAGE::Russian,
            Language::Ua => return ukrainian_stop_words(),
        };
        stop_words::get(lang)
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

/// Provider that contributes nothing; only caller-supplied black-list
/// words filter tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStopWords;

impl StopWordProvider for NoStopWords {
    fn stop_words(&self, _language: Language) -> Vec<String> {
        Vec::new()
    }
}

fn ukrainian_stop_words() -> Vec<String> {
    [
        "і", "й", "та", "а", "але", "в", "у", "на", "з", "із", "зі", "до", "від", "по", "за",
        "під", "над", "про", "для", "без", "через", "що", "як", "це", "цей", "ця", "ці", "той",
        "ті", "він", "вона", "воно", "вони", "ми", "ви", "я", "ти", "не", "ні", "так",
        "чи", "же", "ж", "би", "б", "бо", "якщо", "коли", "де", "тут", "там", "був", "була",
        "було", "були", "є", "буде", "його", "її", "їх", "мене", "тебе", "нас", "вас", "свій",
        "також", "вже", "ще", "лише", "тільки", "щоб", "який", "яка", "яке", "які",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
