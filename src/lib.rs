//! Text tokenizer: split raw or HTML-sourced text into ranked, counted,
//! stop-word filtered tokens.
//!
//! ```
//! use text_tokenizer::{NoStopWords, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::with_stop_words(NoStopWords);
//! tokenizer.load_text("the cat sat on the mat");
//! tokenizer.tokenize();
//! assert_eq!(tokenizer.tokens()[0].to_string(), "the(2)");
//! ```

pub mod config;
pub mod detect;
pub mod error;
pub mod html;
pub mod language;
pub mod lists;
pub mod token;
pub mod tokenize;
pub mod tokenizer;

pub use config::TokenizerConfig;
pub use error::{Result, TokenizerError};
pub use html::{HtmlExtractor, ScraperExtractor};
pub use language::{DefaultStopWords, Language, NoStopWords, StopWordProvider};
pub use lists::{ListStore, WordList};
pub use token::Token;
pub use tokenizer::Tokenizer;
