//! Letter-frequency language guess.
//!
//! Each concrete language is scored by how often its marker letter occurs in
//! the text (see [`Language::marker_letter`]). The highest score wins; ties go
//! to the language listed first in [`Language::CONCRETE`], so empty or
//! marker-free text resolves to English.

use tracing::debug;

use crate::language::Language;

/// Occurrences of each concrete language's marker letter, in registry order.
pub fn scores(text: &str) -> Vec<(Language, usize)> {
    Language::CONCRETE
        .iter()
        .map(|&language| {
            let score = language
                .marker_letter()
                .map(|marker| text.chars().filter(|&c| c == marker).count())
                .unwrap_or(0);
            (language, score)
        })
        .collect()
}

/// Pick the most likely concrete language for `text`.
pub fn detect(text: &str) -> Language {
    let mut best = (Language::CONCRETE[0], 0usize);
    for (language, score) in scores(text) {
        debug!(%language, score, "language score");
        if score > best.1 {
            best = (language, score);
        }
    }
    best.0
}
