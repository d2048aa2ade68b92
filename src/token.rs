//! Counted token produced by a tokenizer run.

use std::fmt;

use serde::Serialize;

/// A normalized (lower-cased) word and the number of times it survived
/// filtering in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    value: String,
    count: usize,
}

impl Token {
    pub(crate) fn new(value: String, count: usize) -> Self {
        Self { value, count }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.value, self.count)
    }
}
