//! Text to candidate splitting: split on separators, bound length, lowercase.

/// Characters split on when no others are added.
pub const DEFAULT_SEPARATORS: &[char] = &[
    ' ', '+', '-', '/', '*', '~', '@', '#', '%', '^', '=', '<', '>', '!', ',', '.', ':', ';',
    '_', '$', '€', '£', '&', '?', '|', '\\', '\'', '§', '°', '(', ')', '{', '}', '[', ']',
];

/// Deduplicated set of separator characters.
#[derive(Debug, Clone)]
pub struct Separators {
    chars: Vec<char>,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            chars: DEFAULT_SEPARATORS.to_vec(),
        }
    }
}

impl Separators {
    /// Add a separator; returns false if it was already present.
    pub fn add(&mut self, ch: char) -> bool {
        if self.chars.contains(&ch) {
            return false;
        }
        self.chars.push(ch);
        true
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Split `text` on every separator, dropping empty fragments.
    pub fn split<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(self.chars.as_slice()).filter(|s| !s.is_empty())
    }
}

/// Length bounds and digit policy applied to each fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_length: usize,
    pub max_length: usize,
    pub ignore_digits: bool,
}

impl Bounds {
    /// Lower-cased candidate for `fragment`, or `None` when it falls outside
    /// the inclusive length bounds or is all digits while digits are ignored.
    ///
    /// Length is counted in chars of the lower-cased form, since lowering can
    /// grow a string (`İ` becomes `i` plus a combining dot).
    pub fn normalize(&self, fragment: &str) -> Option<String> {
        if self.ignore_digits && fragment.chars().all(char::is_numeric) {
            return None;
        }
        let lowered = fragment.to_lowercase();
        let len = lowered.chars().count();
        if len < self.min_length || len > self.max_length {
            return None;
        }
        Some(lowered)
    }
}

/// Replace every whitespace char (line breaks, tabs, no-break spaces) with a
/// plain space, so it splits like one. `\r\n` counts as a single break.
pub fn flatten_whitespace(text: &str) -> String {
    text.replace("\r\n", " ")
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}
