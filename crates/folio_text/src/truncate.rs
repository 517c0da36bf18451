use std::fmt::Display;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Suffix appended to truncated text unless configured otherwise
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Configurable defaults for plaintext truncation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(default)]
#[setters(into)]
pub struct TruncateOptions {
    pub ellipsis: String,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self { ellipsis: DEFAULT_ELLIPSIS.to_string() }
    }
}

impl TruncateOptions {
    pub fn truncator(&self, max_chars: usize) -> Truncator {
        Truncator::new(max_chars).ellipsis(self.ellipsis.clone())
    }
}

/// Shortens plaintext to a character budget, cutting at a word boundary and
/// appending an ellipsis.
///
/// Text that already fits is returned untouched, and so is text where the
/// shortened form plus the ellipsis would be longer than the original.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct Truncator {
    max_chars: usize,
    ellipsis: String,
}

impl Truncator {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars, ellipsis: DEFAULT_ELLIPSIS.to_string() }
    }

    /// Builds a truncator from a signed bound, clamping negatives to zero.
    pub fn from_signed(max_chars: i64) -> Self {
        Self::new(usize::try_from(max_chars).unwrap_or(0))
    }

    pub fn truncate(&self, text: &str) -> String {
        let total = text.chars().count();
        if total <= self.max_chars {
            return text.to_string();
        }

        // One extra character tells us whether the cut lands inside a word.
        let prefix: Vec<char> = text.chars().take(self.max_chars + 1).collect();
        let mut end = prefix.len();

        let mid_word = end >= 2 && is_word_char(prefix[end - 1]) && is_word_char(prefix[end - 2]);
        if mid_word {
            while end > 0 && is_word_char(prefix[end - 1]) {
                end -= 1;
            }
        } else {
            end -= 1;
        }
        while end > 0 && !is_word_char(prefix[end - 1]) {
            end -= 1;
        }

        if end + self.ellipsis.chars().count() > total {
            return text.to_string();
        }

        let mut truncated: String = prefix[..end].iter().collect();
        truncated.push_str(&self.ellipsis);
        truncated
    }
}

/// Word characters are letters with distinct upper and lower case forms, plus
/// numeric digits. Everything else separates words.
fn is_word_char(c: char) -> bool {
    c.is_numeric() || c.to_uppercase().ne(c.to_lowercase())
}

/// Truncates `text` to at most `max_chars` characters plus the default
/// ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    Truncator::new(max_chars).truncate(text)
}

/// Truncates the textual representation of any displayable value.
pub fn truncate_display(value: impl Display, max_chars: usize) -> String {
    truncate(&value.to_string(), max_chars)
}
