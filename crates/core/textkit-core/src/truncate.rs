//! Truncation
//!
//! Lengths are counted in chars, so multi-byte text is never split inside
//! a code point.

use serde::{Deserialize, Serialize};

fn default_suffix() -> String {
    "...".to_string()
}

/// Options for [`truncate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruncateOptions {
    /// Maximum number of chars kept from the input (suffix not included)
    pub length: usize,
    /// Appended when the input is cut
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Cut back to the last whitespace instead of splitting a word
    #[serde(default)]
    pub preserve_words: bool,
}

impl TruncateOptions {
    /// Options with the given length, `"..."` suffix and no word preservation
    pub fn new(length: usize) -> Self {
        Self {
            length,
            suffix: default_suffix(),
            preserve_words: false,
        }
    }

    /// Set the suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Enable or disable word preservation
    pub fn with_preserve_words(mut self, preserve_words: bool) -> Self {
        self.preserve_words = preserve_words;
        self
    }
}

/// Truncate a string to `opts.length` chars, appending `opts.suffix`
///
/// Input that already fits is returned unchanged. With `preserve_words`,
/// a cut that lands inside a word moves back to the preceding whitespace
/// (unless the first word alone is longer than `length`).
///
/// # Example
///
/// ```
/// use textkit_core::{truncate, TruncateOptions};
///
/// assert_eq!(truncate("Hello World", &TruncateOptions::new(5)), "Hello...");
/// assert_eq!(truncate("Hi", &TruncateOptions::new(5)), "Hi");
/// ```
pub fn truncate(input: &str, opts: &TruncateOptions) -> String {
    let byte_end = match input.char_indices().nth(opts.length) {
        Some((idx, _)) => idx,
        None => return input.to_string(),
    };

    let mut kept = &input[..byte_end];

    if opts.preserve_words {
        let mid_word = input[byte_end..]
            .chars()
            .next()
            .is_some_and(|next| !next.is_whitespace());
        if mid_word {
            if let Some(idx) = kept.rfind(char::is_whitespace) {
                if idx > 0 {
                    kept = &kept[..idx];
                }
            }
        }
    }

    format!("{}{}", kept.trim_end(), opts.suffix)
}
