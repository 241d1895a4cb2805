//! Word extraction, counting and whitespace normalization

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Extract words (maximal runs of word characters) in their original order
///
/// Case is preserved. Returns an empty vector when the input has no word
/// characters.
///
/// # Example
///
/// ```
/// use textkit_core::extract_words;
///
/// assert_eq!(
///     extract_words("Hello, world! How are you?"),
///     vec!["Hello", "world", "How", "are", "you"]
/// );
/// ```
pub fn extract_words(input: &str) -> Vec<String> {
    WORD.find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count word occurrences, case-insensitively
///
/// Keys are the lowercased words.
pub fn word_count(input: &str) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in WORD.find_iter(input) {
        *counts.entry(word.as_str().to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// Collapse every whitespace run into a single space and trim both ends
pub fn normalize_whitespace(input: &str) -> String {
    WHITESPACE_RUNS.replace_all(input.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_words() {
        assert_eq!(
            extract_words("Hello, world! How are you?"),
            vec!["Hello", "world", "How", "are", "you"]
        );
    }

    #[test]
    fn test_extract_words_empty() {
        assert!(extract_words("").is_empty());
        assert!(extract_words("... !!! ---").is_empty());
    }

    #[test]
    fn test_extract_words_keeps_digits_and_underscores() {
        assert_eq!(
            extract_words("snake_case v2 don't"),
            vec!["snake_case", "v2", "don", "t"]
        );
    }

    #[test]
    fn test_word_count() {
        let counts = word_count("hello world hello");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["hello"], 2);
        assert_eq!(counts["world"], 1);
    }

    #[test]
    fn test_word_count_case_insensitive() {
        let counts = word_count("Rust rust RUST, go");
        assert_eq!(counts["rust"], 3);
        assert_eq!(counts["go"], 1);
        assert!(!counts.contains_key("Rust"));
    }

    #[test]
    fn test_word_count_empty() {
        assert!(word_count("   ").is_empty());
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  hello   world  "), "hello world");
        assert_eq!(normalize_whitespace("a\t\tb\n\nc"), "a b c");
        assert_eq!(normalize_whitespace("already normal"), "already normal");
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_normalize_unicode_whitespace() {
        assert_eq!(normalize_whitespace("a\u{00A0}\u{2003}b"), "a b");
    }
}
