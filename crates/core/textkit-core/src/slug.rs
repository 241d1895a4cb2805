//! Slug generation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("slug character pattern is valid"));

static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("separator run pattern is valid"));

/// Options for [`slugify`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugifyOptions {
    /// Lowercase the slug
    pub lowercase: bool,
    /// String placed between words
    pub separator: String,
    /// Strip combining marks after canonical decomposition (`é` -> `e`)
    pub remove_diacritics: bool,
}

impl Default for SlugifyOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            separator: "-".to_string(),
            remove_diacritics: true,
        }
    }
}

/// Strip diacritics by NFD-decomposing and dropping combining marks
pub fn remove_diacritics(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Turn arbitrary text into a URL-safe slug
///
/// Characters other than word characters, whitespace and `-` are dropped;
/// runs of whitespace, `_` and `-` become a single separator, and no
/// separator is left at either end.
///
/// # Example
///
/// ```
/// use textkit_core::{slugify, SlugifyOptions};
///
/// assert_eq!(slugify("Crème Brûlée!", &SlugifyOptions::default()), "creme-brulee");
/// ```
pub fn slugify(input: &str, opts: &SlugifyOptions) -> String {
    let mut text = if opts.remove_diacritics {
        remove_diacritics(input)
    } else {
        input.to_string()
    };

    if opts.lowercase {
        text = text.to_lowercase();
    }

    let cleaned = NON_SLUG_CHARS.replace_all(text.trim(), "");

    SEPARATOR_RUNS
        .split(&cleaned)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(&opts.separator)
}
