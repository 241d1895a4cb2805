//! Case conversion
//!
//! camelCase, PascalCase, kebab-case, snake_case and Title Case conversion.
//! Word boundaries are found at separator characters, at lower/digit to
//! upper transitions (`fooBar`) and at the end of an acronym (`XMLHttp`).
//! Lowercasing is Unicode-aware but not locale-aware.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w").expect("word start pattern is valid"));

/// Options for [`to_camel_case`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CamelCaseOptions {
    /// Keep ASCII digits (`true`) or drop them before conversion
    pub preserve_numbers: bool,
    /// Characters treated as word separators; `None` means every
    /// non-alphanumeric character
    pub separator: Option<String>,
}

impl Default for CamelCaseOptions {
    fn default() -> Self {
        Self {
            preserve_numbers: true,
            separator: None,
        }
    }
}

/// Options for [`to_kebab_case`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KebabCaseOptions {
    /// String placed between words
    pub separator: String,
}

impl Default for KebabCaseOptions {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
        }
    }
}

fn is_separator(c: char, separators: Option<&str>) -> bool {
    match separators {
        Some(set) => set.contains(c),
        None => !c.is_alphanumeric(),
    }
}

/// Split input into words for case conversion
///
/// With an explicit separator set, other non-alphanumeric characters are
/// dropped without splitting the word they sit in.
fn split_words(input: &str, separators: Option<&str>) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c, separators) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !c.is_alphanumeric() {
            continue;
        }

        if c.is_uppercase() {
            if let Some(prev) = current.chars().last() {
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                let boundary = prev.is_lowercase()
                    || prev.is_numeric()
                    || (prev.is_uppercase() && next_is_lower);
                if boundary {
                    words.push(std::mem::take(&mut current));
                }
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Convert a string to camelCase
///
/// # Example
///
/// ```
/// use textkit_core::{to_camel_case, CamelCaseOptions};
///
/// let opts = CamelCaseOptions::default();
/// assert_eq!(to_camel_case("hello world", &opts), "helloWorld");
/// assert_eq!(to_camel_case("XMLHttpRequest", &opts), "xmlHttpRequest");
/// ```
pub fn to_camel_case(input: &str, opts: &CamelCaseOptions) -> String {
    let source: String = if opts.preserve_numbers {
        input.to_string()
    } else {
        input.chars().filter(|c| !c.is_ascii_digit()).collect()
    };

    split_words(&source, opts.separator.as_deref())
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

/// Convert a string to PascalCase
pub fn to_pascal_case(input: &str) -> String {
    split_words(input, None)
        .iter()
        .map(|word| capitalize(word))
        .collect()
}

/// Convert a string to kebab-case, joining words with `opts.separator`
pub fn to_kebab_case(input: &str, opts: &KebabCaseOptions) -> String {
    split_words(input, None)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(&opts.separator)
}

/// Convert a string to snake_case
pub fn to_snake_case(input: &str) -> String {
    to_kebab_case(
        input,
        &KebabCaseOptions {
            separator: "_".to_string(),
        },
    )
}

/// Convert a string to Title Case
///
/// Lowercases the input, then uppercases the first character of every word.
/// Whitespace and punctuation are left in place.
pub fn to_title_case(input: &str) -> String {
    let lowered = input.to_lowercase();
    WORD_START
        .replace_all(&lowered, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_boundaries() {
        assert_eq!(split_words("fooBar", None), vec!["foo", "Bar"]);
        assert_eq!(
            split_words("XMLHttpRequest", None),
            vec!["XML", "Http", "Request"]
        );
        assert_eq!(
            split_words("version2Update", None),
            vec!["version2", "Update"]
        );
        assert_eq!(
            split_words("  hello--world__again ", None),
            vec!["hello", "world", "again"]
        );
        assert!(split_words("", None).is_empty());
        assert!(split_words("--__", None).is_empty());
    }

    #[test]
    fn test_camel_case() {
        let opts = CamelCaseOptions::default();
        assert_eq!(to_camel_case("hello world", &opts), "helloWorld");
        assert_eq!(to_camel_case("Hello-World", &opts), "helloWorld");
        assert_eq!(to_camel_case("hello_big_world", &opts), "helloBigWorld");
        assert_eq!(to_camel_case("alreadyCamel", &opts), "alreadyCamel");
        assert_eq!(to_camel_case("PascalCase", &opts), "pascalCase");
        assert_eq!(to_camel_case("", &opts), "");
    }

    #[test]
    fn test_camel_case_numbers() {
        let keep = CamelCaseOptions::default();
        assert_eq!(to_camel_case("version 2 update", &keep), "version2Update");

        let drop = CamelCaseOptions {
            preserve_numbers: false,
            ..Default::default()
        };
        assert_eq!(to_camel_case("version 2 update", &drop), "versionUpdate");
    }

    #[test]
    fn test_camel_case_custom_separator() {
        let opts = CamelCaseOptions {
            separator: Some("|".to_string()),
            ..Default::default()
        };
        assert_eq!(to_camel_case("first|second", &opts), "firstSecond");
        // Not a separator here, so the word is not split.
        assert_eq!(to_camel_case("first-second", &opts), "firstsecond");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_pascal_case("some_snake_name"), "SomeSnakeName");
    }

    #[test]
    fn test_kebab_case() {
        let opts = KebabCaseOptions::default();
        assert_eq!(to_kebab_case("helloWorld", &opts), "hello-world");
        assert_eq!(to_kebab_case("Hello World", &opts), "hello-world");
        assert_eq!(to_kebab_case("hello_world", &opts), "hello-world");
        assert_eq!(to_kebab_case("already-kebab", &opts), "already-kebab");

        let dotted = KebabCaseOptions {
            separator: ".".to_string(),
        };
        assert_eq!(to_kebab_case("helloWorld", &dotted), "hello.world");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("helloWorld"), "hello_world");
        assert_eq!(to_snake_case("Hello World"), "hello_world");
        assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
        assert_eq!(to_snake_case("a"), "a");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(to_title_case("hello world"), "Hello World");
        assert_eq!(to_title_case("HELLO WORLD"), "Hello World");
        assert_eq!(to_title_case("hello, big-world!"), "Hello, Big-World!");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(to_snake_case("ÉcoleNormale"), "école_normale");
        assert_eq!(to_title_case("élan vital"), "Élan Vital");
    }
}
