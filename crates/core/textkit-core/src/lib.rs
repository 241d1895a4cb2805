//! Textkit Core
//!
//! Stateless string helpers:
//!
//! - Case conversion (camel, Pascal, kebab, snake, title)
//! - Truncation and slug generation
//! - Word extraction, word counting and whitespace normalization
//! - HTML escaping
//! - Email and URL validation
//! - Random string generation
//! - Normalized Levenshtein similarity
//!
//! Every helper is a pure function over its input. The [`config`] and
//! [`logger`] modules are there for applications that want crate-wide
//! defaults from the environment and a ready-made `tracing` subscriber.
//!
//! # Example
//!
//! ```
//! use textkit_core::*;
//!
//! assert_eq!(to_snake_case("parseXMLDocument"), "parse_xml_document");
//! assert_eq!(slugify("Hello, World!", &SlugifyOptions::default()), "hello-world");
//! assert!(similarity("kitten", "sitting") > 0.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod config;
pub mod error;
pub mod html;
pub mod logger;
pub mod random;
pub mod similarity;
pub mod slug;
pub mod truncate;
pub mod validation;
pub mod words;

// Re-export main types
pub use case::{
    to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, to_title_case,
    CamelCaseOptions, KebabCaseOptions,
};
pub use config::{
    get_env_bool, get_env_int, get_env_or, load_env, load_env_from_path, TextkitConfig,
};
pub use error::{Result, TextkitError};
pub use html::{escape_html, unescape_html};
pub use logger::init_logging;
pub use random::{
    random_string, random_string_with, random_string_with_rng, DEFAULT_CHARSET,
    DEFAULT_RANDOM_LENGTH,
};
pub use similarity::{closest_match, edit_distance, similarity};
pub use slug::{remove_diacritics, slugify, SlugifyOptions};
pub use truncate::{truncate, TruncateOptions};
pub use validation::{is_email, is_url};
pub use words::{extract_words, normalize_whitespace, word_count};
