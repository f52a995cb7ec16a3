//! Identifier sanitization and case conversion.
//!
//! Codenames coming out of the CMS are human-assigned machine names: they
//! may contain spaces, punctuation, leading digits, or nothing usable at
//! all. [`sanitize`] turns them into PascalCase identifiers that every
//! other component keys on; [`to_snake_case`] and [`to_screaming_snake_case`]
//! derive the emitted Rust field and constant spellings from that
//! identifier.
//!
//! Sanitization is pure and deterministic: the same input always yields
//! the same identifier, and re-sanitizing an identifier is a no-op.

use proc_macro2::{Ident, Span};

use crate::errors::GeneratorError;

/// Rust keywords that cannot be used as emitted field names directly.
///
/// Fields whose snake_case spelling lands on one of these are emitted as
/// raw identifiers (`r#type`). Covers strict and reserved keywords; the
/// path keywords that cannot even be raw identifiers live in
/// [`RAW_FORBIDDEN`].
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Keywords rejected even as raw identifiers (`r#self` is not a thing);
/// these fall back to a trailing underscore.
const RAW_FORBIDDEN: &[&str] = &["crate", "self", "Self", "super"];

/// Sanitizes a raw codename into a PascalCase identifier.
///
/// Every character outside `[A-Za-z0-9]` becomes a word separator; leading
/// digits and separators are stripped; the remaining words are concatenated
/// with their first letters uppercased. Interior casing is preserved, so
/// embedded numbers and acronyms survive untouched.
///
/// ## Examples
///
/// ```
/// use stencil_gen::identifier::sanitize;
///
/// assert_eq!(sanitize("Article type").unwrap(), "ArticleType");
/// assert_eq!(sanitize("  123Name123").unwrap(), "Name123");
/// assert_eq!(sanitize("url_slug").unwrap(), "UrlSlug");
/// assert!(sanitize("!!!").is_err());
/// ```
///
/// ## Errors
///
/// Returns [`GeneratorError::InvalidIdentifier`] when nothing usable
/// remains after stripping (e.g. a codename of only digits or punctuation).
pub fn sanitize(name: &str) -> Result<String, GeneratorError> {
    let separated: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    // Leading digits cannot start an identifier; drop them along with any
    // leading separators, including digits that follow stripped separators.
    let trimmed = separated.trim_start_matches(|c: char| c == '_' || c.is_ascii_digit());

    if trimmed.is_empty() {
        return Err(GeneratorError::InvalidIdentifier {
            name: name.to_string(),
        });
    }

    Ok(trimmed
        .split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect())
}

/// Uppercases the first letter of a word, preserving the rest.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Converts a PascalCase identifier to snake_case.
///
/// Word boundaries are case transitions: a lowercase-to-uppercase edge,
/// or the last capital of an acronym run followed by lowercase.
///
/// ## Examples
///
/// ```
/// use stencil_gen::identifier::to_snake_case;
///
/// assert_eq!(to_snake_case("ArticleType"), "article_type");
/// assert_eq!(to_snake_case("URLSlug"), "url_slug");
/// assert_eq!(to_snake_case("Name123"), "name123");
/// ```
pub fn to_snake_case(identifier: &str) -> String {
    split_pascal_words(identifier)
        .into_iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Converts a PascalCase identifier to SCREAMING_SNAKE_CASE.
///
/// Used for emitted codename constants (`TITLE_CODENAME`).
pub fn to_screaming_snake_case(identifier: &str) -> String {
    split_pascal_words(identifier)
        .into_iter()
        .map(|w| w.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Builds the emitted field identifier for a snake_case name.
///
/// Names that collide with Rust keywords become raw identifiers so the
/// emitted struct still parses (`pub r#type: String`). The path keywords
/// `crate`/`self`/`Self`/`super` cannot be raw identifiers at all and get
/// a trailing underscore instead (`pub self_`); callers detect the changed
/// spelling and emit a serde rename for it.
pub fn field_ident(snake: &str) -> Ident {
    if RAW_FORBIDDEN.contains(&snake) {
        Ident::new(&format!("{snake}_"), Span::call_site())
    } else if RUST_KEYWORDS.contains(&snake) {
        Ident::new_raw(snake, Span::call_site())
    } else {
        Ident::new(snake, Span::call_site())
    }
}

/// Splits a PascalCase string into words.
///
/// Handles acronym runs the same way the emitted SDK names do:
/// - "ArticleType" -> ["Article", "Type"]
/// - "URLSlug" -> ["URL", "Slug"]
/// - "Name123" -> ["Name123"]
fn split_pascal_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut word_start = 0;
    let chars: Vec<char> = s.chars().collect();

    for i in 1..chars.len() {
        let current = chars[i];
        let prev = chars[i - 1];

        let is_new_word = current.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (i + 1 < chars.len() && chars[i + 1].is_lowercase() && prev.is_uppercase()));

        if is_new_word {
            if i > word_start {
                words.push(&s[word_start..i]);
            }
            word_start = i;
        }
    }

    if word_start < s.len() {
        words.push(&s[word_start..]);
    }

    words
}
