//! Case conversion for editorial content, mostly slug derivation.

use convert_case::{Case, Casing};
use thiserror::Error as ThisError;

///
/// SlugError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,

    #[error("slug contains invalid character '{ch}' at byte {index}")]
    InvalidCharacter { ch: char, index: usize },

    #[error("slug has a leading or trailing hyphen")]
    EdgeHyphen,
}

/// Derive a URL slug from free-form text.
///
/// Lowercase kebab via `convert_case`, then a cleanup pass that keeps
/// only ASCII alphanumerics and single hyphens. Non-ASCII letters are
/// dropped rather than transliterated. May return an empty string when
/// the input has no usable characters.
#[must_use]
pub fn to_slug(text: &str) -> String {
    let kebab = text.trim().to_case(Case::Kebab);

    let mut slug = String::with_capacity(kebab.len());
    for ch in kebab.chars() {
        match ch {
            'a'..='z' | '0'..='9' => slug.push(ch),
            '-' | ' ' | '_' if !slug.ends_with('-') => slug.push('-'),
            _ => {}
        }
    }

    slug.trim_matches('-').to_string()
}

/// Validate that `slug` is already in canonical slug form.
pub fn ensure_slug(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(SlugError::EdgeHyphen);
    }

    for (index, ch) in slug.char_indices() {
        match ch {
            'a'..='z' | '0'..='9' | '-' => {}
            _ => return Err(SlugError::InvalidCharacter { ch, index }),
        }
    }

    Ok(())
}

///
/// TESTS
///
