//! Content hygiene applied by the data-entry side before records are
//! stored.
//!
//! Sanitization is total where possible; the only failure mode is a
//! value that reduces to nothing (e.g. a slug with no usable
//! characters).

use linguadb_utils::case;
use thiserror::Error as ThisError;

///
/// SanitizeIssue
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SanitizeIssue {
    #[error("value reduced to an empty string")]
    Emptied,
}

///
/// Sanitizer
///
/// In-place normalization of one value.
///

pub trait Sanitizer<T: ?Sized> {
    fn sanitize(&self, value: &mut T) -> Result<(), SanitizeIssue>;
}

///
/// LocaleTag
/// Trims and lowercases the tag
///

pub struct LocaleTag;

impl Sanitizer<String> for LocaleTag {
    fn sanitize(&self, value: &mut String) -> Result<(), SanitizeIssue> {
        // trim in place
        let trimmed = value.trim();

        if trimmed.len() != value.len() {
            *value = trimmed.to_owned();
        }

        // lowercase in place (ASCII)
        value.make_ascii_lowercase();

        Ok(())
    }
}

///
/// CollapseWhitespace
///
/// Trims the value and collapses internal whitespace runs to single
/// spaces.
///

pub struct CollapseWhitespace;

impl Sanitizer<String> for CollapseWhitespace {
    fn sanitize(&self, value: &mut String) -> Result<(), SanitizeIssue> {
        let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");

        if collapsed != *value {
            *value = collapsed;
        }

        Ok(())
    }
}

///
/// SlugText
///
/// Normalizes the value into canonical slug form. Fails when nothing
/// usable remains.
///

pub struct SlugText;

impl Sanitizer<String> for SlugText {
    fn sanitize(&self, value: &mut String) -> Result<(), SanitizeIssue> {
        let slug = case::to_slug(value);

        if case::ensure_slug(&slug).is_err() {
            return Err(SanitizeIssue::Emptied);
        }

        if slug != *value {
            *value = slug;
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tag_trims_and_lowercases() {
        let mut tag = "  RU ".to_string();
        LocaleTag.sanitize(&mut tag).unwrap();
        assert_eq!(tag, "ru");
    }

    #[test]
    fn collapse_whitespace() {
        let mut text = "  Silk   Road\t tour \n".to_string();
        CollapseWhitespace.sanitize(&mut text).unwrap();
        assert_eq!(text, "Silk Road tour");
    }

    #[test]
    fn collapse_whitespace_is_idempotent() {
        let mut text = "Silk Road tour".to_string();
        CollapseWhitespace.sanitize(&mut text).unwrap();
        assert_eq!(text, "Silk Road tour");
    }

    #[test]
    fn slug_text_normalizes() {
        let mut slug = "Samarkand City Tour".to_string();
        SlugText.sanitize(&mut slug).unwrap();
        assert_eq!(slug, "samarkand-city-tour");
    }

    #[test]
    fn slug_text_rejects_unusable_input() {
        let mut slug = "   ".to_string();
        assert_eq!(
            SlugText.sanitize(&mut slug),
            Err(SanitizeIssue::Emptied)
        );
    }
}
