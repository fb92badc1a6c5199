use crate::sanitize::{LocaleTag, Sanitizer};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// Locale
///
/// Closed set of locales the platform serves. `En` is the fallback
/// locale: data-entry discipline (not a storage constraint) guarantees
/// every entity carries an `en` translation, so resolution degrades
/// toward it.
///
/// Variant order is canonical: it drives `rank`, the iteration order of
/// translation sets, and the deterministic last-resort pick.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ru,
    Uz,
}

impl Locale {
    pub const FALLBACK: Self = Self::En;

    /// Every supported locale, fallback first, in canonical order.
    pub const ALL: [Self; 3] = [Self::En, Self::Ru, Self::Uz];

    /// Lowercase tag used in storage rows and query clauses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Uz => "uz",
        }
    }

    /// Canonical position within [`Self::ALL`].
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::En => 0,
            Self::Ru => 1,
            Self::Uz => 2,
        }
    }

    /// Parse a user-supplied tag, degrading to the fallback locale.
    ///
    /// Callers hand us whatever arrived on the wire; an unknown or
    /// malformed tag is treated the same as an absent one and must
    /// never error.
    #[must_use]
    pub fn parse_lenient(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::FALLBACK)
    }

    /// Lenient parse of an optional tag (`None` means fallback).
    #[must_use]
    pub fn from_optional_tag(tag: Option<&str>) -> Self {
        tag.map_or(Self::FALLBACK, Self::parse_lenient)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// ParseLocaleError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unsupported locale tag: '{tag}'")]
pub struct ParseLocaleError {
    pub tag: String,
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Strict parse for boundaries that want validation.
    ///
    /// Tags go through the same [`LocaleTag`] normalization the
    /// data-entry side applies to stored tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tag = s.to_string();
        if LocaleTag.sanitize(&mut tag).is_err() {
            return Err(ParseLocaleError { tag });
        }

        match tag.as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            "uz" => Ok(Self::Uz),
            _ => Err(ParseLocaleError { tag }),
        }
    }
}

///
/// TESTS
///
