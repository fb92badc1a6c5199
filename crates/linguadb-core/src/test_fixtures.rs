//! Travel-domain fixtures shared by the resolver and fingerprint tests.

use crate::{
    fields::Fields,
    locale::Locale,
    record::{TranslationRecord, TranslationSet},
    resolve::Localized,
    types::{Timestamp, Ulid},
};

pub(crate) const BLOG_BODY: &str = "Across the Registan at dawn.";

///
/// Tour
/// Base fields only; all reader-facing text lives in translations.
///

pub(crate) struct Tour {
    pub id: Ulid,
    pub price: u64,
    pub featured: bool,
    pub created_at: Timestamp,
    pub translations: TranslationSet,
}

impl Localized for Tour {
    fn base_fields(&self) -> Fields {
        Fields::new()
            .with("id", self.id)
            .with("price", self.price)
            .with("featured", self.featured)
            .with("created_at", self.created_at)
    }

    fn translations(&self) -> &TranslationSet {
        &self.translations
    }
}

///
/// BlogPost
/// Carries a base `title` that translated titles shadow.
///

pub(crate) struct BlogPost {
    pub id: Ulid,
    pub title: &'static str,
    pub published: bool,
    pub translations: TranslationSet,
}

impl Localized for BlogPost {
    fn base_fields(&self) -> Fields {
        Fields::new()
            .with("id", self.id)
            .with("title", self.title)
            .with("published", self.published)
    }

    fn translations(&self) -> &TranslationSet {
        &self.translations
    }
}

/// One tour translation in `locale`, titled `title-<tag>`.
pub(crate) fn tour_record(locale: Locale) -> TranslationRecord {
    TranslationRecord::new(
        Ulid::from_parts(0, u128::from(locale.rank()) + 1),
        locale,
        Fields::new()
            .with("title", format!("title-{locale}"))
            .with("slug", format!("tour-{locale}")),
    )
    .with_timestamps(
        Timestamp::from_seconds(1_700_000_000),
        Timestamp::from_seconds(1_700_000_000 + u64::from(locale.rank())),
    )
}

/// A tour carrying translations for exactly `locales`.
pub(crate) fn tour(locales: &[Locale]) -> Tour {
    let records = locales.iter().copied().map(tour_record).collect();

    Tour {
        id: Ulid::from_parts(0, 42),
        price: 250,
        featured: true,
        created_at: Timestamp::from_seconds(1_690_000_000),
        translations: TranslationSet::try_from_records(records)
            .expect("fixture locales are distinct"),
    }
}

/// A blog post whose base `title` is shadowed by every translation.
pub(crate) fn blog_post(locales: &[Locale]) -> BlogPost {
    let records = locales
        .iter()
        .map(|&locale| {
            TranslationRecord::new(
                Ulid::from_parts(0, u128::from(locale.rank()) + 10),
                locale,
                Fields::new()
                    .with("title", format!("title-{locale}"))
                    .with("body", BLOG_BODY),
            )
        })
        .collect();

    BlogPost {
        id: Ulid::from_parts(0, 77),
        title: "untranslated",
        published: true,
        translations: TranslationSet::try_from_records(records)
            .expect("fixture locales are distinct"),
    }
}
