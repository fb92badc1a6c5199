use crate::{
    error::Error,
    fields::Fields,
    locale::Locale,
    sanitize::{CollapseWhitespace, Sanitizer, SlugText},
    types::{Timestamp, Ulid},
    value::Value,
};
use serde::{Deserialize, Serialize};

/// Content field that holds a URL slug and gets slug normalization
/// instead of plain whitespace collapsing.
const SLUG_FIELD: &str = "slug";

///
/// TranslationRecord
///
/// One entity's content in one locale.
///
/// Record metadata (`id`, `locale`, timestamps) lives outside the
/// content map, so flattening a record into a view cannot leak it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TranslationRecord {
    pub id: Ulid,
    pub locale: Locale,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Locale-dependent content fields (title, slug, description, …).
    /// Field names vary by entity type; the shape is homogeneous across
    /// records of one entity.
    pub content: Fields,
}

impl TranslationRecord {
    /// New record with epoch timestamps; the data-entry layer stamps
    /// real ones.
    #[must_use]
    pub const fn new(id: Ulid, locale: Locale, content: Fields) -> Self {
        Self {
            id,
            locale,
            created_at: Timestamp::EPOCH,
            updated_at: Timestamp::EPOCH,
            content,
        }
    }

    #[must_use]
    pub const fn with_timestamps(mut self, created_at: Timestamp, updated_at: Timestamp) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Normalize text content in place: whitespace collapsing for prose
    /// fields, slug normalization for the slug field.
    pub fn sanitize_content(&mut self) -> Result<(), Error> {
        for (key, value) in self.content.iter_mut() {
            let Value::Text(text) = value else {
                continue;
            };

            let result = if key == SLUG_FIELD {
                SlugText.sanitize(text)
            } else {
                CollapseWhitespace.sanitize(text)
            };

            if let Err(issue) = result {
                return Err(Error::sanitize_field(key, issue));
            }
        }

        Ok(())
    }
}

///
/// TranslationSet
///
/// The per-entity translation collection.
///
/// - At most one record per locale.
/// - Records are kept in canonical `Locale` rank order; insertion order
///   is discarded. The resolver's last-resort branch therefore picks a
///   deterministic record.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "Vec<TranslationRecord>", into = "Vec<TranslationRecord>")]
pub struct TranslationSet {
    records: Vec<TranslationRecord>,
}

impl TranslationSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build from records, rejecting duplicate locales.
    pub fn try_from_records(records: Vec<TranslationRecord>) -> Result<Self, Error> {
        let mut set = Self::new();

        for record in records {
            if set.contains(record.locale) {
                return Err(Error::duplicate_locale(record.locale));
            }
            set.insert(record);
        }

        Ok(set)
    }

    /// Upsert by locale, returning the replaced record if one existed.
    pub fn insert(&mut self, record: TranslationRecord) -> Option<TranslationRecord> {
        match self
            .records
            .binary_search_by_key(&record.locale.rank(), |r| r.locale.rank())
        {
            Ok(i) => Some(std::mem::replace(&mut self.records[i], record)),
            Err(i) => {
                self.records.insert(i, record);
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> Option<&TranslationRecord> {
        self.records.iter().find(|r| r.locale == locale)
    }

    /// First record in canonical order, if any.
    #[must_use]
    pub fn first(&self) -> Option<&TranslationRecord> {
        self.records.first()
    }

    #[must_use]
    pub fn contains(&self, locale: Locale) -> bool {
        self.get(locale).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, TranslationRecord> {
        self.records.iter()
    }

    /// Locales present, in canonical order.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.records.iter().map(|r| r.locale)
    }
}

impl TryFrom<Vec<TranslationRecord>> for TranslationSet {
    type Error = Error;

    fn try_from(records: Vec<TranslationRecord>) -> Result<Self, Self::Error> {
        Self::try_from_records(records)
    }
}

impl From<TranslationSet> for Vec<TranslationRecord> {
    fn from(set: TranslationSet) -> Self {
        set.records
    }
}

impl<'a> IntoIterator for &'a TranslationSet {
    type Item = &'a TranslationRecord;
    type IntoIter = std::slice::Iter<'a, TranslationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn record(locale: Locale, title: &str) -> TranslationRecord {
        TranslationRecord::new(
            Ulid::from_parts(0, locale.rank() as u128 + 1),
            locale,
            Fields::new().with("title", title),
        )
    }

    #[test]
    fn try_from_records_rejects_duplicate_locale() {
        let err = TranslationSet::try_from_records(vec![
            record(Locale::Ru, "a"),
            record(Locale::Ru, "b"),
        ])
        .unwrap_err();

        assert!(err.is_duplicate_locale());
    }

    #[test]
    fn insert_upserts_by_locale() {
        let mut set = TranslationSet::new();
        assert!(set.insert(record(Locale::En, "old")).is_none());

        let replaced = set.insert(record(Locale::En, "new")).unwrap();
        assert_eq!(replaced.content.get("title").unwrap().as_text(), Some("old"));
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(Locale::En).unwrap().content.get("title").unwrap().as_text(),
            Some("new")
        );
    }

    #[test]
    fn canonical_order_is_independent_of_insertion_order() {
        let mut set = TranslationSet::new();
        set.insert(record(Locale::Uz, "uz"));
        set.insert(record(Locale::En, "en"));
        set.insert(record(Locale::Ru, "ru"));

        let locales: Vec<Locale> = set.locales().collect();
        assert_eq!(locales, [Locale::En, Locale::Ru, Locale::Uz]);
        assert_eq!(set.first().unwrap().locale, Locale::En);
    }

    #[test]
    fn first_without_fallback_is_lowest_rank_present() {
        let mut set = TranslationSet::new();
        set.insert(record(Locale::Uz, "uz"));
        set.insert(record(Locale::Ru, "ru"));

        assert_eq!(set.first().unwrap().locale, Locale::Ru);
    }

    #[test]
    fn serde_round_trip() {
        let set = TranslationSet::try_from_records(vec![
            record(Locale::En, "en"),
            record(Locale::Ru, "ru"),
        ])
        .unwrap();

        let json = serde_json::to_string(&set).unwrap();
        let back: TranslationSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn serde_rejects_duplicate_locales() {
        let rows = vec![record(Locale::En, "a"), record(Locale::En, "b")];
        let json = serde_json::to_string(&rows).unwrap();

        let result: Result<TranslationSet, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn sanitize_content_collapses_prose_and_slugs() {
        let mut rec = TranslationRecord::new(
            Ulid::from_parts(0, 9),
            Locale::En,
            Fields::new()
                .with("title", "  Samarkand   City Tour ")
                .with("slug", "Samarkand City Tour")
                .with("days", 7u8),
        );

        rec.sanitize_content().unwrap();

        assert_eq!(
            rec.content.get("title").unwrap().as_text(),
            Some("Samarkand City Tour")
        );
        assert_eq!(
            rec.content.get("slug").unwrap().as_text(),
            Some("samarkand-city-tour")
        );
        assert_eq!(rec.content.get("days"), Some(&Value::Uint(7)));
    }

    #[test]
    fn sanitize_content_reports_the_offending_field() {
        let mut rec = TranslationRecord::new(
            Ulid::from_parts(0, 9),
            Locale::En,
            Fields::new().with("slug", "???"),
        );

        let err = rec.sanitize_content().unwrap_err();
        assert!(err.message.contains("slug"));
    }
}
