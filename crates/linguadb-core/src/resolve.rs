//! The translation resolver: pick the best record for a requested
//! locale and flatten it onto the entity's base fields.
//!
//! Resolution is total. A missing locale falls back silently; an entity
//! with no translations resolves to its base fields unchanged. The only
//! observable effect besides the return value is one telemetry event
//! per call.

use crate::{
    fields::Fields,
    locale::Locale,
    obs::{self, ResolveEvent},
    record::{TranslationRecord, TranslationSet},
};

///
/// Localized
///
/// Minimal capability an entity needs to be resolvable: its
/// locale-independent fields and its translation collection. The
/// translations collection is not part of `base_fields` by
/// construction, so it can never appear in a flattened view.
///

pub trait Localized {
    /// Locale-independent fields (ids, prices, flags, timestamps, …).
    fn base_fields(&self) -> Fields;

    /// The entity's per-locale translation records.
    fn translations(&self) -> &TranslationSet;
}

/// Select the record serving `locale`, first match wins:
///
/// 1. the record for `locale` itself;
/// 2. the record for [`Locale::FALLBACK`];
/// 3. the first record in canonical order (best-effort);
/// 4. none, when the set is empty.
#[must_use]
pub fn select_translation(set: &TranslationSet, locale: Locale) -> Option<&TranslationRecord> {
    set.get(locale)
        .or_else(|| set.get(Locale::FALLBACK))
        .or_else(|| set.first())
}

/// Flatten `entity` into a single view in `locale`.
///
/// Base fields come first; the selected record's content fields are
/// overlaid on top and win any name collision. Record metadata (id,
/// locale, timestamps) never appears in the output.
pub fn resolve<E: Localized>(entity: &E, locale: Locale) -> Fields {
    let mut view = entity.base_fields();

    match select_translation(entity.translations(), locale) {
        Some(record) => {
            obs::record(classify(locale, record.locale));
            view.overlay(record.content.clone());
        }
        None => obs::record(ResolveEvent::Miss { requested: locale }),
    }

    view
}

/// Lenient entry point for user-supplied locale tags.
///
/// Unknown, malformed, or absent tags resolve in the fallback locale;
/// this path never errors.
pub fn resolve_tagged<E: Localized>(entity: &E, tag: Option<&str>) -> Fields {
    resolve(entity, Locale::from_optional_tag(tag))
}

/// Resolve every entity independently, preserving input order and
/// length.
pub fn resolve_batch<E: Localized>(entities: &[E], locale: Locale) -> Vec<Fields> {
    entities.iter().map(|e| resolve(e, locale)).collect()
}

/// Classify which branch of the chain served the request.
fn classify(requested: Locale, served: Locale) -> ResolveEvent {
    if served == requested {
        ResolveEvent::Hit { locale: requested }
    } else if served == Locale::FALLBACK {
        ResolveEvent::Fallback { requested }
    } else {
        ResolveEvent::LastResort { requested, served }
    }
}

///
/// TESTS
///


///
/// PROPTESTS
///
