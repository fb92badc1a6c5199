//! End-to-end flattening through the public surface: a caller-defined
//! entity, per-locale resolution, JSON at the boundary, and the
//! fingerprints a revalidation caller would compare.

use linguadb::prelude::*;

struct Tour {
    id: Ulid,
    price: u64,
    featured: bool,
    translations: TranslationSet,
}

impl Localized for Tour {
    fn base_fields(&self) -> Fields {
        Fields::new()
            .with("id", self.id)
            .with("price", self.price)
            .with("featured", self.featured)
    }

    fn translations(&self) -> &TranslationSet {
        &self.translations
    }
}

fn record(locale: Locale, title: &str, slug: &str) -> TranslationRecord {
    TranslationRecord::new(
        Ulid::from_parts(0, u128::from(locale.rank()) + 1),
        locale,
        Fields::new().with("title", title).with("slug", slug),
    )
    .with_timestamps(Timestamp::from_seconds(1_700_000_000), Timestamp::from_seconds(1_700_086_400))
}

fn sample_tour() -> Tour {
    let translations = TranslationSet::try_from_records(vec![
        record(Locale::En, "Samarkand City Tour", "samarkand-city-tour"),
        record(Locale::Ru, "Тур по Самарканду", "tur-po-samarkandu"),
    ])
    .expect("distinct locales");

    Tour {
        id: Ulid::from_parts(0, 42),
        price: 250,
        featured: true,
        translations,
    }
}

#[test]
fn resolves_and_serializes_per_locale() {
    let tour = sample_tour();

    let ru = resolve(&tour, Locale::Ru);
    let json = serde_json::to_value(&ru).unwrap();

    assert_eq!(json["title"], serde_json::json!({"Text": "Тур по Самарканду"}));
    assert_eq!(json["price"], serde_json::json!({"Uint": 250}));
    assert!(json.get("locale").is_none());
    assert!(json.get("translations").is_none());
}

#[test]
fn fallback_and_batch_through_the_facade() {
    let tours = vec![sample_tour(), sample_tour()];

    // uz is absent: served from en
    let views = resolve_batch(&tours, Locale::Uz);
    assert_eq!(views.len(), 2);
    for view in &views {
        assert_eq!(
            view.get("title").unwrap().as_text(),
            Some("Samarkand City Tour")
        );
    }

    // and a garbage tag from the query string behaves the same
    let lenient = resolve_tagged(&tours[0], Some("de-AT"));
    assert_eq!(lenient, views[0]);
}

#[test]
fn fingerprints_distinguish_locales_and_track_edits() {
    let mut tour = sample_tour();

    let before_en = fingerprint(&resolve(&tour, Locale::En));
    let before_ru = fingerprint(&resolve(&tour, Locale::Ru));
    assert_ne!(before_en, before_ru);

    // edit the ru title; only the ru view's fingerprint moves
    let mut edited = record(Locale::Ru, "Тур по Самарканду (2024)", "tur-po-samarkandu");
    edited.sanitize_content().unwrap();
    tour.translations.insert(edited);

    assert_eq!(fingerprint(&resolve(&tour, Locale::En)), before_en);
    assert_ne!(fingerprint(&resolve(&tour, Locale::Ru)), before_ru);
}

#[test]
fn query_shaping_helpers_compose() {
    let exact = translations_for_locale(Locale::Uz);
    match &exact {
        FilterExpr::Clause(clause) => {
            assert_eq!(clause.field, "locale");
            assert_eq!(clause.cmp, Cmp::Eq);
            assert_eq!(clause.value, Value::Text("uz".to_string()));
        }
        _ => panic!("expected a single clause"),
    }

    assert_eq!(translations_all(), FilterExpr::True);
    assert_eq!(
        (exact.clone() & translations_all()).simplify(),
        exact
    );
}
