//! Core runtime for linguadb: locales, field values, translation
//! records, the resolver, filter primitives, and observability, with
//! the ergonomics exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod fields;
pub mod filter;
pub mod fingerprint;
pub mod locale;
pub mod obs;
pub mod record;
pub mod resolve;
pub mod sanitize;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or encoding helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        fields::Fields,
        locale::Locale,
        record::{TranslationRecord, TranslationSet},
        resolve::{Localized, resolve, resolve_batch, resolve_tagged},
        types::Timestamp,
        value::Value,
    };
}
