//! ## Crate layout
//! - `core`: runtime locales, values, records, the resolver, filters,
//!   and observability.
//! - `utils`: case conversion and stable hashing helpers.
//!
//! The `prelude` module mirrors the runtime surface callers use when
//! flattening content for a request.

pub use linguadb_core as core;
pub use linguadb_utils as utils;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use linguadb_core::error::Error;

///
/// Prelude
/// domain vocabulary plus the serde derives caller types lean on
///

pub mod prelude {
    pub use crate::core::{
        fields::Fields,
        filter::{Cmp, FilterClause, FilterExpr, translations_all, translations_for_locale},
        fingerprint::fingerprint,
        locale::Locale,
        record::{TranslationRecord, TranslationSet},
        resolve::{Localized, resolve, resolve_batch, resolve_tagged, select_translation},
        types::{Timestamp, Ulid},
        value::Value,
    };
    pub use serde::{Deserialize, Serialize};
}
