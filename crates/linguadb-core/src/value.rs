use crate::{
    locale::Locale,
    types::{Timestamp, Ulid},
};
use serde::{Deserialize, Serialize};

///
/// Value
///
/// Field payloads for base entities and translation content.
///
/// Null → the field's value is Option::None (i.e., SQL NULL).
///
/// The variant set is deliberately small: editorial content is text,
/// flags, counts, identifiers, timestamps, and lists of those. Anything
/// richer belongs to the data-access layer, not to flattened views.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Int(i64),
    /// Ordered list of values.
    /// List order is preserved through flattening and fingerprints.
    List(Vec<Self>),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from a list literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    /// Returns true if the value is Text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns true if the value is Null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    ///
    /// EMPTY
    ///

    /// Emptiness where the variant has a meaningful notion of it.
    #[must_use]
    pub const fn is_empty(&self) -> Option<bool> {
        match self {
            Self::List(xs) => Some(xs.is_empty()),
            Self::Text(s) => Some(s.is_empty()),

            // fields represented as Value::Null:
            Self::Null => Some(true),

            _ => None,
        }
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool      => Bool,
    i8        => Int,
    i16       => Int,
    i32       => Int,
    i64       => Int,
    &str      => Text,
    String    => Text,
    Timestamp => Timestamp,
    u8        => Uint,
    u16       => Uint,
    u32       => Uint,
    u64       => Uint,
    Ulid      => Ulid,
}

impl From<Locale> for Value {
    fn from(locale: Locale) -> Self {
        Self::Text(locale.as_str().to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

///
/// TESTS
///
