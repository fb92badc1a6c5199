//! Declarative filter expressions handed to the data-access layer.
//!
//! This crate never executes filters; it only shapes them. The two
//! domain helpers, [`translations_for_locale`] and [`translations_all`],
//! are the entire interface the resolver's callers need: exact-locale
//! fetches (no fallback at query time) and fetch-everything for
//! editing flows.

use crate::{error::Error, locale::Locale, value::Value};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Not};

/// Column holding the locale tag on translation rows.
pub const LOCALE_FIELD: &str = "locale";

/// Filter meaning "only translation rows in exactly this locale".
///
/// Read paths using this accept no-fallback-at-query-time semantics;
/// fallback, if wanted, happens in [`crate::resolve`] over a fully
/// fetched set.
#[must_use]
pub fn translations_for_locale(locale: Locale) -> FilterExpr {
    FilterExpr::eq(LOCALE_FIELD, locale)
}

/// Filter meaning "every translation row for the entity", used by
/// editing flows that show all locales at once.
#[must_use]
pub const fn translations_all() -> FilterExpr {
    FilterExpr::True
}

///
/// Cmp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Cmp {
    Eq,
    In,
    IsNone,
    IsSome,
    Ne,
    NotIn,
}

///
/// FilterClause
/// represents a basic comparison expression: `field cmp value`
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterClause {
    pub field: String,
    pub cmp: Cmp,
    pub value: Value,
}

impl FilterClause {
    #[must_use]
    pub fn new(field: impl Into<String>, cmp: Cmp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            cmp,
            value: value.into(),
        }
    }
}

///
/// FilterExpr
///
/// Logical filter expressions:
/// - `True` or `False` constants
/// - Single clauses comparing a field with a value
/// - Composite expressions: `And`, `Or`, and negation `Not`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum FilterExpr {
    #[default]
    True,
    False,
    Clause(FilterClause),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl FilterExpr {
    // --- Clause ---

    /// Create a single clause: `field cmp value`.
    pub fn clause(field: impl Into<String>, cmp: Cmp, value: impl Into<Value>) -> Self {
        Self::Clause(FilterClause::new(field, cmp, value))
    }

    // --- Equality ---

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::clause(field, Cmp::Eq, value)
    }

    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::clause(field, Cmp::Ne, value)
    }

    // --- Presence ---

    pub fn is_some(field: impl Into<String>) -> Self {
        Self::clause(field, Cmp::IsSome, Value::Null)
    }

    pub fn is_none(field: impl Into<String>) -> Self {
        Self::clause(field, Cmp::IsNone, Value::Null)
    }

    // --- Membership ---

    pub fn in_iter<I>(field: impl Into<String>, vals: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::clause(
            field,
            Cmp::In,
            vals.into_iter().map(Into::into).collect::<Vec<_>>(),
        )
    }

    pub fn not_in_iter<I>(field: impl Into<String>, vals: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::clause(
            field,
            Cmp::NotIn,
            vals.into_iter().map(Into::into).collect::<Vec<_>>(),
        )
    }

    // --- Combinators ---

    /// Combine two expressions into an `And`, flattening nested `And`s
    /// (`(a AND b) AND c` becomes `AND[a,b,c]`).
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::And(mut a), Self::And(mut b)) => {
                a.append(&mut b);
                Self::And(a)
            }
            (Self::And(mut a), b) => {
                a.push(b);
                Self::And(a)
            }
            (a, Self::And(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::And(list)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// Combine two expressions into an `Or`, flattening like `and`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Or(mut a), Self::Or(mut b)) => {
                a.append(&mut b);
                Self::Or(a)
            }
            (Self::Or(mut a), b) => {
                a.push(b);
                Self::Or(a)
            }
            (a, Self::Or(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::Or(list)
            }
            (a, b) => Self::Or(vec![a, b]),
        }
    }

    /// Negate this expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Simplify constants and flatten nesting:
    /// - `NOT True` → `False`, `NOT False` → `True`, `NOT NOT x` → `x`
    /// - `And`/`Or` children are simplified and flattened
    /// - `And` short-circuits on `False` and drops `True` members
    /// - `Or` short-circuits on `True` and drops `False` members
    #[must_use]
    pub fn simplify(self) -> Self {
        match self {
            Self::Not(inner) => match *inner {
                Self::True => Self::False,
                Self::False => Self::True,
                Self::Not(inner2) => (*inner2).simplify(),
                x => Self::Not(Box::new(x.simplify())),
            },

            Self::And(children) => {
                let flat = Self::simplify_children(children, |e| matches!(e, Self::And(_)));

                if flat.iter().any(|e| matches!(e, Self::False)) {
                    Self::False
                } else {
                    let kept: Vec<_> = flat
                        .into_iter()
                        .filter(|e| !matches!(e, Self::True))
                        .collect();

                    match kept.len() {
                        0 => Self::True,
                        1 => kept.into_iter().next().unwrap(),
                        _ => Self::And(kept),
                    }
                }
            }

            Self::Or(children) => {
                let flat = Self::simplify_children(children, |e| matches!(e, Self::Or(_)));

                if flat.iter().any(|e| matches!(e, Self::True)) {
                    Self::True
                } else {
                    let kept: Vec<_> = flat
                        .into_iter()
                        .filter(|e| !matches!(e, Self::False))
                        .collect();

                    match kept.len() {
                        0 => Self::False,
                        1 => kept.into_iter().next().unwrap(),
                        _ => Self::Or(kept),
                    }
                }
            }

            // Clauses and constants are already simplest forms
            x => x,
        }
    }

    fn simplify_children(children: Vec<Self>, flatten_if: fn(&Self) -> bool) -> Vec<Self> {
        let mut flat = Vec::with_capacity(children.len());

        for child in children {
            let simplified = child.simplify();
            if flatten_if(&simplified) {
                if let Self::And(nested) | Self::Or(nested) = simplified {
                    flat.extend(nested);
                }
            } else {
                flat.push(simplified);
            }
        }

        flat
    }

    /// Check every clause against the fields a row actually has.
    ///
    /// Rejecting unknown fields here keeps typos from silently matching
    /// nothing at the store.
    pub fn validate(&self, known_fields: &[&str]) -> Result<(), Error> {
        match self {
            Self::True | Self::False => Ok(()),
            Self::Clause(clause) => {
                if known_fields.contains(&clause.field.as_str()) {
                    Ok(())
                } else {
                    Err(Error::filter_unsupported(format!(
                        "unknown field: '{}'",
                        clause.field
                    )))
                }
            }
            Self::And(children) | Self::Or(children) => {
                for child in children {
                    child.validate(known_fields)?;
                }
                Ok(())
            }
            Self::Not(inner) => inner.validate(known_fields),
        }
    }
}

///
/// Bit Operations
/// allow us to do | and & on expressions
///

impl BitAnd for FilterExpr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for FilterExpr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for FilterExpr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

///
/// TESTS
///
