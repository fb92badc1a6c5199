//! Stable fingerprints of flattened views.
//!
//! Callers that signal cache revalidation to a public renderer compare
//! fingerprints across content mutations; an unchanged fingerprint
//! means the cached page can stand. The encoding is canonical (entries
//! in key order, every segment length-prefixed or fixed-width), so
//! equal views always produce equal fingerprints.

use crate::{fields::Fields, value::Value};
use linguadb_utils::hash::hash64;

// Canonical value tags. Stable across releases; fingerprints are
// persisted by callers.
const TAG_BOOL: u8 = 1;
const TAG_INT: u8 = 2;
const TAG_LIST: u8 = 3;
const TAG_NULL: u8 = 4;
const TAG_TEXT: u8 = 5;
const TAG_TIMESTAMP: u8 = 6;
const TAG_UINT: u8 = 7;
const TAG_ULID: u8 = 8;

/// Stable 64-bit fingerprint of a flattened view.
#[must_use]
pub fn fingerprint(fields: &Fields) -> u64 {
    let mut buf = Vec::with_capacity(64);
    encode_fields(fields, &mut buf);

    hash64(&buf)
}

/// Canonical byte encoding of a field map.
fn encode_fields(fields: &Fields, buf: &mut Vec<u8>) {
    encode_len(fields.len(), buf);

    for (key, value) in fields.iter() {
        encode_len(key.len(), buf);
        buf.extend_from_slice(key.as_bytes());
        encode_value(value, buf);
    }
}

fn encode_value(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Bool(b) => {
            buf.push(TAG_BOOL);
            buf.push(u8::from(*b));
        }
        Value::Int(i) => {
            buf.push(TAG_INT);
            buf.extend_from_slice(&i.to_be_bytes());
        }
        Value::List(items) => {
            buf.push(TAG_LIST);
            encode_len(items.len(), buf);
            for item in items {
                encode_value(item, buf);
            }
        }
        Value::Null => buf.push(TAG_NULL),
        Value::Text(s) => {
            buf.push(TAG_TEXT);
            encode_len(s.len(), buf);
            buf.extend_from_slice(s.as_bytes());
        }
        Value::Timestamp(t) => {
            buf.push(TAG_TIMESTAMP);
            buf.extend_from_slice(&t.get().to_be_bytes());
        }
        Value::Uint(u) => {
            buf.push(TAG_UINT);
            buf.extend_from_slice(&u.to_be_bytes());
        }
        Value::Ulid(id) => {
            buf.push(TAG_ULID);
            buf.extend_from_slice(&id.to_u128().to_be_bytes());
        }
    }
}

fn encode_len(len: usize, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&(len as u64).to_be_bytes());
}

///
/// TESTS
///
