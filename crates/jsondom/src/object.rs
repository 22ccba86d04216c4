//! The [`Object`] type: an insertion-ordered, duplicate-preserving multimap
//! of JSON object pairs.

use alloc::{string::String, vec::Vec};
use core::slice;

use crate::{error::AccessError, value::PrimitiveKind, Value};

/// A JSON object.
///
/// Backed by `Vec<(String, Value)>` rather than a hash map: JSON objects may
/// contain duplicate keys, and this crate preserves them (and their
/// insertion order) instead of silently collapsing them the way a
/// `HashMap`/`BTreeMap` would. Lookups use first-hit semantics; [`remove`]
/// deletes every matching pair.
///
/// [`remove`]: Object::remove
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    pairs: Vec<(String, Value)>,
}

impl Object {
    /// An empty object.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Number of pairs, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` if the object has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `true` if any pair's key equals `key`.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// `true` if any pair's value equals `value` under
    /// [`Value::equals_primitive`] (always `false` for a complex `value`).
    #[must_use]
    pub fn has_value(&self, value: &Value) -> bool {
        self.pairs.iter().any(|(_, v)| v.equals_primitive(value))
    }

    /// The first value stored under `key`, or `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Mutably borrows the first value stored under `key`, or `None`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.pairs.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The first value stored under `key`, requiring it to have the given
    /// [`PrimitiveKind`].
    ///
    /// Returns `Err(AccessError::NotFound)` if no pair has that key, or
    /// `Err(AccessError::InvalidInput)` if the key exists but the stored
    /// value has a different kind (including being an array or object).
    pub fn get_typed(&self, key: &str, kind: PrimitiveKind) -> Result<&Value, AccessError> {
        match self.get(key) {
            None => Err(AccessError::NotFound),
            Some(v) if v.kind() == Some(kind) => Ok(v),
            Some(_) => Err(AccessError::InvalidInput),
        }
    }

    /// The string stored under `key`, or `None` if absent or not a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_typed(key, PrimitiveKind::String).ok().and_then(Value::as_str)
    }

    /// The number stored under `key`, or `None` if absent or not a number.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get_typed(key, PrimitiveKind::Number).ok().and_then(Value::as_number)
    }

    /// The boolean stored under `key`, or `None` if absent or not a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_typed(key, PrimitiveKind::Boolean).ok().and_then(Value::as_boolean)
    }

    /// All values, in insertion order, as an owned `Vec` of borrowed
    /// references.
    ///
    /// Corresponds to the source's `get_all`, which returns a newly
    /// allocated null-terminated array: the null terminator has no
    /// counterpart here since `Vec::len` is already authoritative.
    #[must_use]
    pub fn values(&self) -> Vec<&Value> {
        self.pairs.iter().map(|(_, v)| v).collect()
    }

    /// Iterates over `(key, value)` pairs in insertion order. Zero-allocation
    /// alternative to [`Object::values`] for the common read-only traversal
    /// case.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.pairs.iter() }
    }

    /// Sets the value stored under `key`, whether primitive or complex.
    ///
    /// If a pair with this key already exists, its value is replaced
    /// in-place (the old value is dropped). Otherwise a new pair is
    /// appended, with `key` duplicated into an owned `String`.
    ///
    /// This is the general form the source splits into `put_primitive` and
    /// `put_complex`; since `Value` already tags its own kind, one setter
    /// suffices for both. Those two names are still available as thin,
    /// kind-checked wrappers below for callers that want the source's exact
    /// split.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.get_mut(&key) {
            *slot = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    /// [`Object::put`], but rejects arrays and objects with
    /// `Err(AccessError::InvalidInput)`.
    pub fn put_primitive(&mut self, key: impl Into<String>, value: Value) -> Result<(), AccessError> {
        if value.kind().is_none() {
            return Err(AccessError::InvalidInput);
        }
        self.put(key, value);
        Ok(())
    }

    /// [`Object::put`], but requires `value` to be an array, object, or
    /// null, returning `Err(AccessError::ValueInvalid)` for any other
    /// primitive.
    pub fn put_complex(&mut self, key: impl Into<String>, value: Value) -> Result<(), AccessError> {
        match value {
            Value::Array(_) | Value::Object(_) | Value::Null => {
                self.put(key, value);
                Ok(())
            }
            _ => Err(AccessError::ValueInvalid),
        }
    }

    /// Appends `(key, value)` without checking for an existing key.
    ///
    /// Used by the parser to preserve duplicate keys verbatim as they are
    /// read off the wire; [`Object::put`] instead replaces on a matching
    /// key. Not exposed outside the crate, since "append a possible
    /// duplicate" is a parsing concern, not a mutation-API one.
    pub(crate) fn push_pair(&mut self, key: String, value: Value) {
        self.pairs.push((key, value));
    }

    /// Removes every pair whose key equals `key`, preserving the relative
    /// order of survivors. Returns the number of pairs removed.
    pub fn remove(&mut self, key: &str) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        before - self.pairs.len()
    }
}

impl core::fmt::Display for Object {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::serialize(&Value::Object(self.clone()), 0))
    }
}

/// Borrowing, insertion-order iterator over an [`Object`]'s pairs.
///
/// Constructed by [`Object::iter`] or `(&Object).into_iter()`; stands in for
/// the source's cursor-plus-sentinel pattern (`next()` returning `None` is
/// the sentinel).
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut obj = Self::new();
        for (k, v) in iter {
            obj.put(k, v);
        }
        obj
    }
}
