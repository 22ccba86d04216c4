//! The [`Value`] tree node and its primitive-kind tag.

use alloc::{string::String, vec::Vec};

use crate::{array::Array, error::AccessError, object::Object};

/// The kind of a primitive [`Value`]: everything except [`Value::Array`] and
/// [`Value::Object`].
///
/// Because `Value` already carries its kind as the enum discriminant, most
/// of the C source's `(payload, kind)` pairs collapse to a single `Value`
/// argument in this crate; `PrimitiveKind` survives only where an operation
/// needs to describe a *required* kind without supplying a value of it yet
/// (see [`Object::get_typed`] and [`crate::ArrayExt::get_typed`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// [`Value::Null`].
    Null,
    /// [`Value::Boolean`].
    Boolean,
    /// [`Value::Number`].
    Number,
    /// [`Value::String`].
    String,
}

/// A JSON value: one of null, boolean, number, string, array, or object.
///
/// `Array` is `Vec<Value>` and `Object` is an insertion-ordered multimap of
/// `(String, Value)` pairs (see [`crate::Object`]) — duplicate keys are
/// preserved rather than collapsed.
///
/// # Examples
///
/// ```
/// use jsondom::Value;
///
/// let v: Value = 3.5.into();
/// assert_eq!(v, Value::Number(3.5));
/// assert!(Value::Null.is_null());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// A JSON boolean.
    Boolean(bool),
    /// A JSON number, stored as a 64-bit IEEE-754 float. The parser never
    /// produces NaN or infinities, since the grammar forbids them.
    Number(f64),
    /// A JSON string.
    String(String),
    /// A JSON array: an ordered sequence of values.
    Array(Array),
    /// A JSON object: an insertion-ordered, duplicate-preserving sequence of
    /// key/value pairs.
    Object(Object),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(String::from(v))
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// An empty object, equivalent to parsing `"{}"`.
    #[must_use]
    pub fn new_object() -> Self {
        Self::Object(Object::new())
    }

    /// An empty array, equivalent to parsing `"[]"`.
    #[must_use]
    pub fn new_array() -> Self {
        Self::Array(Vec::new())
    }

    /// A string value, copying `s`.
    #[must_use]
    pub fn new_string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// A number value.
    #[must_use]
    pub fn new_number(n: f64) -> Self {
        Self::Number(n)
    }

    /// A boolean value.
    #[must_use]
    pub fn new_boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    /// Returns `true` if the value is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Value::Boolean`].
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Value::Number`].
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`Value::String`].
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Value::Array`].
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Value::Object`].
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The [`PrimitiveKind`] of this value, or `None` if it is an array or
    /// object.
    #[must_use]
    pub fn kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Null => Some(PrimitiveKind::Null),
            Self::Boolean(_) => Some(PrimitiveKind::Boolean),
            Self::Number(_) => Some(PrimitiveKind::Number),
            Self::String(_) => Some(PrimitiveKind::String),
            Self::Array(_) | Self::Object(_) => None,
        }
    }

    /// Borrows the inner `bool`, or `None` if this is not a boolean.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrows the inner `f64`, or `None` if this is not a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrows the inner string, or `None` if this is not a string.
    ///
    /// This is the "shallow copy" read from the source: callers get a
    /// reference tied to the tree's lifetime, never an owned duplicate.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Borrows the value as an [`Object`], or `Err(AccessError::NotObject)`
    /// if it isn't one.
    pub fn as_object(&self) -> Result<&Object, AccessError> {
        match self {
            Self::Object(o) => Ok(o),
            _ => Err(AccessError::NotObject),
        }
    }

    /// Mutably borrows the value as an [`Object`], or
    /// `Err(AccessError::NotObject)` if it isn't one.
    pub fn as_object_mut(&mut self) -> Result<&mut Object, AccessError> {
        match self {
            Self::Object(o) => Ok(o),
            _ => Err(AccessError::NotObject),
        }
    }

    /// Borrows the value as an [`Array`], or `Err(AccessError::NotArray)` if
    /// it isn't one.
    pub fn as_array(&self) -> Result<&Array, AccessError> {
        match self {
            Self::Array(a) => Ok(a),
            _ => Err(AccessError::NotArray),
        }
    }

    /// Mutably borrows the value as an [`Array`], or
    /// `Err(AccessError::NotArray)` if it isn't one.
    pub fn as_array_mut(&mut self) -> Result<&mut Array, AccessError> {
        match self {
            Self::Array(a) => Ok(a),
            _ => Err(AccessError::NotArray),
        }
    }

    /// The element/pair count of an array or object, or the byte length of a
    /// string; `None` for null, boolean, and number, which have no size.
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.len()),
            Self::Array(a) => Some(a.len()),
            Self::Object(o) => Some(o.len()),
            Self::Null | Self::Boolean(_) | Self::Number(_) => None,
        }
    }

    /// `true` if [`Value::size`] is `0` or `None`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size().is_none_or(|n| n == 0)
    }

    /// Compares two values as primitives: `true` only if both are the same
    /// primitive kind with equal payloads. Always `false` if either value is
    /// an array or object, since arrays and objects are not primitives.
    ///
    /// This replaces the source's `equals_primitive(value, payload, kind)`:
    /// since `self`/`other` already carry their kind, there is nothing left
    /// for a separate `kind` parameter to contribute.
    #[must_use]
    pub fn equals_primitive(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PrimitiveKind, Value};
    use crate::error::AccessError;

    #[test]
    fn kind_is_none_for_arrays_and_objects() {
        assert_eq!(Value::new_array().kind(), None);
        assert_eq!(Value::new_object().kind(), None);
        assert_eq!(Value::Null.kind(), Some(PrimitiveKind::Null));
    }

    #[test]
    fn as_object_and_as_array_reject_the_wrong_variant() {
        assert_eq!(Value::Null.as_object().unwrap_err(), AccessError::NotObject);
        assert_eq!(Value::Null.as_array().unwrap_err(), AccessError::NotArray);
    }

    #[test]
    fn size_is_none_for_scalars() {
        assert_eq!(Value::Null.size(), None);
        assert_eq!(Value::Boolean(true).size(), None);
        assert_eq!(Value::Number(1.0).size(), None);
        assert_eq!(Value::new_string("hi").size(), Some(2));
    }

    #[test]
    fn is_empty_treats_scalars_as_empty() {
        assert!(Value::Null.is_empty());
        assert!(Value::new_array().is_empty());
        assert!(!Value::new_string("x").is_empty());
    }

    #[test]
    fn equals_primitive_never_matches_complex_values() {
        assert!(!Value::new_array().equals_primitive(&Value::new_array()));
        assert!(!Value::new_object().equals_primitive(&Value::Null));
    }

    #[test]
    fn equals_primitive_requires_matching_kind_and_payload() {
        assert!(Value::Number(1.0).equals_primitive(&Value::Number(1.0)));
        assert!(!Value::Number(1.0).equals_primitive(&Value::Number(2.0)));
        assert!(!Value::Number(1.0).equals_primitive(&Value::new_string("1")));
    }

    #[test]
    fn from_conversions_tag_the_right_variant() {
        let v: Value = 3.5.into();
        assert_eq!(v, Value::Number(3.5));
        let v: Value = true.into();
        assert_eq!(v, Value::Boolean(true));
        let v: Value = "hi".into();
        assert_eq!(v, Value::String("hi".into()));
    }
}
