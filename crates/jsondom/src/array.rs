//! Typed, primitive-aware operations over JSON arrays.
//!
//! A JSON array is just `Vec<Value>` — there is no dedicated wrapper struct,
//! since `Vec` already gives ordered storage, amortized growth, and safe
//! indexed access for free. [`ArrayExt`] adds the kind-checked accessors and
//! mutators the source specifies, as an extension trait over `Vec<Value>`.

use alloc::vec::Vec;

use crate::{error::AccessError, value::PrimitiveKind, Value};

/// A JSON array: an ordered sequence of [`Value`]s.
pub type Array = Vec<Value>;

/// Typed accessors and mutators for [`Array`], mirroring the
/// [`Object`](crate::Object) API's kind-checked operations.
pub trait ArrayExt {
    /// The element at `index`, requiring it to have the given
    /// [`PrimitiveKind`].
    ///
    /// `Err(AccessError::NotFound)` if `index` is out of bounds,
    /// `Err(AccessError::InvalidInput)` if the element exists but has a
    /// different kind (including being an array or object).
    fn get_typed(&self, index: usize, kind: PrimitiveKind) -> Result<&Value, AccessError>;

    /// The index of the first element equal to `value` under
    /// [`Value::equals_primitive`], or `None`.
    fn index_of_primitive(&self, value: &Value) -> Option<usize>;

    /// Replaces the element at `index`, dropping the previous value.
    /// `Err(AccessError::NotFound)` if out of bounds.
    fn set(&mut self, index: usize, value: Value) -> Result<(), AccessError>;

    /// Appends a primitive value. `Err(AccessError::InvalidInput)` if
    /// `value` is an array or object.
    fn append_primitive(&mut self, value: Value) -> Result<(), AccessError>;

    /// Appends an array, object, or null value.
    /// `Err(AccessError::InvalidInput)` if `value` is a non-null primitive.
    fn append_complex(&mut self, value: Value) -> Result<(), AccessError>;

    /// Removes and returns the element at `index`, shifting successors left.
    /// `Err(AccessError::NotFound)` if out of bounds.
    fn remove_at(&mut self, index: usize) -> Result<Value, AccessError>;

    /// Removes the first element equal to `value` under
    /// [`Value::equals_primitive`]. Returns `true` if an element was
    /// removed, `false` if none matched.
    fn remove_first_primitive(&mut self, value: &Value) -> bool;
}

impl ArrayExt for Array {
    fn get_typed(&self, index: usize, kind: PrimitiveKind) -> Result<&Value, AccessError> {
        match self.get(index) {
            None => Err(AccessError::NotFound),
            Some(v) if v.kind() == Some(kind) => Ok(v),
            Some(_) => Err(AccessError::InvalidInput),
        }
    }

    fn index_of_primitive(&self, value: &Value) -> Option<usize> {
        self.iter().position(|v| v.equals_primitive(value))
    }

    fn set(&mut self, index: usize, value: Value) -> Result<(), AccessError> {
        match self.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(AccessError::NotFound),
        }
    }

    fn append_primitive(&mut self, value: Value) -> Result<(), AccessError> {
        if value.kind().is_none() {
            return Err(AccessError::InvalidInput);
        }
        self.push(value);
        Ok(())
    }

    fn append_complex(&mut self, value: Value) -> Result<(), AccessError> {
        match value {
            Value::Array(_) | Value::Object(_) | Value::Null => {
                self.push(value);
                Ok(())
            }
            _ => Err(AccessError::InvalidInput),
        }
    }

    fn remove_at(&mut self, index: usize) -> Result<Value, AccessError> {
        if index >= self.len() {
            return Err(AccessError::NotFound);
        }
        Ok(self.remove(index))
    }

    fn remove_first_primitive(&mut self, value: &Value) -> bool {
        match self.index_of_primitive(value) {
            Some(pos) => {
                self.remove(pos);
                true
            }
            None => false,
        }
    }
}
