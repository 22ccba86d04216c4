//! A recursive-descent JSON parser and document tree.
//!
//! `jsondom` parses a complete UTF-8 byte buffer into an in-memory [`Value`]
//! tree, and lets callers query, mutate, iterate, and re-serialize that tree.
//! It does no I/O: callers own reading the bytes from wherever they came
//! from (a file, a socket, a string literal) and own what happens to the
//! resulting tree.
//!
//! ```
//! use jsondom::{parse, Value};
//!
//! let output = parse(br#"{"pi": 3.14159, "tags": ["math", "constant"]}"#);
//! assert_eq!(output.error, jsondom::ErrorKind::None);
//! let pi = output.root.as_object().unwrap().get("pi").unwrap();
//! assert_eq!(pi, &Value::Number(3.14159));
//! ```
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod array;
mod error;
mod iter;
mod object;
mod parser;
mod serializer;
mod value;

pub use array::{Array, ArrayExt};
pub use error::{AccessError, ErrorKind};
pub use object::{Iter as ObjectIter, Object};
pub use parser::{parse, ParseOutput, MAX_DEPTH};
pub use serializer::serialize;
pub use value::{PrimitiveKind, Value};
