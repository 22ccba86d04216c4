//! Error enumerations for parsing and for the typed accessor/mutator API.
//!
//! The two error types model the two failure classes described by the
//! grammar and by the API surface: [`ErrorKind`] for grammar violations and
//! UTF-8 decode faults discovered while parsing, and [`AccessError`] for
//! misuse of the [`Object`]/[`Array`](crate::Array) accessors after a tree
//! already exists.

use thiserror::Error;

/// What went wrong while parsing a byte buffer into a [`Value`](crate::Value)
/// tree, or `None` if parsing succeeded.
///
/// Internally, every parse step returns `Result<Value, ErrorKind>` and
/// propagates the first error via `?` without being overwritten: the error
/// encountered earliest is always the one [`crate::parse`] reports,
/// satisfying the "sticky first error" contract without a separate sticky
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Parsing completed without error.
    #[error("no error")]
    None,
    /// The input was empty, or contained only whitespace.
    #[error("input was empty or contained only whitespace")]
    EmptyInput,
    /// A generic grammar violation, most commonly trailing data after a
    /// complete root value.
    #[error("invalid JSON")]
    InvalidJson,
    /// An object was opened with `{` but never closed with a matching `}`.
    #[error("unbalanced brace")]
    UnbalancedBrace,
    /// An array was opened with `[` but never closed with a matching `]`.
    #[error("unbalanced square bracket")]
    UnbalancedSquareBracket,
    /// A string was opened with `"` but the input ended before the closing
    /// quote.
    #[error("unbalanced quote")]
    UnbalancedQuote,
    /// An object pair's key was not followed by `:`.
    #[error("missing ':' after object key")]
    MissingObjectColon,
    /// A generic string-token violation not covered by a more specific
    /// variant.
    #[error("invalid string")]
    InvalidString,
    /// A `\` inside a string was followed by a character that is not one of
    /// the recognized escapes.
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,
    /// A `\u` escape was not followed by four hex digits, or decoded to an
    /// invalid or unpaired UTF-16 surrogate.
    #[error("invalid unicode escape sequence")]
    InvalidUnicodeEscapeSequence,
    /// A string token contained a raw code point below `0x20`.
    #[error("string contains a control character")]
    StringHasControlChar,
    /// A number token did not match the JSON number grammar (e.g. a leading
    /// zero followed by another digit, or a `.`/exponent with no digits).
    #[error("invalid number format")]
    InvalidNumberFormat,
    /// Nesting of objects/arrays exceeded [`crate::MAX_DEPTH`].
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,
    /// The parser was dispatching on the first code point of a `value` and
    /// found one that starts none of the productions in the grammar.
    #[error("illegal character")]
    IllegalCharacter,
    /// The input was not valid UTF-8. Reserved as its own "namespace",
    /// distinct from the grammar errors above, the way the source reserves
    /// UTF-8 decode errors as negative codes.
    #[error("invalid UTF-8 at byte offset {offset}")]
    Utf8Error {
        /// Byte offset of the first byte the decoder could not interpret.
        offset: usize,
    },
}

impl ErrorKind {
    /// True for [`ErrorKind::None`], i.e. no error was recorded.
    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

/// Why a call into the [`Object`](crate::Object) or
/// [`ArrayExt`](crate::ArrayExt) accessor/mutator API failed.
///
/// Unlike [`ErrorKind`], these describe misuse of an already-built tree
/// (wrong variant, missing key, out-of-range index) rather than a grammar
/// violation discovered while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The supplied value's kind did not match what the operation requires
    /// (e.g. passing a primitive to a complex-only append).
    #[error("invalid input")]
    InvalidInput,
    /// No pair/element exists at the given key/index.
    #[error("key or index not found")]
    NotFound,
    /// The operation requires the value to be an object.
    #[error("value is not an object")]
    NotObject,
    /// The operation requires the value to be an array.
    #[error("value is not an array")]
    NotArray,
    /// The supplied key is not usable.
    ///
    /// Never actually constructed by this crate: the source reserves this
    /// variant for a null or malformed C string key, but an `&str` key is
    /// always valid UTF-8 in Rust, so every key this crate can receive is
    /// already well-formed. Retained for wire-enumeration completeness.
    #[error("key is invalid")]
    KeyInvalid,
    /// The supplied value does not satisfy the operation's kind constraint
    /// (e.g. passing a primitive to [`Object::put_complex`](crate::Object::put_complex)).
    #[error("value is invalid for this operation")]
    ValueInvalid,
}
