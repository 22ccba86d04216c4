//! A peekable Unicode code point iterator over an owned byte buffer.
//!
//! `CodePointIter` is the parser's only window onto the input: it decodes
//! one [`char`] at a time, optionally skipping JSON whitespace between
//! tokens, and records a sticky fault the first time it meets invalid UTF-8.

use alloc::vec::Vec;

/// A UTF-8 decode fault recorded by [`CodePointIter`].
///
/// Kept separate from [`crate::ErrorKind`] so the iterator (which knows
/// nothing about JSON grammar) doesn't need to depend on the parser's error
/// type; [`crate::parser`] converts this into
/// `ErrorKind::Utf8Error` at the point it is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Utf8Fault {
    /// Byte offset of the first byte that could not be decoded.
    pub offset: usize,
}

/// JSON's four whitespace bytes: space, tab, line feed, carriage return.
/// Form feed and vertical tab are deliberately not included.
fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Decodes a byte buffer into Unicode code points on demand.
///
/// The iterator owns a copy of the input (`Vec<u8>`) made at construction,
/// per the source's resource model: the parser never retains an alias into
/// caller-owned memory, and the copy is freed when the iterator is dropped.
pub(crate) struct CodePointIter {
    buffer: Vec<u8>,
    position: usize,
    skip_whitespace: bool,
    error: Option<Utf8Fault>,
}

impl CodePointIter {
    /// Wraps a copy of `input`, whitespace-skipping enabled.
    pub fn new(input: &[u8]) -> Self {
        Self {
            buffer: input.to_vec(),
            position: 0,
            skip_whitespace: true,
            error: None,
        }
    }

    /// Current byte offset into the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The sticky UTF-8 decode fault, if one has been recorded.
    pub fn error(&self) -> Option<Utf8Fault> {
        self.error
    }

    /// Enables or disables whitespace skipping in `peek`/`next`. The parser
    /// turns this off while lexing the interior of strings and numbers,
    /// where whitespace is significant (absent) rather than ignorable.
    pub fn set_skip_whitespace(&mut self, skip: bool) {
        self.skip_whitespace = skip;
    }

    fn skip_ws(&mut self) {
        if !self.skip_whitespace {
            return;
        }
        while let Some(&b) = self.buffer.get(self.position) {
            if is_json_whitespace(b) {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    /// Decodes one code point starting at `pos`, without mutating iterator
    /// state. Returns `(char, byte_len)`, or `None` at end-of-buffer. Sets
    /// the sticky error and returns `None` if `pos` is not the start of a
    /// valid UTF-8 sequence.
    ///
    /// Only decodes a window of up to 4 bytes (the longest possible UTF-8
    /// scalar) rather than validating the whole remaining buffer: this
    /// iterator is driven once per code point over the entire input, so
    /// re-validating the tail on every call would make parsing quadratic in
    /// document size.
    fn decode_at(&mut self, pos: usize) -> Option<(char, usize)> {
        let len = self.buffer.len();
        if pos >= len {
            return None;
        }
        let window = &self.buffer[pos..(pos + 4).min(len)];
        match core::str::from_utf8(window) {
            Ok(s) => s.chars().next().map(|c| (c, c.len_utf8())),
            Err(e) if e.valid_up_to() > 0 => {
                let valid = &window[..e.valid_up_to()];
                // Safety of this unwrap: `valid_up_to` guarantees this
                // prefix is valid UTF-8.
                core::str::from_utf8(valid).ok()?.chars().next().map(|c| (c, c.len_utf8()))
            }
            Err(_) => {
                self.error = Some(Utf8Fault { offset: pos });
                None
            }
        }
    }

    /// Looks at the next significant code point without consuming it.
    /// Returns `0` at end-of-buffer or once a decode fault has been
    /// recorded.
    pub fn peek(&mut self) -> u32 {
        if self.error.is_some() {
            return 0;
        }
        self.skip_ws();
        self.decode_at(self.position).map_or(0, |(c, _)| c as u32)
    }

    /// Like [`Self::peek`], but advances past the returned code point.
    pub fn next(&mut self) -> u32 {
        if self.error.is_some() {
            return 0;
        }
        self.skip_ws();
        match self.decode_at(self.position) {
            Some((c, len)) => {
                self.position += len;
                c as u32
            }
            None => 0,
        }
    }

    /// Matches `ascii` byte-for-byte against successive code points,
    /// consuming input as it goes (even on a mismatch, up to the mismatch).
    /// Whitespace skipping is disabled for the duration of the match and
    /// restored afterward, since literals like `true`/`null` contain no
    /// internal whitespace.
    pub fn match_literal(&mut self, ascii: &[u8]) -> bool {
        let previous = self.skip_whitespace;
        self.skip_whitespace = false;
        let mut matched = true;
        for &expected in ascii {
            if self.next() != u32::from(expected) {
                matched = false;
                break;
            }
        }
        self.skip_whitespace = previous;
        matched
    }
}
