//! Renders a [`Value`] tree back to JSON text.

use alloc::string::String;
use core::fmt::Write as _;

use crate::{object::Object, value::Value};

/// Serializes `value` to JSON text.
///
/// `indent` is the number of spaces added per nesting level; `0` produces
/// compact output with no newlines. Numbers always render with six digits
/// after the decimal point (`1.000000`), and strings escape only the named
/// characters `" \ / \b \f \n \r \t` — any other raw byte below `0x20` that
/// made it into a [`Value::String`] via a `\u00XX` input escape is emitted
/// unchanged rather than re-escaped.
///
/// # Examples
///
/// ```
/// use jsondom::{serialize, Value};
///
/// assert_eq!(serialize(&Value::Boolean(true), 0), "true");
/// assert_eq!(serialize(&Value::Number(1.0), 0), "1.000000");
/// ```
#[must_use]
pub fn serialize(value: &Value, indent: usize) -> String {
    let mut out = String::new();
    write_value(value, indent, 0, &mut out);
    out
}

fn write_value(value: &Value, indent: usize, level: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            // `write!` on a `String` never fails.
            let _ = write!(out, "{n:.6}");
        }
        Value::String(s) => write_string(s, out),
        Value::Array(a) => write_array(a, indent, level, out),
        Value::Object(o) => write_object(o, indent, level, out),
    }
}

fn push_indent(out: &mut String, spaces: usize) {
    for _ in 0..spaces {
        out.push(' ');
    }
}

fn write_array(arr: &[Value], indent: usize, level: usize, out: &mut String) {
    out.push('[');
    let inner = level + 1;
    for (i, v) in arr.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if indent > 0 {
            out.push('\n');
            push_indent(out, indent * inner);
        }
        write_value(v, indent, inner, out);
    }
    if indent > 0 && !arr.is_empty() {
        out.push('\n');
        push_indent(out, indent * level);
    }
    out.push(']');
}

fn write_object(obj: &Object, indent: usize, level: usize, out: &mut String) {
    out.push('{');
    let inner = level + 1;
    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if indent > 0 {
            out.push('\n');
            push_indent(out, indent * inner);
        }
        write_string(key, out);
        out.push(':');
        if indent > 0 {
            out.push(' ');
        }
        write_value(value, indent, inner, out);
    }
    if indent > 0 && !obj.is_empty() {
        out.push('\n');
        push_indent(out, indent * level);
    }
    out.push('}');
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
}
