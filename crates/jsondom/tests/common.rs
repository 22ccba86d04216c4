#![allow(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

/// A moderately nested document exercising every value kind, reused across
/// several integration test files.
pub const SAMPLE: &str = r#"
{
    "pi": 3.14,
    "e": {
        "is_rational": false
    },
    "tags": ["math", "constant"],
    "nothing": null,
    "empties": {"obj": {}, "arr": []}
}
"#;
