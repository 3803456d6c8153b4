//! Line-protocol encoding for metric points
//!
//! Produces the `measurement,tag=val,... field=int,... timestamp` text shape
//! consumed by line-protocol collectors. Measurement names, tag keys and tag
//! values backslash-escape `,`, ` `, `=` and `\` per the syntax; field values
//! here are plain base-10 integers with no type suffix.

use thiserror::Error;

/// Structural encoding failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineProtoError {
    /// A point must carry at least one field.
    #[error("line-protocol point has no fields")]
    EmptyFields,
}

/// Encode one point into `out` as a single newline-terminated line.
///
/// Tags with an empty key or value are skipped; a point without any field
/// is rejected.
pub fn encode_point(
    measurement: &str,
    tags: &[(&str, &str)],
    fields: &[(&str, i64)],
    timestamp_ns: i64,
    out: &mut String,
) -> Result<(), LineProtoError> {
    if fields.is_empty() {
        return Err(LineProtoError::EmptyFields);
    }

    escape_into(measurement, out);

    for (key, value) in tags {
        if key.is_empty() || value.is_empty() {
            continue;
        }
        out.push(',');
        escape_into(key, out);
        out.push('=');
        escape_into(value, out);
    }
    out.push(' ');

    for (i, (key, value)) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        escape_into(key, out);
        out.push('=');
        out.push_str(&value.to_string());
    }

    out.push(' ');
    out.push_str(&timestamp_ns.to_string());
    out.push('\n');
    Ok(())
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        if matches!(c, ',' | ' ' | '=' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}
