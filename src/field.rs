//! Fixed-offset field extraction and emission.
//!
//! Every NACHA field lives at a fixed column range inside a 94-character
//! record. Extraction clamps out-of-range offsets and returns empty text
//! instead of failing, so short records degrade to defaulted fields.
//! Emission pads to the field width and silently truncates overflow; a
//! field is fixed length regardless of content.

use crate::cents::Cents;
use thiserror::Error;

/// A numeric field containing anything other than ASCII digits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed amount {0:?}")]
pub struct MalformedAmount(pub String);

/// Extracts `line[start..end]` with surrounding whitespace trimmed.
pub fn slice(line: &str, start: usize, end: usize) -> &str {
    slice_raw(line, start, end).trim()
}

/// Extracts `line[start..end]` untrimmed, for fields whose trailing
/// spaces are significant (check digit, reserved regions).
pub fn slice_raw(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("")
}

/// Converts an unsigned digit string into whole cents.
///
/// The sign of an amount is carried by field position and transaction
/// code, never by an embedded sign character.
pub fn to_cents(digits: &str) -> Result<Cents, MalformedAmount> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedAmount(digits.to_string()));
    }
    digits
        .parse::<i64>()
        .map(Cents::new)
        .map_err(|_| MalformedAmount(digits.to_string()))
}

/// Renders whole cents as a fixed 2-decimal string.
pub fn format_cents(cents: Cents) -> String {
    cents.to_decimal().to_string()
}

/// Left-pads with zeros to `width`; wider values keep their leading
/// `width` characters.
pub fn pad_left_zero(value: &str, width: usize) -> String {
    let taken: String = value.chars().take(width).collect();
    let count = taken.chars().count();
    if count >= width {
        return taken;
    }
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat('0').take(width - count));
    out.push_str(&taken);
    out
}

/// Right-pads with spaces to `width`; wider values keep their leading
/// `width` characters.
pub fn pad_right_space(value: &str, width: usize) -> String {
    let mut out: String = value.chars().take(width).collect();
    let count = out.chars().count();
    if count < width {
        out.extend(std::iter::repeat(' ').take(width - count));
    }
    out
}
