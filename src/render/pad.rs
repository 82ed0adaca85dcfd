//! Multibyte-safe padding and truncation helpers.
//!
//! All operations count `char`s, not bytes, so they stay correct for
//! multibyte text. Padding never truncates; shortfalls are computed with a
//! `max(0, …)` guard so oversized values pass through unchanged.

/// Number of character columns in `value`.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Append `fill` until `value` is `length` characters wide.
///
/// No-op when `value` is already at least `length` characters.
pub fn pad_right(value: &str, length: usize, fill: char) -> String {
    let short = length.saturating_sub(char_len(value));
    let mut out = String::with_capacity(value.len() + short * fill.len_utf8());
    out.push_str(value);
    out.extend(std::iter::repeat(fill).take(short));
    out
}

/// Prepend `fill` until `value` is `length` characters wide.
pub fn pad_left(value: &str, length: usize, fill: char) -> String {
    let short = length.saturating_sub(char_len(value));
    let mut out = String::with_capacity(value.len() + short * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(short));
    out.push_str(value);
    out
}

/// Center `value` in `length` columns, odd remainder on the right.
pub fn pad_both(value: &str, length: usize, fill: char) -> String {
    let short = length.saturating_sub(char_len(value));
    let left = short / 2;
    let right = short - left;
    let mut out = String::with_capacity(value.len() + short * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(value);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// Bound `value` to at most `max` character columns.
///
/// When the value is `max` characters or longer, the first `max - 1`
/// characters are kept and a single ellipsis (`…`, one column) is appended;
/// shorter values pass through unchanged. `max == 0` yields the empty string
/// rather than underflowing.
pub fn truncate(value: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if char_len(value) > max - 1 {
        let mut out: String = value.chars().take(max - 1).collect();
        out.push('…');
        out
    } else {
        value.to_string()
    }
}
