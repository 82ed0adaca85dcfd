//! Non-printable character escaping.
//!
//! A rendered box must never contain raw control characters, vertical
//! whitespace, or anything else that would break fixed-width output. The
//! encoder keeps only characters whose Unicode general category group is
//! Letter, Number, Punctuation, or Symbol, plus the ASCII space; everything
//! else is replaced by a `\uXXXX` escape token: lowercase hex, with UTF-16
//! surrogate pairs for astral code points, following the JSON string-escape
//! convention.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// True when `ch` may appear verbatim in a rendered box.
fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    matches!(
        ch.general_category_group(),
        GeneralCategoryGroup::Letter
            | GeneralCategoryGroup::Number
            | GeneralCategoryGroup::Punctuation
            | GeneralCategoryGroup::Symbol
    )
}

/// Append the `\uXXXX` escape token(s) for `ch` to `out`.
fn push_escape(out: &mut String, ch: char) {
    let mut units = [0u16; 2];
    for unit in ch.encode_utf16(&mut units) {
        out.push_str(&format!("\\u{unit:04x}"));
    }
}

/// Replace every not-so-printable character in `input` with `\uXXXX`.
pub fn encode(input: &str) -> String {
    encode_with(input, &[])
}

/// Like [`encode`], with a pre-substitution map applied first.
///
/// Each `(from, to)` pair swaps exact characters before the category scan, so
/// a mapped character is judged (and possibly escaped) as its replacement.
/// Characters without a mapping pass through the category test normally.
pub fn encode_with(input: &str, replacements: &[(char, char)]) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        let ch = replacements
            .iter()
            .find(|(from, _)| *from == ch)
            .map(|(_, to)| *to)
            .unwrap_or(ch);
        if is_printable(ch) {
            out.push(ch);
        } else {
            push_escape(&mut out, ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_round_trips() {
        let s = "The quick brown fox, 42 times! (really)";
        assert_eq!(encode(s), s);
    }

    #[test]
    fn letters_numbers_punctuation_symbols_survive() {
        // é: letter, ½: number, «: punctuation, €: symbol
        let s = "é½«€+|~";
        assert_eq!(encode(s), s);
    }

    #[test]
    fn tab_becomes_codepoint_escape() {
        assert_eq!(encode("a\tb"), "a\\u0009b");
    }

    #[test]
    fn newline_and_carriage_return_are_escaped() {
        assert_eq!(encode("\r\n"), "\\u000d\\u000a");
    }

    #[test]
    fn nonbreaking_space_is_escaped() {
        // U+00A0 is a separator, not a plain space.
        assert_eq!(encode("a\u{a0}b"), "a\\u00a0b");
    }

    #[test]
    fn zero_width_space_is_escaped() {
        assert_eq!(encode("a\u{200b}b"), "a\\u200bb");
    }

    #[test]
    fn control_character_is_escaped() {
        assert_eq!(encode("\u{7}"), "\\u0007");
    }

    #[test]
    fn astral_format_character_uses_surrogate_pair() {
        // U+1D173 MUSICAL SYMBOL BEGIN BEAM is category Cf.
        assert_eq!(encode("\u{1d173}"), "\\ud834\\udd73");
    }

    #[test]
    fn astral_symbol_survives() {
        // Emoji are category So and pass through unescaped.
        assert_eq!(encode("🦀"), "🦀");
    }

    #[test]
    fn ascii_space_survives() {
        assert_eq!(encode("a b"), "a b");
    }

    #[test]
    fn replacement_map_swaps_before_scan() {
        assert_eq!(encode_with("a\tb", &[('\t', '→')]), "a→b");
    }

    #[test]
    fn replacement_to_unprintable_is_then_escaped() {
        // A mapped character is judged as its replacement.
        assert_eq!(encode_with("x", &[('x', '\u{b}')]), "\\u000b");
    }

    #[test]
    fn continuation_marker_glyph_survives() {
        // The wrapper's ↳ marker (So) must not be mangled by the encoder.
        assert_eq!(encode("↳   x"), "↳   x");
    }
}
