//! Arbitrary value normalization.
//!
//! The bracketed payload of an arbitrary class is mostly passed through as
//! written. The one rewrite: a bare integer gets a `px` unit.

use std::sync::LazyLock;

use regex::Regex;

struct Patterns {
    pixels: Regex,
    integer: Regex,
    hex_color: Regex,
    rgb_color: Regex,
}

// ASCII digits only; `\d` is Unicode-aware.
static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    pixels: Regex::new(r"^[0-9]+px$").expect("pixel pattern is valid"),
    integer: Regex::new(r"^[0-9]+$").expect("integer pattern is valid"),
    hex_color: Regex::new(r"(?i)^#([0-9a-f]{3}){1,2}$").expect("hex pattern is valid"),
    rgb_color: Regex::new(r"^rgb|rgba").expect("rgb pattern is valid"),
});

/// What an arbitrary value looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `<digits>px`
    Pixels,
    /// `<digits>`, normalized to pixels.
    Integer,
    /// `#rgb` or `#rrggbb`
    HexColor,
    /// `rgb(..)` or `rgba(..)`
    RgbColor,
    /// Anything else.
    Raw,
}

/// Classify a value (brackets already stripped).
#[must_use]
pub fn classify(value: &str) -> ValueKind {
    let patterns = &*PATTERNS;
    if patterns.pixels.is_match(value) {
        ValueKind::Pixels
    } else if patterns.integer.is_match(value) {
        ValueKind::Integer
    } else if patterns.hex_color.is_match(value) {
        ValueKind::HexColor
    } else if patterns.rgb_color.is_match(value) {
        ValueKind::RgbColor
    } else {
        ValueKind::Raw
    }
}

/// Remove one leading `[` and one trailing `]`, if present.
#[must_use]
pub fn strip_brackets(value: &str) -> &str {
    let value = value.strip_prefix('[').unwrap_or(value);
    value.strip_suffix(']').unwrap_or(value)
}

/// Strip brackets and normalize a raw arbitrary value.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let value = strip_brackets(raw);
    match classify(value) {
        ValueKind::Integer => format!("{value}px"),
        ValueKind::Pixels | ValueKind::HexColor | ValueKind::RgbColor | ValueKind::Raw => {
            value.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_shapes() {
        assert_eq!(classify("20px"), ValueKind::Pixels);
        assert_eq!(classify("20"), ValueKind::Integer);
        assert_eq!(classify("#fff"), ValueKind::HexColor);
        assert_eq!(classify("#FF0000"), ValueKind::HexColor);
        assert_eq!(classify("rgb(0,0,0)"), ValueKind::RgbColor);
        assert_eq!(classify("rgba(0,0,0,0.5)"), ValueKind::RgbColor);
        assert_eq!(classify("1.5rem"), ValueKind::Raw);
        assert_eq!(classify("50%"), ValueKind::Raw);
    }

    #[test]
    fn hex_needs_three_or_six_digits() {
        assert_eq!(classify("#ffff"), ValueKind::Raw);
        assert_eq!(classify("#12345"), ValueKind::Raw);
        assert_eq!(classify("#ggg"), ValueKind::Raw);
    }

    #[test]
    fn non_ascii_digits_are_raw() {
        assert_eq!(classify("٣"), ValueKind::Raw);
    }

    #[test]
    fn integer_gets_px() {
        assert_eq!(normalize("12"), "12px");
        assert_eq!(normalize("12px"), "12px");
    }

    #[test]
    fn everything_else_passes_through() {
        assert_eq!(normalize("1.5rem"), "1.5rem");
        assert_eq!(normalize("-4px"), "-4px");
        assert_eq!(normalize("#FF0000"), "#FF0000");
        assert_eq!(normalize("calc(100%-1rem)"), "calc(100%-1rem)");
    }

    #[test]
    fn strips_one_bracket_each_side() {
        assert_eq!(strip_brackets("[10px]"), "10px");
        assert_eq!(strip_brackets("[[10px]]"), "[10px]");
        assert_eq!(strip_brackets("10px"), "10px");
        assert_eq!(normalize("[5]"), "5px");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("[]"), "");
    }
}
