//! The padding routine.
//!
//! Renders a score as a base-10 signed decimal string and left-pads it with
//! ASCII `'0'` up to a minimum character count. Padding counts *characters*,
//! not digits: a minus sign is part of the string being padded, so
//! `format_score(-7, 4)` yields `"00-7"` rather than `"-007"`. That matches
//! the upstream behavior exactly and is kept on purpose, odd as it looks.

/// Render `score` as decimal, left-padded with `'0'` to at least `length`
/// characters. Non-positive `length` disables padding. Strings already at or
/// beyond `length` come back unchanged; there is no truncation.
#[must_use]
pub fn format_score(score: i32, length: i32) -> String {
    let rendered = score.to_string();
    let width = length.max(0) as usize;
    pad_left(rendered, width)
}

/// Left-pad `s` with `'0'` until it is `width` characters long.
///
/// Decimal renderings are pure ASCII, so byte length and character count
/// agree here.
fn pad_left(s: String, width: usize) -> String {
    if width == 0 || s.len() >= width {
        return s;
    }
    let mut padded = String::with_capacity(width);
    for _ in 0..width - s.len() {
        padded.push('0');
    }
    padded.push_str(&s);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_length_is_plain_decimal() {
        assert_eq!(format_score(5, 0), "5");
        assert_eq!(format_score(-7, 0), "-7");
        assert_eq!(format_score(0, 0), "0");
    }

    #[test]
    fn shorter_rendering_is_padded() {
        assert_eq!(format_score(5, 3), "005");
        assert_eq!(format_score(42, 6), "000042");
    }

    #[test]
    fn longer_rendering_is_untouched() {
        assert_eq!(format_score(12345, 3), "12345");
        assert_eq!(format_score(100, 3), "100");
    }

    #[test]
    fn minus_sign_counts_as_a_character() {
        // Literal left-pad-by-character-count semantics, not digit count.
        assert_eq!(format_score(-7, 4), "00-7");
        assert_eq!(format_score(-123, 4), "-123");
    }

    #[test]
    fn negative_length_means_no_padding() {
        assert_eq!(format_score(5, -2), "5");
    }

    #[test]
    fn extreme_values_do_not_panic() {
        assert_eq!(format_score(i32::MAX, 0), "2147483647");
        assert_eq!(format_score(i32::MIN, 12), "0-2147483648");
    }
}
