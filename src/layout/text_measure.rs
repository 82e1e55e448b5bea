//! Text Measurement
//!
//! Rune-based measurement of rendered rows that may contain ANSI escape
//! sequences. Escape sequences occupy no columns:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - Two-character sequences: `ESC` + single char
//!
//! Every visible rune counts as one column. Widgets are sized in runes, so
//! wide glyphs are the driver's concern.

const ESC: char = '\x1b';

/// Classify each rune of `row` as visible (`true`) or part of an escape sequence.
fn visibility(row: &[char]) -> Vec<bool> {
    let mut out = vec![true; row.len()];
    let mut i = 0;

    while i < row.len() {
        if row[i] != ESC {
            i += 1;
            continue;
        }

        let end = escape_end(row, i);
        for flag in &mut out[i..end] {
            *flag = false;
        }
        i = end;
    }

    out
}

/// Index just past the escape sequence starting at `pos` (which holds ESC).
fn escape_end(row: &[char], pos: usize) -> usize {
    let next = pos + 1;
    if next >= row.len() {
        return row.len();
    }
    if row[next] != '[' {
        return next + 1;
    }

    let mut i = next + 1;
    while i < row.len() {
        let c = row[i] as u32;
        if (0x40..=0x7E).contains(&c) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&c) {
            return i;
        }
        i += 1;
    }
    row.len()
}

/// Number of columns `row` occupies on screen.
pub fn visible_width(row: &[char]) -> usize {
    visibility(row).into_iter().filter(|v| *v).count()
}

/// Keep at most `max` visible runes of `row`.
///
/// Escape sequences are copied through even after the cut, so a trailing
/// reset still closes any style opened earlier. Returns the clipped row and
/// whether anything visible was dropped.
pub fn clip_visible(row: &[char], max: usize) -> (Vec<char>, bool) {
    let mut out = Vec::with_capacity(row.len());
    let mut shown = 0;
    let mut clipped = false;

    for (c, visible) in row.iter().zip(visibility(row)) {
        if !visible {
            out.push(*c);
        } else if shown < max {
            out.push(*c);
            shown += 1;
        } else {
            clipped = true;
        }
    }

    (out, clipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_plain_width() {
        assert_eq!(visible_width(&row("[  Hi  ]")), 8);
        assert_eq!(visible_width(&row("┌──┐")), 4);
        assert_eq!(visible_width(&[]), 0);
    }

    #[test]
    fn test_escapes_have_no_width() {
        assert_eq!(visible_width(&row("[\x1b[7m  Hi  \x1b[0m]")), 8);
        assert_eq!(visible_width(&row("ab\x1b[10D\x1b[1B")), 2);
    }

    #[test]
    fn test_clip_keeps_escapes() {
        let (clipped, dropped) = clip_visible(&row("[\x1b[7mHello\x1b[0m]"), 4);
        assert!(dropped);
        assert_eq!(clipped.iter().collect::<String>(), "[\x1b[7mHel\x1b[0m");
    }

    #[test]
    fn test_clip_noop_when_it_fits() {
        let (clipped, dropped) = clip_visible(&row("abc"), 3);
        assert!(!dropped);
        assert_eq!(clipped, row("abc"));
    }
}
