//! ANSI escape sequences embedded in widget output.
//!
//! Widgets render into rune buffers rather than straight to a terminal, so
//! these writers target [`std::fmt::Write`]. The exact byte sequences are
//! part of the output contract:
//! - reverse video: `ESC[7m`
//! - reset: `ESC[0m`
//! - row separator for stacked text: `ESC[{n}D ESC[1B`

use std::fmt::Write;

use crate::types::Attr;

// =============================================================================
// Constants
// =============================================================================

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

// =============================================================================
// Cursor Movement
// =============================================================================

/// Move cursor down by n rows.
#[inline]
pub fn cursor_down<W: Write>(w: &mut W, n: u16) -> std::fmt::Result {
    if n > 0 {
        write!(w, "{CSI}{n}B")
    } else {
        Ok(())
    }
}

/// Move cursor backward (left) by n columns.
#[inline]
pub fn cursor_backward<W: Write>(w: &mut W, n: u16) -> std::fmt::Result {
    if n > 0 {
        write!(w, "{CSI}{n}D")
    } else {
        Ok(())
    }
}

/// Step back over a row of `width` columns and drop to the next line.
///
/// Lets sequential writes lay out a block without absolute addressing.
pub fn next_row<W: Write>(w: &mut W, width: u16) -> std::fmt::Result {
    cursor_backward(w, width)?;
    cursor_down(w, 1)
}

// =============================================================================
// Text Attributes
// =============================================================================

/// Set text attributes from bitflags.
#[allow(unused_assignments)]
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> std::fmt::Result {
    if attr.is_empty() {
        return Ok(());
    }

    let mut first = true;
    w.write_str(CSI)?;

    macro_rules! emit {
        ($flag:expr, $code:expr) => {
            if attr.contains($flag) {
                if !first {
                    write!(w, ";")?;
                }
                write!(w, "{}", $code)?;
                first = false;
            }
        };
    }

    emit!(Attr::BOLD, 1);
    emit!(Attr::DIM, 2);
    emit!(Attr::ITALIC, 3);
    emit!(Attr::UNDERLINE, 4);
    emit!(Attr::BLINK, 5);
    emit!(Attr::INVERSE, 7);
    emit!(Attr::HIDDEN, 8);
    emit!(Attr::STRIKETHROUGH, 9);

    write!(w, "m")
}

/// Reset all attributes.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::fmt::Result {
    w.write_str(RESET)
}
