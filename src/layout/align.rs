//! Alignment Engine
//!
//! Computes where a payload lands inside a fixed-width field and whether it
//! had to be clipped to get there.
//!
//! A field of `width` runes reserves `margin` columns on each side (1 for
//! bracketed buttons, 0 for text rows). The payload may only occupy the
//! interior, `width - 2 * margin` runes wide. Offsets are measured from the
//! start of the whole field:
//!
//! - Left: `margin`
//! - Center: `margin + (interior - len) / 2`, which equals `(width - len) / 2`
//! - Right: `width - len - margin`
//!
//! A payload overflows when it is longer than the interior. Exact fit is not
//! an overflow. On overflow the payload is clipped to the interior length and
//! the placement is still valid.

use crate::types::Alignment;

/// Result of placing a payload into a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Column of the first payload rune, from the start of the field.
    pub offset: usize,
    /// Number of payload runes that fit (after clipping).
    pub len: usize,
    /// True when the payload was longer than the interior and got clipped.
    pub overflowed: bool,
}

/// Compute the placement of a `len`-rune payload in a `width`-rune field.
pub fn place(width: usize, len: usize, margin: usize, align: Alignment) -> Placement {
    let interior = width.saturating_sub(margin * 2);
    let overflowed = len > interior;
    let len = len.min(interior);

    let offset = match align {
        Alignment::Left => margin,
        Alignment::Center => margin + (interior - len) / 2,
        Alignment::Right => width.saturating_sub(len + margin),
    };

    Placement {
        offset: offset.min(width.saturating_sub(len)),
        len,
        overflowed,
    }
}

/// Place `payload` into `field` and copy the visible part in.
///
/// Runes of `field` outside the placement are left untouched.
pub fn align_into(field: &mut [char], payload: &[char], margin: usize, align: Alignment) -> Placement {
    let placement = place(field.len(), payload.len(), margin, align);
    field[placement.offset..placement.offset + placement.len]
        .copy_from_slice(&payload[..placement.len]);
    placement
}
