//! Core types for spark-widgets.
//!
//! These types are shared by every widget and by the layout helpers.
//! They define how content is placed and what the renderer understands.

use crate::error::WidgetError;

// =============================================================================
// Position
// =============================================================================

/// Top-left anchor of a widget in screen coordinates.
///
/// No bounds checking happens here; keeping widgets on screen is up to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Screen origin.
    pub const ORIGIN: Self = Self::new(0, 0);
}

// =============================================================================
// Alignment
// =============================================================================

/// Horizontal alignment of a payload inside a fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl TryFrom<u8> for Alignment {
    type Error = WidgetError;

    /// Raw values outside the closed set are rejected, not clamped.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Center),
            2 => Ok(Self::Right),
            other => Err(WidgetError::UnsupportedAlignment(other)),
        }
    }
}

// =============================================================================
// Overflow
// =============================================================================

/// Vertical overflow mode for multi-row widgets.
///
/// Only `Visible` semantics are applied today: rows are never capped by height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Overflow {
    #[default]
    Visible = 0,
    Hidden = 1,
    Scroll = 2,
}

impl From<u8> for Overflow {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Hidden,
            2 => Self::Scroll,
            _ => Self::Visible,
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Border Style
// =============================================================================

/// Glyph set used to draw a modal frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    #[default]
    Single = 0,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double = 1,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 2,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold = 3,
    /// - | + + + +
    Ascii = 4,
}

/// The six glyphs of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderStyle {
    /// Get the frame glyphs for this style.
    pub const fn glyphs(&self) -> BorderGlyphs {
        let (horizontal, vertical, top_left, top_right, bottom_left, bottom_right) = match self {
            Self::Single => ('─', '│', '┌', '┐', '└', '┘'),
            Self::Double => ('═', '║', '╔', '╗', '╚', '╝'),
            Self::Rounded => ('─', '│', '╭', '╮', '╰', '╯'),
            Self::Bold => ('━', '┃', '┏', '┓', '┗', '┛'),
            Self::Ascii => ('-', '|', '+', '+', '+', '+'),
        };
        BorderGlyphs {
            horizontal,
            vertical,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}
