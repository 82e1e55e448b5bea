//! Button - single-row bracketed label.
//!
//! A button renders to exactly `width` visible runes: `[`, the aligned label,
//! `]`. When highlighted, the interior is wrapped in reverse-video so the
//! bracket columns stay put and the label lands in the same column.
//!
//! # Example
//!
//! ```ignore
//! use spark_widgets::{Alignment, Button};
//!
//! let button = Button::new(10, "Hi", Alignment::Center);
//! let rendered = button.render()?;
//! assert_eq!(rendered.row_string(0).as_deref(), Some("[   Hi   ]"));
//! ```

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::error::{RecoverableError, WidgetError};
use crate::layout::{align_into, place};
use crate::renderer::{ansi, Rendered};
use crate::types::{Alignment, Attr, Position};

use super::Widget;

/// Activation callback (Rc so buttons stay cloneable).
pub type ActivateCallback = Rc<dyn Fn()>;

/// Columns reserved for the brackets on each side.
const BRACKET_MARGIN: usize = 1;

// =============================================================================
// Button
// =============================================================================

/// A focusable single-row button.
#[derive(Clone)]
pub struct Button {
    pub width: u8,
    /// Only 1 is supported.
    pub height: u8,
    pub position: Position,
    pub align: Alignment,
    pub value: String,
    /// Invoked by [`Button::activate`].
    pub on_activate: Option<ActivateCallback>,
    /// Shortcut key bound by the driver.
    pub key: Option<char>,
    /// Set by the focus chain; drawn as reverse video.
    pub highlighted: bool,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            width: 0,
            height: 1,
            position: Position::ORIGIN,
            align: Alignment::Left,
            value: String::new(),
            on_activate: None,
            key: None,
            highlighted: false,
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("position", &self.position)
            .field("align", &self.align)
            .field("value", &self.value)
            .field("on_activate", &self.on_activate.is_some())
            .field("key", &self.key)
            .field("highlighted", &self.highlighted)
            .finish()
    }
}

impl Button {
    /// Single-row button at the origin.
    pub fn new(width: u8, value: impl Into<String>, align: Alignment) -> Self {
        Self {
            width,
            value: value.into(),
            align,
            ..Default::default()
        }
    }

    /// Render the button row.
    ///
    /// Overlong labels are clipped in the output only; `self.value` is never
    /// modified. The clipped render comes back as `Ok` with a warning.
    pub fn render(&self) -> Result<Rendered, WidgetError> {
        if self.height != 1 {
            return Err(WidgetError::MultiRowButton { height: self.height });
        }

        let width = usize::from(self.width);
        if width < 2 {
            return Err(WidgetError::ButtonTooNarrow { width: self.width });
        }

        let mut frame = Vec::with_capacity(width);
        frame.push('[');
        frame.resize(width - 1, ' ');
        frame.push(']');

        let label: Vec<char> = self.value.chars().collect();
        let placement = align_into(&mut frame, &label, BRACKET_MARGIN, self.align);

        let warning = placement.overflowed.then(|| {
            debug!(
                value_len = label.len(),
                visible_len = placement.len,
                width,
                "button label clipped"
            );
            RecoverableError::new("button.value overflowed button.width.")
        });

        let row = if self.highlighted {
            highlight(&frame)?
        } else {
            frame
        };

        Ok(Rendered {
            rows: vec![row],
            warning,
        })
    }

    /// The label as it appears on screen (clipped to the interior).
    pub fn display_value(&self) -> String {
        let len = self.value.chars().count();
        let visible = place(usize::from(self.width), len, BRACKET_MARGIN, self.align).len;
        self.value.chars().take(visible).collect()
    }

    /// Run the activation callback. Returns false when none is set.
    pub fn activate(&self) -> bool {
        match &self.on_activate {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Check whether `key` is this button's shortcut.
    pub fn handles_key(&self, key: char) -> bool {
        self.key == Some(key)
    }
}

/// Wrap the interior of a bracketed row in reverse video.
fn highlight(frame: &[char]) -> Result<Vec<char>, WidgetError> {
    let last = frame.len() - 1;
    let mut out = String::with_capacity(frame.len() + 8);
    out.push(frame[0]);
    ansi::attrs(&mut out, Attr::INVERSE)?;
    out.extend(&frame[1..last]);
    ansi::reset(&mut out)?;
    out.push(frame[last]);
    Ok(out.chars().collect())
}

impl Widget for Button {
    fn render(&self) -> Result<Rendered, WidgetError> {
        Button::render(self)
    }

    fn is_focused(&self) -> bool {
        self.highlighted
    }

    fn set_focus(&mut self, focused: bool) {
        self.highlighted = focused;
    }

    fn activate(&self) -> bool {
        Button::activate(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
