//! Modal - bordered frame that hosts child widgets.
//!
//! Three levels of output:
//! - [`Modal::render`] draws only the frame
//! - [`Modal::render_elems`] renders each child through its own contract
//! - [`Modal::compose`] stacks the child rows inside the frame
//!
//! # Example
//!
//! ```ignore
//! use spark_widgets::{shared, Alignment, Button, Modal};
//!
//! let modal = Modal {
//!     width: 12,
//!     height: 4,
//!     elems: vec![shared(Button::new(10, "OK", Alignment::Center))],
//!     ..Default::default()
//! };
//! for row in modal.compose()?.to_strings() {
//!     println!("{row}");
//! }
//! ```

use std::iter;

use tracing::{debug, warn};

use crate::error::{RecoverableError, WidgetError};
use crate::layout::{clip_visible, duplicate_row, visible_width};
use crate::renderer::Rendered;
use crate::types::{BorderStyle, Position};

use super::{SharedWidget, Widget};

// =============================================================================
// Modal
// =============================================================================

/// A frame with an ordered list of children.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    pub width: u16,
    pub height: u16,
    pub position: Position,
    pub active: bool,
    pub border: BorderStyle,
    pub elems: Vec<SharedWidget>,
}

impl Modal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Columns between the side borders.
    pub fn interior_width(&self) -> usize {
        usize::from(self.width).saturating_sub(2)
    }

    /// Rows between the top and bottom borders.
    pub fn interior_height(&self) -> usize {
        usize::from(self.height).saturating_sub(2)
    }

    /// Draw the frame: top border, `height - 2` interior rows, bottom border.
    pub fn render(&self) -> Result<Rendered, WidgetError> {
        if self.width < 2 {
            return Err(WidgetError::ModalTooNarrow { width: self.width });
        }
        if self.height < 2 {
            return Err(WidgetError::ModalTooShort { height: self.height });
        }

        let g = self.border.glyphs();
        let inner = self.interior_width();

        let edge = |left: char, right: char| -> Vec<char> {
            iter::once(left)
                .chain(iter::repeat_n(g.horizontal, inner))
                .chain(iter::once(right))
                .collect()
        };
        let top = edge(g.top_left, g.top_right);
        let bottom = edge(g.bottom_left, g.bottom_right);

        let template: Vec<char> = iter::once(g.vertical)
            .chain(iter::repeat_n(' ', inner))
            .chain(iter::once(g.vertical))
            .collect();

        let mut rows = Vec::with_capacity(usize::from(self.height));
        rows.push(top);
        rows.extend(duplicate_row(&template, self.interior_height()));
        rows.push(bottom);

        Ok(Rendered::clean(rows))
    }

    /// Render every child in order.
    ///
    /// The first fatal child error aborts the batch and nothing rendered so
    /// far is returned. Advisory warnings stay attached to each child's output.
    pub fn render_elems(&self) -> Result<Vec<Rendered>, WidgetError> {
        self.elems
            .iter()
            .enumerate()
            .map(|(index, elem)| {
                elem.borrow().render().inspect_err(|error| {
                    warn!(child = index, %error, "modal child render failed");
                })
            })
            .collect()
    }

    /// Frame with the children's rows stacked into the interior.
    ///
    /// Child rows start at column 1 of the first interior row and follow one
    /// another top to bottom. Rows wider than the interior are clipped by
    /// visible width and rows past the last interior row are dropped; either
    /// one yields a warning on an otherwise valid result. Without clipping,
    /// the first child warning is passed through.
    pub fn compose(&self) -> Result<Rendered, WidgetError> {
        let mut frame = self.render()?;
        let children = self.render_elems()?;

        let inner_w = self.interior_width();
        let inner_h = self.interior_height();

        let mut child_warning = None;
        let mut clipped = false;
        let mut dropped = 0usize;
        let mut line = 0usize;

        for child in children {
            if child_warning.is_none() {
                child_warning = child.warning;
            }

            for row in child.rows {
                if line >= inner_h {
                    dropped += 1;
                    continue;
                }

                let (mut cells, was_clipped) = clip_visible(&row, inner_w);
                clipped |= was_clipped;
                let pad = inner_w - visible_width(&cells);
                cells.extend(iter::repeat_n(' ', pad));

                frame.rows[line + 1].splice(1..1 + inner_w, cells);
                line += 1;
            }
        }

        if clipped || dropped > 0 {
            debug!(clipped, dropped, width = self.width, height = self.height, "modal content clipped");
            frame.warning = Some(RecoverableError::new("modal.elems overflowed the modal interior."));
        } else {
            frame.warning = child_warning;
        }

        Ok(frame)
    }
}

impl Widget for Modal {
    fn render(&self) -> Result<Rendered, WidgetError> {
        Modal::render(self)
    }

    fn is_focused(&self) -> bool {
        self.active
    }

    fn set_focus(&mut self, focused: bool) {
        self.active = focused;
    }
}

// =============================================================================
// Tests
// =============================================================================
