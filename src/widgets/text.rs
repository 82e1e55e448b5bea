//! Text - fixed-width block of wrapped, aligned rows.
//!
//! The value is cut into chunks of exactly `width` runes (the last may be
//! shorter) and each chunk is aligned into its own blank row. Rows are not
//! capped by `height`; see [`crate::Overflow`].

use tracing::debug;

use crate::error::WidgetError;
use crate::layout::{align_into, join_rows, split_runes_into_chunks};
use crate::renderer::{ansi, Rendered};
use crate::types::{Alignment, Overflow, Position};

use super::Widget;

/// A focusable multi-row text block.
#[derive(Debug, Clone, Default)]
pub struct Text {
    pub width: u16,
    pub height: u16,
    pub position: Position,
    pub align: Alignment,
    pub y_overflow: Overflow,
    pub value: String,
    pub highlighted: bool,
}

impl Text {
    pub fn new(width: u16, height: u16, value: impl Into<String>, align: Alignment) -> Self {
        Self {
            width,
            height,
            value: value.into(),
            align,
            ..Default::default()
        }
    }

    /// Render one aligned row per chunk of the value.
    ///
    /// Chunks never exceed `width`, so there is no overflow path here.
    pub fn render(&self) -> Result<Rendered, WidgetError> {
        let width = usize::from(self.width);
        let runes: Vec<char> = self.value.chars().collect();

        let rows: Vec<Vec<char>> = split_runes_into_chunks(&runes, width)
            .into_iter()
            .map(|chunk| {
                let mut row = vec![' '; width];
                align_into(&mut row, &chunk, 0, self.align);
                row
            })
            .collect();

        if rows.len() > usize::from(self.height) {
            debug!(
                rows = rows.len(),
                height = self.height,
                overflow = ?self.y_overflow,
                "text rows exceed height"
            );
        }

        Ok(Rendered::clean(rows))
    }

    /// Render as a single stream for sequential terminal writes.
    ///
    /// Every row is followed by `ESC[{width}D ESC[1B` and the stream ends
    /// with a newline so shells don't mark a missing one.
    pub fn render_ansi(&self) -> Result<String, WidgetError> {
        let rendered = self.render()?;

        let mut sep = String::new();
        ansi::next_row(&mut sep, self.width)?;
        let sep: Vec<char> = sep.chars().collect();

        let mut stream: String = join_rows(&rendered.rows, &sep).into_iter().collect();
        stream.push('\n');
        Ok(stream)
    }
}

impl Widget for Text {
    fn render(&self) -> Result<Rendered, WidgetError> {
        Text::render(self)
    }

    fn is_focused(&self) -> bool {
        self.highlighted
    }

    fn set_focus(&mut self, focused: bool) {
        self.highlighted = focused;
    }
}
