//! Layout Module
//!
//! Pure helpers that decide where runes land inside fixed-size widgets.
//!
//! - [`chunk`] - split content into fixed-width rows, duplicate row templates
//! - [`align`] - the alignment engine (offset + overflow policy)
//! - [`text_measure`] - ANSI-aware width measurement and clipping
//!
//! # Example
//!
//! ```ignore
//! use spark_widgets::layout::{align_into, split_into_chunks};
//! use spark_widgets::Alignment;
//!
//! let rows = split_into_chunks("Hello World", 5);
//! let mut field = vec![' '; 7];
//! align_into(&mut field, &rows[0].chars().collect::<Vec<_>>(), 0, Alignment::Center);
//! ```

pub mod align;
pub mod chunk;
pub mod text_measure;

pub use align::{align_into, place, Placement};
pub use chunk::{duplicate_row, join_rows, split_into_chunks, split_runes_into_chunks};
pub use text_measure::{clip_visible, visible_width};
