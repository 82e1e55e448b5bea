//! # spark-widgets
//!
//! Fixed-size terminal widgets and a focus chain for Rust.
//!
//! ## Architecture
//!
//! Widgets render into rune rows with embedded ANSI escape sequences. The
//! driver owns the terminal: it builds widgets, wires the focusable ones into
//! a [`FocusChain`], renders each frame and writes the rows out.
//!
//! ```text
//! Widget (Button/Text/Modal) → layout (chunk + align) → Rendered rows → driver
//!                   ↑
//!        FocusChain toggles focus
//! ```
//!
//! Rendering never mutates a widget. Content that doesn't fit is clipped in
//! the output and reported as a [`RecoverableError`] next to valid rows.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Position, Alignment, Overflow, Attr, BorderStyle)
//! - [`error`] - Fatal and advisory error kinds
//! - [`layout`] - Chunking, the alignment engine, ANSI-aware measurement
//! - [`renderer`] - Escape sequences and render output
//! - [`widgets`] - Button, Text, Modal and the render contract
//! - [`state`] - Focus chain and key routing

pub mod error;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod types;
pub mod widgets;

// Re-export commonly used items
pub use types::*;

pub use error::{FocusError, RecoverableError, WidgetError};

pub use layout::{
    align_into, clip_visible, duplicate_row, join_rows, place, split_into_chunks,
    split_runes_into_chunks, visible_width, Placement,
};

pub use renderer::Rendered;

pub use widgets::{shared, ActivateCallback, Button, Element, Modal, SharedWidget, Text, Widget};

pub use state::{FocusAction, FocusChain, FocusNode, Keys, NodeKey};
