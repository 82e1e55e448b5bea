//! Renderer - escape sequences and render output.
//!
//! The renderer knows only about rune rows. It doesn't read keys or write
//! to a terminal; the driver takes the rows and writes them out.
//!
//! - [`ansi`] - escape-sequence writers embedded in widget rows
//! - [`Rendered`] - rows plus an optional advisory warning

pub mod ansi;
mod rendered;

pub use rendered::Rendered;
