//! State Module - runtime focus management
//!
//! - **Focus** - ordered focus chain, navigation, removal, activation
//! - **Input** - crossterm key events routed to focus actions

mod focus;
mod input;

pub use focus::*;
pub use input::*;
