//! Input Module - key routing for the focus chain
//!
//! Bridges crossterm key events to focus chain actions. Reading events from
//! the terminal stays with the driver; this module only decides what an
//! already-read key means.
//!
//! | Key | Action |
//! |---|---|
//! | Tab, Down | [`FocusAction::Next`] |
//! | Shift+Tab (BackTab), Up | [`FocusAction::Prev`] |
//! | Enter, Space | [`FocusAction::Activate`] |
//! | any other char | [`FocusAction::Shortcut`] |
//!
//! # Example
//!
//! ```ignore
//! use crossterm::event::{read, Event};
//!
//! if let Event::Key(key) = read()? {
//!     chain.dispatch_key(&key);
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use super::focus::FocusChain;

// =============================================================================
// FOCUS ACTION
// =============================================================================

/// What a key press asks the focus chain to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAction {
    Next,
    Prev,
    Activate,
    /// Focus and activate the first button bound to this key.
    Shortcut(char),
}

impl FocusAction {
    /// Map a key event to an action. Releases and unbound keys map to `None`.
    pub fn from_key(event: &KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        match event.code {
            KeyCode::Tab if event.modifiers.contains(KeyModifiers::SHIFT) => Some(Self::Prev),
            KeyCode::Tab | KeyCode::Down => Some(Self::Next),
            KeyCode::BackTab | KeyCode::Up => Some(Self::Prev),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::Activate),
            KeyCode::Char(c) if !event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Some(Self::Shortcut(c))
            }
            _ => None,
        }
    }
}

// =============================================================================
// ROUTING
// =============================================================================

impl FocusChain {
    /// Apply an action. Returns true when it changed focus or ran a callback.
    pub fn apply(&mut self, action: FocusAction) -> bool {
        match action {
            FocusAction::Next => self.next(),
            FocusAction::Prev => self.prev(),
            FocusAction::Activate => self.activate_current(),
            FocusAction::Shortcut(c) => {
                let Some(key) = self.keys().find(|&key| {
                    self.node(key)
                        .is_some_and(|node| node.widget().borrow().handles_key(c))
                }) else {
                    return false;
                };
                if self.focus_key(key).is_err() {
                    return false;
                }
                self.activate_current();
                true
            }
        }
    }

    /// Route a key event. Returns true when the key was consumed.
    pub fn dispatch_key(&mut self, event: &KeyEvent) -> bool {
        let Some(action) = FocusAction::from_key(event) else {
            return false;
        };
        let consumed = self.apply(action);
        trace!(?action, consumed, "key routed");
        consumed
    }
}
