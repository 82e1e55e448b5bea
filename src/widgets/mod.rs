//! Widgets - the displayable, focusable building blocks.
//!
//! - [`Button`] - single-row bracketed label with optional callback
//! - [`Text`] - fixed-width block, wrapped into aligned rows
//! - [`Modal`] - bordered frame that composes child widgets
//!
//! Every widget implements the [`Widget`] render contract. [`Element`] is the
//! closed set of widget kinds, so one call site can render or focus any of
//! them. Widgets that are both focused by a [`crate::FocusChain`] and rendered
//! by the driver are shared as [`SharedWidget`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::WidgetError;
use crate::renderer::Rendered;

mod button;
mod modal;
mod text;

pub use button::{ActivateCallback, Button};
pub use modal::Modal;
pub use text::Text;

// =============================================================================
// Render Contract
// =============================================================================

/// Render and focus contract shared by all widgets.
pub trait Widget {
    /// Produce the rendered rows, or a fatal error with no output.
    fn render(&self) -> Result<Rendered, WidgetError>;

    /// Whether this widget currently holds focus.
    fn is_focused(&self) -> bool;

    /// Set or clear focus. Does not re-render.
    fn set_focus(&mut self, focused: bool);

    fn focus_on(&mut self) {
        self.set_focus(true);
    }

    fn focus_off(&mut self) {
        self.set_focus(false);
    }

    /// Trigger the widget's action. Returns false when it has none.
    fn activate(&self) -> bool {
        false
    }
}

// =============================================================================
// Element
// =============================================================================

/// Any widget.
#[derive(Debug, Clone)]
pub enum Element {
    Button(Button),
    Text(Text),
    Modal(Modal),
}

/// A widget shared between the focus chain and the driver.
pub type SharedWidget = Rc<RefCell<Element>>;

/// Wrap a widget for sharing.
pub fn shared(widget: impl Into<Element>) -> SharedWidget {
    Rc::new(RefCell::new(widget.into()))
}

impl Element {
    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Self::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_modal(&self) -> Option<&Modal> {
        match self {
            Self::Modal(modal) => Some(modal),
            _ => None,
        }
    }

    /// True for a button bound to `key`.
    pub fn handles_key(&self, key: char) -> bool {
        self.as_button().is_some_and(|button| button.handles_key(key))
    }

    fn widget(&self) -> &dyn Widget {
        match self {
            Self::Button(button) => button,
            Self::Text(text) => text,
            Self::Modal(modal) => modal,
        }
    }

    fn widget_mut(&mut self) -> &mut dyn Widget {
        match self {
            Self::Button(button) => button,
            Self::Text(text) => text,
            Self::Modal(modal) => modal,
        }
    }
}

impl Widget for Element {
    fn render(&self) -> Result<Rendered, WidgetError> {
        self.widget().render()
    }

    fn is_focused(&self) -> bool {
        self.widget().is_focused()
    }

    fn set_focus(&mut self, focused: bool) {
        self.widget_mut().set_focus(focused);
    }

    fn activate(&self) -> bool {
        self.widget().activate()
    }
}

impl From<Button> for Element {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Modal> for Element {
    fn from(modal: Modal) -> Self {
        Self::Modal(modal)
    }
}
