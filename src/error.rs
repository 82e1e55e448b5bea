//! Error types for widget rendering and focus management.
//!
//! Two families exist:
//! - [`RecoverableError`] is advisory. The output it travels with is valid
//!   and fully formed (overflow truncation).
//! - [`WidgetError`] and [`FocusError`] are fatal for the call that produced
//!   them. No output comes back with them.

use thiserror::Error;

/// Advisory condition paired with a still-valid render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} But this error is recoverable, a valid output was given.")]
pub struct RecoverableError {
    /// Human-readable description of the field that overflowed.
    pub field: String,
}

impl RecoverableError {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }
}

/// Errors produced while rendering widgets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// Raw alignment value outside Left/Center/Right.
    #[error("alignment {0} not supported, choose between Left, Center, Right")]
    UnsupportedAlignment(u8),

    /// Buttons only render on a single row.
    #[error("multi-row buttons are not supported (height {height})")]
    MultiRowButton {
        /// Requested height.
        height: u8,
    },

    /// A button needs two columns for its brackets.
    #[error("button width must be at least 2 to draw the brackets, got {width}")]
    ButtonTooNarrow {
        /// Requested width.
        width: u8,
    },

    /// A modal needs two columns for its side borders.
    #[error("modal width must be at least 2 to draw the outline, got {width}")]
    ModalTooNarrow {
        /// Requested width.
        width: u16,
    },

    /// A modal needs two rows for its top and bottom borders.
    #[error("modal height must be at least 2 to draw the outline, got {height}")]
    ModalTooShort {
        /// Requested height.
        height: u16,
    },

    /// An advisory warning promoted to an error by [`crate::Rendered::into_result`].
    #[error(transparent)]
    Recoverable(#[from] RecoverableError),

    /// Writing an escape sequence into a row buffer failed.
    #[error("failed to format escape sequence")]
    Format(#[from] std::fmt::Error),
}

impl WidgetError {
    /// True for the advisory kind, whose output was valid.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable(_))
    }
}

/// Errors produced by focus chain operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusError {
    /// The node handle does not belong to the chain (removed or never inserted).
    #[error("focus node is not part of this chain")]
    StaleNode,

    /// Position lookup past the end of the chain.
    #[error("index {index} out of range for focus chain of size {size}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Chain size at the time of the call.
        size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_message() {
        let err = RecoverableError::new("button.value overflowed button.width.");
        assert_eq!(
            err.to_string(),
            "button.value overflowed button.width. But this error is recoverable, a valid output was given."
        );
    }

    #[test]
    fn test_kind_classification() {
        let advisory: WidgetError = RecoverableError::new("x").into();
        assert!(advisory.is_recoverable());
        assert!(!WidgetError::MultiRowButton { height: 2 }.is_recoverable());
        assert!(!WidgetError::ModalTooNarrow { width: 1 }.is_recoverable());
    }
}
