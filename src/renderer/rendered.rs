//! Render output shared by every widget.

use crate::error::{RecoverableError, WidgetError};

/// Ordered rows produced by a successful render.
///
/// A render that had to clip content still succeeds; the advisory condition
/// is carried in [`Rendered::warning`] next to the fully formed rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub rows: Vec<Vec<char>>,
    pub warning: Option<RecoverableError>,
}

impl Rendered {
    /// Rows with no advisory condition.
    pub fn clean(rows: Vec<Vec<char>>) -> Self {
        Self { rows, warning: None }
    }

    /// Rows that were produced despite an advisory condition.
    pub fn warned(rows: Vec<Vec<char>>, warning: RecoverableError) -> Self {
        Self {
            rows,
            warning: Some(warning),
        }
    }

    /// True when no advisory condition was raised.
    pub fn is_clean(&self) -> bool {
        self.warning.is_none()
    }

    /// Row `i` as a string, if it exists.
    pub fn row_string(&self, i: usize) -> Option<String> {
        self.rows.get(i).map(|row| row.iter().collect())
    }

    /// All rows as strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }

    /// Promote the advisory condition to an error for `?`-style callers.
    ///
    /// The rows are dropped in that case; use the fields directly to keep them.
    pub fn into_result(self) -> Result<Vec<Vec<char>>, WidgetError> {
        match self.warning {
            Some(warning) => Err(warning.into()),
            None => Ok(self.rows),
        }
    }
}
