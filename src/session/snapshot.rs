//! What the front end renders after each command.

use crate::calculator::{Calculator, Operation};

/// A rendered view of the calculator state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// The display text.
    pub display: String,
    /// Pending operator, for highlighting its key.
    pub pending: Option<Operation>,
    /// Whether the memory indicator is lit.
    pub memory: bool,
    /// Message for the last command, if it failed.
    pub error: Option<String>,
}

impl DisplaySnapshot {
    /// Capture the calculator's current state.
    pub fn capture(calculator: &Calculator, error: Option<String>) -> Self {
        Self {
            display: calculator.display_value().to_string(),
            pending: calculator.current_operation(),
            memory: calculator.has_memory(),
            error,
        }
    }

    /// Check if the last command failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Single-line rendering: memory flag, display, pending operator.
    ///
    /// ```text
    /// M        12.5 +
    /// ```
    pub fn line(&self, width: usize) -> String {
        let flag = if self.memory { 'M' } else { ' ' };
        let pending = self.pending.map(Operation::symbol).unwrap_or(" ");
        format!("{flag} {:>width$} {pending}", self.display)
    }
}
