//! Operation types for the calculator.
//!
//! `OperationType` is a closed set: validation rules are selected by
//! matching on it, so adding a new operation (power, modulo, ...) means
//! adding a variant here and a rule in `validate`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The four arithmetic operations.
///
/// Each variant carries a canonical code string via [`OperationType::code`].
/// Human-readable labels are deliberately kept out of this type — see
/// [`OperationLabels`].
///
/// # Example
///
/// ```rust
/// use tally::OperationType;
///
/// assert_eq!(OperationType::Divide.code(), "DIVIDE");
/// assert_eq!(OperationType::Add.to_string(), "ADD");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OperationType {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationType {
    /// All operations, in canonical order.
    pub const ALL: [OperationType; 4] = [
        OperationType::Add,
        OperationType::Subtract,
        OperationType::Multiply,
        OperationType::Divide,
    ];

    /// Canonical identifier for this operation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display labels for operations.
///
/// Defaults to English. Callers that need localization inject their own
/// table instead of patching the core types.
///
/// # Example
///
/// ```rust
/// use tally::{OperationLabels, OperationType};
///
/// let labels = OperationLabels::default().with_label(OperationType::Add, "plus");
/// assert_eq!(labels.label(OperationType::Add), "plus");
/// assert_eq!(labels.label(OperationType::Divide), "divide");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OperationLabels {
    labels: HashMap<OperationType, String>,
}

impl Default for OperationLabels {
    fn default() -> Self {
        let mut labels = HashMap::new();
        labels.insert(OperationType::Add, "add".to_string());
        labels.insert(OperationType::Subtract, "subtract".to_string());
        labels.insert(OperationType::Multiply, "multiply".to_string());
        labels.insert(OperationType::Divide, "divide".to_string());
        Self { labels }
    }
}

impl OperationLabels {
    /// Create the default (English) label table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the label for one operation, returning the updated table.
    pub fn with_label(mut self, op: OperationType, label: impl Into<String>) -> Self {
        self.labels.insert(op, label.into());
        self
    }

    /// Look up the display label for an operation.
    ///
    /// Falls back to the canonical code if the table has no entry.
    pub fn label(&self, op: OperationType) -> &str {
        self.labels
            .get(&op)
            .map(String::as_str)
            .unwrap_or_else(|| op.code())
    }
}
