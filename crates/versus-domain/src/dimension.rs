//! Dimension module - named axes of comparison

/// A named axis along which entities are scored (e.g. "Editing power")
///
/// Labels are unique within one comparison table; row order is significant
/// because display order equals evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dimension {
    /// Human-facing label for the axis
    pub label: String,
}

impl Dimension {
    /// Create a new dimension
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
