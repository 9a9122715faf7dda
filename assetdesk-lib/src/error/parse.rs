//! Errors from parsing enum labels (priorities, statuses)

/// A label that names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseLabelError {
    /// What was being parsed, e.g. "priority".
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Accepted labels, comma separated.
    pub expected: &'static str,
}

impl ParseLabelError {
    pub fn new(kind: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }
}
