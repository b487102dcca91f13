use thiserror::Error;

/// Raised when a textual field name does not match any sortable attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort field '{input}' (expected one of: id, firstName, lastName, email, phone)")]
pub struct ParseSortFieldError {
    input: String,
}

impl ParseSortFieldError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}
