use thiserror::Error;

/// Errors raised by the fallible surfaces of the crate: builders, settings,
/// sequence construction and report paging. The computations themselves never fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HisaabError {
    /// One or more input validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Document number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Settings could not be loaded or are inconsistent.
    #[error("settings error: {0}")]
    Settings(String),

    /// A report was requested with invalid paging or layout arguments.
    #[error("report error: {0}")]
    Report(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the invalid field (e.g. "lines[2].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collapse a list of validation errors into a single [`HisaabError`].
///
/// Returns `Ok(())` when the list is empty.
pub fn into_result(errors: Vec<ValidationError>) -> Result<(), HisaabError> {
    if errors.is_empty() {
        return Ok(());
    }
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(HisaabError::Validation(msg))
}
