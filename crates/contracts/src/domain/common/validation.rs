use thiserror::Error;

/// Client-side validation failure bound to one form field.
///
/// The `field` is the form control id so the view can highlight it; the
/// message stays on screen until the field is corrected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Reject blank required text.
pub fn require(field: &'static str, value: &str, label: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{} is required", label)));
    }
    Ok(())
}

/// Reject text longer than `max` characters.
pub fn max_chars(
    field: &'static str,
    value: &str,
    max: usize,
    label: &str,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("{} must be at most {} characters", label, max),
        ));
    }
    Ok(())
}

/// Blank filter text means "no filter".
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
