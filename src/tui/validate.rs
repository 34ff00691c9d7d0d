//! Form validation for the create-ticket form

/// Result of form validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether validation passed
    pub is_valid: bool,
    /// Error message if validation failed
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validator for the create-ticket form
pub struct TicketFormValidator;

impl TicketFormValidator {
    /// Both title and description must be non-empty after trimming. The
    /// store enforces the same rule; this layer exists to give the form a
    /// field-specific message before submission.
    pub fn validate(title: &str, description: &str) -> ValidationResult {
        if title.trim().is_empty() {
            return ValidationResult::failure("Title cannot be empty");
        }
        if description.trim().is_empty() {
            return ValidationResult::failure("Description cannot be empty");
        }
        ValidationResult::success()
    }
}
