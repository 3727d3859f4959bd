// ABOUTME: Boundary validation for checklist item input
// ABOUTME: Title rules applied to request bodies before they reach the service

use std::fmt;
use thiserror::Error;

/// Minimum number of characters in a title
pub const TITLE_MIN_LENGTH: usize = 3;

/// The rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    Required,
    NotBlank,
    MinLength(usize),
}

impl ValidationRule {
    /// Predicate text used in error messages
    pub fn describe(&self) -> String {
        match self {
            ValidationRule::Required => "is required".to_string(),
            ValidationRule::NotBlank => "cannot be empty".to_string(),
            ValidationRule::MinLength(min) => format!("must be at least {} characters long", min),
        }
    }

    /// Machine-readable rule name
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationRule::Required => "required",
            ValidationRule::NotBlank => "not_blank",
            ValidationRule::MinLength(_) => "min_length",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} {}", .field, .rule.describe())]
pub struct ValidationError {
    pub field: String,
    pub rule: ValidationRule,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, rule: ValidationRule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }
}

/// Validate a title supplied on create.
///
/// Length counts characters of the raw value, surrounding whitespace included.
pub fn validate_title(field: &str, title: Option<&str>) -> Result<(), ValidationError> {
    let title = title.ok_or_else(|| ValidationError::new(field, ValidationRule::Required))?;

    if title.trim().is_empty() {
        return Err(ValidationError::new(field, ValidationRule::NotBlank));
    }

    check_min_length(field, title)
}

/// Validate a title supplied on update.
///
/// Absent and blank titles pass: the service keeps the stored title for those.
pub fn validate_patch_title(field: &str, title: Option<&str>) -> Result<(), ValidationError> {
    match title {
        Some(t) if !t.trim().is_empty() => check_min_length(field, t),
        _ => Ok(()),
    }
}

fn check_min_length(field: &str, title: &str) -> Result<(), ValidationError> {
    if title.chars().count() < TITLE_MIN_LENGTH {
        return Err(ValidationError::new(
            field,
            ValidationRule::MinLength(TITLE_MIN_LENGTH),
        ));
    }
    Ok(())
}
