//! Comment form validation
//!
//! Validation failures are ordinary values: the offending field gets an inline
//! message and the submission does not start.

use std::fmt;

/// Minimum trimmed length of the author name
pub const MIN_NAME_LEN: usize = 2;
/// Minimum trimmed length of the comment body
pub const MIN_COMMENT_LEN: usize = 10;

/// Fields of the comment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Comment,
}

impl Field {
    /// Form field name, as used in the page markup
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Comment => "comment",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Comment => "Comment",
        }
    }

    const fn min_len(self) -> usize {
        match self {
            Self::Name => MIN_NAME_LEN,
            Self::Comment => MIN_COMMENT_LEN,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Required,
    TooShort { min: usize },
}

/// An inline error attached to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub issue: FieldIssue,
}

impl FieldError {
    /// Message shown next to the field
    #[must_use]
    pub fn message(&self) -> String {
        match self.issue {
            FieldIssue::Required => format!("{} is required", self.field.label()),
            FieldIssue::TooShort { min } => {
                format!("{} must be at least {min} characters long", self.field.label())
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// A comment whose fields passed validation, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidComment {
    pub name: String,
    pub text: String,
}

/// Validate one field, returning its trimmed value
///
/// Length is measured in UTF-16 code units, the unit browsers count in, so a
/// character outside the Basic Multilingual Plane (most emoji) counts twice.
///
/// # Errors
///
/// Returns a `FieldError` if the trimmed value is empty or too short.
pub fn validate_field(field: Field, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError {
            field,
            issue: FieldIssue::Required,
        });
    }
    let min = field.min_len();
    if trimmed.encode_utf16().count() < min {
        return Err(FieldError {
            field,
            issue: FieldIssue::TooShort { min },
        });
    }
    Ok(trimmed.to_string())
}

/// Validate both fields, collecting every error
///
/// # Errors
///
/// Returns one `FieldError` per invalid field, name first.
pub fn validate(name: &str, comment: &str) -> Result<ValidComment, Vec<FieldError>> {
    match (validate_field(Field::Name, name), validate_field(Field::Comment, comment)) {
        (Ok(name), Ok(text)) => Ok(ValidComment { name, text }),
        (name, text) => Err([name.err(), text.err()].into_iter().flatten().collect()),
    }
}
