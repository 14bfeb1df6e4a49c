//! Entity model error types
//!
//! Error codes:
//! - NEO_MODEL_MISSING_DESIGNATION (ERROR)
//! - NEO_MODEL_INVALID_FIELD (ERROR)

use std::fmt;

/// Severity levels for model errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Record rejected, dataset build cannot continue
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Model-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelErrorCode {
    /// Required primary designation is empty or absent
    NeoMissingDesignation,
    /// A non-empty field could not be parsed
    NeoInvalidField,
}

impl ModelErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ModelErrorCode::NeoMissingDesignation => "NEO_MODEL_MISSING_DESIGNATION",
            ModelErrorCode::NeoInvalidField => "NEO_MODEL_INVALID_FIELD",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for ModelErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Model error type with full context
#[derive(Debug, Clone, PartialEq)]
pub struct ModelError {
    code: ModelErrorCode,
    message: String,
    field: Option<&'static str>,
}

impl ModelError {
    /// Create a missing designation error
    pub fn missing_designation() -> Self {
        Self {
            code: ModelErrorCode::NeoMissingDesignation,
            message: "primary designation is required".to_string(),
            field: None,
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(field: &'static str, value: &str) -> Self {
        Self {
            code: ModelErrorCode::NeoInvalidField,
            message: format!("cannot parse {} value '{}'", field, value),
            field: Some(field),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ModelErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending field, if any
    pub fn field(&self) -> Option<&'static str> {
        self.field
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ModelError {}

/// Result type for model construction
pub type ModelResult<T> = Result<T, ModelError>;
