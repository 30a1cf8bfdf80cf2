use std::fmt;

/// A single missing required field in a connector config.
///
/// `field` is the operator-facing field name (e.g. `"client-id"`), not the
/// Rust struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
}

impl FieldViolation {
    pub fn missing(field: &'static str) -> Self {
        Self { field }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing {}", self.field)
    }
}

/// Aggregate validation failure carrying every field-level violation found.
///
/// Validation never stops at the first problem: one error value reports all
/// missing fields so the operator can fix them in a single pass. The list is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Builds an error from collected violations, or `Ok(())` when none
    /// were found.
    pub fn from_violations(violations: Vec<FieldViolation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    /// The individual violations, in the order the checks ran.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid connector config: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Errors surfaced by connector config serialization.
#[derive(Debug)]
pub enum ConfigError {
    /// Required fields were missing; same value `validate()` returns.
    Validation(ValidationError),
    /// JSON encoding failed. Not expected for the fixed wire shape, but
    /// propagated rather than suppressed.
    Encoding(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Validation(e) => write!(f, "{}", e),
            ConfigError::Encoding(e) => write!(f, "failed to encode connector config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Validation(e) => Some(e),
            ConfigError::Encoding(e) => Some(e),
        }
    }
}

impl From<ValidationError> for ConfigError {
    fn from(e: ValidationError) -> Self {
        ConfigError::Validation(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Encoding(e)
    }
}
