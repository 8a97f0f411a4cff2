// Validation Module - accumulating field validation
use std::fmt;

mod validators;

pub use validators::{
    EmailValidator, FieldValidator, PhoneValidator, RangeValidator, UrlValidator,
};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Messages in the order they were recorded
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Merge another validation error into this one
    pub fn merge(&mut self, other: ValidationError) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "Validation failed: {}", self.errors[0].message)?;
        } else {
            write!(f, "Validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Validation context for tracking the current field path
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    pub path: Vec<String>,
}

impl ValidationContext {
    /// Create a new validation context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add path segment for nested validation
    pub fn push_path(&mut self, segment: impl Into<String>) {
        self.path.push(segment.into());
    }

    /// Remove last path segment
    pub fn pop_path(&mut self) {
        self.path.pop();
    }

    /// Get current path as string
    pub fn current_path(&self) -> String {
        self.path.join(".")
    }
}

/// Accumulates field errors across a validation pass
///
/// Errors are kept in the order they are reported, so the resulting message
/// list can be shown to a user as-is.
pub struct Validator {
    errors: ValidationError,
    context: ValidationContext,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self { errors: ValidationError::new(), context: ValidationContext::new() }
    }

    /// Create with context
    pub fn with_context(context: ValidationContext) -> Self {
        Self { errors: ValidationError::new(), context }
    }

    fn qualify(&self, field: String) -> String {
        if self.context.path.is_empty() {
            field
        } else if field.is_empty() {
            self.context.current_path()
        } else {
            format!("{}.{}", self.context.current_path(), field)
        }
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = self.qualify(field.into());
        self.errors.add_field_error(field, message);
    }

    /// Validate a field with a specific validator, recording the validator's
    /// own message on failure
    ///
    /// Returns `true` when the value passed.
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V) -> bool
    where
        T: ?Sized,
        V: FieldValidator<T> + ?Sized,
    {
        match validator.validate(value) {
            Ok(()) => true,
            Err(msg) => {
                self.add_error(field, msg);
                false
            }
        }
    }

    /// Validate a field, recording `message` instead of the validator's own
    /// message on failure
    ///
    /// Returns `true` when the value passed.
    pub fn validate_field_as<T, V>(
        &mut self,
        field: &str,
        value: &T,
        validator: &V,
        message: impl Into<String>,
    ) -> bool
    where
        T: ?Sized,
        V: FieldValidator<T> + ?Sized,
    {
        if validator.validate(value).is_ok() {
            return true;
        }
        self.add_error(field, message);
        false
    }

    /// Record `message` when `value` is blank after trimming
    ///
    /// Returns `true` when the value is present.
    pub fn require(&mut self, field: &str, value: &str, message: impl Into<String>) -> bool {
        if value.trim().is_empty() {
            self.add_error(field, message);
            return false;
        }
        true
    }

    /// Validate with nested context
    pub fn validate_nested<F, R>(&mut self, segment: impl Into<String>, f: F) -> R
    where
        F: FnOnce(&mut Validator) -> R,
    {
        self.context.push_path(segment);
        let result = f(self);
        self.context.pop_path();
        result
    }

    /// Check if validation has errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.error_count()
    }

    /// Finalize and return result
    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    /// Consume the validator and return every recorded error
    pub fn into_errors(self) -> ValidationError {
        self.errors
    }

    /// Get errors without consuming validator
    pub fn errors(&self) -> &ValidationError {
        &self.errors
    }

    /// Clear all errors
    pub fn clear(&mut self) {
        self.errors = ValidationError::new();
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
