// Field Validators - Reusable validation components
use std::cmp::Ordering;
use std::fmt::Display;

use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Range validator for numeric types
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Default for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    /// Create a new range validator with no constraints
    pub fn empty() -> Self {
        Self { min: None, max: None }
    }

    /// Create a new range validator with inclusive min and max values
    pub fn new(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Set minimum value
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        // Incomparable values (NaN) fail both bounds.
        if let Some(ref min) = self.min {
            if matches!(value.partial_cmp(min), Some(Ordering::Less) | None) {
                return Err(format!("Value must be at least {}", min));
            }
        }

        if let Some(ref max) = self.max {
            if matches!(value.partial_cmp(max), Some(Ordering::Greater) | None) {
                return Err(format!("Value must not exceed {}", max));
            }
        }

        Ok(())
    }
}

/// Static email regex pattern compiled once at first use
///
/// Deliberately loose: one `@`, no whitespace, and a dot in the domain.
static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Email validator (`local@domain.tld`)
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !EMAIL_REGEX.is_match(value) {
            return Err("Invalid email format".to_string());
        }

        Ok(())
    }
}

impl FieldValidator<String> for EmailValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

/// URL validator
///
/// Accepts absolute URLs whose scheme is in the allowed list (`http` and
/// `https` by default).
#[derive(Debug, Clone)]
pub struct UrlValidator {
    allowed_schemes: Vec<String>,
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlValidator {
    /// Create a new URL validator
    pub fn new() -> Self {
        Self { allowed_schemes: vec!["http".to_string(), "https".to_string()] }
    }

    /// Set allowed schemes
    pub fn allowed_schemes(mut self, schemes: Vec<String>) -> Self {
        self.allowed_schemes = schemes;
        self
    }
}

impl FieldValidator<str> for UrlValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let parsed = url::Url::parse(value).map_err(|_| "Invalid URL format".to_string())?;
        let scheme = parsed.scheme();

        if !self.allowed_schemes.iter().any(|allowed| allowed == scheme) {
            return Err(format!("URL scheme '{}' is not allowed", scheme));
        }

        Ok(())
    }
}

impl FieldValidator<String> for UrlValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

static PHONE_CHARS_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[0-9+\-() ]+$").expect("PHONE_CHARS_REGEX pattern is valid and well-formed")
});

/// Permissive phone number validator
///
/// Allows digits, `+`, `-`, parentheses and spaces, with a minimum overall
/// length (6 by default).
#[derive(Debug, Clone)]
pub struct PhoneValidator {
    min_length: usize,
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneValidator {
    /// Create a phone validator with the default minimum length of 6
    pub fn new() -> Self {
        Self { min_length: 6 }
    }

    /// Set the minimum number of characters
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }
}

impl FieldValidator<str> for PhoneValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !PHONE_CHARS_REGEX.is_match(value) {
            return Err("Phone number contains invalid characters".to_string());
        }

        if value.chars().count() < self.min_length {
            return Err(format!("Phone number must be at least {} characters", self.min_length));
        }

        Ok(())
    }
}

impl FieldValidator<String> for PhoneValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}
