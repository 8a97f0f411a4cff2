//! Domain constants
//!
//! Centralized location for defaults shared by the normalizer, the form
//! builders and configuration.

// Availability defaults
pub const DEFAULT_AVAILABILITY_STATUS: &str = "limited";
pub const DEFAULT_OPEN_TO_REMOTE: bool = true;

// Reference validation
pub const DEFAULT_PHONE_MIN_LENGTH: usize = 6;
pub const DEFAULT_WEIGHT_DECIMALS: u32 = 2;
pub const REFERENCE_WEIGHT_MIN: f64 = 0.0;
pub const REFERENCE_WEIGHT_MAX: f64 = 1.0;
