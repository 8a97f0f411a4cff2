//! Integration tests for validation module
//!
//! Tests accumulating validation across nested rows the way form
//! normalization uses it.

use profilehub_common::validation::{
    EmailValidator, PhoneValidator, RangeValidator, UrlValidator, ValidationContext,
    ValidationError, Validator,
};

struct ContactRow {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
}

/// Test validating a list of rows under indexed paths
///
/// Scenario: three contact rows, two with problems. Errors must come back in
/// row order with qualified paths.
#[test]
fn test_rows_validated_under_indexed_paths() {
    let rows = [
        ContactRow { name: "Ada", email: "ada@example.com", phone: "+44 20 7946 0000" },
        ContactRow { name: "", email: "x@y.io", phone: "" },
        ContactRow { name: "Lin", email: "lin@", phone: "12" },
    ];

    let mut validator = Validator::new();
    for (index, row) in rows.iter().enumerate() {
        validator.validate_nested(format!("contacts[{index}]"), |v| {
            if !v.require("name", row.name, format!("Contact #{} requires a name.", index + 1)) {
                return;
            }
            v.validate_field("email", row.email, &EmailValidator::new());
            if !row.phone.is_empty() {
                v.validate_field("phone", row.phone, &PhoneValidator::new());
            }
        });
    }

    let errors = validator.finalize().expect_err("two rows are invalid");
    let fields: Vec<&str> = errors.errors.iter().map(|e| e.field.as_str()).collect();

    assert_eq!(fields, vec!["contacts[1].name", "contacts[2].email", "contacts[2].phone"]);
    assert_eq!(errors.messages()[0], "Contact #2 requires a name.");
    assert_eq!(errors.field_errors("contacts[2].email")[0].message, "Invalid email format");
}

#[test]
fn test_clean_pass_finalizes_ok() {
    let mut validator = Validator::new();

    assert!(validator.validate_field("site", "https://example.com", &UrlValidator::new()));
    assert!(validator.validate_field("weight", &0.5_f64, &RangeValidator::new(0.0, 1.0)));
    assert!(!validator.has_errors());
    assert!(validator.finalize().is_ok());
}

/// Test that a preset context path prefixes every recorded field
#[test]
fn test_preset_context_path_prefixes_fields() {
    let mut context = ValidationContext::new();
    context.push_path("availability");
    let mut validator = Validator::with_context(context);

    validator.validate_field("site", "nope", &UrlValidator::new());
    validator.validate_field("email", "nope", &EmailValidator::new());

    assert_eq!(validator.error_count(), 2);
    assert_eq!(validator.errors().errors[0].field, "availability.site");
    assert_eq!(validator.errors().errors[1].field, "availability.email");

    validator.clear();
    assert!(!validator.has_errors());
}

#[test]
fn test_merging_independent_passes() {
    let mut first = Validator::new();
    first.require("firstName", "", "First name is required.");
    let mut second = Validator::new();
    second.require("email", " ", "Email is required.");

    let mut combined: ValidationError = first.into_errors();
    combined.merge(second.into_errors());

    assert_eq!(combined.messages(), vec!["First name is required.", "Email is required."]);
    assert_eq!(
        combined.to_string(),
        "Validation failed with 2 errors: firstName: First name is required.; email: Email is required."
    );
}
