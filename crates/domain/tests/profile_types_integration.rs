//! Integration tests for the profile data model
//!
//! Covers the paths a backend response takes through the domain types:
//! lenient record parsing, payload echo, and configuration loading.

use std::io::Write;

use profilehub_domain::{
    NormalizerConfig, ProfileHubError, ProfilePayload, ProfileRecord, ReferencePayload, RowKind,
    TagList, TextField,
};
use serde_json::json;

// ============================================================================
// Record Parsing
// ============================================================================

/// Test a realistic backend response with a few drifted fields
///
/// Scenario: the server returns numeric ids, a stringly boolean and a stray
/// `null` list, none of which should fail the record.
#[test]
fn test_record_from_backend_response() {
    let record = ProfileRecord::from_json_value(json!({
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace@example.com",
        "city": "Arlington",
        "headline": "Compiler pioneer",
        "skills": ["COBOL", "cobol", " Leadership "],
        "volunteerBadges": null,
        "experiences": [{
            "organization": "US Navy",
            "role": "Rear Admiral",
            "startDate": "1943-12-01T00:00:00.000Z",
            "highlights": ["FLOW-MATIC"]
        }],
        "references": [{ "id": 3, "name": "Howard", "isVerified": 1, "weight": "0.9" }],
        "openToRemote": "FALSE"
    }));

    assert_eq!(record.first_name.as_deref(), Some("Grace"));
    assert_eq!(record.city.as_deref(), Some("Arlington"));
    assert_eq!(record.location, None);
    // Dedupe is the normalizer's job; records keep what the server sent.
    assert_eq!(record.skills.len(), 3);
    assert!(record.volunteer_badges.is_empty());
    assert_eq!(record.experiences[0].highlights, vec!["FLOW-MATIC"]);
    assert_eq!(record.references[0].is_verified, Some(true));
    assert_eq!(record.open_to_remote, Some(false));
}

/// Test that a payload read back as a record drops nothing populated
#[test]
fn test_payload_echo_keeps_reference_identity() {
    let payload = ProfilePayload {
        references: vec![
            ReferencePayload { id: Some(11), name: "Existing".to_string(), ..Default::default() },
            ReferencePayload { name: "New".to_string(), ..Default::default() },
        ],
        ..Default::default()
    };

    let record = ProfileRecord::from(&payload);

    assert_eq!(record.references.len(), 2);
    assert_eq!(record.references[0].id.as_deref(), Some("11"));
    assert_eq!(record.references[1].id, None);
}

// ============================================================================
// Selectors
// ============================================================================

#[test]
fn test_selectors_parse_from_action_strings() {
    assert_eq!("mission_statement".parse::<TextField>(), Ok(TextField::MissionStatement));
    assert_eq!("Volunteer_Badges".parse::<TagList>(), Ok(TagList::VolunteerBadges));
    assert_eq!(
        "testimonial".parse::<RowKind>(),
        Err("Invalid RowKind: testimonial".to_string())
    );
}

// ============================================================================
// Configuration
// ============================================================================

/// Test loading a partial config file from disk
#[test]
fn test_config_file_overrides_some_keys() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    writeln!(file, "phone_min_length = 8").expect("write config");
    writeln!(file, "default_availability_status = \"open\"").expect("write config");

    let config = NormalizerConfig::load(file.path()).expect("config loads");

    assert_eq!(config.phone_min_length, 8);
    assert_eq!(config.default_availability_status, "open");
    assert_eq!(config.weight_decimals, 2);
    assert!(config.default_open_to_remote);
}

#[test]
fn test_config_missing_file_is_config_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = NormalizerConfig::load(dir.path().join("absent.toml")).expect_err("load must fail");

    assert!(matches!(err, ProfileHubError::Config(_)));
}
