//! Sample profile data

use serde_json::{json, Value};

/// A fully populated profile as the backend returns it
pub fn sample_profile_json() -> Value {
    json!({
        "id": 981,
        "firstName": "Maya",
        "lastName": "Okafor",
        "email": "maya@example.com",
        "city": "Lagos",
        "timezone": "Africa/Lagos",
        "headline": "Operations lead for climate nonprofits",
        "bio": "Ten years building field programs.",
        "missionStatement": "Make climate work boring and reliable.",
        "education": "MSc Environmental Policy",
        "avatarSeed": "heron",
        "skills": ["Program design", "Budgeting", "budgeting "],
        "areasOfFocus": ["Climate", "Energy access"],
        "preferredEngagements": ["Advisory"],
        "statusFlags": ["verified"],
        "volunteerBadges": [],
        "experiences": [{
            "organization": "SolarAid",
            "role": "Country Director",
            "startDate": "2018-03-01T00:00:00.000Z",
            "endDate": null,
            "description": "Ran distribution in three regions.",
            "highlights": ["Tripled reach"]
        }],
        "qualifications": [{
            "title": "PMP",
            "authority": "PMI",
            "year": 2017,
            "credentialUrl": "https://pmi.org/verify/123"
        }],
        "portfolioLinks": [{ "label": "Case study", "url": "https://example.org/case" }],
        "references": [{
            "id": 5,
            "name": "Tunde Bello",
            "relationship": "Former manager",
            "email": "tunde@example.com",
            "phone": "+234 801 234 5678",
            "isVerified": true,
            "weight": 0.8,
            "lastInteractedAt": "2024-01-15T09:30:00Z"
        }],
        "collaborationRoster": [{ "name": "Ife", "role": "Analyst" }],
        "impactHighlights": [{ "title": "Homes powered", "value": "40k" }],
        "pipelineInsights": [{ "project": "Grid pilot", "payout": "$12k", "status": "Proposal" }],
        "availabilityStatus": "open",
        "availableHoursPerWeek": "15",
        "openToRemote": true,
        "availabilityNotes": "Prefers async"
    })
}
