//! Serde shapes and invariants across the bindings layer.

use crate::bindings::attendees::AttendeeRecord;
use crate::bindings::core::is_conflict_error;
use crate::bindings::events::EventPatch;
use crate::bindings::forms::{Field, FieldType, FormPatch, FormRecord, FormType, FALLBACK_OPTIONS};
use crate::bindings::sponsors::SponsorTier;
use crate::bindings::viewer::ViewerProfile;
use serde_json::json;

// --- Core Module Tests ---

#[test]
fn test_conflict_detection_matches_code_and_phrase() {
    assert!(is_conflict_error("error 23505: unique violation"));
    assert!(is_conflict_error("Duplicate key value violates constraint"));
    assert!(!is_conflict_error("network timeout"));
    assert!(!is_conflict_error(""));
}

// --- Field Model Tests ---

#[test]
fn test_field_serializes_camel_case() {
    let mut field = Field::new(FieldType::Text);
    field.help_text = Some("Shown under the input".to_string());
    let json = serde_json::to_value(&field).unwrap();
    assert_eq!(json["type"], "text");
    assert_eq!(json["helpText"], "Shown under the input");
    assert_eq!(json["isSystem"], false);
    assert_eq!(json["isEditable"], true);
    // Non-choice fields carry no options key at all
    assert!(json.get("options").is_none());
}

#[test]
fn test_field_deserializes_with_defaults() {
    let json = json!({
        "id": "f1",
        "type": "dropdown",
        "label": "T-shirt size"
    });
    let field: Field = serde_json::from_value(json).unwrap();
    assert_eq!(field.field_type, FieldType::Dropdown);
    assert!(!field.required);
    assert!(field.options.is_empty());
    assert!(!field.is_system);
    assert!(field.is_editable);
}

#[test]
fn test_unknown_field_type_is_rejected() {
    let json = json!({
        "id": "f1",
        "type": "hologram",
        "label": "Nope"
    });
    assert!(serde_json::from_value::<Field>(json).is_err());
}

#[test]
fn test_new_choice_field_gets_default_options() {
    for ty in [
        FieldType::Dropdown,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Multichoice,
    ] {
        let field = Field::new(ty);
        assert_eq!(field.options, FALLBACK_OPTIONS.to_vec());
    }
    assert!(Field::new(FieldType::Date).options.is_empty());
}

#[test]
fn test_fresh_fields_get_distinct_ids() {
    let a = Field::new(FieldType::Text);
    let b = Field::new(FieldType::Text);
    assert_ne!(a.id, b.id);
    assert!(!a.id.is_empty());
}

#[test]
fn test_display_options_falls_back_when_emptied() {
    let mut field = Field::new(FieldType::Radio);
    field.options.clear();
    assert_eq!(field.display_options(), FALLBACK_OPTIONS.to_vec());

    field.options = vec!["Small".to_string(), "Large".to_string()];
    assert_eq!(field.display_options(), vec!["Small", "Large"]);

    // Non-choice types never display options
    let text = Field::new(FieldType::Text);
    assert!(text.display_options().is_empty());
}

#[test]
fn test_system_fields_are_locked() {
    let field = Field::system(FieldType::Email, "Email address", true);
    assert!(field.is_system);
    assert!(field.required);
    assert!(!field.can_delete());
    assert!(!field.can_edit());
}

// --- Form Module Tests ---

#[test]
fn test_form_type_kebab_case() {
    assert_eq!(
        serde_json::to_value(FormType::DataCollection).unwrap(),
        json!("data-collection")
    );
    assert_eq!(
        serde_json::from_value::<FormType>(json!("registration")).unwrap(),
        FormType::Registration
    );
}

#[test]
fn test_form_record_deserialization() {
    let json = json!({
        "id": "form-1",
        "event_id": "evt-1",
        "form_key": "default_registration",
        "title": "Registration",
        "description": null,
        "form_type": "registration",
        "status": "active",
        "is_default": true,
        "schema": { "fields": [
            { "id": "f1", "type": "text", "label": "Full name", "required": true, "isSystem": true, "isEditable": false }
        ]},
        "created_at": "2026-01-10T09:00:00Z",
        "updated_at": "2026-01-12T14:30:00Z"
    });
    let form: FormRecord = serde_json::from_value(json).unwrap();
    assert_eq!(form.schema.fields.len(), 1);
    assert!(form.schema.fields[0].is_system);
    assert!(form.is_protected());
}

#[test]
fn test_protection_covers_key_and_flag() {
    let mut form: FormRecord = serde_json::from_value(json!({
        "id": "form-2",
        "event_id": "evt-1",
        "form_key": null,
        "title": "Feedback",
        "description": null,
        "form_type": "feedback",
        "status": "draft",
        "created_at": "2026-01-10T09:00:00Z",
        "updated_at": "2026-01-10T09:00:00Z"
    }))
    .unwrap();
    assert!(!form.is_protected());

    form.is_default = true;
    assert!(form.is_protected());

    form.is_default = false;
    form.form_key = Some("default_registration".to_string());
    assert!(form.is_protected());
}

#[test]
fn test_empty_patch_serializes_empty() {
    let patch = FormPatch::default();
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({}));

    let patch = FormPatch {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "title": "Renamed" }));
}

#[test]
fn test_event_patch_skips_unset_fields() {
    let patch = EventPatch {
        theme_color: Some("#7c3aed".to_string()),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({ "theme_color": "#7c3aed" })
    );
}

// --- Attendee Module Tests ---

#[test]
fn test_attendee_meta_defaults() {
    let json = json!({
        "id": "att-1",
        "event_id": "evt-1",
        "profile_id": null,
        "email": "ada@example.com",
        "name": "Ada",
        "status": "confirmed",
        "created_at": "2026-02-01T10:00:00Z"
    });
    let attendee: AttendeeRecord = serde_json::from_value(json).unwrap();
    assert!(attendee.meta.responses.is_empty());
    assert!(attendee.meta.confirmation_code.is_none());
}

// --- Sponsor Module Tests ---

#[test]
fn test_sponsor_tier_roundtrip() {
    assert_eq!(
        serde_json::to_value(SponsorTier::Platinum).unwrap(),
        json!("platinum")
    );
    assert_eq!(
        serde_json::from_value::<SponsorTier>(json!("community")).unwrap(),
        SponsorTier::Community
    );
}

// --- Viewer Module Tests ---

#[test]
fn test_viewer_authentication_flag() {
    let anon = ViewerProfile::default();
    assert!(!anon.is_authenticated());

    let known = ViewerProfile {
        profile_id: Some("prof-1".to_string()),
        ..Default::default()
    };
    assert!(known.is_authenticated());
}
