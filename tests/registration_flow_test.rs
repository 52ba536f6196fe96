//! Registration Flow Tests
//!
//! Walks an attendee through the public flow as pure state: the seeded
//! schema, profile prefill and locking, the required-field gate, session
//! picks, and the confirmation materials built from them.

use leptos::prelude::GetUntracked;
use wasm_bindgen_test::*;
use eventra_frontend::bindings::comms::qr_checkin_url;
use eventra_frontend::bindings::events::{EventRecord, EventSession};
use eventra_frontend::bindings::forms::{Field, FieldType, DEFAULT_REGISTRATION_KEY};
use eventra_frontend::bindings::viewer::ViewerProfile;
use eventra_frontend::components::registration::sessions_step::session_time_range;
use eventra_frontend::services::form_store::seeded_fields;
use eventra_frontend::services::registration::{
    build_response_map, confirmation_email_html, resolve_identity, selected_agenda,
    RegistrationContext, RegistrationStep,
};

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Fixtures
// ============================================================================

fn attendee_viewer() -> ViewerProfile {
    ViewerProfile {
        profile_id: Some("prof-7".to_string()),
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        job_title: "Rear Admiral".to_string(),
        company: "US Navy".to_string(),
        phone: String::new(),
        plan: "free".to_string(),
    }
}

fn session(id: &str, title: &str, starts_at: &str, ends_at: Option<&str>) -> EventSession {
    EventSession {
        id: id.to_string(),
        event_id: "evt-1".to_string(),
        title: title.to_string(),
        description: None,
        speaker: None,
        starts_at: starts_at.to_string(),
        ends_at: ends_at.map(String::from),
        location: None,
    }
}

fn published_event() -> EventRecord {
    EventRecord {
        id: "evt-1".to_string(),
        name: "Eventra Summit".to_string(),
        description: None,
        start_date: Some("2026-09-01".to_string()),
        end_date: None,
        location: None,
        hero_image_url: None,
        theme_color: None,
        owner_email: None,
        ticket_id: None,
        status: "published".to_string(),
        created_at: "2026-01-01T00:00:00Z".to_string(),
    }
}

// ============================================================================
// Details Step
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_signed_in_attendee_walks_straight_to_sessions() {
    let ctx = RegistrationContext::new();
    ctx.load_fields(
        seeded_fields(Some(DEFAULT_REGISTRATION_KEY)),
        &attendee_viewer(),
    );

    // Identity fields arrive filled and locked
    let fields = ctx.fields.get_untracked();
    assert_eq!(ctx.answer(&fields[0].id), "Grace Hopper");
    assert_eq!(ctx.answer(&fields[1].id), "grace@example.com");
    assert!(ctx.is_locked(&fields[0].id));
    assert!(ctx.is_locked(&fields[1].id));

    // The seeded schema is already complete for a known viewer
    assert!(ctx.details_complete());
    assert!(ctx.try_advance());
    assert_eq!(ctx.current_step.get_untracked(), RegistrationStep::Sessions);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_walk_up_attendee_is_gated_until_details_are_filled() {
    let ctx = RegistrationContext::new();
    ctx.load_fields(
        seeded_fields(Some(DEFAULT_REGISTRATION_KEY)),
        &ViewerProfile::default(),
    );
    let fields = ctx.fields.get_untracked();

    assert!(!ctx.try_advance());
    assert_eq!(ctx.current_step.get_untracked(), RegistrationStep::Details);
    assert!(ctx.error.get_untracked().is_some());

    ctx.set_answer(&fields[0].id, "Ada Lovelace".to_string());
    assert!(!ctx.try_advance());

    ctx.set_answer(&fields[1].id, "ada@example.com".to_string());
    assert!(ctx.try_advance());
    // The gate error clears once the step advances
    assert!(ctx.error.get_untracked().is_none());

    // Identity for the attendee row comes from the filled fields
    let (name, email) = resolve_identity(
        &ViewerProfile::default(),
        &ctx.fields.get_untracked(),
        &ctx.answers.get_untracked(),
    )
    .expect("filled fields should resolve an identity");
    assert_eq!(name, "Ada Lovelace");
    assert_eq!(email, "ada@example.com");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_going_back_keeps_answers_and_session_picks() {
    let ctx = RegistrationContext::new();
    ctx.load_fields(
        seeded_fields(Some(DEFAULT_REGISTRATION_KEY)),
        &attendee_viewer(),
    );
    assert!(ctx.try_advance());

    ctx.toggle_session("s2");
    ctx.toggle_session("s1");
    ctx.go_back();
    assert_eq!(ctx.current_step.get_untracked(), RegistrationStep::Details);

    // Nothing was dropped on the way back
    assert!(ctx.details_complete());
    assert!(ctx.is_session_selected("s1"));
    assert!(ctx.is_session_selected("s2"));

    assert!(ctx.try_advance());
    assert_eq!(ctx.current_step.get_untracked(), RegistrationStep::Sessions);
}

// ============================================================================
// Organizer Questions
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_custom_questions_land_in_the_response_map() {
    let mut fields = seeded_fields(Some(DEFAULT_REGISTRATION_KEY));
    fields.push(Field::with_label(FieldType::Textarea, "Dietary requirements"));
    fields.push(Field::with_label(FieldType::Text, "Twitter handle"));
    let diet_id = fields[2].id.clone();

    let ctx = RegistrationContext::new();
    ctx.load_fields(fields, &attendee_viewer());
    ctx.set_answer(&diet_id, "  Vegetarian  ".to_string());
    // The optional handle stays blank

    let map = build_response_map(&ctx.fields.get_untracked(), &ctx.answers.get_untracked());
    assert_eq!(map.get("Full name").map(String::as_str), Some("Grace Hopper"));
    assert_eq!(
        map.get("Dietary requirements").map(String::as_str),
        Some("Vegetarian")
    );
    assert!(!map.contains_key("Twitter handle"));
}

// ============================================================================
// Confirmation Materials
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_confirmation_materials_follow_the_picked_agenda() {
    let ctx = RegistrationContext::new();
    ctx.toggle_session("s3");
    ctx.toggle_session("s1");

    let sessions = vec![
        session(
            "s1",
            "Opening keynote",
            "2026-09-01T09:00:00Z",
            Some("2026-09-01T10:30:00Z"),
        ),
        session("s2", "Hallway track", "2026-09-01T11:00:00Z", None),
        session("s3", "Closing panel", "2026-09-01T17:00:00Z", None),
    ];

    // Agenda keeps schedule order, not click order
    let agenda = selected_agenda(&sessions, &ctx.selected_sessions.get_untracked());
    let titles: Vec<&str> = agenda.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Opening keynote", "Closing panel"]);

    assert_eq!(
        session_time_range(&agenda[0].starts_at, agenda[0].ends_at.as_deref()),
        "09:00 to 10:30"
    );
    assert_eq!(session_time_range(&agenda[1].starts_at, None), "17:00");

    let qr = qr_checkin_url("att-1");
    let html = confirmation_email_html(&published_event(), "EV-ABC234", &qr, &agenda);
    assert!(html.contains("Eventra Summit"));
    assert!(html.contains("EV-ABC234"));
    assert!(html.contains("Opening keynote"));
    assert!(html.contains("Closing panel"));
    assert!(html.contains(&qr));
}

// ============================================================================
// Step Rail
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_step_rail_order_matches_navigation() {
    let steps = RegistrationStep::all();
    assert_eq!(steps.len(), 3);
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step.index(), i);
        assert!(!step.label().is_empty());
        assert!(!step.description().is_empty());
    }

    // Walking next from the first step visits every step exactly once
    let mut walk = vec![steps[0]];
    while let Some(next) = walk.last().and_then(|s| s.next()) {
        walk.push(next);
    }
    assert_eq!(walk, steps);
}
