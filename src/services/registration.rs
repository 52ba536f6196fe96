//! Registration Runtime
//!
//! Drives the public three-step registration flow: render the persisted form
//! schema with profile prefill, gate on required fields, then submit an
//! attendee record with confirmation code, session selections, and the
//! best-effort follow-ups (ticket counter, email, owner ping).

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

use crate::bindings::attendees::{
    clear_attendee_sessions, find_attendee, increment_ticket_sold, insert_attendee,
    insert_attendee_sessions, AttendeeInsert, AttendeeMeta, AttendeeRecord, AttendeeSessionRow,
};
use crate::bindings::comms::{notify_event_owner, qr_checkin_url, send_email, EmailMessage};
use crate::bindings::core::is_conflict_error;
use crate::bindings::events::{EventRecord, EventSession};
use crate::bindings::forms::{Field, FieldType};
use crate::bindings::viewer::ViewerProfile;
use crate::services::notification_service::show_error;

// ============================================================================
// Confirmation Codes
// ============================================================================

/// Unambiguous alphabet: no 0/O and no 1/I
pub const CODE_ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";
pub const CODE_PREFIX: &str = "EV-";
pub const CODE_LEN: usize = 6;

/// Map raw bytes onto the code alphabet
pub fn code_from_bytes(bytes: &[u8]) -> String {
    let mut code = String::with_capacity(CODE_PREFIX.len() + CODE_LEN);
    code.push_str(CODE_PREFIX);
    for byte in bytes.iter().take(CODE_LEN) {
        code.push(CODE_ALPHABET[*byte as usize % CODE_ALPHABET.len()] as char);
    }
    code
}

pub fn generate_confirmation_code() -> String {
    let mut bytes = [0u8; CODE_LEN];
    if getrandom::getrandom(&mut bytes).is_err() {
        // Entropy source unavailable; uuid stays usable either way
        bytes.copy_from_slice(&uuid::Uuid::new_v4().as_bytes()[..CODE_LEN]);
    }
    code_from_bytes(&bytes)
}

/// Recovered registrations keep their stored code; fresh ones use the
/// generated code persisted with the insert
pub fn effective_code(attendee: &AttendeeRecord, generated: &str) -> String {
    attendee
        .meta
        .confirmation_code
        .clone()
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| generated.to_string())
}

// ============================================================================
// Steps
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationStep {
    #[default]
    Details,
    Sessions,
    Confirmation,
}

impl RegistrationStep {
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationStep::Details => "Your details",
            RegistrationStep::Sessions => "Sessions",
            RegistrationStep::Confirmation => "Confirmation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RegistrationStep::Details => "Tell us who is attending",
            RegistrationStep::Sessions => "Pick the sessions you want to join",
            RegistrationStep::Confirmation => "Your ticket and agenda",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            RegistrationStep::Details => 0,
            RegistrationStep::Sessions => 1,
            RegistrationStep::Confirmation => 2,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            RegistrationStep::Details,
            RegistrationStep::Sessions,
            RegistrationStep::Confirmation,
        ]
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            RegistrationStep::Details => Some(RegistrationStep::Sessions),
            RegistrationStep::Sessions => Some(RegistrationStep::Confirmation),
            RegistrationStep::Confirmation => None,
        }
    }

    /// Confirmation is terminal; there is no way back from it
    pub fn previous(&self) -> Option<Self> {
        match self {
            RegistrationStep::Details => None,
            RegistrationStep::Sessions => Some(RegistrationStep::Details),
            RegistrationStep::Confirmation => None,
        }
    }
}

// ============================================================================
// Profile Prefill
// ============================================================================

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Default a field from the viewer's known attributes. Email and phone match
/// on the field type; everything else matches case-insensitively on label
/// substrings. Company wins over plain "name" so "Company name" lands right.
pub fn profile_value_for(field: &Field, viewer: &ViewerProfile) -> Option<String> {
    match field.field_type {
        FieldType::Email => return non_empty(&viewer.email),
        FieldType::Phone => return non_empty(&viewer.phone),
        _ => {}
    }

    let label = field.label.to_lowercase();
    if label.contains("job") || label.contains("title") {
        non_empty(&viewer.job_title)
    } else if label.contains("company") || label.contains("organization") {
        non_empty(&viewer.company)
    } else if label.contains("phone") {
        non_empty(&viewer.phone)
    } else if label.contains("email") {
        non_empty(&viewer.email)
    } else if label.contains("name") {
        non_empty(&viewer.name)
    } else {
        None
    }
}

// ============================================================================
// Submission Helpers
// ============================================================================

/// Label -> trimmed value for every answered field
pub fn build_response_map(
    fields: &[Field],
    answers: &HashMap<String, String>,
) -> HashMap<String, String> {
    fields
        .iter()
        .filter_map(|field| {
            let value = answers.get(&field.id)?.trim();
            if value.is_empty() {
                None
            } else {
                Some((field.label.clone(), value.to_string()))
            }
        })
        .collect()
}

/// Name and email come from the authenticated identity first, the filled
/// form fields second
pub fn resolve_identity(
    viewer: &ViewerProfile,
    fields: &[Field],
    answers: &HashMap<String, String>,
) -> Result<(String, String), String> {
    let from_fields = |pick: &dyn Fn(&Field) -> bool| -> Option<String> {
        fields
            .iter()
            .filter(|f| pick(f))
            .find_map(|f| answers.get(&f.id).and_then(|v| non_empty(v)))
    };

    let name = non_empty(&viewer.name).or_else(|| {
        from_fields(&|f: &Field| f.label.to_lowercase().contains("name"))
    });
    let email = non_empty(&viewer.email).or_else(|| {
        from_fields(&|f: &Field| {
            f.field_type == FieldType::Email || f.label.to_lowercase().contains("email")
        })
    });

    match (name, email) {
        (Some(name), Some(email)) => Ok((name, email)),
        _ => Err("A name and email address is required to register".to_string()),
    }
}

/// Sessions the attendee picked, in agenda order
pub fn selected_agenda(sessions: &[EventSession], selected: &[String]) -> Vec<EventSession> {
    sessions
        .iter()
        .filter(|s| selected.iter().any(|id| id == &s.id))
        .cloned()
        .collect()
}

pub fn confirmation_email_html(
    event: &EventRecord,
    code: &str,
    qr_url: &str,
    agenda: &[EventSession],
) -> String {
    let agenda_items = if agenda.is_empty() {
        "<li>No sessions selected yet</li>".to_string()
    } else {
        agenda
            .iter()
            .map(|s| format!("<li><strong>{}</strong> · {}</li>", s.starts_at, s.title))
            .collect::<Vec<_>>()
            .join("")
    };

    format!(
        "<h1>You're in!</h1>\
         <p>Your registration for <strong>{}</strong> is confirmed.</p>\
         <p>Confirmation code: <strong>{}</strong></p>\
         <p>Show this QR code at check-in:</p>\
         <img src=\"{}\" alt=\"Check-in code\" width=\"300\" height=\"300\" />\
         <h2>Your agenda</h2>\
         <ul>{}</ul>",
        event.name, code, qr_url, agenda_items
    )
}

// ============================================================================
// Registration Context
// ============================================================================

/// Reactive state for one registration attempt
#[derive(Clone, Copy)]
pub struct RegistrationContext {
    pub current_step: RwSignal<RegistrationStep>,
    pub fields: RwSignal<Vec<Field>>,
    /// Field id -> entered value
    pub answers: RwSignal<HashMap<String, String>>,
    /// Fields prefilled from the authenticated identity; rendered read-only
    pub locked_fields: RwSignal<Vec<String>>,
    pub selected_sessions: RwSignal<Vec<String>>,
    pub attendee: RwSignal<Option<AttendeeRecord>>,
    pub confirmation_code: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl RegistrationContext {
    pub fn new() -> Self {
        Self {
            current_step: RwSignal::new(RegistrationStep::Details),
            fields: RwSignal::new(Vec::new()),
            answers: RwSignal::new(HashMap::new()),
            locked_fields: RwSignal::new(Vec::new()),
            selected_sessions: RwSignal::new(Vec::new()),
            attendee: RwSignal::new(None),
            confirmation_code: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Bind the resolved schema and prefill from the viewer profile.
    /// Identity-sourced values lock their fields against edits.
    pub fn load_fields(&self, fields: Vec<Field>, viewer: &ViewerProfile) {
        let mut answers = HashMap::new();
        let mut locked = Vec::new();
        for field in &fields {
            if let Some(value) = profile_value_for(field, viewer) {
                answers.insert(field.id.clone(), value);
                if viewer.is_authenticated() {
                    locked.push(field.id.clone());
                }
            }
        }
        self.fields.set(fields);
        self.answers.set(answers);
        self.locked_fields.set(locked);
    }

    pub fn answer(&self, field_id: &str) -> String {
        self.answers
            .get_untracked()
            .get(field_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_answer(&self, field_id: &str, value: String) {
        if self.is_locked(field_id) {
            return;
        }
        self.answers.update(|map| {
            map.insert(field_id.to_string(), value);
        });
    }

    pub fn is_locked(&self, field_id: &str) -> bool {
        self.locked_fields
            .get_untracked()
            .iter()
            .any(|id| id == field_id)
    }

    pub fn toggle_session(&self, session_id: &str) {
        self.selected_sessions.update(|list| {
            if let Some(pos) = list.iter().position(|id| id == session_id) {
                list.remove(pos);
            } else {
                list.push(session_id.to_string());
            }
        });
    }

    pub fn is_session_selected(&self, session_id: &str) -> bool {
        self.selected_sessions
            .get_untracked()
            .iter()
            .any(|id| id == session_id)
    }

    /// Every required field must hold a non-empty trimmed value
    pub fn details_complete(&self) -> bool {
        let answers = self.answers.get_untracked();
        self.fields
            .get_untracked()
            .iter()
            .filter(|f| f.required)
            .all(|f| {
                answers
                    .get(&f.id)
                    .map(|v| !v.trim().is_empty())
                    .unwrap_or(false)
            })
    }

    /// Details -> Sessions is gated; Sessions -> Confirmation only happens
    /// through a successful submission
    pub fn try_advance(&self) -> bool {
        match self.current_step.get_untracked() {
            RegistrationStep::Details => {
                if self.details_complete() {
                    self.current_step.set(RegistrationStep::Sessions);
                    self.error.set(None);
                    true
                } else {
                    self.error
                        .set(Some("Please fill in all required fields".to_string()));
                    false
                }
            }
            RegistrationStep::Sessions | RegistrationStep::Confirmation => false,
        }
    }

    pub fn go_back(&self) {
        if let Some(previous) = self.current_step.get_untracked().previous() {
            self.current_step.set(previous);
            self.error.set(None);
        }
    }
}

impl Default for RegistrationContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Submission
// ============================================================================

/// Build the submit handler for the sessions step
pub fn submit_registration_action(
    ctx: RegistrationContext,
    event: RwSignal<Option<EventRecord>>,
    sessions: RwSignal<Vec<EventSession>>,
    viewer: RwSignal<ViewerProfile>,
) -> impl Fn() + Clone {
    move || {
        let Some(event) = event.get_untracked() else {
            return;
        };
        if ctx.is_submitting.get_untracked() {
            return;
        }
        let sessions = sessions.get_untracked();
        let viewer = viewer.get_untracked();
        spawn_local(async move {
            submit(ctx, event, sessions, viewer).await;
        });
    }
}

async fn submit(
    ctx: RegistrationContext,
    event: EventRecord,
    sessions: Vec<EventSession>,
    viewer: ViewerProfile,
) {
    let fields = ctx.fields.get_untracked();
    let answers = ctx.answers.get_untracked();

    // Validation failures never reach the backend
    let (name, email) = match resolve_identity(&viewer, &fields, &answers) {
        Ok(identity) => identity,
        Err(e) => {
            ctx.error.set(Some(e.clone()));
            show_error("Registration incomplete", Some(&e), None);
            return;
        }
    };

    ctx.is_submitting.set(true);
    ctx.error.set(None);

    let generated = generate_confirmation_code();
    let insert = AttendeeInsert {
        event_id: event.id.clone(),
        profile_id: viewer.profile_id.clone(),
        email: email.clone(),
        name: name.clone(),
        status: "confirmed".to_string(),
        meta: AttendeeMeta {
            responses: build_response_map(&fields, &answers),
            confirmation_code: Some(generated.clone()),
        },
    };

    let attendee = match insert_attendee(insert).await {
        Ok(created) => created,
        Err(e) if is_conflict_error(&e) => {
            // Already registered: reuse the existing row and replace the
            // session picks below
            match find_attendee(event.id.clone(), viewer.profile_id.clone(), email.clone()).await {
                Ok(Some(existing)) => existing,
                Ok(None) => {
                    fail(ctx, "Existing registration could not be found".to_string());
                    return;
                }
                Err(lookup_err) => {
                    fail(ctx, lookup_err);
                    return;
                }
            }
        }
        Err(e) => {
            fail(ctx, e);
            return;
        }
    };

    // Replace session selections wholesale; a no-op clear on fresh inserts
    let selected = ctx.selected_sessions.get_untracked();
    let replace = async {
        clear_attendee_sessions(attendee.id.clone()).await?;
        if selected.is_empty() {
            return Ok(());
        }
        let rows = selected
            .iter()
            .map(|session_id| AttendeeSessionRow {
                attendee_id: attendee.id.clone(),
                session_id: session_id.clone(),
            })
            .collect();
        insert_attendee_sessions(rows).await
    };
    if let Err(e) = replace.await {
        // The attendee row exists, so the registration stands
        log::warn!("Session selection could not be saved: {}", e);
    }

    let code = effective_code(&attendee, &generated);
    ctx.attendee.set(Some(attendee.clone()));
    ctx.confirmation_code.set(Some(code.clone()));
    ctx.current_step.set(RegistrationStep::Confirmation);
    ctx.is_submitting.set(false);

    // Best-effort follow-ups; none of these can undo the confirmation
    if let Some(ticket_id) = event.ticket_id.clone() {
        if let Err(e) = increment_ticket_sold(ticket_id, 1).await {
            log::warn!("Ticket counter increment failed: {}", e);
        }
    }

    let agenda = selected_agenda(&sessions, &selected);
    let qr_url = qr_checkin_url(&attendee.id);
    let html = confirmation_email_html(&event, &code, &qr_url, &agenda);
    let sent = send_email(EmailMessage {
        to: email,
        subject: format!("You're registered for {}", event.name),
        html,
    })
    .await;
    if !sent {
        log::warn!("Confirmation email for {} was not sent", attendee.id);
    }

    notify_event_owner(event.id.clone(), format!("{} just registered", name)).await;
}

fn fail(ctx: RegistrationContext, error: String) {
    ctx.error.set(Some(error.clone()));
    ctx.is_submitting.set(false);
    show_error("Registration failed", Some(&error), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn viewer() -> ViewerProfile {
        ViewerProfile {
            profile_id: Some("prof-1".to_string()),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            job_title: "Engineer".to_string(),
            company: "Analytical Engines Ltd".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            plan: "pro".to_string(),
        }
    }

    fn session(id: &str, title: &str) -> EventSession {
        EventSession {
            id: id.to_string(),
            event_id: "evt-1".to_string(),
            title: title.to_string(),
            description: None,
            speaker: None,
            starts_at: "2026-09-01T09:00:00Z".to_string(),
            ends_at: None,
            location: None,
        }
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(RegistrationStep::Details.next(), Some(RegistrationStep::Sessions));
        assert_eq!(RegistrationStep::Sessions.next(), Some(RegistrationStep::Confirmation));
        assert_eq!(RegistrationStep::Confirmation.next(), None);
        assert_eq!(RegistrationStep::Details.previous(), None);
        assert_eq!(RegistrationStep::Sessions.previous(), Some(RegistrationStep::Details));
        // Terminal step: no way back
        assert_eq!(RegistrationStep::Confirmation.previous(), None);
    }

    #[test]
    fn test_code_shape() {
        for _ in 0..100 {
            let code = generate_confirmation_code();
            assert_eq!(code.len(), CODE_PREFIX.len() + CODE_LEN);
            assert!(code.starts_with(CODE_PREFIX));
            for ch in code[CODE_PREFIX.len()..].bytes() {
                assert!(
                    CODE_ALPHABET.contains(&ch),
                    "unexpected character {} in {}",
                    ch as char,
                    code
                );
                assert!(![b'0', b'O', b'1', b'I'].contains(&ch));
            }
        }
    }

    #[test]
    fn test_code_byte_mapping_wraps() {
        assert_eq!(code_from_bytes(&[0, 0, 0, 0, 0, 0]), "EV-222222");
        // 255 % 32 == 31 -> last alphabet entry
        assert_eq!(code_from_bytes(&[255; 6]), "EV-ZZZZZZ");
        // Extra bytes beyond the code length are ignored
        assert_eq!(code_from_bytes(&[0, 0, 0, 0, 0, 0, 9, 9]).len(), 9);
    }

    #[test]
    fn test_prefill_matches_labels_and_types() {
        let viewer = viewer();
        let by_label = |label: &str| Field::with_label(FieldType::Text, label);

        assert_eq!(
            profile_value_for(&by_label("Job title"), &viewer).as_deref(),
            Some("Engineer")
        );
        assert_eq!(
            profile_value_for(&by_label("What is your TITLE?"), &viewer).as_deref(),
            Some("Engineer")
        );
        assert_eq!(
            profile_value_for(&by_label("Company name"), &viewer).as_deref(),
            Some("Analytical Engines Ltd")
        );
        assert_eq!(
            profile_value_for(&by_label("Organization"), &viewer).as_deref(),
            Some("Analytical Engines Ltd")
        );
        assert_eq!(
            profile_value_for(&by_label("Phone number"), &viewer).as_deref(),
            Some("+44 20 7946 0000")
        );
        assert_eq!(
            profile_value_for(&by_label("Full name"), &viewer).as_deref(),
            Some("Ada Lovelace")
        );
        assert_eq!(profile_value_for(&by_label("Dietary requirements"), &viewer), None);

        // Type-based matches ignore the label entirely
        assert_eq!(
            profile_value_for(&Field::with_label(FieldType::Email, "Contact"), &viewer).as_deref(),
            Some("ada@example.com")
        );
        assert_eq!(
            profile_value_for(&Field::with_label(FieldType::Phone, "Reach me at"), &viewer)
                .as_deref(),
            Some("+44 20 7946 0000")
        );
    }

    #[test]
    fn test_prefill_locks_only_authenticated_viewers() {
        let ctx = RegistrationContext::new();
        let fields = vec![
            Field::system(FieldType::Text, "Full name", true),
            Field::system(FieldType::Email, "Email address", true),
            Field::with_label(FieldType::Text, "Dietary requirements"),
        ];

        ctx.load_fields(fields.clone(), &viewer());
        assert_eq!(ctx.locked_fields.get_untracked().len(), 2);
        assert!(ctx.is_locked(&fields[0].id));
        assert!(!ctx.is_locked(&fields[2].id));

        // Locked answers refuse edits
        let before = ctx.answer(&fields[0].id);
        ctx.set_answer(&fields[0].id, "Someone Else".to_string());
        assert_eq!(ctx.answer(&fields[0].id), before);

        // Anonymous viewers get no prefill and no locks
        let ctx = RegistrationContext::new();
        ctx.load_fields(fields, &ViewerProfile::default());
        assert!(ctx.answers.get_untracked().is_empty());
        assert!(ctx.locked_fields.get_untracked().is_empty());
    }

    #[test]
    fn test_required_gate_blocks_until_filled() {
        let ctx = RegistrationContext::new();
        let name = Field::system(FieldType::Text, "Full name", true);
        let email = Field::system(FieldType::Email, "Email address", true);
        let optional = Field::with_label(FieldType::Text, "Twitter handle");
        let name_id = name.id.clone();
        let email_id = email.id.clone();
        ctx.load_fields(vec![name, email, optional], &ViewerProfile::default());

        assert!(!ctx.try_advance());
        assert_eq!(ctx.current_step.get_untracked(), RegistrationStep::Details);

        // Whitespace does not count as filled
        ctx.set_answer(&name_id, "   ".to_string());
        ctx.set_answer(&email_id, "ada@example.com".to_string());
        assert!(!ctx.details_complete());
        assert!(!ctx.try_advance());

        ctx.set_answer(&name_id, "Ada".to_string());
        assert!(ctx.details_complete());
        assert!(ctx.try_advance());
        assert_eq!(ctx.current_step.get_untracked(), RegistrationStep::Sessions);
        assert!(ctx.error.get_untracked().is_none());
    }

    #[test]
    fn test_advance_never_skips_submission() {
        let ctx = RegistrationContext::new();
        ctx.current_step.set(RegistrationStep::Sessions);
        assert!(!ctx.try_advance());
        assert_eq!(ctx.current_step.get_untracked(), RegistrationStep::Sessions);

        ctx.current_step.set(RegistrationStep::Confirmation);
        assert!(!ctx.try_advance());
        ctx.go_back();
        assert_eq!(ctx.current_step.get_untracked(), RegistrationStep::Confirmation);
    }

    #[test]
    fn test_session_toggle_and_agenda_order() {
        let ctx = RegistrationContext::new();
        ctx.toggle_session("s2");
        ctx.toggle_session("s1");
        ctx.toggle_session("s3");
        ctx.toggle_session("s2");
        assert_eq!(ctx.selected_sessions.get_untracked(), vec!["s1", "s3"]);
        assert!(ctx.is_session_selected("s1"));
        assert!(!ctx.is_session_selected("s2"));

        let sessions = vec![
            session("s1", "Opening keynote"),
            session("s2", "Workshop"),
            session("s3", "Closing panel"),
        ];
        let agenda = selected_agenda(&sessions, &ctx.selected_sessions.get_untracked());
        let titles: Vec<&str> = agenda.iter().map(|s| s.title.as_str()).collect();
        // Agenda keeps schedule order, not click order
        assert_eq!(titles, vec!["Opening keynote", "Closing panel"]);
    }

    #[test]
    fn test_response_map_keys_by_label_and_skips_blanks() {
        let name = Field::with_label(FieldType::Text, "Full name");
        let diet = Field::with_label(FieldType::Text, "Dietary requirements");
        let mut answers = HashMap::new();
        answers.insert(name.id.clone(), "  Ada Lovelace  ".to_string());
        answers.insert(diet.id.clone(), "   ".to_string());

        let map = build_response_map(&[name, diet], &answers);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Full name").map(String::as_str), Some("Ada Lovelace"));
    }

    #[test]
    fn test_identity_prefers_viewer_then_fields() {
        let name = Field::with_label(FieldType::Text, "Full name");
        let email = Field::with_label(FieldType::Email, "Email address");
        let mut answers = HashMap::new();
        answers.insert(name.id.clone(), "Grace Hopper".to_string());
        answers.insert(email.id.clone(), "grace@example.com".to_string());
        let fields = vec![name, email];

        let (n, e) = resolve_identity(&viewer(), &fields, &answers).unwrap();
        assert_eq!(n, "Ada Lovelace");
        assert_eq!(e, "ada@example.com");

        let (n, e) = resolve_identity(&ViewerProfile::default(), &fields, &answers).unwrap();
        assert_eq!(n, "Grace Hopper");
        assert_eq!(e, "grace@example.com");

        let empty = HashMap::new();
        assert!(resolve_identity(&ViewerProfile::default(), &fields, &empty).is_err());
    }

    #[test]
    fn test_stored_code_wins_on_recovery() {
        let mut attendee: AttendeeRecord = serde_json::from_value(json!({
            "id": "att-1",
            "event_id": "evt-1",
            "profile_id": null,
            "email": "ada@example.com",
            "name": "Ada",
            "status": "confirmed",
            "meta": { "confirmation_code": "EV-ABCDEF" },
            "created_at": "2026-02-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(effective_code(&attendee, "EV-222222"), "EV-ABCDEF");

        attendee.meta.confirmation_code = None;
        assert_eq!(effective_code(&attendee, "EV-222222"), "EV-222222");

        attendee.meta.confirmation_code = Some(String::new());
        assert_eq!(effective_code(&attendee, "EV-222222"), "EV-222222");
    }

    #[test]
    fn test_confirmation_email_lists_agenda() {
        let event: EventRecord = serde_json::from_value(json!({
            "id": "evt-1",
            "name": "RustConf 2026",
            "description": null,
            "start_date": null,
            "end_date": null,
            "location": null,
            "hero_image_url": null,
            "theme_color": null,
            "owner_email": null,
            "ticket_id": null,
            "status": "published",
            "created_at": "2026-01-01T00:00:00Z"
        }))
        .unwrap();

        let html = confirmation_email_html(
            &event,
            "EV-ABC234",
            "https://quickchart.io/qr?size=300&text=att-1",
            &[session("s1", "Opening keynote")],
        );
        assert!(html.contains("RustConf 2026"));
        assert!(html.contains("EV-ABC234"));
        assert!(html.contains("Opening keynote"));
        assert!(html.contains("text=att-1"));

        let empty = confirmation_email_html(&event, "EV-ABC234", "qr", &[]);
        assert!(empty.contains("No sessions selected"));
    }
}
