//! Form Builder Flow Tests
//!
//! State walks across the builder stack: resolving the default registration
//! card to its backing row, dropping palette tokens through the plan gate,
//! reordering the canvas, and riding a save round through commit and rollback.

use leptos::prelude::{GetUntracked, Set};
use wasm_bindgen_test::*;
use eventra_frontend::bindings::forms::{
    FieldType, FormRecord, FormSchema, FormStatus, FormType, DEFAULT_REGISTRATION_KEY,
    FALLBACK_OPTIONS,
};
use eventra_frontend::components::form_builder::{
    clamp_label, reorder_fields, resolve_drop, slot_for_pointer, DragPayload, DropOutcome,
    NewFieldSpec, LABEL_MAX_LEN,
};
use eventra_frontend::services::entitlements::Entitlements;
use eventra_frontend::services::form_store::{seeded_fields, FormDescriptor, FormStore, SaveStatus};
use eventra_frontend::services::notification_service::NotificationState;

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Fixtures
// ============================================================================

fn registration_record() -> FormRecord {
    FormRecord {
        id: "form-1".to_string(),
        event_id: "evt-1".to_string(),
        form_key: Some(DEFAULT_REGISTRATION_KEY.to_string()),
        title: "Registration form".to_string(),
        description: None,
        form_type: FormType::Registration,
        status: FormStatus::Active,
        is_default: true,
        is_template: false,
        is_free: true,
        is_pro: false,
        schema: FormSchema {
            fields: seeded_fields(Some(DEFAULT_REGISTRATION_KEY)),
        },
        created_at: "2026-01-01T00:00:00Z".to_string(),
        updated_at: "2026-01-01T00:00:00Z".to_string(),
    }
}

fn token(field_type: FieldType) -> NewFieldSpec {
    NewFieldSpec {
        field_type,
        label: None,
        options: Vec::new(),
    }
}

fn open_store() -> FormStore {
    let store = FormStore::new(NotificationState::new());
    let record = registration_record();
    store.forms.set(vec![record.clone()]);
    store.open(&record);
    store
}

// ============================================================================
// Opening The Default Registration Form
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_dashboard_card_resolves_and_opens_its_row() {
    let store = FormStore::new(NotificationState::new());
    store.forms.set(vec![registration_record()]);

    let resolved = store
        .resolve_existing(&FormDescriptor::default_registration())
        .expect("well-known key should resolve");
    assert_eq!(resolved.id, "form-1");

    // Opening binds the editor to the row and starts from a clean slate
    store.open(&resolved);
    assert_eq!(
        store.editor.form_id.get_untracked().as_deref(),
        Some("form-1")
    );
    assert_eq!(store.editor.title.get_untracked(), "Registration form");
    assert_eq!(store.editor.fields.get_untracked().len(), 2);
    assert_eq!(store.save_status.get_untracked(), SaveStatus::Idle);
    assert!(store.editor.selected_field.get_untracked().is_none());
}

// ============================================================================
// Palette Drops & Plan Gating
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_free_plan_drop_outcomes() {
    let free = Entitlements::free();

    match resolve_drop(&DragPayload::New(token(FieldType::Text)), free) {
        DropOutcome::Insert(field) => {
            assert_eq!(field.label, "Short text");
            assert!(!field.is_pro);
            assert!(field.can_delete());
        }
        other => panic!("short text should insert on free, got {:?}", other),
    }

    // Gated types bounce with the type, never a half-built field
    assert_eq!(
        resolve_drop(&DragPayload::New(token(FieldType::File)), free),
        DropOutcome::Blocked(FieldType::File)
    );
    assert_eq!(
        resolve_drop(&DragPayload::New(token(FieldType::Country)), free),
        DropOutcome::Blocked(FieldType::Country)
    );

    // Reordering an existing row is never plan-gated
    let existing = DragPayload::Existing("row-9".to_string());
    assert_eq!(
        resolve_drop(&existing, free),
        DropOutcome::Move("row-9".to_string())
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn test_pro_plan_builds_gated_fields() {
    match resolve_drop(&DragPayload::New(token(FieldType::File)), Entitlements::pro()) {
        DropOutcome::Insert(field) => {
            assert_eq!(field.field_type, FieldType::File);
            assert!(field.is_pro);
        }
        other => panic!("file upload should insert on pro, got {:?}", other),
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn test_preconfigured_token_carries_label_and_options() {
    let token = NewFieldSpec {
        field_type: FieldType::Dropdown,
        label: Some("T-shirt size".to_string()),
        options: vec!["S".to_string(), "M".to_string(), "L".to_string()],
    };
    match resolve_drop(&DragPayload::New(token), Entitlements::free()) {
        DropOutcome::Insert(field) => {
            assert_eq!(field.label, "T-shirt size");
            assert_eq!(field.options, vec!["S", "M", "L"]);
            assert_eq!(field.display_options(), vec!["S", "M", "L"]);
        }
        other => panic!("dropdown should insert on free, got {:?}", other),
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn test_emptied_choice_options_fall_back_deterministically() {
    let mut field = match resolve_drop(
        &DragPayload::New(token(FieldType::Dropdown)),
        Entitlements::free(),
    ) {
        DropOutcome::Insert(field) => field,
        other => panic!("dropdown should insert, got {:?}", other),
    };
    assert_eq!(field.options, FALLBACK_OPTIONS.to_vec());

    // Edited down to zero options, the respondent still sees choices
    field.options.clear();
    assert_eq!(field.display_options(), FALLBACK_OPTIONS.to_vec());

    // Non-choice types never grow options
    let text = token(FieldType::Text).build();
    assert!(text.display_options().is_empty());
}

// ============================================================================
// Canvas Ordering
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_drop_insert_and_reorder_keep_every_field() {
    let store = open_store();

    // Drop two tokens onto the end of the canvas
    for ty in [FieldType::Textarea, FieldType::Date] {
        match resolve_drop(&DragPayload::New(token(ty)), Entitlements::free()) {
            DropOutcome::Insert(field) => store.add_field(field),
            other => panic!("{:?} should insert on free, got {:?}", ty, other),
        }
    }
    let before: Vec<String> = store
        .editor
        .fields
        .get_untracked()
        .iter()
        .map(|f| f.id.clone())
        .collect();
    assert_eq!(before.len(), 4);

    // Drag the long-text row above the seeded rows: a pointer in the top
    // half of row 0 targets slot 0
    let slot = slot_for_pointer(0, 12.0, 48.0);
    assert_eq!(slot, 0);
    let mut fields = store.editor.fields.get_untracked();
    let dragged = fields[2].id.clone();
    assert!(reorder_fields(&mut fields, &dragged, slot));
    store.set_fields(fields);

    let after: Vec<String> = store
        .editor
        .fields
        .get_untracked()
        .iter()
        .map(|f| f.id.clone())
        .collect();
    assert_eq!(after[0], dragged);

    // Nothing duplicated, nothing lost
    let mut sorted_before = before.clone();
    let mut sorted_after = after.clone();
    sorted_before.sort();
    sorted_after.sort();
    assert_eq!(sorted_before, sorted_after);

    // Every mutation armed an autosave
    assert!(store.save_status.get_untracked().has_pending());

    // Unbind before the debounce window elapses; armed timers check the
    // binding and do nothing once it is gone
    store.editor.form_id.set(None);
}

// ============================================================================
// Save Rounds
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_save_round_commits_then_rolls_back_the_next_failure() {
    let notifier = NotificationState::new();
    let store = FormStore::new(notifier);
    let record = registration_record();
    store.forms.set(vec![record.clone()]);
    store.open(&record);

    // Rename and land the save
    store.editor.title.set("Attendee intake".to_string());
    let mut saved = registration_record();
    saved.title = "Attendee intake".to_string();
    store.apply_save_success(&saved, true);

    assert_eq!(store.save_status.get_untracked(), SaveStatus::Committed);
    assert_eq!(store.forms.get_untracked()[0].title, "Attendee intake");
    assert!(store.last_save.get_untracked().is_some());
    // Silent saves do not toast
    assert!(notifier.notifications.get_untracked().is_empty());

    // The next batch of edits fails to save; the editor returns to the
    // committed row
    store.editor.title.set("Half-typed renam".to_string());
    store.add_field(token(FieldType::Number).build());
    store.apply_save_failure("connection reset".to_string());

    assert_eq!(store.editor.title.get_untracked(), "Attendee intake");
    assert_eq!(store.editor.fields.get_untracked().len(), 2);
    assert_eq!(store.save_status.get_untracked(), SaveStatus::Failed);
    assert_eq!(
        store.last_error.get_untracked().as_deref(),
        Some("connection reset")
    );
    assert_eq!(notifier.notifications.get_untracked().len(), 1);
}

// ============================================================================
// Properties Editing
// ============================================================================

#[wasm_bindgen_test(unsupported = test)]
fn test_label_clamp_counts_characters_not_bytes() {
    let ascii = "a".repeat(LABEL_MAX_LEN + 20);
    assert_eq!(clamp_label(&ascii).chars().count(), LABEL_MAX_LEN);

    // Multi-byte labels cut on character boundaries
    let wide = "日".repeat(LABEL_MAX_LEN + 5);
    let clamped = clamp_label(&wide);
    assert_eq!(clamped.chars().count(), LABEL_MAX_LEN);
    assert!(clamped.chars().all(|c| c == '日'));

    let short = "Dietary requirements";
    assert_eq!(clamp_label(short), short);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_property_edit_flows_into_the_pending_patch() {
    let store = open_store();
    store.add_field(token(FieldType::Text).build());

    let mut field = store.editor.fields.get_untracked()[2].clone();
    field.label = clamp_label(&"Which sessions are you most excited about".repeat(4));
    field.required = true;
    store.update_field(field.clone());

    let held = store
        .editor
        .field(&field.id)
        .expect("field should still be listed");
    assert_eq!(held.label.chars().count(), LABEL_MAX_LEN);
    assert!(held.required);

    // The pending patch carries the updated schema
    let patch = store.editor.patch();
    let schema = patch.schema.expect("patch should carry the schema");
    assert!(schema.fields.iter().any(|f| f.id == field.id && f.required));

    store.editor.form_id.set(None);
}
