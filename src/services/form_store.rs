//! Form Schema Store
//!
//! Owns the cached form list for the event being authored, the editable state
//! of the currently open form, and the persistence discipline around it:
//! debounced autosave with cancel-and-reschedule, a single-flight save queue
//! per form, and rollback to the last committed snapshot when a save fails.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::core::is_conflict_error;
use crate::bindings::forms::{
    delete_event_form, insert_event_form, list_event_forms, update_event_form, Field, FieldType,
    FormInsert, FormPatch, FormRecord, FormSchema, FormStatus, FormType, DEFAULT_REGISTRATION_KEY,
};
use crate::services::notification_service::NotificationState;
use crate::services::notification_service::ToastType;

// ============================================================================
// Constants
// ============================================================================

/// Quiet period between the last edit and the autosave write
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 600;

/// Arm a one-shot timer
fn arm_timeout<F>(delay_ms: u64, callback: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(target_arch = "wasm32")]
    gloo_timers::callback::Timeout::new(delay_ms as u32, callback).forget();
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Timers never fire off-wasm; tests drive the ticket checks directly
        let _ = (delay_ms, callback);
    }
}

// ============================================================================
// Save Status
// ============================================================================

/// Persistence state of the currently open form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SaveStatus {
    /// Nothing to save
    Idle,
    /// Edits made, autosave scheduled
    Pending,
    /// A save is in flight
    Saving,
    /// Local state matches the backend row
    Committed,
    /// Last save failed; local state was rolled back
    Failed,
}

impl SaveStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, SaveStatus::Saving)
    }

    pub fn has_pending(&self) -> bool {
        matches!(self, SaveStatus::Pending)
    }
}

// ============================================================================
// Form Descriptors & Seeding
// ============================================================================

/// What a dashboard card needs to resolve or create its backing row
#[derive(Clone, Debug, PartialEq)]
pub struct FormDescriptor {
    pub db_id: Option<String>,
    pub form_key: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub form_type: FormType,
    pub status: FormStatus,
    pub is_default: bool,
}

impl FormDescriptor {
    /// The well-known registration card every event starts with
    pub fn default_registration() -> Self {
        Self {
            db_id: None,
            form_key: Some(DEFAULT_REGISTRATION_KEY.to_string()),
            title: "Registration form".to_string(),
            description: Some("Collected from every attendee at sign-up".to_string()),
            form_type: FormType::Registration,
            status: FormStatus::Active,
            is_default: true,
        }
    }

    pub fn blank(title: String, form_type: FormType) -> Self {
        Self {
            db_id: None,
            form_key: None,
            title,
            description: None,
            form_type,
            status: FormStatus::Draft,
            is_default: false,
        }
    }

    /// Card descriptor for a row that already exists
    pub fn for_record(form: &FormRecord) -> Self {
        Self {
            db_id: Some(form.id.clone()),
            form_key: form.form_key.clone(),
            title: form.title.clone(),
            description: form.description.clone(),
            form_type: form.form_type,
            status: form.status,
            is_default: form.is_default,
        }
    }
}

/// Fields materialized for recognized form keys
pub fn seeded_fields(form_key: Option<&str>) -> Vec<Field> {
    match form_key {
        Some(DEFAULT_REGISTRATION_KEY) => vec![
            Field::system(FieldType::Text, "Full name", true),
            Field::system(FieldType::Email, "Email address", true),
        ],
        _ => Vec::new(),
    }
}

fn insert_payload(event_id: &str, descriptor: &FormDescriptor) -> FormInsert {
    FormInsert {
        event_id: event_id.to_string(),
        form_key: descriptor.form_key.clone(),
        title: descriptor.title.clone(),
        description: descriptor.description.clone(),
        form_type: descriptor.form_type,
        status: descriptor.status,
        is_default: descriptor.is_default,
        is_template: false,
        is_free: true,
        is_pro: false,
        schema: FormSchema {
            fields: seeded_fields(descriptor.form_key.as_deref()),
        },
    }
}

// ============================================================================
// Editable Form State
// ============================================================================

/// Signals behind the builder surface for the one form open at a time
#[derive(Clone, Copy)]
pub struct FormEditor {
    pub form_id: RwSignal<Option<String>>,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub form_type: RwSignal<FormType>,
    pub status: RwSignal<FormStatus>,
    pub fields: RwSignal<Vec<Field>>,
    /// Field currently shown in the properties panel
    pub selected_field: RwSignal<Option<String>>,
}

/// The last state known to match the backend row; restored on save failure
#[derive(Clone, Debug, PartialEq)]
pub struct FormSnapshot {
    pub title: String,
    pub description: String,
    pub form_type: FormType,
    pub status: FormStatus,
    pub fields: Vec<Field>,
}

impl FormEditor {
    fn new() -> Self {
        Self {
            form_id: RwSignal::new(None),
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            form_type: RwSignal::new(FormType::Registration),
            status: RwSignal::new(FormStatus::Draft),
            fields: RwSignal::new(Vec::new()),
            selected_field: RwSignal::new(None),
        }
    }

    fn load(&self, form: &FormRecord) {
        self.form_id.set(Some(form.id.clone()));
        self.title.set(form.title.clone());
        self.description.set(form.description.clone().unwrap_or_default());
        self.form_type.set(form.form_type);
        self.status.set(form.status);
        self.fields.set(form.schema.fields.clone());
        self.selected_field.set(None);
    }

    fn clear(&self) {
        self.form_id.set(None);
        self.selected_field.set(None);
    }

    pub fn capture(&self) -> FormSnapshot {
        FormSnapshot {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            form_type: self.form_type.get_untracked(),
            status: self.status.get_untracked(),
            fields: self.fields.get_untracked(),
        }
    }

    pub fn apply(&self, snapshot: &FormSnapshot) {
        self.title.set(snapshot.title.clone());
        self.description.set(snapshot.description.clone());
        self.form_type.set(snapshot.form_type);
        self.status.set(snapshot.status);
        self.fields.set(snapshot.fields.clone());
    }

    /// Everything the builder can change, as one row patch
    pub fn patch(&self) -> FormPatch {
        let description = self.description.get_untracked();
        FormPatch {
            title: Some(self.title.get_untracked()),
            description: if description.is_empty() { None } else { Some(description) },
            form_type: Some(self.form_type.get_untracked()),
            status: Some(self.status.get_untracked()),
            schema: Some(FormSchema {
                fields: self.fields.get_untracked(),
            }),
        }
    }

    pub fn field(&self, field_id: &str) -> Option<Field> {
        self.fields
            .get_untracked()
            .iter()
            .find(|f| f.id == field_id)
            .cloned()
    }
}

// ============================================================================
// Form Store
// ============================================================================

#[derive(Clone, Copy)]
pub struct FormStore {
    pub forms: RwSignal<Vec<FormRecord>>,
    pub is_loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub editor: FormEditor,
    pub save_status: RwSignal<SaveStatus>,
    pub last_save: RwSignal<Option<String>>,
    pub last_error: RwSignal<Option<String>>,
    loaded_event: RwSignal<Option<String>>,
    committed: RwSignal<Option<FormSnapshot>>,
    /// Bumped on every edit; a scheduled autosave only fires if its ticket is
    /// still the newest (cancel-and-reschedule)
    generation: RwSignal<u64>,
    in_flight: RwSignal<bool>,
    queued: RwSignal<Option<FormPatch>>,
    notifier: NotificationState,
}

impl FormStore {
    pub fn new(notifier: NotificationState) -> Self {
        Self {
            forms: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
            editor: FormEditor::new(),
            save_status: RwSignal::new(SaveStatus::Idle),
            last_save: RwSignal::new(None),
            last_error: RwSignal::new(None),
            loaded_event: RwSignal::new(None),
            committed: RwSignal::new(None),
            generation: RwSignal::new(0),
            in_flight: RwSignal::new(false),
            queued: RwSignal::new(None),
            notifier,
        }
    }

    // ------------------------------------------------------------------
    // Fetch
    // ------------------------------------------------------------------

    /// A fetch for an event whose list is already held is a no-op
    pub fn needs_fetch(&self, event_id: &str) -> bool {
        self.loaded_event.get_untracked().as_deref() != Some(event_id)
            && !self.is_loading.get_untracked()
    }

    pub async fn load_forms(&self, event_id: String, force: bool) -> Result<(), String> {
        if !force && !self.needs_fetch(&event_id) {
            return Ok(());
        }
        self.is_loading.set(true);
        self.load_error.set(None);

        let result = list_event_forms(event_id.clone()).await;
        self.is_loading.set(false);

        match result {
            Ok(list) => {
                self.forms.set(list);
                self.loaded_event.set(Some(event_id));
                Ok(())
            }
            Err(e) => {
                self.load_error.set(Some(e.clone()));
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Ensure
    // ------------------------------------------------------------------

    /// Resolve the row a card refers to: stored db id first, then the
    /// well-known key. Lookup always runs before any create.
    pub fn resolve_existing(&self, descriptor: &FormDescriptor) -> Option<FormRecord> {
        let forms = self.forms.get_untracked();
        if let Some(id) = &descriptor.db_id {
            if let Some(form) = forms.iter().find(|f| &f.id == id) {
                return Some(form.clone());
            }
        }
        if let Some(key) = &descriptor.form_key {
            if let Some(form) = forms.iter().find(|f| f.form_key.as_ref() == Some(key)) {
                return Some(form.clone());
            }
        }
        None
    }

    /// Idempotent create-on-first-use. A lost race against another session is
    /// surfaced by the backend's uniqueness constraint and handled by
    /// re-fetching the winner's row.
    pub async fn ensure_form(
        &self,
        event_id: String,
        descriptor: FormDescriptor,
    ) -> Result<FormRecord, String> {
        if let Some(existing) = self.resolve_existing(&descriptor) {
            return Ok(existing);
        }

        match insert_event_form(insert_payload(&event_id, &descriptor)).await {
            Ok(created) => {
                self.forms.update(|list| list.push(created.clone()));
                Ok(created)
            }
            Err(e) if is_conflict_error(&e) => {
                self.load_forms(event_id, true).await?;
                self.resolve_existing(&descriptor)
                    .ok_or_else(|| "Form exists but could not be re-fetched".to_string())
            }
            Err(e) => Err(e),
        }
    }

    // ------------------------------------------------------------------
    // Open / close
    // ------------------------------------------------------------------

    pub fn open(&self, form: &FormRecord) {
        self.editor.load(form);
        self.committed.set(Some(self.editor.capture()));
        self.save_status.set(SaveStatus::Idle);
        self.last_error.set(None);
        self.queued.set(None);
        self.generation.update(|g| *g += 1);
    }

    /// Flush any pending edits with a final silent save, then unbind
    pub fn close(&self) {
        // Invalidate outstanding debounce timers
        self.generation.update(|g| *g += 1);
        if self.save_status.get_untracked().has_pending() {
            self.save_now(true);
        }
        self.editor.clear();
    }

    // ------------------------------------------------------------------
    // Edit + autosave scheduling
    // ------------------------------------------------------------------

    /// Record an edit and get the ticket a debounce timer must present
    pub fn note_edit(&self) -> u64 {
        self.generation.update(|g| *g += 1);
        self.save_status.set(SaveStatus::Pending);
        self.generation.get_untracked()
    }

    /// A timer fires only if no newer edit superseded its ticket
    pub fn should_fire(&self, ticket: u64) -> bool {
        ticket == self.generation.get_untracked()
            && self.editor.form_id.get_untracked().is_some()
    }

    /// Schedule a silent save after the debounce window; a newer edit
    /// invalidates this schedule and starts its own
    pub fn schedule_autosave(&self) {
        if self.editor.form_id.get_untracked().is_none() {
            return;
        }
        let ticket = self.note_edit();
        let store = *self;
        arm_timeout(AUTOSAVE_DEBOUNCE_MS, move || {
            if store.should_fire(ticket) {
                store.save_now(true);
            }
        });
    }

    // ------------------------------------------------------------------
    // Field mutations (all schedule autosave)
    // ------------------------------------------------------------------

    pub fn add_field(&self, field: Field) {
        self.editor.fields.update(|fields| fields.push(field));
        self.schedule_autosave();
    }

    /// Replace a field in place; system fields are not editable and an
    /// identical value does not re-schedule a save
    pub fn update_field(&self, updated: Field) {
        let mut changed = false;
        self.editor.fields.update(|fields| {
            if let Some(slot) = fields.iter_mut().find(|f| f.id == updated.id) {
                if !slot.is_system && *slot != updated {
                    *slot = updated;
                    changed = true;
                }
            }
        });
        if changed {
            self.schedule_autosave();
        }
    }

    /// Deleting a system field is a no-op; returns whether anything changed
    pub fn remove_field(&self, field_id: &str) -> bool {
        let mut removed = false;
        self.editor.fields.update(|fields| {
            if let Some(pos) = fields.iter().position(|f| f.id == field_id) {
                if fields[pos].can_delete() {
                    fields.remove(pos);
                    removed = true;
                }
            }
        });
        if removed {
            if self.editor.selected_field.get_untracked().as_deref() == Some(field_id) {
                self.editor.selected_field.set(None);
            }
            self.schedule_autosave();
        }
        removed
    }

    pub fn set_fields(&self, fields: Vec<Field>) {
        self.editor.fields.set(fields);
        self.schedule_autosave();
    }

    // ------------------------------------------------------------------
    // Save pipeline
    // ------------------------------------------------------------------

    /// Save the bound form now. With `silent` the success toast is
    /// suppressed; errors always surface.
    pub fn save_now(&self, silent: bool) {
        let Some(form_id) = self.editor.form_id.get_untracked() else {
            return;
        };
        let patch = self.editor.patch();
        self.request_save(form_id, patch, silent);
    }

    /// Single-flight per form: while a save is running, newer requests
    /// coalesce into one queued patch that runs after it lands.
    fn request_save(&self, form_id: String, patch: FormPatch, silent: bool) {
        if self.in_flight.get_untracked() {
            self.queued.set(Some(patch));
            return;
        }
        self.in_flight.set(true);
        self.save_status.set(SaveStatus::Saving);

        let store = *self;
        spawn_local(async move {
            let mut next = Some(patch);
            while let Some(current) = next.take() {
                match update_event_form(form_id.clone(), current).await {
                    Ok(saved) => store.apply_save_success(&saved, silent),
                    Err(e) => {
                        store.apply_save_failure(e);
                        break;
                    }
                }
                next = store.take_queued();
                if next.is_some() {
                    store.save_status.set(SaveStatus::Saving);
                }
            }
            store.in_flight.set(false);
        });
    }

    fn take_queued(&self) -> Option<FormPatch> {
        let next = self.queued.get_untracked();
        self.queued.set(None);
        next
    }

    pub fn apply_save_success(&self, saved: &FormRecord, silent: bool) {
        self.forms.update(|list| {
            if let Some(slot) = list.iter_mut().find(|f| f.id == saved.id) {
                *slot = saved.clone();
            }
        });
        self.committed.set(Some(FormSnapshot {
            title: saved.title.clone(),
            description: saved.description.clone().unwrap_or_default(),
            form_type: saved.form_type,
            status: saved.status,
            fields: saved.schema.fields.clone(),
        }));
        // Edits made while the save was in flight stay pending
        if self.queued.get_untracked().is_none()
            && !self.save_status.get_untracked().has_pending()
        {
            self.save_status.set(SaveStatus::Committed);
        }
        self.last_save.set(Some(chrono::Utc::now().to_rfc3339()));
        self.last_error.set(None);
        if !silent {
            self.notifier
                .add(ToastType::Success, "Form saved".to_string(), None, None);
        }
    }

    /// Roll the editor back to the last committed snapshot and surface the
    /// failure; queued work is discarded since it built on the failed state
    pub fn apply_save_failure(&self, error: String) {
        if let Some(snapshot) = self.committed.get_untracked() {
            self.editor.apply(&snapshot);
        }
        self.queued.set(None);
        self.generation.update(|g| *g += 1);
        self.save_status.set(SaveStatus::Failed);
        self.last_error.set(Some(error.clone()));
        self.notifier.add(
            ToastType::Error,
            "Failed to save form".to_string(),
            Some(error),
            None,
        );
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Gate before the confirm dialog; the default registration form refuses
    pub fn can_request_delete(&self, form: &FormRecord) -> bool {
        if form.is_protected() {
            self.notifier.add(
                ToastType::Error,
                "This form cannot be deleted".to_string(),
                Some("The registration form is required for sign-ups".to_string()),
                None,
            );
            return false;
        }
        true
    }

    pub async fn delete_form(&self, form_id: String) -> Result<(), String> {
        delete_event_form(form_id.clone()).await?;
        self.forms.update(|list| list.retain(|f| f.id != form_id));
        if self.editor.form_id.get_untracked().as_deref() == Some(form_id.as_str()) {
            self.editor.clear();
        }
        Ok(())
    }
}

// Global accessor helpers
pub fn provide_form_store() {
    let notifier = crate::services::notification_service::use_notification_state();
    provide_context(FormStore::new(notifier));
}

pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str, form_key: Option<&str>, is_default: bool) -> FormRecord {
        serde_json::from_value(json!({
            "id": id,
            "event_id": "evt-1",
            "form_key": form_key,
            "title": "Some form",
            "description": null,
            "form_type": "registration",
            "status": "active",
            "is_default": is_default,
            "schema": { "fields": [] },
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn store() -> FormStore {
        FormStore::new(NotificationState::new())
    }

    #[test]
    fn resolve_prefers_db_id_then_key() {
        let store = store();
        store.forms.set(vec![
            record("form-a", None, false),
            record("form-b", Some(DEFAULT_REGISTRATION_KEY), true),
        ]);

        let by_id = FormDescriptor {
            db_id: Some("form-a".to_string()),
            ..FormDescriptor::default_registration()
        };
        assert_eq!(store.resolve_existing(&by_id).unwrap().id, "form-a");

        let by_key = FormDescriptor::default_registration();
        assert_eq!(store.resolve_existing(&by_key).unwrap().id, "form-b");

        let neither = FormDescriptor::blank("Quiz".to_string(), FormType::Survey);
        assert!(store.resolve_existing(&neither).is_none());

        // Same descriptor resolves to the same row on repeat lookups
        assert_eq!(store.resolve_existing(&by_key).unwrap().id, "form-b");
    }

    #[test]
    fn descriptor_for_record_resolves_back_to_its_row() {
        let store = store();
        let row = record("form-c", None, false);
        store.forms.set(vec![record("form-a", None, false), row.clone()]);

        let descriptor = FormDescriptor::for_record(&row);
        assert_eq!(descriptor.db_id.as_deref(), Some("form-c"));
        assert_eq!(store.resolve_existing(&descriptor).unwrap().id, "form-c");
    }

    #[test]
    fn default_registration_seeds_system_name_and_email() {
        let fields = seeded_fields(Some(DEFAULT_REGISTRATION_KEY));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field_type, FieldType::Text);
        assert_eq!(fields[1].field_type, FieldType::Email);
        assert!(fields.iter().all(|f| f.required && f.is_system && !f.can_delete()));

        assert!(seeded_fields(None).is_empty());
        assert!(seeded_fields(Some("speaker_intake")).is_empty());
    }

    #[test]
    fn insert_payload_carries_seeded_schema() {
        let payload = insert_payload("evt-9", &FormDescriptor::default_registration());
        assert_eq!(payload.event_id, "evt-9");
        assert_eq!(payload.form_key.as_deref(), Some(DEFAULT_REGISTRATION_KEY));
        assert!(payload.is_default);
        assert_eq!(payload.schema.fields.len(), 2);

        let blank = insert_payload("evt-9", &FormDescriptor::blank("Quiz".into(), FormType::Survey));
        assert!(blank.schema.fields.is_empty());
        assert!(!blank.is_default);
    }

    #[test]
    fn rapid_edits_leave_one_live_ticket() {
        let store = store();
        let tickets: Vec<u64> = (0..5).map(|_| store.note_edit()).collect();

        // Only the newest ticket survives the debounce check
        let live: Vec<&u64> = tickets.iter().filter(|t| **t == store.generation.get_untracked()).collect();
        assert_eq!(live.len(), 1);
        assert_eq!(*live[0], tickets[4]);
        assert_eq!(store.save_status.get_untracked(), SaveStatus::Pending);
    }

    #[test]
    fn stale_tickets_never_fire() {
        let store = store();
        store.editor.form_id.set(Some("form-1".to_string()));

        let first = store.note_edit();
        let second = store.note_edit();
        assert!(!store.should_fire(first));
        assert!(store.should_fire(second));

        // Unbinding the editor kills even the live ticket
        store.editor.form_id.set(None);
        assert!(!store.should_fire(second));
    }

    #[test]
    fn queued_saves_coalesce_to_last_write() {
        let store = store();
        store.in_flight.set(true);

        store.queued.set(Some(FormPatch {
            title: Some("First".to_string()),
            ..Default::default()
        }));
        store.queued.set(Some(FormPatch {
            title: Some("Second".to_string()),
            ..Default::default()
        }));

        let next = store.take_queued().unwrap();
        assert_eq!(next.title.as_deref(), Some("Second"));
        assert!(store.take_queued().is_none());
    }

    #[test]
    fn save_failure_rolls_back_to_committed() {
        let store = store();
        let form = record("form-1", Some(DEFAULT_REGISTRATION_KEY), true);
        store.forms.set(vec![form.clone()]);
        store.open(&form);

        store.editor.title.set("Renamed while offline".to_string());
        store.queued.set(Some(FormPatch::default()));
        store.apply_save_failure("network down".to_string());

        assert_eq!(store.editor.title.get_untracked(), "Some form");
        assert_eq!(store.save_status.get_untracked(), SaveStatus::Failed);
        assert_eq!(store.last_error.get_untracked().as_deref(), Some("network down"));
        // Queued work built on the failed state is discarded
        assert!(store.queued.get_untracked().is_none());
    }

    #[test]
    fn save_success_commits_cache_and_snapshot() {
        let store = store();
        let form = record("form-1", None, false);
        store.forms.set(vec![form.clone()]);
        store.open(&form);

        let mut saved = form.clone();
        saved.title = "Renamed".to_string();
        store.apply_save_success(&saved, true);

        assert_eq!(store.forms.get_untracked()[0].title, "Renamed");
        assert_eq!(store.save_status.get_untracked(), SaveStatus::Committed);
        assert!(store.last_save.get_untracked().is_some());

        // The committed snapshot is what rollback now restores
        store.editor.title.set("Draft edit".to_string());
        store.apply_save_failure("boom".to_string());
        assert_eq!(store.editor.title.get_untracked(), "Renamed");
    }

    #[test]
    fn system_fields_survive_removal_attempts() {
        let store = store();
        let form = record("form-1", Some(DEFAULT_REGISTRATION_KEY), true);
        store.open(&form);
        store.editor.fields.set(seeded_fields(Some(DEFAULT_REGISTRATION_KEY)));

        let system_id = store.editor.fields.get_untracked()[0].id.clone();
        assert!(!store.remove_field(&system_id));
        assert_eq!(store.editor.fields.get_untracked().len(), 2);
        assert_eq!(store.editor.fields.get_untracked()[0].id, system_id);

        store.add_field(Field::new(FieldType::Text));
        let added_id = store.editor.fields.get_untracked()[2].id.clone();
        assert!(store.remove_field(&added_id));
        assert_eq!(store.editor.fields.get_untracked().len(), 2);
    }

    #[test]
    fn update_field_skips_system_rows() {
        let store = store();
        let form = record("form-1", Some(DEFAULT_REGISTRATION_KEY), true);
        store.open(&form);
        store.editor.fields.set(seeded_fields(Some(DEFAULT_REGISTRATION_KEY)));

        let mut tampered = store.editor.fields.get_untracked()[0].clone();
        tampered.label = "Hacked".to_string();
        store.update_field(tampered);
        assert_eq!(store.editor.fields.get_untracked()[0].label, "Full name");

        store.add_field(Field::new(FieldType::Number));
        let mut mine = store.editor.fields.get_untracked()[2].clone();
        mine.label = "Ticket count".to_string();
        store.update_field(mine);
        assert_eq!(store.editor.fields.get_untracked()[2].label, "Ticket count");
    }

    #[test]
    fn update_field_with_identical_value_schedules_nothing() {
        let store = store();
        let form = record("form-1", Some(DEFAULT_REGISTRATION_KEY), true);
        store.open(&form);
        store.add_field(Field::new(FieldType::Text));
        store.save_status.set(SaveStatus::Committed);

        let unchanged = store.editor.fields.get_untracked()[0].clone();
        store.update_field(unchanged);
        assert_eq!(store.save_status.get_untracked(), SaveStatus::Committed);
    }

    #[test]
    fn delete_gate_protects_default_registration() {
        let store = store();
        assert!(!store.can_request_delete(&record("form-1", Some(DEFAULT_REGISTRATION_KEY), false)));
        assert!(!store.can_request_delete(&record("form-2", None, true)));
        assert!(store.can_request_delete(&record("form-3", None, false)));
        // Refusals surface as an error toast
        assert_eq!(store.notifier.notifications.get_untracked().len(), 2);
    }

    #[test]
    fn fetch_guard_skips_loaded_event() {
        let store = store();
        assert!(store.needs_fetch("evt-1"));
        store.loaded_event.set(Some("evt-1".to_string()));
        assert!(!store.needs_fetch("evt-1"));
        assert!(store.needs_fetch("evt-2"));
    }

    #[test]
    fn editor_patch_reflects_current_signals() {
        let store = store();
        let form = record("form-1", None, false);
        store.open(&form);
        store.editor.title.set("Speaker intake".to_string());
        store.editor.form_type.set(FormType::Application);

        let patch = store.editor.patch();
        assert_eq!(patch.title.as_deref(), Some("Speaker intake"));
        assert_eq!(patch.form_type, Some(FormType::Application));
        assert_eq!(patch.description, None);
        assert!(patch.schema.is_some());
    }
}
