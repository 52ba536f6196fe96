use serde::{Deserialize, Serialize};
use serde_json::json;
use super::core::{invoke, invoke_void};

/// Well-known key for the one registration form every event has
pub const DEFAULT_REGISTRATION_KEY: &str = "default_registration";

/// Fallback options shown when a choice field has an empty list
pub const FALLBACK_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

// ============================================================================
// Field Model
// ============================================================================

/// One input type per variant; rendering, defaults, icons, and gating all
/// dispatch on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Dropdown,
    Checkbox,
    Radio,
    Date,
    File,
    Number,
    Multichoice,
    Country,
    Email,
    Phone,
    Url,
    Address,
}

impl FieldType {
    pub fn all() -> &'static [FieldType] {
        &[
            FieldType::Text,
            FieldType::Textarea,
            FieldType::Dropdown,
            FieldType::Checkbox,
            FieldType::Radio,
            FieldType::Date,
            FieldType::File,
            FieldType::Number,
            FieldType::Multichoice,
            FieldType::Country,
            FieldType::Email,
            FieldType::Phone,
            FieldType::Url,
            FieldType::Address,
        ]
    }

    /// Display name, also used as the label of a freshly added field
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "Short text",
            FieldType::Textarea => "Long text",
            FieldType::Dropdown => "Dropdown",
            FieldType::Checkbox => "Checkboxes",
            FieldType::Radio => "Multiple choice",
            FieldType::Date => "Date",
            FieldType::File => "File upload",
            FieldType::Number => "Number",
            FieldType::Multichoice => "Multi-select",
            FieldType::Country => "Country",
            FieldType::Email => "Email",
            FieldType::Phone => "Phone",
            FieldType::Url => "Website",
            FieldType::Address => "Address",
        }
    }

    /// Choice-like types carry an ordered options list
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            FieldType::Dropdown | FieldType::Checkbox | FieldType::Radio | FieldType::Multichoice
        )
    }

    /// Only text-entry types expose a placeholder in the properties editor
    pub fn supports_placeholder(&self) -> bool {
        matches!(
            self,
            FieldType::Text
                | FieldType::Textarea
                | FieldType::Number
                | FieldType::Email
                | FieldType::Phone
                | FieldType::Url
        )
    }

    /// Types available on paid plans only
    pub fn is_pro(&self) -> bool {
        matches!(
            self,
            FieldType::File | FieldType::Multichoice | FieldType::Country | FieldType::Address
        )
    }

    pub fn default_options(&self) -> Vec<String> {
        if self.is_choice() {
            FALLBACK_OPTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        }
    }
}

fn default_true() -> bool {
    true
}

/// One form input definition, serialized camelCase inside `schema.fields`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub is_pro: bool,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default = "default_true")]
    pub is_editable: bool,
}

impl Field {
    /// Build a field with a fresh id, the type-default label, and
    /// type-appropriate default options
    pub fn new(field_type: FieldType) -> Self {
        Self::with_label(field_type, field_type.label())
    }

    pub fn with_label(field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            field_type,
            label: label.into(),
            placeholder: None,
            help_text: None,
            description: None,
            required: false,
            options: field_type.default_options(),
            is_pro: field_type.is_pro(),
            is_system: false,
            is_editable: true,
        }
    }

    /// Seeded fields for recognized form keys; locked against edit and delete
    pub fn system(field_type: FieldType, label: impl Into<String>, required: bool) -> Self {
        Self {
            required,
            is_system: true,
            is_editable: false,
            ..Self::with_label(field_type, label)
        }
    }

    /// Options to render: the stored list, or the deterministic fallback when
    /// a choice field has been edited down to zero options
    pub fn display_options(&self) -> Vec<String> {
        if !self.field_type.is_choice() {
            return Vec::new();
        }
        if self.options.is_empty() {
            FALLBACK_OPTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            self.options.clone()
        }
    }

    pub fn can_delete(&self) -> bool {
        !self.is_system
    }

    pub fn can_edit(&self) -> bool {
        self.is_editable && !self.is_system
    }
}

// ============================================================================
// Form Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormType {
    #[default]
    Registration,
    Survey,
    Assessment,
    Feedback,
    DataCollection,
    Application,
    Submission,
    Custom,
}

impl FormType {
    pub fn all() -> &'static [FormType] {
        &[
            FormType::Registration,
            FormType::Survey,
            FormType::Assessment,
            FormType::Feedback,
            FormType::DataCollection,
            FormType::Application,
            FormType::Submission,
            FormType::Custom,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormType::Registration => "Registration",
            FormType::Survey => "Survey",
            FormType::Assessment => "Assessment",
            FormType::Feedback => "Feedback",
            FormType::DataCollection => "Data collection",
            FormType::Application => "Application",
            FormType::Submission => "Submission",
            FormType::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Active,
    #[default]
    Draft,
    Locked,
}

impl FormStatus {
    pub fn all() -> &'static [FormStatus] {
        &[FormStatus::Active, FormStatus::Draft, FormStatus::Locked]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormStatus::Active => "Active",
            FormStatus::Draft => "Draft",
            FormStatus::Locked => "Locked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    pub id: String,
    pub event_id: String,
    pub form_key: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub form_type: FormType,
    pub status: FormStatus,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_template: bool,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub is_pro: bool,
    #[serde(default)]
    pub schema: FormSchema,
    pub created_at: String,
    pub updated_at: String,
}

impl FormRecord {
    /// The default registration form can never be deleted
    pub fn is_protected(&self) -> bool {
        self.is_default || self.form_key.as_deref() == Some(DEFAULT_REGISTRATION_KEY)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormInsert {
    pub event_id: String,
    pub form_key: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub form_type: FormType,
    pub status: FormStatus,
    pub is_default: bool,
    pub is_template: bool,
    pub is_free: bool,
    pub is_pro: bool,
    pub schema: FormSchema,
}

/// Partial update of a form row; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_type: Option<FormType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FormStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<FormSchema>,
}

// ============================================================================
// Form Commands
// ============================================================================

pub async fn list_event_forms(event_id: String) -> Result<Vec<FormRecord>, String> {
    #[derive(Serialize)]
    struct Args {
        event_id: String,
    }
    invoke("list_event_forms", &Args { event_id }).await
}

/// Insert fails with a conflict error when `(event_id, form_key)` already
/// exists; callers recover by re-fetching
pub async fn insert_event_form(form: FormInsert) -> Result<FormRecord, String> {
    #[derive(Serialize)]
    struct Args {
        form: FormInsert,
    }
    invoke("insert_event_form", &Args { form }).await
}

pub async fn update_event_form(id: String, patch: FormPatch) -> Result<FormRecord, String> {
    #[derive(Serialize)]
    struct Args {
        id: String,
        patch: FormPatch,
    }
    invoke("update_event_form", &Args { id, patch }).await
}

pub async fn delete_event_form(id: String) -> Result<(), String> {
    invoke_void("delete_event_form", &json!({ "id": id })).await
}
