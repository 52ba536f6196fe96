use serde::{Deserialize, Serialize};
use serde_json::json;
use super::core::{invoke, invoke_no_args};

// ============================================================================
// Event Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub hero_image_url: Option<String>,
    pub theme_color: Option<String>,
    pub owner_email: Option<String>,
    /// Ticket row incremented on each successful registration
    pub ticket_id: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// Partial update of an event row; only set fields are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSession {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub description: Option<String>,
    pub speaker: Option<String>,
    pub starts_at: String,
    pub ends_at: Option<String>,
    pub location: Option<String>,
}

// ============================================================================
// Event Commands
// ============================================================================

pub async fn list_events() -> Result<Vec<EventRecord>, String> {
    invoke_no_args("list_events").await
}

pub async fn get_event(id: String) -> Result<Option<EventRecord>, String> {
    invoke("get_event", &json!({ "id": id })).await
}

pub async fn update_event(id: String, patch: EventPatch) -> Result<EventRecord, String> {
    #[derive(Serialize)]
    struct Args {
        id: String,
        patch: EventPatch,
    }
    invoke("update_event", &Args { id, patch }).await
}

pub async fn list_event_sessions(event_id: String) -> Result<Vec<EventSession>, String> {
    #[derive(Serialize)]
    struct Args {
        event_id: String,
    }
    invoke("list_event_sessions", &Args { event_id }).await
}
