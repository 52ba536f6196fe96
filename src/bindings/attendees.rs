use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use super::core::{invoke, invoke_void};

// ============================================================================
// Attendee Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendeeMeta {
    /// Label -> submitted value, one entry per answered form field
    #[serde(default)]
    pub responses: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendeeRecord {
    pub id: String,
    pub event_id: String,
    pub profile_id: Option<String>,
    pub email: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub meta: AttendeeMeta,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendeeInsert {
    pub event_id: String,
    pub profile_id: Option<String>,
    pub email: String,
    pub name: String,
    pub status: String,
    pub meta: AttendeeMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendeeSessionRow {
    pub attendee_id: String,
    pub session_id: String,
}

// ============================================================================
// Attendee Commands
// ============================================================================

/// Insert fails with a conflict error when the attendee is already registered
/// for the event; callers recover via `find_attendee`
pub async fn insert_attendee(attendee: AttendeeInsert) -> Result<AttendeeRecord, String> {
    #[derive(Serialize)]
    struct Args {
        attendee: AttendeeInsert,
    }
    invoke("insert_attendee", &Args { attendee }).await
}

/// Look up an existing registration by identity first, email second
pub async fn find_attendee(
    event_id: String,
    profile_id: Option<String>,
    email: String,
) -> Result<Option<AttendeeRecord>, String> {
    #[derive(Serialize)]
    struct Args {
        event_id: String,
        profile_id: Option<String>,
        email: String,
    }
    invoke("find_attendee", &Args { event_id, profile_id, email }).await
}

pub async fn clear_attendee_sessions(attendee_id: String) -> Result<(), String> {
    invoke_void("clear_attendee_sessions", &json!({ "attendee_id": attendee_id })).await
}

pub async fn insert_attendee_sessions(rows: Vec<AttendeeSessionRow>) -> Result<(), String> {
    #[derive(Serialize)]
    struct Args {
        rows: Vec<AttendeeSessionRow>,
    }
    invoke_void("insert_attendee_sessions", &Args { rows }).await
}

/// Ticket-counter RPC, best-effort from the caller's perspective
pub async fn increment_ticket_sold(ticket_id: String, qty: u32) -> Result<(), String> {
    #[derive(Serialize)]
    struct Args {
        ticket_id: String,
        qty: u32,
    }
    invoke_void("increment_ticket_sold", &Args { ticket_id, qty }).await
}
