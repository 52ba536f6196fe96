use serde::Serialize;
use super::core::{invoke, invoke_void};

/// QR image service used for check-in tokens; the client only constructs the
/// URL and never validates the rendered image
const QR_SERVICE_TEMPLATE: &str = "https://quickchart.io/qr?size=300&text=";

#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Fire-and-forget transactional email. Delivery failures are logged and
/// reported as `false`, never as an error.
pub async fn send_email(message: EmailMessage) -> bool {
    #[derive(Serialize)]
    struct Args {
        message: EmailMessage,
    }
    match invoke::<_, bool>("send_email", &Args { message }).await {
        Ok(sent) => sent,
        Err(e) => {
            log::warn!("Email send failed: {}", e);
            false
        }
    }
}

/// Best-effort ping to the event owner about a new registration
pub async fn notify_event_owner(event_id: String, message: String) {
    #[derive(Serialize)]
    struct Args {
        event_id: String,
        message: String,
    }
    if let Err(e) = invoke_void("notify_event_owner", &Args { event_id, message }).await {
        log::debug!("Owner notification failed: {}", e);
    }
}

/// Check-in token URL for an attendee, scannable at the door
pub fn qr_checkin_url(attendee_id: &str) -> String {
    format!("{}{}", QR_SERVICE_TEMPLATE, attendee_id)
}
