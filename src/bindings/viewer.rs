use serde::{Deserialize, Serialize};
use super::core::invoke_no_args;

// ============================================================================
// Viewer Identity
// ============================================================================

/// The current viewer as the auth layer knows them. Anonymous viewers have no
/// `profile_id` and empty attribute strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerProfile {
    pub profile_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    /// Billing plan slug, `free` or `pro`
    #[serde(default)]
    pub plan: String,
}

impl ViewerProfile {
    pub fn is_authenticated(&self) -> bool {
        self.profile_id.is_some()
    }
}

pub async fn get_viewer_profile() -> Result<ViewerProfile, String> {
    invoke_no_args("get_viewer_profile").await
}
