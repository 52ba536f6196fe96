use serde::{Deserialize, Serialize};
use serde_json::json;
use super::core::{invoke, invoke_void};

// ============================================================================
// Sponsor Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorTier {
    Platinum,
    Gold,
    #[default]
    Silver,
    Community,
}

impl SponsorTier {
    pub fn all() -> &'static [SponsorTier] {
        &[
            SponsorTier::Platinum,
            SponsorTier::Gold,
            SponsorTier::Silver,
            SponsorTier::Community,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SponsorTier::Platinum => "Platinum",
            SponsorTier::Gold => "Gold",
            SponsorTier::Silver => "Silver",
            SponsorTier::Community => "Community",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorRecord {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub tier: SponsorTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct SponsorInsert {
    pub event_id: String,
    pub name: String,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub tier: SponsorTier,
}

// ============================================================================
// Sponsor Commands
// ============================================================================

pub async fn list_event_sponsors(event_id: String) -> Result<Vec<SponsorRecord>, String> {
    #[derive(Serialize)]
    struct Args {
        event_id: String,
    }
    invoke("list_event_sponsors", &Args { event_id }).await
}

pub async fn insert_event_sponsor(sponsor: SponsorInsert) -> Result<SponsorRecord, String> {
    #[derive(Serialize)]
    struct Args {
        sponsor: SponsorInsert,
    }
    invoke("insert_event_sponsor", &Args { sponsor }).await
}

pub async fn update_event_sponsor(id: String, sponsor: SponsorInsert) -> Result<SponsorRecord, String> {
    #[derive(Serialize)]
    struct Args {
        id: String,
        sponsor: SponsorInsert,
    }
    invoke("update_event_sponsor", &Args { id, sponsor }).await
}

pub async fn delete_event_sponsor(id: String) -> Result<(), String> {
    invoke_void("delete_event_sponsor", &json!({ "id": id })).await
}
