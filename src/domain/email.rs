use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::bucket::{Bucket, URGENT_THRESHOLD};

/// A small labeled chip attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Style tag, used as a display class.
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// One classified email as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub sender: String,
    pub subject: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub date: String,
    /// Raw category as sent. Non-string values (the backend sends `false`
    /// when nothing matched) are kept as their JSON text.
    #[serde(deserialize_with = "category_text")]
    pub category: String,
    pub urgency_score: u32,
    pub priority_score: u32,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

fn category_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

impl EmailRecord {
    pub fn is_urgent(&self) -> bool {
        self.urgency_score >= URGENT_THRESHOLD
    }

    /// Bucket this record is displayed in, `None` on an unknown category below
    /// the urgency threshold.
    pub fn bucket(&self) -> Option<Bucket> {
        if self.is_urgent() {
            Some(Bucket::Urgent)
        } else {
            Bucket::from_category(&self.category)
        }
    }

    /// Category as shown on the card (`work-high` -> `work high`).
    pub fn category_label(&self) -> String {
        self.category.replace('-', " ")
    }
}

/// Dashboard counters. Missing fields display as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub urgent: Option<u64>,
    #[serde(default)]
    pub action_needed: Option<u64>,
    /// Minutes.
    #[serde(default)]
    pub estimated_time: Option<u64>,
    #[serde(default)]
    pub by_category: BTreeMap<String, u64>,
}

/// Body of `GET /api/fetch-emails`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub emails: Option<Vec<EmailRecord>>,
    #[serde(default)]
    pub stats: Option<StatsSummary>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /api/reclassify`.
#[derive(Debug, Clone, Serialize)]
pub struct ReclassifyRequest {
    pub email_id: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReclassifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
