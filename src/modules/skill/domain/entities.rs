use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A skill card (`skills.json`). `level` is a 0-100 proficiency bar on the
/// public page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub level: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
