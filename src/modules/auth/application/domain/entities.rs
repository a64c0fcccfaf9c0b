use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The admin account as stored in `users.json`. There is exactly one in
/// practice (seeded at startup), but the collection shape keeps the store
/// uniform with every other resource file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub settings: UserSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_token_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub theme: String,
    pub cursor: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            cursor: "default".to_string(),
        }
    }
}

impl User {
    pub fn reset_token_valid_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.reset_token_expires_at, Some(expires) if expires > now)
    }
}
