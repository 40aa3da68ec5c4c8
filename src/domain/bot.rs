//! Bot configuration record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BotId, UserId};

/// A configured trading bot from the `bot_configs` collection.
///
/// The configuration payload is opaque to the dashboard; it is displayed
/// and passed through without interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    pub id: BotId,
    pub user_id: UserId,
    pub bot_type: String,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub config_json: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub last_run: Option<DateTime<Utc>>,
}

impl BotConfig {
    /// Status label for display.
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}
