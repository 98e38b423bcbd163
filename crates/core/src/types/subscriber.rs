//! Newsletter subscribers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::SubscriberId;
use super::timestamp::parse_timestamp;

/// A newsletter subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: SubscriberId,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Subscriber {
    /// Parsed subscription time, if present and well-formed.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}
