//! Dashboard notifications.

use assetdesk_core::{Filterable, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Priority;

/// An alert shown in the notification panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    /// Asset the alert refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
}

impl Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Notification {
    type Category = Priority;
    /// Most urgent first, newest first within a priority.
    ///
    /// Timestamps break nearly every tie, so fuzzy match scores do not
    /// reorder notifications: the feed stays chronological while searching.
    type Rank = (Priority, std::cmp::Reverse<DateTime<Utc>>);

    fn category(&self) -> Priority {
        self.priority
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.message.as_str()]
    }

    fn rank(&self) -> Self::Rank {
        (self.priority, std::cmp::Reverse(self.created_at))
    }
}
