//! Maintenance schedule records.

use assetdesk_core::{Filterable, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Priority;

/// A scheduled maintenance job against one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub id: String,
    pub asset_id: String,
    pub title: String,
    /// Denormalized asset name, shown and searched in the table.
    pub asset_name: String,
    pub location: String,
    /// Equipment type of the asset.
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: Priority,
    pub due: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl MaintenanceTask {
    /// Creates an unassigned, open task.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        asset: &super::Asset,
        priority: Priority,
        due: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            asset_id: asset.id.clone(),
            title: title.into(),
            asset_name: asset.name.clone(),
            location: asset.location.clone(),
            kind: asset.kind.clone(),
            priority,
            due,
            assignee: None,
            completed: false,
        }
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Whether the task is open and due before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due < today
    }
}

impl Record for MaintenanceTask {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for MaintenanceTask {
    type Category = Priority;
    type Rank = Priority;

    fn category(&self) -> Priority {
        self.priority
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.asset_name.as_str(),
            self.location.as_str(),
            self.kind.as_str(),
        ]
    }

    fn rank(&self) -> Priority {
        self.priority
    }
}
