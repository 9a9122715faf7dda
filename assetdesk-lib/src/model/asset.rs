//! Equipment records.

use std::fmt;
use std::str::FromStr;

use assetdesk_core::{Filterable, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Priority;
use crate::error::ParseLabelError;

/// Operating state of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    #[default]
    Operational,
    Maintenance,
    Offline,
    Retired,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::Operational,
        AssetStatus::Maintenance,
        AssetStatus::Offline,
        AssetStatus::Retired,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AssetStatus::Operational => "operational",
            AssetStatus::Maintenance => "maintenance",
            AssetStatus::Offline => "offline",
            AssetStatus::Retired => "retired",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ParseLabelError::new("asset status", s, "operational, maintenance, offline, retired")
            })
    }
}

/// A piece of equipment on the asset register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    /// Equipment type, e.g. "Pump" or "Conveyor".
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(default)]
    pub status: AssetStatus,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service: Option<NaiveDate>,
}

fn default_priority() -> Priority {
    Priority::Medium
}

impl Asset {
    /// Creates an operational, medium-priority asset.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            location: location.into(),
            status: AssetStatus::default(),
            priority: default_priority(),
            last_service: None,
        }
    }

    pub fn with_status(mut self, status: AssetStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_last_service(mut self, date: NaiveDate) -> Self {
        self.last_service = Some(date);
        self
    }
}

impl Record for Asset {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Assets are filtered by status and listed most urgent first.
impl Filterable for Asset {
    type Category = AssetStatus;
    type Rank = Priority;

    fn category(&self) -> AssetStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str(), self.kind.as_str()]
    }

    fn rank(&self) -> Priority {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"id": "a-1", "name": "Feed pump", "type": "Pump", "location": "Plant A"}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset, Asset::new("a-1", "Feed pump", "Pump", "Plant A"));
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "id": "a-2",
            "name": "Main compressor",
            "type": "Compressor",
            "location": "Plant B",
            "status": "offline",
            "priority": "critical",
            "last_service": "2024-03-18"
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.status, AssetStatus::Offline);
        assert_eq!(asset.priority, Priority::Critical);
        assert_eq!(asset.last_service, NaiveDate::from_ymd_opt(2024, 3, 18));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Offline".parse::<AssetStatus>(), Ok(AssetStatus::Offline));
        assert!("broken".parse::<AssetStatus>().is_err());
    }
}
