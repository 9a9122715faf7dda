//! JSON dataset holding every dashboard collection.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use assetdesk_core::Record;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::model::{Asset, MaintenanceTask, Notification, PartsOrder};

/// All records behind the dashboard.
///
/// Missing collections deserialize as empty. Ids must be unique within a
/// collection; the same id may appear in different collections.
///
/// # Example
///
/// ```
/// use assetdesk_lib::Dataset;
///
/// let dataset = Dataset::from_json(r#"{
///     "assets": [
///         {"id": "a-1", "name": "Feed pump", "type": "Pump", "location": "Plant A"}
///     ]
/// }"#).unwrap();
/// assert_eq!(dataset.assets.len(), 1);
/// assert!(dataset.tasks.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub tasks: Vec<MaintenanceTask>,
    #[serde(default)]
    pub parts_orders: Vec<PartsOrder>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Dataset {
    /// Parse and validate a dataset document.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Read, parse, and validate a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&json)?;
        log::info!(
            "Loaded dataset {}: {} assets, {} tasks, {} parts orders, {} notifications",
            path.display(),
            dataset.assets.len(),
            dataset.tasks.len(),
            dataset.parts_orders.len(),
            dataset.notifications.len()
        );
        Ok(dataset)
    }

    /// Check that ids are unique within each collection.
    pub fn validate(&self) -> Result<(), DatasetError> {
        unique_ids("assets", &self.assets)?;
        unique_ids("tasks", &self.tasks)?;
        unique_ids("parts_orders", &self.parts_orders)?;
        unique_ids("notifications", &self.notifications)?;
        Ok(())
    }
}

fn unique_ids<T: Record>(collection: &'static str, records: &[T]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(DatasetError::duplicate_id(collection, record.id()));
        }
    }
    Ok(())
}
