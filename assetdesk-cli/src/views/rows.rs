//! Row layouts for the dashboard records.

use assetdesk_lib::model::{Asset, MaintenanceTask, Notification, PartsOrder};

use super::column::{Alignment, Column};
use super::row::TableRow;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

impl TableRow for Asset {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("ID", 6),
            Column::new("Name", 22),
            Column::new("Type", 12),
            Column::new("Location", 14),
            Column::new("Status", 11),
            Column::new("Priority", 8),
            Column::new("Serviced", 10),
        ]
    }

    fn render_cell(&self, column: usize) -> Option<String> {
        let text = match column {
            0 => self.id.clone(),
            1 => self.name.clone(),
            2 => self.kind.clone(),
            3 => self.location.clone(),
            4 => self.status.to_string(),
            5 => self.priority.to_string(),
            6 => self
                .last_service
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| "never".to_string()),
            _ => return None,
        };
        Some(text)
    }
}

impl TableRow for MaintenanceTask {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("ID", 6),
            Column::new("Task", 24),
            Column::new("Asset", 18),
            Column::new("Location", 14),
            Column::new("Priority", 8),
            Column::new("Due", 10),
            Column::new("Assignee", 12),
            Column::new("Done", 4),
        ]
    }

    fn render_cell(&self, column: usize) -> Option<String> {
        let text = match column {
            0 => self.id.clone(),
            1 => self.title.clone(),
            2 => self.asset_name.clone(),
            3 => self.location.clone(),
            4 => self.priority.to_string(),
            5 => self.due.format(DATE_FORMAT).to_string(),
            6 => self.assignee.clone().unwrap_or_else(|| "-".to_string()),
            7 => yes_no(self.completed),
            _ => return None,
        };
        Some(text)
    }
}

impl TableRow for PartsOrder {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("ID", 6),
            Column::new("Part", 20),
            Column::new("Part no.", 12),
            Column::new("Supplier", 16),
            Column::new("Qty", 5).align(Alignment::Right),
            Column::new("Status", 10),
            Column::new("Priority", 8),
        ]
    }

    fn render_cell(&self, column: usize) -> Option<String> {
        let text = match column {
            0 => self.id.clone(),
            1 => self.part_name.clone(),
            2 => self.part_number.clone(),
            3 => self.supplier.clone(),
            4 => self.quantity.to_string(),
            5 => self.status.to_string(),
            6 => self.priority.to_string(),
            _ => return None,
        };
        Some(text)
    }
}

impl TableRow for Notification {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("ID", 6),
            Column::new("Title", 28),
            Column::new("Priority", 8),
            Column::new("Created", 16),
            Column::new("Read", 4),
        ]
    }

    fn render_cell(&self, column: usize) -> Option<String> {
        let text = match column {
            0 => self.id.clone(),
            1 => self.title.clone(),
            2 => self.priority.to_string(),
            3 => self.created_at.format("%Y-%m-%d %H:%M").to_string(),
            4 => yes_no(self.read),
            _ => return None,
        };
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use assetdesk_lib::model::{AssetStatus, Priority};
    use chrono::NaiveDate;

    use super::*;

    fn pump() -> Asset {
        Asset::new("a-01", "Feed pump", "Pump", "Line 1")
            .with_status(AssetStatus::Maintenance)
            .with_priority(Priority::High)
    }

    #[test]
    fn test_asset_cells() {
        let asset = pump();
        assert_eq!(asset.render_cell(4).as_deref(), Some(AssetStatus::Maintenance.label()));
        assert_eq!(asset.render_cell(6).as_deref(), Some("never"));
        assert_eq!(asset.render_cell(7), None);
    }

    #[test]
    fn test_every_column_has_a_cell() {
        let asset = pump();
        let due = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let task = MaintenanceTask::new("t-01", "Replace seal", &asset, Priority::Critical, due);

        assert!((0..Asset::columns().len()).all(|i| asset.render_cell(i).is_some()));
        assert!((0..MaintenanceTask::columns().len()).all(|i| task.render_cell(i).is_some()));
        assert_eq!(task.render_cell(5).as_deref(), Some("2026-03-01"));
        assert_eq!(task.render_cell(6).as_deref(), Some("-"));
    }
}
