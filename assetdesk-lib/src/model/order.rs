//! Parts order tracking.

use std::fmt;
use std::str::FromStr;

use assetdesk_core::{Filterable, Record};
use serde::{Deserialize, Serialize};

use super::Priority;
use crate::error::ParseLabelError;

/// Where a parts order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Ordered,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Ordered,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Ordered => "ordered",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the order still needs attention.
    pub fn is_open(self) -> bool {
        !matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ParseLabelError::new(
                    "order status",
                    s,
                    "pending, ordered, shipped, delivered, cancelled",
                )
            })
    }
}

/// An order for replacement parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartsOrder {
    pub id: String,
    pub part_name: String,
    pub part_number: String,
    pub supplier: String,
    pub quantity: u32,
    #[serde(default)]
    pub status: OrderStatus,
    pub priority: Priority,
    /// Asset the parts are for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
}

impl Record for PartsOrder {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Orders are filtered by status and listed most urgent first.
impl Filterable for PartsOrder {
    type Category = OrderStatus;
    type Rank = Priority;

    fn category(&self) -> OrderStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.part_name.as_str(),
            self.part_number.as_str(),
            self.supplier.as_str(),
        ]
    }

    fn rank(&self) -> Priority {
        self.priority
    }
}
