//! Asset management domain records.
//!
//! Typed records for the dashboard tables (assets, maintenance tasks, parts
//! orders, notifications) and the JSON dataset they are loaded from. Every
//! record implements [`assetdesk_core::Record`] and
//! [`assetdesk_core::Filterable`], so the tables can window, select, and
//! filter them directly.

pub mod dataset;
pub mod error;
pub mod model;

pub use dataset::Dataset;
