//! Text host for the asset dashboard tables.
//!
//! Builds [`views::TableView`]s over the records of a dataset file and
//! renders the visible window as plain text rows.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod views;
