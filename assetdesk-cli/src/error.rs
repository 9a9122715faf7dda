//! Command line errors

use assetdesk_core::WindowError;
use assetdesk_lib::error::{DatasetError, ParseLabelError};

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid view geometry: {0}")]
    Window(#[from] WindowError),

    #[error("invalid --category: {0}")]
    Category(#[from] ParseLabelError),

    #[error("no record with id '{0}' in the displayed list")]
    UnknownRecord(String),

    #[error("failed to set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
