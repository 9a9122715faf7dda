//! Dataset loading errors

use std::path::PathBuf;

/// Error loading or validating a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("failed to read dataset '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid dataset document.
    #[error("invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records in one collection share an id.
    #[error("duplicate id '{id}' in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },
}

impl DatasetError {
    /// Creates a new duplicate id error.
    pub fn duplicate_id(collection: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            collection,
            id: id.into(),
        }
    }
}
