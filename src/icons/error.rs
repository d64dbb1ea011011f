use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("No icon available for '{label}' (night: {is_night})")]
    NotFound { label: String, is_night: bool },

    #[error("Failed to read icon directory '{0}'")]
    CatalogRead(PathBuf, #[source] std::io::Error),
}
