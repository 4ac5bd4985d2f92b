use thiserror::Error;

use crate::models::presentation::SectionKey;

/// Application-level error type.
///
/// Configuration and input errors abort a build before composition starts; the composer
/// itself never fails. A missing icon is not an error at all (it degrades to a blank slot).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing section label for '{0}'")]
    MissingSectionLabel(SectionKey),

    #[error("Invalid presentation config: {0}")]
    InvalidPresentation(String),

    #[error("Invalid input document: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(String),
}
