//! Icon resolution seam.
//!
//! The composer never decodes images; it only asks whether an icon reference resolves to
//! something the rendering backend can load, and otherwise leaves the slot blank.

use std::path::{Path, PathBuf};

pub trait IconResolver {
    /// Returns the location the backend should load, or `None` when the icon is unavailable.
    fn resolve(&self, reference: &str) -> Option<String>;
}

/// Resolves icon references as files relative to a base directory.
#[derive(Debug, Clone)]
pub struct FsIconResolver {
    base_dir: PathBuf,
}

impl FsIconResolver {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        FsIconResolver {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }
}

impl IconResolver for FsIconResolver {
    fn resolve(&self, reference: &str) -> Option<String> {
        let path = self.base_dir.join(reference);
        path.is_file().then(|| path.to_string_lossy().into_owned())
    }
}
