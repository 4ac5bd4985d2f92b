//! Rendering backends and artifact output.
//!
//! A backend turns a composed page tree into the bytes of one document. Writing goes through
//! a temp file in the destination directory that is renamed into place, so a failed build
//! never leaves a partial artifact behind.

pub mod json;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::AppError;
use crate::layout::LayoutNode;

pub use json::JsonBackend;

pub trait RenderBackend {
    fn name(&self) -> &'static str;

    fn render(&self, page: &LayoutNode) -> Result<Vec<u8>, AppError>;
}

/// Renders `page` with `backend` and writes the result to `path` atomically.
pub fn render_to_file(
    backend: &dyn RenderBackend,
    page: &LayoutNode,
    path: &Path,
) -> Result<usize, AppError> {
    let bytes = backend.render(page)?;
    write_artifact(path, &bytes)?;

    info!(
        backend = backend.name(),
        path = %path.display(),
        bytes = bytes.len(),
        "Artifact written"
    );
    Ok(bytes.len())
}

pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.persist(path).map_err(|e| AppError::Io(e.error))?;
    Ok(())
}
