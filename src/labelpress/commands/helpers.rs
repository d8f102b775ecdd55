use crate::error::{LabelError, Result};
use std::io::Write;
use std::path::Path;

/// Writes fully assembled bytes to `path` through a sibling temp file and an
/// atomic rename. Either the complete artifact appears under `path` or
/// nothing does; an interrupted write never leaves a partial file behind.
pub fn persist_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path)
        .map_err(|e| LabelError::Export(format!("could not write {}: {}", path.display(), e)))?;
    Ok(())
}
