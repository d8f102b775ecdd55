use std::path::{Path, PathBuf};

/// Maps a background template id to its asset path: a fixed naming
/// convention under a single root directory. An id that is empty after
/// trimming has no path.
pub fn template_path(root: &Path, id: &str) -> Option<PathBuf> {
    let id = id.trim();
    if id.is_empty() {
        None
    } else {
        Some(root.join(id))
    }
}
