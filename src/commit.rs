//! Atomic commit of a merged snapshot.
//!
//! The snapshot is written to a uniquely named temporary file next to the
//! target, flushed to disk, then renamed over the target. Readers see either
//! the old file or the new one; on any failure the old file is left as it was
//! and the temporary file is removed.

use crate::dotconfig::ConfigSnapshot;
use crate::error::OverlayError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

pub struct CommitWriter;

impl CommitWriter {
    pub fn write(path: &Path, snapshot: &ConfigSnapshot) -> Result<(), OverlayError> {
        let bytes = snapshot.serialize();
        let temp = write_temp(path, &bytes).map_err(|e| OverlayError::write(path, e))?;

        // A failed persist hands the temporary back inside the error, which
        // deletes it on drop.
        temp.persist(path).map_err(|e| OverlayError::write(path, e.error))?;

        debug!(path = %path.display(), bytes = bytes.len(), "Committed dotconfig");
        Ok(())
    }
}

fn write_temp(target: &Path, bytes: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut temp = tempfile::Builder::new()
        .prefix(&temp_prefix(target))
        .suffix(".tmp")
        .tempfile_in(parent_dir(target))?;
    temp.write_all(bytes)?;
    temp.flush()?;

    if let Ok(meta) = fs::metadata(target) {
        temp.as_file().set_permissions(meta.permissions())?;
    }
    temp.as_file().sync_all()?;
    Ok(temp)
}

/// Same directory as the target so the rename stays on one filesystem.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// `.<name>.`, hidden like the dotconfig itself.
fn temp_prefix(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    format!(".{}.", name.trim_start_matches('.'))
}
