// src/publish.rs

//! Publishing a built binary into an export directory as a symlink.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{GitterError, Result};
use crate::fs::FileSystem;

/// What [`publish`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// A new link was created at `link`.
    Linked { link: PathBuf },
    /// Something already occupies `link`; nothing was changed.
    AlreadyExists { link: PathBuf },
}

/// Link `export_dir/<file name of binary>` to `binary`.
///
/// Anything already at the link path (file, directory, live or dangling
/// symlink) is left alone. The export directory must exist; it is never
/// created here.
pub fn publish(fs: &dyn FileSystem, binary: &Path, export_dir: &Path) -> Result<PublishOutcome> {
    let file_name = binary.file_name().ok_or_else(|| {
        GitterError::Publish(format!("binary path {:?} has no file name", binary))
    })?;
    let link = export_dir.join(file_name);

    if fs.entry_exists(&link) {
        debug!(link = %link.display(), "link path already occupied");
        return Ok(PublishOutcome::AlreadyExists { link });
    }

    if !fs.is_dir(export_dir) {
        return Err(GitterError::Publish(format!(
            "export directory {:?} does not exist",
            export_dir
        )));
    }

    fs.symlink(binary, &link)
        .map_err(|e| GitterError::Publish(format!("{e:#}")))?;
    debug!(link = %link.display(), target = %binary.display(), "created symlink");

    Ok(PublishOutcome::Linked { link })
}
