use std::{fs, io, path::Path};

use app_logger::{debug, trace};

/// Creates `dir` and any missing parents. An existing directory is not an error.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    if dir.is_dir() {
        trace!("Directory {dir:?} already exists");
        return Ok(());
    }

    debug!("Creating directory {dir:?}");
    fs::create_dir_all(dir)
}
