use std::fs;
use std::io;
use std::path::Path;

/// Remove every empty directory under `root`, children before parents, so a
/// directory emptied by this pass is removed as well. `root` itself is
/// removed if it ends up empty.
///
/// Returns the number of directories removed. A missing `root` is not an
/// error.
pub fn remove_empty_dirs(root: &Path) -> io::Result<usize> {
    if !root.is_dir() {
        return Ok(0);
    }
    prune(root)
}

fn prune(dir: &Path) -> io::Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // file_type does not follow symlinks, so linked directories are left alone
        if entry.file_type()?.is_dir() {
            removed += prune(&entry.path())?;
        }
    }

    if fs::read_dir(dir)?.next().is_none() {
        fs::remove_dir(dir)?;
        ::log::debug!("Removed empty directory {}", dir.display());
        removed += 1;
    }

    Ok(removed)
}
