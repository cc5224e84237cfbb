use std::env;
use std::fs::Permissions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

pub trait RelativeDisplay {
    fn relative_to_cwd(&self) -> PathBuf;
}

impl RelativeDisplay for Path {
    fn relative_to_cwd(&self) -> PathBuf {
        let relative = env::current_dir()
            .and_then(|cwd| cwd.canonicalize())
            .ok()
            .zip(self.canonicalize().ok())
            .and_then(|(cwd, path)| pathdiff::diff_paths(path, cwd));
        relative.unwrap_or_else(|| self.to_path_buf())
    }
}

fn tempfile_with_prefix_in(dir: &Path, prefix: &str) -> io::Result<NamedTempFile> {
    Builder::new().prefix(prefix).tempfile_in(dir)
}

/// Writes `contents` next to `target` and renames it into place with the
/// given permissions. Temp files start out owner-only.
pub fn write_atomically(
    target: &Path,
    contents: &[u8],
    permissions: Permissions,
) -> io::Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile_with_prefix_in(dir, ".cplabel-")?;
    temp.write_all(contents)?;
    temp.as_file().set_permissions(permissions)?;
    temp.as_file().sync_all()?;
    temp.persist(target).map_err(|err| err.error)?;
    Ok(())
}
