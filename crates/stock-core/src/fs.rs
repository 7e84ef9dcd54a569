//! Filesystem utilities for atomic writes of exported artifacts.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `bytes` to `destination` so readers never observe a partial file.
///
/// The payload goes to a sibling temp file first and is then renamed over the
/// destination. Missing parent directories are created.
pub fn write_atomic(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_sibling(destination);
    {
        let mut file = fs::File::create(&temp_path)?;
        if let Err(err) = file.write_all(bytes).and_then(|_| file.sync_all()) {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }
    }
    replace_file(&temp_path, destination)
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "export".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}

/// Move the finished temp file into place.
///
/// A rename that is refused because `destination` exists is retried once
/// after deleting it. The temp file never outlives a failure.
fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if fs::rename(temp_path, destination).is_ok() {
        return Ok(());
    }
    let _ = fs::remove_file(destination);
    fs::rename(temp_path, destination).map_err(|err| {
        let _ = fs::remove_file(temp_path);
        err
    })
}
