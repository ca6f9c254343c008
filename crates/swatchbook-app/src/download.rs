//! Writing exports to disk.

use crate::error::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Write `contents` into `dir/filename`, creating `dir` if needed.
pub fn download(dir: &Path, filename: &str, contents: &str) -> AppResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| AppError::Write { path: dir.to_path_buf(), source })?;
    let path = dir.join(filename);
    write_file(&path, contents)?;
    Ok(path)
}

/// Write `contents` to an explicit path.
pub fn write_file(path: &Path, contents: &str) -> AppResult<()> {
    fs::write(path, contents).map_err(|source| AppError::Write { path: path.to_path_buf(), source })?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_download_creates_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("exports");
        let path = download(&target, "tokens.css", ":root {\n}").unwrap();
        assert_eq!(path, target.join("tokens.css"));
        assert_eq!(fs::read_to_string(path).unwrap(), ":root {\n}");
    }

    #[test]
    fn test_write_file_missing_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("tokens.json");
        assert!(matches!(write_file(&path, "{}"), Err(AppError::Write { .. })));
    }
}
