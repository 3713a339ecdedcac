use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;
use crate::utils::{
    ExtensionMatch, OptimizerError, OptimizerResult, SOURCE_EXTENSIONS, format_from_extension,
};

/// Get file size in bytes
pub fn get_file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    fs::metadata(path.as_ref())
        .map(|m| m.len())
        .map_err(|e| OptimizerError::io(format!("Failed to get file size: {}", e)))
}

/// Get the last modification time of a file
pub fn modified_time(path: impl AsRef<Path>) -> OptimizerResult<SystemTime> {
    fs::metadata(path.as_ref())
        .and_then(|m| m.modified())
        .map_err(|e| OptimizerError::io(format!("Failed to read modification time: {}", e)))
}

/// Get file extension without converting case
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Lists source images directly inside `dir`.
///
/// Files are grouped by extension in [`SOURCE_EXTENSIONS`] order and sorted by
/// name within a group, with the all-lowercase extension ahead of the other
/// case variants. Dot-files are ignored, as a shell glob would.
///
/// A missing path, or one that is not a directory, yields an empty list.
/// Errors while reading an existing directory are returned.
pub fn list_source_images(dir: &Path, mode: ExtensionMatch) -> OptimizerResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!("{} is not a directory, nothing to scan", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        // Only the extension has to be UTF-8; the rest of the name may be any bytes
        let hidden = path
            .file_name()
            .is_none_or(|n| n.as_encoded_bytes().starts_with(b"."));
        let eligible = format_from_extension(&path).is_ok_and(|f| f.is_source());
        if !hidden && eligible && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut sources = Vec::with_capacity(files.len());
    for candidate in SOURCE_EXTENSIONS {
        let mut group: Vec<PathBuf> = files
            .iter()
            .filter(|p| get_extension(p).is_some_and(|ext| mode.matches(ext, candidate)))
            .cloned()
            .collect();
        // Stable sort keeps name order inside each case variant
        group.sort_by_key(|p| get_extension(p) != Some(candidate));
        sources.extend(group);
    }

    debug!("Found {} source images in {}", sources.len(), dir.display());
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let found = list_source_images(&missing, ExtensionMatch::Exact).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn file_path_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.png");
        let found = list_source_images(&dir.path().join("a.png"), ExtensionMatch::Exact).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn exact_mode_orders_and_skips_mixed_case() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.PNG", "c.jpg", "d.JPEG", "e.Png", "f.gif", "g.webp", ".h.png"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("sub.png")).unwrap();

        let found = list_source_images(dir.path(), ExtensionMatch::Exact).unwrap();
        assert_eq!(names(&found), ["b.png", "a.PNG", "c.jpg", "d.JPEG"]);
    }

    #[test]
    fn case_insensitive_mode_picks_up_mixed_case() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.Png", "c.jPg"] {
            touch(dir.path(), name);
        }

        let found = list_source_images(dir.path(), ExtensionMatch::CaseInsensitive).unwrap();
        assert_eq!(names(&found), ["b.png", "a.Png", "c.jPg"]);
    }

    #[test]
    fn does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "deep.png");
        touch(dir.path(), "top.png");

        let found = list_source_images(dir.path(), ExtensionMatch::Exact).unwrap();
        assert_eq!(names(&found), ["top.png"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_listed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let latin1 = dir.path().join(OsStr::from_bytes(b"caf\xe9.png"));
        fs::write(&latin1, b"x").unwrap();
        touch(dir.path(), "plain.png");
        fs::write(dir.path().join(OsStr::from_bytes(b".hidd\xe9n.png")), b"x").unwrap();

        let found = list_source_images(dir.path(), ExtensionMatch::Exact).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.contains(&latin1));
    }

    #[test]
    fn size_and_mtime_of_missing_file_are_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        assert!(matches!(get_file_size(&missing), Err(OptimizerError::IO(_))));
        assert!(matches!(modified_time(&missing), Err(OptimizerError::IO(_))));
    }
}
