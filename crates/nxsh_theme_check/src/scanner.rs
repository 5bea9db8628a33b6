//! Theme file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ThemeCheckError, ThemeCheckResult};

/// Extension of theme artifacts
pub const THEME_EXTENSION: &str = "json";

/// List the theme files directly inside `dir`, sorted by path.
///
/// Only regular `*.json` files are returned, and the file named exactly
/// `schema_file_name` is left out.
pub fn scan(dir: impl AsRef<Path>, schema_file_name: &str) -> ThemeCheckResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ThemeCheckError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut themes = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ThemeCheckError::io(dir, e))? {
        let entry = entry.map_err(|e| ThemeCheckError::io(dir, e))?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) != Some(THEME_EXTENSION) {
            continue;
        }
        if entry.file_name().to_str() == Some(schema_file_name) {
            debug!(path = %path.display(), "skipping schema descriptor");
            continue;
        }
        if !path.is_file() {
            continue;
        }
        themes.push(path);
    }

    themes.sort();
    debug!(dir = %dir.display(), count = themes.len(), "scanned theme directory");
    Ok(themes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "{}").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn missing_directory_is_reported() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        match scan(&missing, "theme-schema.json") {
            Err(ThemeCheckError::DirectoryNotFound(path)) => assert_eq!(path, missing),
            other => panic!("unexpected scan result: {other:?}"),
        }
    }

    #[test]
    fn lists_json_files_sorted_without_schema() {
        let tmp = TempDir::new().unwrap();
        for name in [
            "nxsh-zen.json",
            "nxsh-dark.json",
            "theme-schema.json",
            "README.md",
            "nxsh-a.json",
        ] {
            touch(tmp.path(), name);
        }
        let themes = scan(tmp.path(), "theme-schema.json").unwrap();
        assert_eq!(names(&themes), vec!["nxsh-a.json", "nxsh-dark.json", "nxsh-zen.json"]);
        assert!(themes.iter().all(|p| p.starts_with(tmp.path())));
    }

    #[test]
    fn schema_exclusion_is_exact_and_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        for name in ["Theme-Schema.json", "theme-schema.json", "theme-schema-v2.json"] {
            touch(tmp.path(), name);
        }
        let themes = scan(tmp.path(), "theme-schema.json").unwrap();
        assert_eq!(names(&themes), vec!["Theme-Schema.json", "theme-schema-v2.json"]);
    }

    #[test]
    fn does_not_recurse_or_list_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "inner.json");
        fs::create_dir(tmp.path().join("folder.json")).unwrap();
        touch(tmp.path(), "top.json");
        let themes = scan(tmp.path(), "theme-schema.json").unwrap();
        assert_eq!(names(&themes), vec!["top.json"]);
    }

    #[test]
    fn empty_directory_yields_no_themes() {
        let tmp = TempDir::new().unwrap();
        assert!(scan(tmp.path(), "theme-schema.json").unwrap().is_empty());
    }
}
