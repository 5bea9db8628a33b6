//! Run configuration for the theme checker.

use std::path::{Path, PathBuf};

/// Directory scanned when no other is configured, relative to the working directory
pub const DEFAULT_THEMES_DIR: &str = "assets/themes";

/// Schema descriptor that lives next to the themes and is never validated as one
pub const DEFAULT_SCHEMA_FILE_NAME: &str = "theme-schema.json";

/// Success rate (percent) at or above which a run with failures still passes
pub const DEFAULT_PASS_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    /// Directory holding the theme artifacts
    pub themes_dir: PathBuf,
    /// Exact file name excluded from the scan
    pub schema_file_name: String,
    /// Minimum success rate for a passing run
    pub pass_threshold: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            themes_dir: PathBuf::from(DEFAULT_THEMES_DIR),
            schema_file_name: DEFAULT_SCHEMA_FILE_NAME.to_string(),
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

impl CheckConfig {
    pub fn with_themes_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.themes_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_schema_file_name(mut self, name: impl Into<String>) -> Self {
        self.schema_file_name = name.into();
        self
    }

    pub fn with_pass_threshold(mut self, threshold: f64) -> Self {
        self.pass_threshold = threshold;
        self
    }
}
