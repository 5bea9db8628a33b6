//! NexusShell theme checker
//!
//! Validates the JSON theme artifacts under `assets/themes` and reports
//! how many of them pass. The crate is split the same way a run flows:
//!
//! - [`format`]: value-level predicates (hex colors, semantic versions)
//! - [`theme_validator`]: field checks for a single decoded theme
//! - [`scanner`]: discovery of theme files in a directory
//! - [`report`]: aggregation, rendering and exit status for a whole corpus

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod theme_validator;

pub use config::CheckConfig;
pub use error::{ThemeCheckError, ThemeCheckResult};
pub use report::{collect, run, AggregateReport, ExportFormat, FileReport, FileStatus, Verdict};
pub use scanner::scan;
pub use theme_validator::{validate, ValidationResult};
