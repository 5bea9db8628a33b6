//! Corpus-wide validation and the summary report.
//!
//! [`collect`] walks a theme directory and builds an [`AggregateReport`];
//! [`AggregateReport::render`] prints it; [`run`] does both and turns the
//! outcome into a process exit code.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::CheckConfig;
use crate::error::{ThemeCheckError, ThemeCheckResult};
use crate::scanner::scan;
use crate::theme_validator::{validate, ValidationResult};

/// Exit code for a passing run
pub const EXIT_PASS: i32 = 0;
/// Exit code for a failing run or a missing themes directory
pub const EXIT_FAIL: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Valid,
    ValidWithWarnings,
    Invalid,
}

/// Outcome for one theme file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// File stem, used as the display name
    pub name: String,
    pub path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl FileReport {
    pub fn new(path: impl AsRef<Path>, result: ValidationResult) -> Self {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path: path.to_path_buf(),
            errors: result.errors,
            warnings: result.warnings,
        }
    }

    pub fn status(&self) -> FileStatus {
        if !self.errors.is_empty() {
            FileStatus::Invalid
        } else if !self.warnings.is_empty() {
            FileStatus::ValidWithWarnings
        } else {
            FileStatus::Valid
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Final classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    AllPassed,
    MostPassed,
    Failing,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::AllPassed | Verdict::MostPassed => EXIT_PASS,
            Verdict::Failing => EXIT_FAIL,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::AllPassed => write!(f, "All themes passed validation"),
            Verdict::MostPassed => write!(f, "Most themes passed validation"),
            Verdict::Failing => write!(f, "Some themes have problems"),
        }
    }
}

/// Totals over one scan of a theme directory
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateReport {
    pub files: Vec<FileReport>,
    pub total: usize,
    pub valid: usize,
    pub total_warnings: usize,
    pub total_errors: usize,
    pub pass_threshold: f64,
}

impl AggregateReport {
    pub fn new(pass_threshold: f64) -> Self {
        Self {
            files: Vec::new(),
            total: 0,
            valid: 0,
            total_warnings: 0,
            total_errors: 0,
            pass_threshold,
        }
    }

    pub fn record(&mut self, file: FileReport) {
        self.total += 1;
        if file.is_valid() {
            self.valid += 1;
        }
        self.total_warnings += file.warnings.len();
        self.total_errors += file.errors.len();
        self.files.push(file);
    }

    pub fn invalid(&self) -> usize {
        self.total - self.valid
    }

    /// Percentage of themes without errors, `0.0` for an empty corpus
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.valid as f64 * 100.0 / self.total as f64
    }

    pub fn verdict(&self) -> Verdict {
        if self.valid == self.total {
            Verdict::AllPassed
        } else if self.success_rate() >= self.pass_threshold {
            Verdict::MostPassed
        } else {
            Verdict::Failing
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.verdict().exit_code()
    }

    /// Write the per-theme lines and the summary block
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "themes to check: {}", self.total)?;
        writeln!(out)?;

        for file in &self.files {
            let status = match file.status() {
                FileStatus::Valid => "fully valid".to_string(),
                FileStatus::ValidWithWarnings => {
                    format!("valid ({} warnings)", file.warnings.len())
                }
                FileStatus::Invalid => format!("invalid ({} errors)", file.errors.len()),
            };
            writeln!(out, "{} ... {}", file.name, status)?;
            for error in &file.errors {
                writeln!(out, "    [error] {error}")?;
            }
            for warning in &file.warnings {
                writeln!(out, "    [warning] {warning}")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "=== Validation summary ===")?;
        writeln!(out, "total themes: {}", self.total)?;
        writeln!(out, "valid themes: {}", self.valid)?;
        writeln!(out, "invalid themes: {}", self.invalid())?;
        writeln!(out, "total warnings: {}", self.total_warnings)?;
        writeln!(out, "total errors: {}", self.total_errors)?;
        writeln!(out, "success rate: {:.1}%", self.success_rate())?;
        writeln!(out, "{}", self.verdict())
    }

    pub fn export(&self, format: ExportFormat) -> ThemeCheckResult<String> {
        let rows: Vec<ExportRow<'_>> = self.files.iter().map(ExportRow::from).collect();
        match format {
            ExportFormat::Markdown => {
                let mut s =
                    String::from("| Theme | Valid | Warnings | Errors |\n|---|---|---:|---:|\n");
                for r in &rows {
                    let valid = if r.valid { "yes" } else { "no" };
                    s.push_str(&format!(
                        "| {} | {} | {} | {} |\n",
                        markdown_cell(r.theme),
                        valid,
                        r.warnings,
                        r.errors
                    ));
                }
                Ok(s)
            }
            ExportFormat::Csv => {
                let mut s = String::from("theme,valid,warnings,errors\n");
                for r in &rows {
                    s.push_str(&format!(
                        "{},{},{},{}\n",
                        csv_field(r.theme),
                        r.valid,
                        r.warnings,
                        r.errors
                    ));
                }
                Ok(s)
            }
            ExportFormat::Json => {
                let doc = ExportDocument {
                    total: self.total,
                    valid: self.valid,
                    warnings: self.total_warnings,
                    errors: self.total_errors,
                    success_rate: self.success_rate(),
                    rows,
                };
                Ok(serde_json::to_string_pretty(&doc)?)
            }
        }
    }
}

/// Machine-readable report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = ThemeCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" | "markdown" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ThemeCheckError::UnknownExportFormat(other.to_string())),
        }
    }
}

#[derive(Serialize)]
struct ExportRow<'a> {
    theme: &'a str,
    valid: bool,
    warnings: usize,
    errors: usize,
}

impl<'a> From<&'a FileReport> for ExportRow<'a> {
    fn from(file: &'a FileReport) -> Self {
        Self {
            theme: &file.name,
            valid: file.is_valid(),
            warnings: file.warnings.len(),
            errors: file.errors.len(),
        }
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    total: usize,
    valid: usize,
    warnings: usize,
    errors: usize,
    success_rate: f64,
    rows: Vec<ExportRow<'a>>,
}

fn markdown_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Read and decode one theme file
pub fn load_theme(path: impl AsRef<Path>) -> ThemeCheckResult<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ThemeCheckError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| ThemeCheckError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate one theme file; read and parse failures become a single error
pub fn check_file(path: impl AsRef<Path>) -> FileReport {
    let path = path.as_ref();
    let result = match load_theme(path) {
        Ok(theme) => validate(&theme),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "theme could not be decoded");
            ValidationResult::from_error(err.to_string())
        }
    };
    debug!(
        path = %path.display(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated theme"
    );
    FileReport::new(path, result)
}

/// Validate every theme in the configured directory
pub fn collect(config: &CheckConfig) -> ThemeCheckResult<AggregateReport> {
    let themes = scan(&config.themes_dir, &config.schema_file_name)?;
    let mut report = AggregateReport::new(config.pass_threshold);
    for path in &themes {
        report.record(check_file(path));
    }
    info!(
        total = report.total,
        valid = report.valid,
        errors = report.total_errors,
        warnings = report.total_warnings,
        "theme check finished"
    );
    Ok(report)
}

/// Check the configured directory, print the report and pick an exit code.
///
/// When the directory cannot be scanned only the failure is printed and no
/// report is returned.
pub fn run<W: Write>(
    config: &CheckConfig,
    out: &mut W,
) -> io::Result<(i32, Option<AggregateReport>)> {
    writeln!(out, "NexusShell theme validator")?;
    writeln!(out, "==========================")?;

    let report = match collect(config) {
        Ok(report) => report,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok((EXIT_FAIL, None));
        }
    };

    report.render(out)?;
    Ok((report.exit_code(), Some(report)))
}
