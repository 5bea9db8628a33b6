use serde_json::{Map, Value};

use crate::format::{is_hex_color, is_semantic_version, is_valid_theme_name};

/// Top-level fields every theme must define, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "version", "author", "colors"];

/// Color roles whose absence is reported as a warning
pub const BASIC_COLORS: [&str; 3] = ["primary", "background", "foreground"];

/// Theme validation result
///
/// Messages are kept in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result for a theme that could not be decoded at all
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    fn check_required_field(&mut self, theme: &Value, field: &str) {
        if theme.get(field).is_none() {
            self.errors.push(format!("missing required field '{field}'"));
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Validate a decoded theme.
///
/// Never fails: missing or mistyped fields become errors or warnings in the
/// returned result. Keys outside [`REQUIRED_FIELDS`] are ignored.
pub fn validate(theme: &Value) -> ValidationResult {
    let mut result = ValidationResult::new();

    for field in REQUIRED_FIELDS {
        result.check_required_field(theme, field);
    }

    if let Some(name) = theme.get("name") {
        match non_blank_str(name) {
            None => result
                .errors
                .push("field 'name' must be a non-empty string".to_string()),
            Some(name) if !is_valid_theme_name(name) => result.warnings.push(format!(
                "field 'name' contains discouraged characters: '{name}'"
            )),
            Some(_) => {}
        }
    }

    if let Some(version) = theme.get("version") {
        if !is_semantic_version(version) {
            result.errors.push(format!(
                "invalid version format: '{}' (expected MAJOR.MINOR.PATCH)",
                raw(version)
            ));
        }
    }

    if let Some(author) = theme.get("author") {
        if non_blank_str(author).is_none() {
            result
                .errors
                .push("field 'author' must be a non-empty string".to_string());
        }
    }

    if let Some(colors) = theme.get("colors") {
        match colors.as_object() {
            Some(colors) => validate_colors(colors, &mut result),
            None => result
                .errors
                .push("field 'colors' must be an object".to_string()),
        }
    }

    result
}

fn validate_colors(colors: &Map<String, Value>, result: &mut ValidationResult) {
    for role in BASIC_COLORS {
        match colors.get(role) {
            None => result
                .warnings
                .push(format!("recommended color '{role}' is missing")),
            Some(value) if !is_hex_color(value) => result.errors.push(invalid_color(role, value)),
            Some(_) => {}
        }
    }

    // Every role, basic ones included, so a bad basic color is reported twice.
    for (role, value) in colors {
        if !is_hex_color(value) {
            result.errors.push(invalid_color(role, value));
        }
    }
}

fn invalid_color(role: &str, value: &Value) -> String {
    format!(
        "invalid color format for '{role}': '{}' (expected #RRGGBB)",
        raw(value)
    )
}

/// The original string when it has content after trimming
fn non_blank_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

/// Strings without JSON quoting, everything else as JSON
fn raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
