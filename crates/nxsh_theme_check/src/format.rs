//! Value format checks used by the theme validator.
//!
//! All predicates take a decoded JSON value and answer `false` for anything
//! that is not a string.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

static SEMANTIC_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("version pattern is valid"));

static THEME_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("theme name pattern is valid"));

/// `#RRGGBB`, digits in either case
pub fn is_hex_color(value: &Value) -> bool {
    value.as_str().map_or(false, is_hex_color_str)
}

pub fn is_hex_color_str(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// `MAJOR.MINOR.PATCH` with plain decimal components, no prefix or suffix
pub fn is_semantic_version(value: &Value) -> bool {
    value.as_str().map_or(false, is_semantic_version_str)
}

pub fn is_semantic_version_str(version: &str) -> bool {
    SEMANTIC_VERSION.is_match(version)
}

/// Check if a theme name uses only ASCII letters, digits, `_` and `-`
pub fn is_valid_theme_name(name: &str) -> bool {
    THEME_NAME.is_match(name)
}
