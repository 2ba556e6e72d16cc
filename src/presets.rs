//! Named regex presets and pattern resolution for consuming layers.
//!
//! Presets are plain pattern strings; the matcher compiles whatever it is
//! handed and does not know presets exist.

use crate::error::{Error, Result};

/// Named preset patterns, in display order
pub const PRESETS: &[(&str, &str)] = &[
    ("email", r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"),
    (
        "url",
        r"https?://(www\.)?[a-zA-Z0-9-]+\.[a-zA-Z]{2,6}(/[a-zA-Z0-9#?=&_.-]*)?",
    ),
    (
        "dates",
        r"(0?[1-9]|1[0-2])[-/.](0?[1-9]|[12][0-9]|3[01])[-/.](\d{4})",
    ),
];

/// Look up a preset pattern by case-insensitive name
pub fn lookup(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(preset_name, _)| preset_name.eq_ignore_ascii_case(name))
        .map(|(_, pattern)| *pattern)
}

/// Resolve the pattern to use from an optional custom pattern and an
/// optional preset name. A non-empty custom pattern wins over the preset.
///
/// # Errors
/// `Error::NoPatternSelected` when neither a usable custom pattern nor a
/// known preset name is supplied.
pub fn resolve_pattern(custom: Option<&str>, preset: Option<&str>) -> Result<String> {
    if let Some(pattern) = custom {
        if !pattern.trim().is_empty() {
            return Ok(pattern.to_string());
        }
    }
    preset
        .and_then(lookup)
        .map(str::to_string)
        .ok_or(Error::NoPatternSelected)
}
