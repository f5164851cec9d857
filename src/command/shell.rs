//! Quoting helpers for shell and AppleScript strings

use std::path::Path;

pub fn escape_shell_single_quoted(value: &str) -> String {
    value.replace('\'', "'\\''")
}

/// Wrap `value` in single quotes so the shell takes it literally
pub fn quote(value: &str) -> String {
    format!("'{}'", escape_shell_single_quoted(value))
}

pub fn quote_path(path: &Path) -> String {
    quote(&path.to_string_lossy())
}

pub fn escape_applescript_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
