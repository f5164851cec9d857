//! Recipient list parsing
//!
//! Recipients arrive as one comma-separated line, from a dialog, a config
//! value or an environment variable. They are only checked for being
//! non-empty after trimming; address validation is the processor's job.

use std::fmt;

/// Ordered list of recipient addresses, each non-empty and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientList(Vec<String>);

impl RecipientList {
    /// Split `raw` on commas, trim each piece and drop the blank ones.
    /// `None` and blank input both give an empty list.
    pub fn parse(raw: Option<&str>) -> Self {
        let recipients = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string)
            .collect();
        RecipientList(recipients)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Serialized form handed to the external processor: `a@x.com,b@y.com`.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

impl fmt::Display for RecipientList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// True when the raw input carries nothing at all (absent or whitespace).
/// Distinguishes a dismissed prompt from input like `" , ,"`.
pub fn is_blank(raw: Option<&str>) -> bool {
    raw.map(|value| value.trim().is_empty()).unwrap_or(true)
}
