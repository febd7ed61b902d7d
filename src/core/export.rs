//! Shell export lines.

use std::fmt;
use zeroize::Zeroizing;

/// A resolved variable, rendered as `export NAME=value`.
///
/// The value is written verbatim. Secrets containing whitespace, quotes or
/// other shell metacharacters are not escaped and may not survive `eval`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLine {
    name: String,
    value: Zeroizing<String>,
}

impl ExportLine {
    pub fn new(name: impl Into<String>, value: Zeroizing<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ExportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "export {}={}", self.name, self.value.as_str())
    }
}
