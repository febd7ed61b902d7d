//! Process environment snapshot.
//!
//! The environment is read once at startup; nothing here mutates it.
//! Splitting `NAME=value` is left to `std::env::vars_os`, which cannot
//! produce an unsplit entry.

use std::ffi::OsString;

use tracing::trace;

/// A single `NAME=value` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub name: String,
    pub value: String,
}

impl EnvEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Immutable snapshot of environment assignments, in host order.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    entries: Vec<EnvEntry>,
}

impl Environment {
    /// Snapshot the current process environment.
    pub fn capture() -> Self {
        Self::from_os_pairs(std::env::vars_os())
    }

    /// Build a snapshot from raw OS pairs.
    ///
    /// Entries whose name or value is not valid UTF-8 are left out. Secret
    /// references are plain text, so such an entry is never one of them.
    pub fn from_os_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let entries: Vec<EnvEntry> = pairs
            .into_iter()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some(EnvEntry { name, value }),
                (name, _) => {
                    let name = match name {
                        Ok(n) => n,
                        Err(n) => n.to_string_lossy().into_owned(),
                    };
                    trace!(name = %name, "skipping non-unicode environment entry");
                    None
                }
            })
            .collect();

        trace!(count = entries.len(), "captured environment");
        Self { entries }
    }

    /// Build a snapshot from explicit name/value pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(name, value)| EnvEntry::new(name, value))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[EnvEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
