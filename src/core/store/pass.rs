//! Password store backend.
//!
//! Shells out to `pass show <key>` and keeps the first line of its output.
//!
//! ## Requirements
//!
//! - `pass` must be installed and on `PATH`
//! - The gpg agent must already hold the passphrase; stdin is closed, so
//!   an interactive prompt fails instead of blocking
//!
//! The key is interpolated into the shell command line as-is. Keys come
//! from the caller's own environment and are trusted to the same degree.

use std::process::{Command, Stdio};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::SecretStore;
use crate::core::constants::{PASS_PROGRAM, SHELL};
use crate::error::ResolveError;

/// Password store backend using the `pass` CLI.
#[derive(Debug, Clone, Default)]
pub struct PassStore;

impl PassStore {
    pub fn new() -> Self {
        Self
    }

    /// Shell command line run for `key`.
    pub fn command_line(key: &str) -> String {
        format!("{} show {}", PASS_PROGRAM, key)
    }
}

impl SecretStore for PassStore {
    fn name(&self) -> &'static str {
        PASS_PROGRAM
    }

    fn fetch(&self, key: &str) -> Result<Zeroizing<String>, ResolveError> {
        debug!(key, "resolving from password store");

        let output = Command::new(SHELL)
            .arg("-c")
            .arg(Self::command_line(key))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ResolveError::Spawn {
                program: PASS_PROGRAM,
                key: key.to_string(),
                source,
            })?;

        // Full multi-line output is wiped once the first line is copied out
        let stdout = Zeroizing::new(output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResolveError::Failed {
                program: PASS_PROGRAM,
                key: key.to_string(),
                status: output.status,
                stderr: stderr.trim_end().to_string(),
            });
        }

        let line = decode_first_line(&stdout).ok_or_else(|| ResolveError::InvalidOutput {
            key: key.to_string(),
        })?;

        let secret = Zeroizing::new(line.to_string());
        trace!(key, secret_len = secret.len(), "resolved from password store");
        Ok(secret)
    }
}

/// Decode only the first line of raw output.
///
/// Later lines may hold binary data and are never looked at. `None` when
/// the first line is not UTF-8.
pub fn decode_first_line(raw: &[u8]) -> Option<&str> {
    let end = raw.iter().position(|&b| b == b'\n').unwrap_or(raw.len());
    std::str::from_utf8(&raw[..end]).ok().map(first_line)
}

/// First line of `output` with trailing `\r`/`\n` removed.
pub fn first_line(output: &str) -> &str {
    output
        .split('\n')
        .next()
        .unwrap_or_default()
        .trim_end_matches(&['\r', '\n'][..])
}
