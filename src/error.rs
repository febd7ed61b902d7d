//! Error types.
//!
//! Every failure is fatal to the run: `main` reports it once on stderr
//! and exits non-zero.

use std::process::ExitStatus;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures turning a secret reference into its plaintext.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("failed to run {program} for {key}: {source}")]
    Spawn {
        program: &'static str,
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed for {key}: {status}: {stderr}")]
    Failed {
        program: &'static str,
        key: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("secret for {key} is not valid utf-8")]
    InvalidOutput { key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
