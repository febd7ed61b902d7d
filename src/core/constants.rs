//! Constants used throughout secenvs.
//!
//! Centralizes program names, prefixes and environment variable names.

/// Separator between a processor name and its key (`pass:db/creds`).
pub const PROCESSOR_SEPARATOR: char = ':';

/// Processor name handled by the password store.
pub const PASS_PROCESSOR: &str = "pass";

/// Processor names that are recognized but not yet backed by a store.
///
/// References using these are echoed unchanged.
pub const RESERVED_PROCESSORS: &[&str] = &["vault"];

/// Shell used to run store commands.
pub const SHELL: &str = "sh";

/// Password store executable.
pub const PASS_PROGRAM: &str = "pass";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SECENVS_LOG";
