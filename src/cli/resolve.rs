//! Default command: resolve secret references to export lines.

use std::io::{self, Write};

use tracing::debug;

use crate::core::env::Environment;
use crate::core::resolver::Resolver;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Resolve the process environment and print export lines to stdout.
pub fn execute() -> Result<()> {
    let env = Environment::capture();
    let resolver = Resolver::new();
    let stdout = io::stdout();
    run(&env, &resolver, &mut stdout.lock())
}

/// Write a blank line, then one `export` line per resolved reference.
///
/// Lines are flushed as they resolve. The first failure stops the run and
/// is returned; lines already written stay written.
pub fn run<S, W>(env: &Environment, resolver: &Resolver<S>, out: &mut W) -> Result<()>
where
    S: SecretStore,
    W: Write,
{
    writeln!(out)?;
    out.flush()?;

    let mut exported = 0usize;
    for result in resolver.resolve_all(env) {
        let line = result?;
        writeln!(out, "{}", line)?;
        out.flush()?;
        exported += 1;
    }

    debug!(exported, scanned = env.len(), "resolved environment");
    Ok(())
}
