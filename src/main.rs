//! secenvs - Processes secure environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secenvs::cli::output;
use secenvs::cli::{execute, Cli};
use secenvs::core::constants::{LOG_ENV, PASS_PROGRAM};
use secenvs::error::{Error, ResolveError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secenvs=debug")
        } else {
            EnvFilter::new("secenvs=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Resolve(ResolveError::Spawn { .. } | ResolveError::Failed { .. })
                if which::which(PASS_PROGRAM).is_err() =>
            {
                Some("install pass (https://www.passwordstore.org/) and make sure it is on PATH")
            }
            Error::Resolve(ResolveError::Failed { .. }) => {
                Some("check the key exists and unlock your gpg agent, e.g. run: pass show <key>")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
