//! secenvs - Resolve secret references held in environment variables.
//!
//! Variables whose value looks like `pass:<key>` are looked up with
//! `pass show <key>` and printed as `export NAME=<secret>` lines, so a
//! shell can load them with `eval "$(secenvs)"`.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Default command: print export lines
//! │   ├── completions   # Shell completions
//! │   └── output        # stderr diagnostics
//! └── core/             # Core library components
//!     ├── env           # Environment snapshot
//!     ├── reference     # `processor:key` matching
//!     ├── resolver      # Dispatch by processor
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # SecretStore trait
//!     │   └── pass      # `pass show` implementation
//!     └── export        # `export NAME=value` lines
//! ```

pub mod cli;
pub mod core;
pub mod error;
