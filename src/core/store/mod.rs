//! Secret store backends.
//!
//! A store turns a key into the plaintext it holds. Only the password
//! store (`pass`) is implemented.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretStore` trait in a new file
//! 2. Add a `Processor` variant for its prefix
//! 3. Route the variant to the store in `Resolver::resolve`
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl SecretStore for Vault {
//!     fn name(&self) -> &'static str {
//!         "vault"
//!     }
//!     fn fetch(&self, key: &str) -> Result<Zeroizing<String>, ResolveError> {
//!         // Read from vault
//!     }
//! }
//! ```

use zeroize::Zeroizing;

use crate::error::ResolveError;

mod pass;

pub use pass::{decode_first_line, first_line, PassStore};

/// Secret lookup trait.
pub trait SecretStore {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the secret stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError` if the backend cannot produce the secret.
    fn fetch(&self, key: &str) -> Result<Zeroizing<String>, ResolveError>;
}
