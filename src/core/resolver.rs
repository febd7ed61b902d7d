//! Resolver dispatch.
//!
//! Maps each recognized reference in an environment snapshot to its
//! plaintext, one entry at a time.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::PROCESSOR_SEPARATOR;
use crate::core::env::{EnvEntry, Environment};
use crate::core::export::ExportLine;
use crate::core::reference::{Processor, Reference};
use crate::core::store::{PassStore, SecretStore};
use crate::error::ResolveError;

/// Resolves references through a password store.
pub struct Resolver<S = PassStore> {
    pass: S,
}

impl Resolver<PassStore> {
    /// Resolver backed by the real `pass` CLI.
    pub fn new() -> Self {
        Self::with_store(PassStore::new())
    }
}

impl Default for Resolver<PassStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SecretStore> Resolver<S> {
    /// Resolver backed by a custom password store.
    pub fn with_store(pass: S) -> Self {
        Self { pass }
    }

    /// Resolve a single reference.
    pub fn resolve(&self, reference: &Reference<'_>) -> Result<Zeroizing<String>, ResolveError> {
        match &reference.processor {
            Processor::Pass => self.pass.fetch(reference.key),
            Processor::Reserved(name) => Ok(Zeroizing::new(passthrough(name, reference.key))),
        }
    }

    /// Resolve one environment entry.
    ///
    /// `None` when the value is not a reference.
    pub fn resolve_entry(&self, entry: &EnvEntry) -> Option<Result<ExportLine, ResolveError>> {
        let reference = Reference::parse(&entry.value)?;
        debug!(
            name = %entry.name,
            processor = %reference.processor,
            "found secret reference"
        );
        Some(
            self.resolve(&reference)
                .map(|value| ExportLine::new(entry.name.as_str(), value)),
        )
    }

    /// Lazily resolve every reference in `env`, in snapshot order.
    ///
    /// Each store call happens when the iterator is advanced, so a caller
    /// that stops at the first error never runs the remaining lookups.
    pub fn resolve_all<'a>(
        &'a self,
        env: &'a Environment,
    ) -> impl Iterator<Item = Result<ExportLine, ResolveError>> + 'a {
        env.entries()
            .iter()
            .filter_map(move |entry| self.resolve_entry(entry))
    }
}

/// Resolver for processors without a backend: returns `processor:key` unchanged.
pub fn passthrough(processor: &str, key: &str) -> String {
    format!("{}{}{}", processor, PROCESSOR_SEPARATOR, key)
}
