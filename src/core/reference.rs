//! Secret references.
//!
//! A reference is an environment value of the form `processor:key`. Only
//! values starting with a recognized processor prefix are references; the
//! test is a literal prefix match.

use std::fmt;

use crate::core::constants::{PASS_PROCESSOR, PROCESSOR_SEPARATOR, RESERVED_PROCESSORS};

/// Backend that handles a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Processor {
    /// Password store (`pass show <key>`).
    Pass,
    /// Recognized name without a backend yet; resolved by passthrough.
    Reserved(&'static str),
}

impl Processor {
    /// Every recognized processor, `pass` first.
    pub fn all() -> impl Iterator<Item = Processor> {
        std::iter::once(Processor::Pass)
            .chain(RESERVED_PROCESSORS.iter().copied().map(Processor::Reserved))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Processor::Pass => PASS_PROCESSOR,
            Processor::Reserved(name) => name,
        }
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed `processor:key` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    pub processor: Processor,
    /// Everything after the first separator, passed to the resolver verbatim.
    pub key: &'a str,
}

impl<'a> Reference<'a> {
    /// Match `value` against the recognized processor prefixes.
    ///
    /// Returns `None` for anything else, which callers skip.
    pub fn parse(value: &'a str) -> Option<Self> {
        Processor::all().find_map(|processor| {
            value
                .strip_prefix(processor.name())
                .and_then(|rest| rest.strip_prefix(PROCESSOR_SEPARATOR))
                .map(|key| Reference { processor, key })
        })
    }
}

impl fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.processor, PROCESSOR_SEPARATOR, self.key)
    }
}
