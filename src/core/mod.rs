//! Core library components.
//!
//! Environment scanning, reference matching, resolver dispatch and the
//! secret store backends.

pub mod constants;
pub mod env;
pub mod export;
pub mod reference;
pub mod resolver;
pub mod store;
