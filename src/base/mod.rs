//! Foundation types for the RASAero importer.
//!
//! This module provides the vocabulary shared by every handler:
//! - [`tags`] - RASAero element names
//! - [`units`] - Length conversion from RASAero inches to metres
//!
//! This module has NO dependencies on other crate modules.

pub mod tags;
pub mod units;

pub use units::{RASAERO_TO_INTERNAL_LENGTH, parse_length};
