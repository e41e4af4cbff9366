//! Conversion of 8-bit binary literals in text files to hex literals.
//!
//! - **converter**: per-line detection and substitution of `0b` literals
//! - **alphanumeric**: extraction of letter/digit tokens from lines
//! - **document**: whole-file line reading and writing
//! - **config**: run configuration and entry points

pub mod alphanumeric;
pub mod config;
pub mod converter;
pub mod document;
pub mod errors;

pub use alphanumeric::AlphanumericExtractor;
pub use config::{run_conversion, run_extraction, RunConfig, RunSummary};
pub use converter::{binary_to_hex, echo_line, HexByte, LineConverter};
pub use errors::ConvertError;
