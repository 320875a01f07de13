//! Ya4ms assembler library.

use clap as _;
use serde_json as _;
use tracing_subscriber as _;

/// Top-level two-pass assembler pipeline.
pub mod assembler;
/// Instruction encoding (pass 2).
pub mod encoder;
/// Assembly error types.
pub mod errors;
/// Hex, listing, and dump rendering of an assembly.
pub mod listing;
/// Textual mnemonic and service-call tables.
pub mod mnemonic;
/// Comment stripping.
pub mod source;
/// Label table.
pub mod symbols;
/// Tokenization and label collection (pass 1).
pub mod tokenizer;

pub use assembler::{assemble, Assembly};
pub use errors::{AssembleError, AssembleErrorKind};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
#[cfg(test)]
use tempfile as _;
