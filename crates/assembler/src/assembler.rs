//! Top-level assembler pipeline.
//!
//! 1. **Preprocess**: strip comments (`source::preprocess`)
//! 2. **Pass 1**: tokenize and collect labels (`tokenizer::tokenize`)
//! 3. **Pass 2**: encode to 4-bit code units (`encoder::encode`)
//!
//! [`assemble`] is a pure function of the source text. Each call builds a
//! fresh [`Assembly`], so nothing from an earlier run can leak into a later
//! one.

use isa_core::Nibble;
use tracing::{debug, debug_span};

use crate::encoder::{encode, TraceRecord};
use crate::errors::AssembleError;
use crate::source::preprocess;
use crate::symbols::LabelTable;
use crate::tokenizer::tokenize;

/// A successfully assembled program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    codes: Vec<Nibble>,
    labels: LabelTable,
    trace: Vec<TraceRecord>,
    token_count: usize,
}

impl Assembly {
    /// The machine code, one 4-bit unit per element.
    #[must_use]
    pub fn codes(&self) -> &[Nibble] {
        &self.codes
    }

    /// The machine code as plain integers.
    #[must_use]
    pub fn code_values(&self) -> Vec<u8> {
        self.codes.iter().map(|unit| unit.get()).collect()
    }

    /// Labels declared in the source.
    #[must_use]
    pub const fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// One record per assembled instruction.
    #[must_use]
    pub fn trace(&self) -> &[TraceRecord] {
        &self.trace
    }

    /// Number of instruction tokens after label removal.
    #[must_use]
    pub const fn token_count(&self) -> usize {
        self.token_count
    }
}

/// Assembles source text into machine code.
///
/// # Errors
///
/// Returns the first [`AssembleError`] found: an unknown mnemonic, a missing
/// or malformed operand, an operand out of range, an undefined label, or an
/// unknown service call.
pub fn assemble(source: &str) -> Result<Assembly, AssembleError> {
    let _span = debug_span!("assemble", bytes = source.len()).entered();

    let lines = preprocess(source);
    let stream = tokenize(&lines);
    debug!(
        lines = lines.len(),
        tokens = stream.len(),
        labels = stream.labels.len(),
        "pass 1 complete"
    );

    let encoded = encode(&stream)?;
    debug!(
        units = encoded.codes.len(),
        instructions = encoded.trace.len(),
        "pass 2 complete"
    );

    Ok(Assembly {
        codes: encoded.codes,
        token_count: stream.tokens.len(),
        labels: stream.labels,
        trace: encoded.trace,
    })
}
