//! Instruction encoding (pass 2).
//!
//! The encoder walks the token stream with a [`Cursor`]. In the
//! `ExpectInstruction` state the next token must be a mnemonic; its operand,
//! if any, is consumed through [`Encoder::take_operand`], which is the only
//! place operand tokens are parsed and range-checked. The walk ends in `Done`
//! once the stream is exhausted.

use isa_core::{
    split_jump_address, Mnemonic, Nibble, OperandKind, ServiceCall, JUMP_ADDRESS_MAX,
    JUMP_IMMEDIATE_MAX,
};
use tracing::{debug_span, trace};

use crate::errors::{AssembleError, AssembleErrorKind};
use crate::mnemonic::{mnemonic_name, parse_hex, resolve_mnemonic, resolve_service_call};
use crate::symbols::LabelTable;
use crate::tokenizer::{Token, TokenStream};

/// Operand as assembled, recorded in the trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceOperand {
    /// No operand.
    None,
    /// 4-bit immediate.
    Immediate(Nibble),
    /// Jump target and its two code units.
    Jump {
        /// Target token address.
        target: usize,
        /// Label the target was resolved from, if any.
        label: Option<String>,
        /// `target / 15`.
        high: Nibble,
        /// `target % 15`.
        low: Nibble,
    },
    /// Service routine.
    Service(ServiceCall),
}

impl TraceOperand {
    fn units(&self) -> Vec<Nibble> {
        match self {
            Self::None => Vec::new(),
            Self::Immediate(value) => vec![*value],
            Self::Jump { high, low, .. } => vec![*high, *low],
            Self::Service(call) => vec![call.code()],
        }
    }
}

/// One assembled instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    /// Token address of the mnemonic.
    ///
    /// This counts tokens, not code units, so it drifts from `offset` once a
    /// jump has been assembled.
    pub index: usize,
    /// Position of the opcode unit in the code array.
    pub offset: usize,
    /// The instruction.
    pub mnemonic: Mnemonic,
    /// Its opcode.
    pub opcode: Nibble,
    /// Its operand.
    pub operand: TraceOperand,
}

impl TraceRecord {
    /// Returns every code unit this instruction emitted, opcode first.
    #[must_use]
    pub fn units(&self) -> Vec<Nibble> {
        let mut units = Vec::with_capacity(self.mnemonic.operand_kind().unit_count());
        units.push(self.opcode);
        units.extend(self.operand.units());
        units
    }
}

/// Output of pass 2.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    /// Emitted code units.
    pub codes: Vec<Nibble>,
    /// One record per instruction.
    pub trace: Vec<TraceRecord>,
}

/// A position in the token stream.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Starts at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Returns the next token with its index and advances past it.
    pub fn advance(&mut self) -> Option<(usize, &'a Token)> {
        let token = self.tokens.get(self.position)?;
        let index = self.position;
        self.position += 1;
        Some((index, token))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EncoderState {
    ExpectInstruction,
    Done,
}

/// The instruction whose operand is being consumed.
struct Pending<'a> {
    index: usize,
    token: &'a Token,
}

impl Pending<'_> {
    fn error(&self, kind: AssembleErrorKind) -> AssembleError {
        AssembleError {
            kind,
            index: self.index,
            token: self.token.text.clone(),
            line: self.token.line,
        }
    }
}

struct Encoder<'a> {
    cursor: Cursor<'a>,
    labels: &'a LabelTable,
    output: Encoded,
}

impl<'a> Encoder<'a> {
    fn step(&mut self) -> Result<EncoderState, AssembleError> {
        let Some((index, token)) = self.cursor.advance() else {
            return Ok(EncoderState::Done);
        };
        let pending = Pending { index, token };

        let mnemonic = resolve_mnemonic(&token.text)
            .ok_or_else(|| pending.error(AssembleErrorKind::UndefinedMnemonic))?;
        let operand = self.take_operand(mnemonic.operand_kind(), &pending)?;

        let record = TraceRecord {
            index,
            offset: self.output.codes.len(),
            mnemonic,
            opcode: mnemonic.opcode(),
            operand,
        };
        trace!(
            index,
            offset = record.offset,
            mnemonic = mnemonic_name(mnemonic),
            units = ?record.units(),
            "assembled instruction"
        );
        self.output.codes.extend(record.units());
        self.output.trace.push(record);

        Ok(EncoderState::ExpectInstruction)
    }

    /// Consumes the operand of `pending`, if its instruction has one.
    fn take_operand(
        &mut self,
        kind: OperandKind,
        pending: &Pending<'a>,
    ) -> Result<TraceOperand, AssembleError> {
        match kind {
            OperandKind::None => Ok(TraceOperand::None),
            OperandKind::Nibble => {
                let text = self.operand_text(pending)?;
                let value = parse_hex(text).ok_or_else(|| {
                    pending.error(AssembleErrorKind::InvalidNumericOperand(text.to_owned()))
                })?;
                u8::try_from(value)
                    .ok()
                    .and_then(Nibble::new)
                    .map(TraceOperand::Immediate)
                    .ok_or_else(|| {
                        pending.error(AssembleErrorKind::OperandOutOfRange {
                            operand: text.to_owned(),
                            max: usize::from(Nibble::MAX.get()),
                        })
                    })
            }
            OperandKind::JumpTarget => {
                let text = self.operand_text(pending)?;
                self.jump_target(text, pending)
            }
            OperandKind::ServiceCall => {
                let text = self.operand_text(pending)?;
                resolve_service_call(text)
                    .map(TraceOperand::Service)
                    .ok_or_else(|| {
                        pending.error(AssembleErrorKind::UndefinedServiceCall(text.to_owned()))
                    })
            }
        }
    }

    /// Advances past the operand token of `pending`.
    fn operand_text(&mut self, pending: &Pending<'a>) -> Result<&'a str, AssembleError> {
        self.cursor
            .advance()
            .map(|(_, operand)| operand.text.as_str())
            .ok_or_else(|| pending.error(AssembleErrorKind::TruncatedOperand))
    }

    /// Hex immediates win over labels; only a non-number is looked up.
    fn jump_target(&self, text: &str, pending: &Pending<'_>) -> Result<TraceOperand, AssembleError> {
        let (target, label, max) = match parse_hex(text) {
            Some(value) => {
                let target = usize::try_from(value)
                    .ok()
                    .filter(|target| *target <= JUMP_IMMEDIATE_MAX)
                    .ok_or_else(|| {
                        pending.error(AssembleErrorKind::OperandOutOfRange {
                            operand: text.to_owned(),
                            max: JUMP_IMMEDIATE_MAX,
                        })
                    })?;
                (target, None, JUMP_IMMEDIATE_MAX)
            }
            None => {
                let target = self.labels.resolve(text).ok_or_else(|| {
                    pending.error(AssembleErrorKind::UndefinedLabel(text.to_owned()))
                })?;
                (target, Some(text.to_owned()), JUMP_ADDRESS_MAX)
            }
        };

        let (high, low) = split_jump_address(target).map_err(|_| {
            pending.error(AssembleErrorKind::OperandOutOfRange {
                operand: text.to_owned(),
                max,
            })
        })?;

        Ok(TraceOperand::Jump {
            target,
            label,
            high,
            low,
        })
    }
}

/// Encodes a token stream into code units.
///
/// # Errors
///
/// Returns the first [`AssembleError`] encountered; nothing is emitted for a
/// stream that fails.
pub fn encode(stream: &TokenStream) -> Result<Encoded, AssembleError> {
    let _span = debug_span!("encode", tokens = stream.len(), labels = stream.labels.len()).entered();

    let mut encoder = Encoder {
        cursor: Cursor::new(&stream.tokens),
        labels: &stream.labels,
        output: Encoded::default(),
    };

    let mut state = EncoderState::ExpectInstruction;
    while state == EncoderState::ExpectInstruction {
        state = encoder.step()?;
    }

    Ok(encoder.output)
}
