//! Assembly error types.
//!
//! Assembly stops at the first error. Every error names the 0-based index of
//! the token being assembled and its text, and carries the source line for
//! file-level reporting:
//!
//! ```text
//! token 3 `TIA`: operand `10` out of range (0x0-0xF)
//! ```

use thiserror::Error;

/// The first problem found while assembling a source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token {index} `{token}`: {kind}")]
pub struct AssembleError {
    /// Kind of error.
    pub kind: AssembleErrorKind,
    /// 0-based index of the instruction token in the token stream.
    pub index: usize,
    /// Text of the instruction token.
    pub token: String,
    /// 1-indexed source line of the instruction token.
    pub line: usize,
}

/// Classification of assembly errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleErrorKind {
    /// The instruction needs an operand but is the last token.
    #[error("operand required, end of token stream reached")]
    TruncatedOperand,
    /// The operand is not a bare hexadecimal number.
    #[error("operand `{0}` is not a hexadecimal number")]
    InvalidNumericOperand(String),
    /// The operand parsed but lies outside the instruction's range.
    #[error("operand `{operand}` out of range (0x0-0x{max:X})")]
    OperandOutOfRange {
        /// Operand text, or the resolved label name.
        operand: String,
        /// Largest accepted value.
        max: usize,
    },
    /// The jump operand is neither a number nor a declared label.
    #[error("undefined label `{0}`")]
    UndefinedLabel(String),
    /// The `CAL` operand names no service routine.
    #[error("undefined service call `{0}`")]
    UndefinedServiceCall(String),
    /// The token in instruction position is not an instruction.
    #[error("undefined mnemonic")]
    UndefinedMnemonic,
}

impl AssembleError {
    /// Formats the error for stderr output, prefixed with `file:line`.
    #[must_use]
    pub fn format_for_stderr(&self, file: &str) -> String {
        format!("{file}:{}: error: {self}", self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::{AssembleError, AssembleErrorKind};

    fn error(kind: AssembleErrorKind, token: &str) -> AssembleError {
        AssembleError {
            kind,
            index: 4,
            token: token.into(),
            line: 2,
        }
    }

    #[test]
    fn messages_name_index_and_token() {
        let cases = [
            (
                error(AssembleErrorKind::TruncatedOperand, "TIA"),
                "token 4 `TIA`: operand required, end of token stream reached",
            ),
            (
                error(AssembleErrorKind::InvalidNumericOperand("X".into()), "AIA"),
                "token 4 `AIA`: operand `X` is not a hexadecimal number",
            ),
            (
                error(
                    AssembleErrorKind::OperandOutOfRange {
                        operand: "50".into(),
                        max: 0x4F,
                    },
                    "JUMP",
                ),
                "token 4 `JUMP`: operand `50` out of range (0x0-0x4F)",
            ),
            (
                error(AssembleErrorKind::UndefinedLabel("nowhere".into()), "JUMP"),
                "token 4 `JUMP`: undefined label `nowhere`",
            ),
            (
                error(AssembleErrorKind::UndefinedServiceCall("BOGUS".into()), "CAL"),
                "token 4 `CAL`: undefined service call `BOGUS`",
            ),
            (
                error(AssembleErrorKind::UndefinedMnemonic, "FOO"),
                "token 4 `FOO`: undefined mnemonic",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn stderr_format_prefixes_file_and_line() {
        let err = error(AssembleErrorKind::UndefinedMnemonic, "FOO");
        assert_eq!(
            err.format_for_stderr("prog.asm"),
            "prog.asm:2: error: token 4 `FOO`: undefined mnemonic"
        );
    }
}
