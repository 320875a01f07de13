//! Tokenization and label collection (pass 1).
//!
//! Lines are split on runs of separator characters (see [`is_separator`]).
//! A token ending in `:` declares a label bound to the address of the next
//! instruction token; it is not itself emitted and takes no address.
//! Nothing here fails: malformed tokens are reported by the encoder.

use tracing::warn;

use crate::source::SourceLine;
use crate::symbols::LabelTable;

/// Terminator marking a label declaration.
pub const LABEL_TERMINATOR: char = ':';

/// Byte-order mark, treated as a separator.
const BYTE_ORDER_MARK: char = '\u{FEFF}';
/// Next-line control, not a separator.
const NEXT_LINE: char = '\u{85}';

/// Returns true for characters that separate tokens.
///
/// This is Unicode white space plus the byte-order mark, minus U+0085, so a
/// source saved with a BOM assembles like one without.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c == BYTE_ORDER_MARK || (c.is_whitespace() && c != NEXT_LINE)
}

/// An instruction-stream token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text.
    pub text: String,
    /// 1-indexed source line.
    pub line: usize,
}

/// Output of pass 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    /// Instruction tokens; a token's index is its address.
    pub tokens: Vec<Token>,
    /// Declared labels.
    pub labels: LabelTable,
}

impl TokenStream {
    /// Returns the number of instruction tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the source held no instruction tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Splits comment-stripped lines into tokens and collects labels.
#[must_use]
pub fn tokenize(lines: &[SourceLine<'_>]) -> TokenStream {
    let mut stream = TokenStream::default();

    for source in lines {
        for raw in source.text.split(is_separator).filter(|raw| !raw.is_empty()) {
            if let Some(name) = raw.strip_suffix(LABEL_TERMINATOR) {
                let address = stream.tokens.len();
                if let Some(previous) = stream.labels.define(name, address) {
                    warn!(
                        label = name,
                        previous,
                        address,
                        line = source.line,
                        "label redeclared"
                    );
                }
            } else {
                stream.tokens.push(Token {
                    text: raw.to_owned(),
                    line: source.line,
                });
            }
        }
    }

    stream
}
