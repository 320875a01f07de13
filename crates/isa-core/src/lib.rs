//! Instruction set model for the Ya4ms 4-bit microcomputer.
//!
//! The instruction set is the GMC-4 one: sixteen instructions, each a single
//! 4-bit opcode optionally followed by operand units, and sixteen service
//! routines reachable through `CAL`.

/// The 4-bit code unit.
pub mod nibble;
pub use nibble::{Nibble, NibbleOutOfRange};

/// Opcode table and operand classification.
pub mod encoding;
pub use encoding::{Mnemonic, OperandKind, OPCODE_TABLE};

/// Service-call routines selected by the `CAL` operand.
pub mod service;
pub use service::{ServiceCall, SERVICE_CALL_TABLE};

/// Jump-target splitting into code units.
pub mod address;
pub use address::{
    join_jump_address, split_jump_address, JumpAddressError, JUMP_ADDRESS_MAX,
    JUMP_ADDRESS_RADIX, JUMP_IMMEDIATE_MAX,
};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
