//! Jump targets occupy two code units after the `JUMP` opcode.
//!
//! The split uses radix 15 rather than 16: `high = address / 15` and
//! `low = address % 15`, matching the jump table of the target hardware.
//! It has not been confirmed against a physical unit.

use thiserror::Error;

use crate::nibble::Nibble;

/// Radix used to split a jump address into two units.
pub const JUMP_ADDRESS_RADIX: usize = 15;

/// Largest jump target that may be written as an immediate (`0x4F`).
pub const JUMP_IMMEDIATE_MAX: usize = 0x4F;

/// Largest address whose high unit still fits in a nibble.
pub const JUMP_ADDRESS_MAX: usize = 0xF * JUMP_ADDRESS_RADIX + (JUMP_ADDRESS_RADIX - 1);

/// A jump target that cannot be encoded in two units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("jump address {address} exceeds encodable maximum {max}", max = JUMP_ADDRESS_MAX)]
pub struct JumpAddressError {
    /// The rejected address.
    pub address: usize,
}

/// Splits `address` into `(high, low)` code units.
///
/// # Errors
///
/// Returns [`JumpAddressError`] if the high unit would exceed `0xF`.
#[allow(clippy::cast_possible_truncation)]
pub const fn split_jump_address(address: usize) -> Result<(Nibble, Nibble), JumpAddressError> {
    if address > JUMP_ADDRESS_MAX {
        return Err(JumpAddressError { address });
    }
    let high = (address / JUMP_ADDRESS_RADIX) as u8;
    let low = (address % JUMP_ADDRESS_RADIX) as u8;
    Ok((Nibble::truncate(high), Nibble::truncate(low)))
}

/// Recombines the two units written by [`split_jump_address`].
#[must_use]
pub const fn join_jump_address(high: Nibble, low: Nibble) -> usize {
    high.get() as usize * JUMP_ADDRESS_RADIX + low.get() as usize
}
