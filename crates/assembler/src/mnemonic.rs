//! Textual mnemonic and service-call tables derived from the core ISA tables.

use std::sync::OnceLock;

use isa_core::{Mnemonic, Nibble, ServiceCall, OPCODE_TABLE, SERVICE_CALL_TABLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MnemonicEntry {
    name: &'static str,
    opcode: u8,
    mnemonic: Mnemonic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ServiceCallEntry {
    name: &'static str,
    code: u8,
    call: ServiceCall,
}

macro_rules! mnemonic {
    ($name:literal, $opcode:literal, $variant:ident) => {
        MnemonicEntry {
            name: $name,
            opcode: $opcode,
            mnemonic: Mnemonic::$variant,
        }
    };
}

macro_rules! service_call {
    ($name:literal, $code:literal, $variant:ident) => {
        ServiceCallEntry {
            name: $name,
            code: $code,
            call: ServiceCall::$variant,
        }
    };
}

const MNEMONIC_ENTRIES: &[MnemonicEntry] = &[
    mnemonic!("KA", 0x0, Ka),
    mnemonic!("AO", 0x1, Ao),
    mnemonic!("CH", 0x2, Ch),
    mnemonic!("CY", 0x3, Cy),
    mnemonic!("AM", 0x4, Am),
    mnemonic!("MA", 0x5, Ma),
    mnemonic!("M+", 0x6, MPlus),
    mnemonic!("M-", 0x7, MMinus),
    mnemonic!("TIA", 0x8, Tia),
    mnemonic!("AIA", 0x9, Aia),
    mnemonic!("TIY", 0xA, Tiy),
    mnemonic!("AIY", 0xB, Aiy),
    mnemonic!("CIA", 0xC, Cia),
    mnemonic!("CIY", 0xD, Ciy),
    mnemonic!("CAL", 0xE, Cal),
    mnemonic!("JUMP", 0xF, Jump),
];

const SERVICE_CALL_ENTRIES: &[ServiceCallEntry] = &[
    service_call!("RSTO", 0x0, Rsto),
    service_call!("SETR", 0x1, Setr),
    service_call!("RSTR", 0x2, Rstr),
    service_call!("UNDEFINED", 0x3, Undefined),
    service_call!("CMPL", 0x4, Cmpl),
    service_call!("CHNG", 0x5, Chng),
    service_call!("SHFT", 0x6, Shft),
    service_call!("ENDS", 0x7, Ends),
    service_call!("ERRS", 0x8, Errs),
    service_call!("SHTS", 0x9, Shts),
    service_call!("LONS", 0xA, Lons),
    service_call!("SUND", 0xB, Sund),
    service_call!("TIMR", 0xC, Timr),
    service_call!("DSPR", 0xD, Dspr),
    service_call!("DEM-", 0xE, DemMinus),
    service_call!("DEM+", 0xF, DemPlus),
];

fn mnemonics_verified_against_core() -> &'static [MnemonicEntry] {
    static VERIFIED: OnceLock<Vec<MnemonicEntry>> = OnceLock::new();
    VERIFIED.get_or_init(|| {
        for entry in MNEMONIC_ENTRIES {
            assert!(
                OPCODE_TABLE.contains(&(entry.opcode, entry.mnemonic))
                    && Nibble::new(entry.opcode).map(Mnemonic::from_opcode) == Some(entry.mnemonic),
                "mnemonic table diverged from isa-core opcode table"
            );
        }
        MNEMONIC_ENTRIES.to_vec()
    })
}

fn service_calls_verified_against_core() -> &'static [ServiceCallEntry] {
    static VERIFIED: OnceLock<Vec<ServiceCallEntry>> = OnceLock::new();
    VERIFIED.get_or_init(|| {
        for entry in SERVICE_CALL_ENTRIES {
            assert!(
                SERVICE_CALL_TABLE.contains(&(entry.code, entry.call))
                    && Nibble::new(entry.code).map(ServiceCall::from_code) == Some(entry.call),
                "service-call table diverged from isa-core table"
            );
        }
        SERVICE_CALL_ENTRIES.to_vec()
    })
}

/// Resolves an instruction name. Matching is exact and case-sensitive.
#[must_use]
pub fn resolve_mnemonic(name: &str) -> Option<Mnemonic> {
    mnemonics_verified_against_core()
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.mnemonic)
}

/// Resolves a service-call name. Matching is exact and case-sensitive.
#[must_use]
pub fn resolve_service_call(name: &str) -> Option<ServiceCall> {
    service_calls_verified_against_core()
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.call)
}

/// Returns the source spelling of `mnemonic`.
#[must_use]
pub fn mnemonic_name(mnemonic: Mnemonic) -> &'static str {
    MNEMONIC_ENTRIES
        .iter()
        .find(|entry| entry.mnemonic == mnemonic)
        .map_or("?", |entry| entry.name)
}

/// Returns the source spelling of `call`.
#[must_use]
pub fn service_call_name(call: ServiceCall) -> &'static str {
    SERVICE_CALL_ENTRIES
        .iter()
        .find(|entry| entry.call == call)
        .map_or("?", |entry| entry.name)
}

/// Parses a bare hexadecimal operand (`A`, `0f`, `4F`).
///
/// The token must be a non-empty run of ASCII hex digits with no prefix or
/// sign. Values wider than 64 bits saturate so that they read as out of
/// range rather than as not-a-number.
#[must_use]
pub fn parse_hex(token: &str) -> Option<u64> {
    if token.is_empty() {
        return None;
    }
    token.chars().try_fold(0_u64, |acc, c| {
        c.to_digit(16)
            .map(|digit| acc.saturating_mul(16).saturating_add(u64::from(digit)))
    })
}
