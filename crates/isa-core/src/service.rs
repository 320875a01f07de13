use crate::nibble::Nibble;

/// Built-in service routines. The discriminant is the `CAL` operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum ServiceCall {
    /// `RSTO`: clear the numeric display.
    Rsto = 0x0,
    /// `SETR`: light the LED selected by Y.
    Setr = 0x1,
    /// `RSTR`: turn off the LED selected by Y.
    Rstr = 0x2,
    /// Code 3, the external port. GMC-4 hardware does not implement it.
    Undefined = 0x3,
    /// `CMPL`: complement A.
    Cmpl = 0x4,
    /// `CHNG`: swap the A/B/Y/Z register banks.
    Chng = 0x5,
    /// `SHFT`: shift A right.
    Shft = 0x6,
    /// `ENDS`: play the end sound.
    Ends = 0x7,
    /// `ERRS`: play the error sound.
    Errs = 0x8,
    /// `SHTS`: play a short beep.
    Shts = 0x9,
    /// `LONS`: play a long beep.
    Lons = 0xA,
    /// `SUND`: play the note selected by A.
    Sund = 0xB,
    /// `TIMR`: wait (A + 1) tenths of a second.
    Timr = 0xC,
    /// `DSPR`: show memory 0x5E/0x5F on the LEDs.
    Dspr = 0xD,
    /// `DEM-`: decimal subtract A from memory.
    DemMinus = 0xE,
    /// `DEM+`: decimal add A to memory.
    DemPlus = 0xF,
}

/// Service-call code assignments, in code order.
pub const SERVICE_CALL_TABLE: &[(u8, ServiceCall)] = &[
    (0x0, ServiceCall::Rsto),
    (0x1, ServiceCall::Setr),
    (0x2, ServiceCall::Rstr),
    (0x3, ServiceCall::Undefined),
    (0x4, ServiceCall::Cmpl),
    (0x5, ServiceCall::Chng),
    (0x6, ServiceCall::Shft),
    (0x7, ServiceCall::Ends),
    (0x8, ServiceCall::Errs),
    (0x9, ServiceCall::Shts),
    (0xA, ServiceCall::Lons),
    (0xB, ServiceCall::Sund),
    (0xC, ServiceCall::Timr),
    (0xD, ServiceCall::Dspr),
    (0xE, ServiceCall::DemMinus),
    (0xF, ServiceCall::DemPlus),
];

impl ServiceCall {
    /// Every routine, in code order.
    pub const ALL: [Self; 16] = [
        Self::Rsto,
        Self::Setr,
        Self::Rstr,
        Self::Undefined,
        Self::Cmpl,
        Self::Chng,
        Self::Shft,
        Self::Ends,
        Self::Errs,
        Self::Shts,
        Self::Lons,
        Self::Sund,
        Self::Timr,
        Self::Dspr,
        Self::DemMinus,
        Self::DemPlus,
    ];

    /// Returns the 4-bit operand value.
    #[must_use]
    pub const fn code(self) -> Nibble {
        Nibble::truncate(self as u8)
    }

    /// Returns the routine selected by `code`.
    #[must_use]
    pub const fn from_code(code: Nibble) -> Self {
        Self::ALL[code.get() as usize]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{ServiceCall, SERVICE_CALL_TABLE};
    use crate::Nibble;

    #[test]
    fn table_assigns_every_code_once() {
        let codes: HashSet<_> = SERVICE_CALL_TABLE.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes.len(), 16);
    }

    #[test]
    fn codes_match_table() {
        for (code, call) in SERVICE_CALL_TABLE {
            assert_eq!(call.code().get(), *code);
            assert_eq!(ServiceCall::from_code(Nibble::truncate(*code)), *call);
        }
    }

    #[test]
    fn external_port_keeps_code_three() {
        assert_eq!(ServiceCall::Undefined.code().get(), 0x3);
    }
}
