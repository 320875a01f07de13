use crate::nibble::Nibble;

/// The sixteen instructions. The discriminant is the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum Mnemonic {
    /// `KA`: read the keypad into A.
    Ka = 0x0,
    /// `AO`: write A to the numeric display.
    Ao = 0x1,
    /// `CH`: exchange A with B and Y with Z.
    Ch = 0x2,
    /// `CY`: exchange A with Y.
    Cy = 0x3,
    /// `AM`: store A to memory at Y.
    Am = 0x4,
    /// `MA`: load A from memory at Y.
    Ma = 0x5,
    /// `M+`: add memory at Y to A.
    MPlus = 0x6,
    /// `M-`: subtract A from memory at Y.
    MMinus = 0x7,
    /// `TIA`: load immediate into A.
    Tia = 0x8,
    /// `AIA`: add immediate to A.
    Aia = 0x9,
    /// `TIY`: load immediate into Y.
    Tiy = 0xA,
    /// `AIY`: add immediate to Y.
    Aiy = 0xB,
    /// `CIA`: compare A with immediate.
    Cia = 0xC,
    /// `CIY`: compare Y with immediate.
    Ciy = 0xD,
    /// `CAL`: invoke a service routine.
    Cal = 0xE,
    /// `JUMP`: jump if the flag is set.
    Jump = 0xF,
}

/// What follows an opcode in the code stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum OperandKind {
    /// Opcode only.
    None,
    /// One 4-bit immediate unit.
    Nibble,
    /// Two units holding a base-15 split jump address.
    JumpTarget,
    /// One unit selecting a [`crate::ServiceCall`].
    ServiceCall,
}

impl OperandKind {
    /// Number of code units an instruction with this operand occupies,
    /// opcode included.
    #[must_use]
    pub const fn unit_count(self) -> usize {
        match self {
            Self::None => 1,
            Self::Nibble | Self::ServiceCall => 2,
            Self::JumpTarget => 3,
        }
    }
}

/// Opcode assignments, in opcode order.
pub const OPCODE_TABLE: &[(u8, Mnemonic)] = &[
    (0x0, Mnemonic::Ka),
    (0x1, Mnemonic::Ao),
    (0x2, Mnemonic::Ch),
    (0x3, Mnemonic::Cy),
    (0x4, Mnemonic::Am),
    (0x5, Mnemonic::Ma),
    (0x6, Mnemonic::MPlus),
    (0x7, Mnemonic::MMinus),
    (0x8, Mnemonic::Tia),
    (0x9, Mnemonic::Aia),
    (0xA, Mnemonic::Tiy),
    (0xB, Mnemonic::Aiy),
    (0xC, Mnemonic::Cia),
    (0xD, Mnemonic::Ciy),
    (0xE, Mnemonic::Cal),
    (0xF, Mnemonic::Jump),
];

impl Mnemonic {
    /// Every instruction, in opcode order.
    pub const ALL: [Self; 16] = [
        Self::Ka,
        Self::Ao,
        Self::Ch,
        Self::Cy,
        Self::Am,
        Self::Ma,
        Self::MPlus,
        Self::MMinus,
        Self::Tia,
        Self::Aia,
        Self::Tiy,
        Self::Aiy,
        Self::Cia,
        Self::Ciy,
        Self::Cal,
        Self::Jump,
    ];

    /// Returns the 4-bit opcode.
    #[must_use]
    pub const fn opcode(self) -> Nibble {
        Nibble::truncate(self as u8)
    }

    /// Returns the instruction assigned to `opcode`.
    ///
    /// Every opcode is assigned, so this never fails.
    #[must_use]
    pub const fn from_opcode(opcode: Nibble) -> Self {
        Self::ALL[opcode.get() as usize]
    }

    /// Returns the operand the instruction expects after its opcode.
    #[must_use]
    pub const fn operand_kind(self) -> OperandKind {
        match self {
            Self::Ka
            | Self::Ao
            | Self::Ch
            | Self::Cy
            | Self::Am
            | Self::Ma
            | Self::MPlus
            | Self::MMinus => OperandKind::None,
            Self::Tia | Self::Aia | Self::Tiy | Self::Aiy | Self::Cia | Self::Ciy => {
                OperandKind::Nibble
            }
            Self::Jump => OperandKind::JumpTarget,
            Self::Cal => OperandKind::ServiceCall,
        }
    }
}
