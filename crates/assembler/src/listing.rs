//! Hex, listing, and dump rendering of an assembly.

use std::fmt::Write as _;

use isa_core::{Nibble, OperandKind};

use crate::assembler::Assembly;
use crate::encoder::{TraceOperand, TraceRecord};
use crate::mnemonic::{mnemonic_name, service_call_name};
use crate::symbols::LabelTable;

/// Widest instruction encoding, in code units.
const UNITS_COLUMN: usize = OperandKind::JumpTarget.unit_count();

/// Renders code units as one hex digit each, the form keyed into the target.
#[must_use]
pub fn format_hex(codes: &[Nibble]) -> String {
    codes.iter().map(ToString::to_string).collect()
}

fn format_operand(operand: &TraceOperand) -> String {
    match operand {
        TraceOperand::None => String::new(),
        TraceOperand::Immediate(value) => value.to_string(),
        TraceOperand::Jump {
            target,
            label: Some(label),
            ..
        } => format!("{label} (@{target})"),
        TraceOperand::Jump {
            target,
            label: None,
            ..
        } => format!("{target:02X}"),
        TraceOperand::Service(call) => service_call_name(*call).to_owned(),
    }
}

/// Renders one instruction in source form, e.g. `TIA 7` or `JUMP top (@0)`.
#[must_use]
pub fn format_instruction(record: &TraceRecord) -> String {
    let operand = format_operand(&record.operand);
    if operand.is_empty() {
        mnemonic_name(record.mnemonic).to_owned()
    } else {
        format!("{} {operand}", mnemonic_name(record.mnemonic))
    }
}

fn format_record(record: &TraceRecord) -> String {
    let units = format_hex(&record.units());
    let text = format_instruction(record);
    format!(
        "{:02X}: {units:<UNITS_COLUMN$} {text:<16} ; token {}",
        record.offset, record.index
    )
}

/// Renders one line per instruction: code offset, units, source form, and
/// token address.
#[must_use]
pub fn format_listing(assembly: &Assembly) -> String {
    assembly
        .trace()
        .iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders labels ordered by address.
#[must_use]
pub fn format_labels(labels: &LabelTable) -> String {
    labels
        .sorted()
        .into_iter()
        .map(|(name, address)| format!("{name}: {address}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders codes, labels, and the instruction trace together.
#[must_use]
pub fn format_dump(assembly: &Assembly) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "code: {}", format_hex(assembly.codes()));
    let _ = writeln!(out, "labels:");
    for line in format_labels(assembly.labels()).lines() {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out, "trace:");
    for line in format_listing(assembly).lines() {
        let _ = writeln!(out, "  {line}");
    }
    out
}
