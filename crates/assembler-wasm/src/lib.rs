use assembler::encoder::{TraceOperand, TraceRecord};
use assembler::listing::{format_dump, format_instruction};
use assembler::{AssembleError, Assembly};
use isa_core::{Mnemonic, Nibble, ServiceCall};
use serde::Serialize;
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

/// A label and the token address it is bound to.
#[derive(Debug, Serialize)]
pub struct WasmLabel {
    pub name: String,
    pub address: usize,
}

/// JS-compatible view of one trace record.
#[derive(Debug, Serialize)]
pub struct WasmTraceRecord {
    pub index: usize,
    pub offset: usize,
    pub mnemonic: Mnemonic,
    pub units: Vec<Nibble>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceCall>,
}

impl From<&TraceRecord> for WasmTraceRecord {
    fn from(record: &TraceRecord) -> Self {
        let (target, service) = match &record.operand {
            TraceOperand::Jump { target, .. } => (Some(*target), None),
            TraceOperand::Service(call) => (None, Some(*call)),
            TraceOperand::None | TraceOperand::Immediate(_) => (None, None),
        };
        Self {
            index: record.index,
            offset: record.offset,
            mnemonic: record.mnemonic,
            units: record.units(),
            text: format_instruction(record),
            target,
            service,
        }
    }
}

/// JS-compatible version of [`Assembly`].
#[derive(Debug, Serialize)]
pub struct WasmAssembly {
    pub codes: Vec<Nibble>,
    pub labels: Vec<WasmLabel>,
    pub trace: Vec<WasmTraceRecord>,
}

impl From<&Assembly> for WasmAssembly {
    fn from(assembly: &Assembly) -> Self {
        Self {
            codes: assembly.codes().to_vec(),
            labels: assembly
                .labels()
                .sorted()
                .into_iter()
                .map(|(name, address)| WasmLabel {
                    name: name.to_owned(),
                    address,
                })
                .collect(),
            trace: assembly.trace().iter().map(WasmTraceRecord::from).collect(),
        }
    }
}

/// Assembles `source` into the report handed to JS.
///
/// # Errors
///
/// Returns the assembler's error message.
pub fn assemble_report(source: &str) -> Result<WasmAssembly, String> {
    assembler::assemble(source)
        .map(|assembly| WasmAssembly::from(&assembly))
        .map_err(|e: AssembleError| e.to_string())
}

fn dump_text(source: &str) -> String {
    match assembler::assemble(source) {
        Ok(assembly) => format_dump(&assembly),
        Err(e) => format!("error: {e}\n"),
    }
}

/// Assembles `source` and returns `{ codes, labels, trace }`.
///
/// # Errors
///
/// Rejects with the error message as a JS string.
#[wasm_bindgen]
pub fn assemble(source: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let report = assemble_report(source).map_err(|e| JsValue::from_str(&e))?;
    serde_wasm_bindgen::to_value(&report).map_err(JsValue::from)
}

/// Assembles `source` and returns only the code units.
///
/// # Errors
///
/// Rejects with the error message as a JS string.
#[wasm_bindgen]
pub fn assemble_codes(source: &str) -> Result<js_sys::Uint8Array, JsValue> {
    console_error_panic_hook::set_once();
    let assembly = assembler::assemble(source).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(js_sys::Uint8Array::from(assembly.code_values().as_slice()))
}

/// Returns the dump text for `source` and logs it to the browser console.
#[wasm_bindgen]
#[must_use]
pub fn dump(source: &str) -> String {
    console_error_panic_hook::set_once();
    let text = dump_text(source);
    console_log!("{text}");
    text
}
