//! CLI entry point for the Ya4ms assembler binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use assembler::listing::{format_hex, format_labels, format_listing};
use assembler::{assemble, Assembly};
use clap::{Parser, Subcommand, ValueEnum};
use isa_core as _;
use thiserror as _;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
#[cfg(test)]
use tempfile as _;

#[derive(Debug, Parser)]
#[command(name = "ya4ms-asm")]
#[command(version)]
#[command(about = "Assembler for the Ya4ms 4-bit microcomputer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assemble source to machine code
    Build {
        /// Input source file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (default: input stem + format extension)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,

        /// Print the listing and label table to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Assemble without writing output
    Check {
        /// Input source file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One hex digit per code unit
    Hex,
    /// JSON object with `codes` and `labels`
    Json,
}

impl OutputFormat {
    const fn extension(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Json => "json",
        }
    }

    fn render(self, assembly: &Assembly) -> String {
        match self {
            Self::Hex => format!("{}\n", format_hex(assembly.codes())),
            Self::Json => {
                let labels: serde_json::Map<String, serde_json::Value> = assembly
                    .labels()
                    .sorted()
                    .into_iter()
                    .map(|(name, address)| (name.to_owned(), address.into()))
                    .collect();
                let body = serde_json::json!({
                    "codes": assembly.code_values(),
                    "labels": labels,
                });
                format!("{body}\n")
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "assembler=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("out");
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{stem}.{}", format.extension()))
}

fn load_and_assemble(input: &Path) -> Result<Assembly, ExitCode> {
    let source = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: failed to read {}: {e}", input.display());
        ExitCode::FAILURE
    })?;

    assemble(&source).map_err(|e| {
        eprintln!("{}", e.format_for_stderr(&input.display().to_string()));
        ExitCode::FAILURE
    })
}

fn run_build(
    input: &Path,
    output: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), ExitCode> {
    let assembly = load_and_assemble(input)?;

    let output_path = output.unwrap_or_else(|| default_output_path(input, format));
    debug!(output = %output_path.display(), ?format, "writing output");

    if let Err(e) = fs::write(&output_path, format.render(&assembly)) {
        eprintln!("error: failed to write output: {e}");
        return Err(ExitCode::FAILURE);
    }

    if verbose {
        eprintln!("{}", format_listing(&assembly));
        if !assembly.labels().is_empty() {
            eprintln!("labels:\n{}", format_labels(assembly.labels()));
        }
    }

    println!(
        "Assembled {} ({} units) -> {}",
        input.display(),
        assembly.codes().len(),
        output_path.display()
    );

    Ok(())
}

fn run_check(input: &Path) -> Result<(), ExitCode> {
    let assembly = load_and_assemble(input)?;
    info!(units = assembly.codes().len(), "check passed");
    println!(
        "{}: ok ({} instructions, {} units)",
        input.display(),
        assembly.trace().len(),
        assembly.codes().len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Command::Build { verbose: true, .. });
    init_tracing(verbose);

    let result = match cli.command {
        Command::Build {
            input,
            output,
            format,
            verbose,
        } => run_build(&input, output, format, verbose),
        Command::Check { input } => run_check(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}
