//! CLI argument parsing for the fixture emitter.
//!
//! The CLI is intentionally thin: every subcommand maps onto one catalog
//! operation, and a bare invocation emits the default sample so the tool can
//! be piped straight into an editor buffer.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
///
/// The subcommand is optional: `fpack` with no arguments behaves exactly like
/// `fpack emit` with the default sample.
#[derive(Parser, Debug)]
#[command(
    name = "fpack",
    version,
    about = "Deterministic sample content for manual editor testing",
    after_help = "Commands:\n  emit [--sample <ID>] [--out <PATH>]  Emit a sample (default: indent-walkthrough)\n  list [--json]                        List the sample catalog\n  data [--out <PATH>]                  Emit the canonical dataset as JSON\n  check [--sample <ID>] [--json]       Verify samples against recorded transcripts\n\nExamples:\n  fpack\n  fpack emit --sample syntax-tour\n  fpack emit --out /tmp/indent_sample.txt\n  fpack list --json\n  fpack check"
)]
pub struct RootArgs {
    /// Emit a verbose transcript of what the tool is doing (stderr only)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level catalog operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    Emit(EmitArgs),
    List(ListArgs),
    Data(DataArgs),
    Check(CheckArgs),
}

/// Emit command inputs.
#[derive(Parser, Debug)]
#[command(about = "Emit a sample to stdout or a file")]
pub struct EmitArgs {
    /// Sample to emit (see `fpack list`)
    #[arg(long, value_name = "ID")]
    pub sample: Option<String>,

    /// Write the sample to this path instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// List command inputs.
#[derive(Parser, Debug)]
#[command(about = "List the sample catalog")]
pub struct ListArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Data command inputs.
#[derive(Parser, Debug)]
#[command(about = "Emit the canonical nested dataset as pretty JSON")]
pub struct DataArgs {
    /// Write the JSON to this path instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Check command inputs.
#[derive(Parser, Debug)]
#[command(about = "Re-render samples and compare against recorded transcripts")]
pub struct CheckArgs {
    /// Check a single sample instead of the whole catalog
    #[arg(long, value_name = "ID")]
    pub sample: Option<String>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
