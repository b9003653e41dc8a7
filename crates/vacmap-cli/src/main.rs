/// vacmap command-line tool — inspect, validate and normalize raw map
/// buffers captured from a robot vacuum.
///
/// # Command overview
///
/// ```text
/// vacmap <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print the header and every block of a map buffer
///   validate   Check that a map buffer decodes
///   normalize  Write the presentation record as JSON
///   help       Print help information
///
/// Global options:
///   -v, --verbose              Log decoder diagnostics to stderr
///       --max-inflated <BYTES> Refuse gzip envelopes larger than this
///   -h, --help                 Print help
///   -V, --version              Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                  |
/// |------|------------------------------------------|
/// | 0    | Success (a truncated map still succeeds) |
/// | 1    | Error (I/O failure, undecodable buffer)  |
///
/// Logs and errors go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vacmap_decoder::DecoderConfig;
use vacmap_decoder::config::RECOMMENDED_MAX_DECOMPRESSED_SIZE;

mod cmd_inspect;
mod cmd_normalize;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "vacmap", version, about = "Robot vacuum map decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder diagnostics (short fields, skipped blocks) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Largest inflated size accepted for gzip-wrapped buffers, in bytes.
    #[arg(long, global = true, default_value_t = RECOMMENDED_MAX_DECOMPRESSED_SIZE)]
    max_inflated: usize,
}

impl Cli {
    fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig::with_limit(self.max_inflated)
    }
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print the header and a one-line summary of each block.
    Inspect(InspectArgs),
    /// Check that a map buffer decodes.
    Validate(ValidateArgs),
    /// Decode and normalize a map buffer, writing JSON.
    Normalize(NormalizeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `vacmap inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the raw map buffer (plain or gzip-wrapped).
    pub file: PathBuf,

    /// Show a hex dump of each block payload (16 bytes per line).
    #[arg(long)]
    pub show_hex: bool,
}

/// Arguments for `vacmap validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the raw map buffer.
    pub file: PathBuf,
}

/// Arguments for `vacmap normalize`.
///
/// ```text
/// ┌───────────────┬──────────────────────────────────────────────┐
/// │ Flag          │ Effect                                       │
/// ├───────────────┼──────────────────────────────────────────────┤
/// │ -o / --output │ write JSON to this file instead of stdout    │
/// │ --compact     │ single-line JSON instead of pretty-printed   │
/// │ --full        │ emit the whole decoded map, not the record   │
/// └───────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct NormalizeArgs {
    /// Path to the raw map buffer.
    pub file: PathBuf,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON.
    #[arg(long)]
    pub compact: bool,

    /// Emit every decoded field (paths, zones, obstacles) instead of the
    /// presentation record.
    #[arg(long)]
    pub full: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.decoder_config();
    let result = match &cli.command {
        Commands::Inspect(args) => cmd_inspect::run(args, &config),
        Commands::Validate(args) => cmd_validate::run(args, &config),
        Commands::Normalize(args) => cmd_normalize::run(args, &config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
