//! RV64IMA instruction listing tool.
//!
//! This binary decodes instruction streams and prints one line per instruction. It accepts:
//! 1. **Raw files:** Flat little-endian instruction bytes.
//! 2. **ELF files:** One section (default `.text`), listed at its load address.
//! 3. **Hex words:** With `--format hex`, each argument is a 32-bit word.

mod config;
mod error;
mod input;
mod listing;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, InputFormat};
use crate::error::CliError;
use crate::input::Image;
use crate::listing::Summary;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "RVDIS_LOG";

/// Filter used when `RVDIS_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "rvdis",
    author,
    version,
    about = "List RV64IMA instructions from raw, ELF or hex input",
    long_about = "Decode 32-bit RV64IMA instruction words and print one line per instruction.\n\nExamples:\n  rvdis program.bin --base 0x80000000\n  rvdis kernel.elf --section .text.init\n  rvdis --format hex 0x00510093 0000100f"
)]
struct Cli {
    /// JSON configuration file; flags override its values.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// How to interpret INPUT.
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// ELF section to list.
    #[arg(long)]
    section: Option<String>,

    /// Address of the first byte (`0x` for hex).
    #[arg(long, value_parser = input::parse_address)]
    base: Option<u64>,

    /// Omit the raw bytes column.
    #[arg(long)]
    no_bytes: bool,

    /// Maximum length of the instruction text.
    #[arg(long, value_name = "N")]
    capacity: Option<usize>,

    /// Log loading and listing details to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Files to list, or hex words with `--format hex`.
    #[arg(required = true)]
    inputs: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr subscriber; `--verbose` wins over `RVDIS_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Merges the configuration file with command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "reading configuration");
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    if let Some(format) = cli.format {
        config.input.format = format;
    }
    if let Some(section) = &cli.section {
        config.input.section.clone_from(section);
    }
    if let Some(base) = cli.base {
        config.listing.base_address = base;
    }
    if cli.no_bytes {
        config.listing.show_bytes = false;
    }
    if let Some(capacity) = cli.capacity {
        config.listing.line_capacity = capacity;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = resolve_config(cli)?;
    debug!(?config, "resolved configuration");

    let images = if config.input.format == InputFormat::Hex {
        vec![input::parse_hex_words(cli.inputs.as_slice())?]
    } else {
        cli.inputs
            .iter()
            .map(|p| input::load_file(Path::new(p), config.input.format, &config.input.section))
            .collect::<Result<Vec<_>, _>>()?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut total = Summary::default();
    let multiple = images.len() > 1;

    for image in &images {
        total.merge(list_image(&mut out, image, &config, cli.base.is_some(), multiple)?);
    }
    out.flush()?;

    info!(
        decoded = total.decoded,
        undefined = total.undefined,
        partial = total.partial,
        "listing complete"
    );
    Ok(())
}

/// Lists one image. The image's own address is used unless `--base` was given.
fn list_image<W: Write>(
    out: &mut W,
    image: &Image,
    config: &Config,
    base_forced: bool,
    with_header: bool,
) -> Result<Summary, CliError> {
    let base = match image.address {
        Some(addr) if !base_forced => addr,
        _ => config.listing.base_address,
    };

    if with_header {
        writeln!(out, "{}:", image.name)?;
    }
    let summary = listing::write_listing(out, &image.bytes, base, &config.listing)?;
    debug!(
        image = %image.name,
        base = %format!("{base:#x}"),
        decoded = summary.decoded,
        undefined = summary.undefined,
        partial = summary.partial,
        "image listed"
    );
    Ok(summary)
}
