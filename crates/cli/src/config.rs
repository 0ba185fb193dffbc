//! Configuration for the listing tool.
//!
//! Settings are read from an optional JSON file and then overridden by
//! command-line flags. Every field has a default, so `Config::default()` is a
//! complete configuration and a file only needs the keys it changes:
//!
//! ```json
//! {
//!     "listing": { "base_address": 4096, "show_bytes": false, "line_capacity": 32 },
//!     "input": { "format": "elf", "section": ".text.init" }
//! }
//! ```

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::CliError;

/// Default configuration constants for the listing tool.
mod defaults {
    /// Address printed for the first byte of raw and hex inputs.
    pub const BASE_ADDRESS: u64 = 0;

    /// Whether the raw bytes column is printed.
    pub const SHOW_BYTES: bool = true;

    /// Capacity handed to the formatter; large enough for any line.
    pub const LINE_CAPACITY: usize = rvdis_core::isa::disasm::MAX_LINE_LEN;

    /// ELF section listed when none is named.
    pub const SECTION: &str = ".text";
}

/// How positional inputs are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// ELF when the file starts with the ELF magic, raw otherwise.
    #[default]
    Auto,
    /// Flat little-endian instruction stream.
    Raw,
    /// ELF object; one section is listed.
    Elf,
    /// Each positional argument is one 32-bit word in hex.
    Hex,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Output layout.
    #[serde(default)]
    pub listing: ListingConfig,
    /// Input interpretation.
    #[serde(default)]
    pub input: InputConfig,
}

/// Output layout of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingConfig {
    /// Address of the first byte. For ELF input this is replaced by the
    /// section address unless set on the command line.
    #[serde(default = "ListingConfig::default_base_address")]
    pub base_address: u64,

    /// Print the raw bytes of each instruction before its text.
    #[serde(default = "ListingConfig::default_show_bytes")]
    pub show_bytes: bool,

    /// Maximum length of the instruction text in bytes.
    #[serde(default = "ListingConfig::default_line_capacity")]
    pub line_capacity: usize,
}

impl ListingConfig {
    fn default_base_address() -> u64 {
        defaults::BASE_ADDRESS
    }

    fn default_show_bytes() -> bool {
        defaults::SHOW_BYTES
    }

    fn default_line_capacity() -> usize {
        defaults::LINE_CAPACITY
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_address: defaults::BASE_ADDRESS,
            show_bytes: defaults::SHOW_BYTES,
            line_capacity: defaults::LINE_CAPACITY,
        }
    }
}

/// Input interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
    /// Input format.
    #[serde(default)]
    pub format: InputFormat,

    /// ELF section to list.
    #[serde(default = "InputConfig::default_section")]
    pub section: String,
}

impl InputConfig {
    fn default_section() -> String {
        defaults::SECTION.to_string()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: InputFormat::Auto,
            section: Self::default_section(),
        }
    }
}

impl Config {
    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`CliError::Read`] if the file cannot be read, [`CliError::Config`] if
    /// it is not a valid configuration.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
