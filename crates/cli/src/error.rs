//! Error types for the listing tool.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a `rvdis` run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input or configuration file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration '{}': {source}", .path.display())]
    Config {
        /// Configuration file.
        path: PathBuf,
        /// Deserialization error, with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The input was treated as ELF but could not be parsed.
    #[error("could not parse ELF '{}': {reason}", .path.display())]
    Elf {
        /// Input file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The requested section does not exist in the ELF file.
    #[error("'{}' has no section named '{section}'", .path.display())]
    MissingSection {
        /// Input file.
        path: PathBuf,
        /// Section name that was looked up.
        section: String,
    },

    /// A positional argument in hex mode is not a 32-bit hex word.
    #[error("invalid hex word '{0}'")]
    HexWord(String),

    /// Writing the listing to stdout failed.
    #[error("could not write listing: {0}")]
    Output(#[from] io::Error),
}
