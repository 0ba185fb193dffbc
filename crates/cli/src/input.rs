//! Input Loading.
//!
//! Turns positional arguments into byte images for the listing walker. It handles:
//! 1. **Raw files:** The whole file is one little-endian instruction stream.
//! 2. **ELF files:** One named section, based at its load address.
//! 3. **Hex words:** Each argument is a 32-bit word, emitted little-endian.

use std::fs;
use std::path::{Path, PathBuf};

use object::{Architecture, Object, ObjectSection};
use tracing::{debug, warn};

use crate::config::InputFormat;
use crate::error::CliError;

/// Leading bytes of every ELF file.
const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// A contiguous run of bytes to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Label printed above the listing.
    pub name: String,
    /// Address of the first byte, if the input carries one.
    pub address: Option<u64>,
    /// Instruction bytes.
    pub bytes: Vec<u8>,
}

/// Loads one file as raw bytes or as an ELF section.
///
/// `Auto` sniffs the ELF magic. `Hex` is not a file format and is treated as
/// `Auto` here; callers route hex arguments to [`parse_hex_words`].
///
/// # Arguments
///
/// * `path` - File to read.
/// * `format` - Requested interpretation.
/// * `section` - ELF section to extract.
///
/// # Errors
///
/// [`CliError::Read`] on I/O failure, [`CliError::Elf`] or
/// [`CliError::MissingSection`] for unusable ELF input.
pub fn load_file(path: &Path, format: InputFormat, section: &str) -> Result<Image, CliError> {
    let data = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_elf = match format {
        InputFormat::Raw => false,
        InputFormat::Elf => true,
        InputFormat::Auto | InputFormat::Hex => data.starts_with(ELF_MAGIC),
    };

    if is_elf {
        elf_section(path, &data, section)
    } else {
        debug!(path = %path.display(), len = data.len(), "loaded raw image");
        Ok(Image {
            name: path.display().to_string(),
            address: None,
            bytes: data,
        })
    }
}

/// Extracts `section` from an ELF file.
fn elf_section(path: &Path, data: &[u8], section: &str) -> Result<Image, CliError> {
    let elf_error = |e: object::Error| CliError::Elf {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let file = object::File::parse(data).map_err(elf_error)?;
    if file.architecture() != Architecture::Riscv64 {
        warn!(
            path = %path.display(),
            architecture = ?file.architecture(),
            "not an RV64 object; decoding anyway"
        );
    }
    if !file.is_little_endian() {
        warn!(
            path = %path.display(),
            "big-endian object; instruction words are read little-endian"
        );
    }

    let sec = file
        .section_by_name(section)
        .ok_or_else(|| CliError::MissingSection {
            path: PathBuf::from(path),
            section: section.to_string(),
        })?;
    let bytes = sec.data().map_err(elf_error)?.to_vec();
    let address = sec.address();

    debug!(
        path = %path.display(),
        section,
        address = %format!("{address:#x}"),
        len = bytes.len(),
        "loaded ELF section"
    );

    Ok(Image {
        name: format!("{}:{section}", path.display()),
        address: Some(address),
        bytes,
    })
}

/// Encodes hex word arguments as one little-endian byte stream.
///
/// Accepts an optional `0x` prefix and `_` digit separators.
///
/// # Errors
///
/// [`CliError::HexWord`] for the first argument that is not a 32-bit hex value.
pub fn parse_hex_words<S: AsRef<str>>(args: &[S]) -> Result<Image, CliError> {
    let mut bytes = Vec::with_capacity(args.len() * 4);
    for arg in args {
        let arg = arg.as_ref();
        let word = parse_hex_u32(arg).ok_or_else(|| CliError::HexWord(arg.to_string()))?;
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    Ok(Image {
        name: "<words>".to_string(),
        address: None,
        bytes,
    })
}

fn parse_hex_u32(s: &str) -> Option<u32> {
    let digits: String = strip_hex_prefix(s).chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Parses a `--base` address: hex with `0x` prefix, decimal otherwise.
///
/// # Errors
///
/// Returns the parser message for clap to report.
pub fn parse_address(s: &str) -> Result<u64, String> {
    let stripped = strip_hex_prefix(s);
    if stripped.len() == s.len() {
        s.parse::<u64>().map_err(|e| e.to_string())
    } else {
        u64::from_str_radix(stripped, 16).map_err(|e| e.to_string())
    }
}
