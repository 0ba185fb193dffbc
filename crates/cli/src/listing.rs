//! Listing walker.
//!
//! Steps through a byte image one instruction at a time and writes one line
//! per step: address, optional raw bytes, then the formatted text or a
//! `<undefined>` / `<partial>` marker.

use std::io::{self, Write};

use rvdis_core::{DecodeError, decode, format, instruction_length};

use crate::config::ListingConfig;

/// Marker for bytes that do not decode.
const UNDEFINED_MARKER: &str = "<undefined>";

/// Marker for trailing bytes too short to hold an instruction.
const PARTIAL_MARKER: &str = "<partial>";

/// Width of the bytes column: four `xx` pairs and three spaces.
const BYTES_COLUMN_WIDTH: usize = 11;

/// Step taken over an undefined form whose length cannot be read.
const DEFAULT_STEP: usize = 4;

/// Outcome counts for one listing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Instructions decoded and printed.
    pub decoded: usize,
    /// Steps that did not decode.
    pub undefined: usize,
    /// Trailing partial instructions (0 or 1).
    pub partial: usize,
}

impl Summary {
    /// Adds another listing's counts to this one.
    pub const fn merge(&mut self, other: Self) {
        self.decoded += other.decoded;
        self.undefined += other.undefined;
        self.partial += other.partial;
    }
}

/// Writes the listing of `bytes` to `out`, starting at address `base`.
///
/// # Errors
///
/// Only I/O errors from `out`; decode diagnostics are part of the listing.
pub fn write_listing<W: Write>(
    out: &mut W,
    bytes: &[u8],
    base: u64,
    opts: &ListingConfig,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut offset = 0;

    while offset < bytes.len() {
        let rest = &bytes[offset..];
        let addr = base.wrapping_add(offset as u64);

        let (text, step) = match decode(rest) {
            Ok((inst, len)) => {
                summary.decoded += 1;
                (format(&inst, opts.line_capacity), len)
            }
            Err(DecodeError::Undefined) => {
                summary.undefined += 1;
                let len = instruction_length(rest).unwrap_or(DEFAULT_STEP);
                (UNDEFINED_MARKER.to_string(), len.min(rest.len()))
            }
            Err(DecodeError::Partial) => {
                summary.partial += 1;
                (PARTIAL_MARKER.to_string(), rest.len())
            }
        };

        write_line(out, addr, &rest[..step], &text, opts.show_bytes)?;
        offset += step;
    }

    Ok(summary)
}

fn write_line<W: Write>(
    out: &mut W,
    addr: u64,
    raw: &[u8],
    text: &str,
    show_bytes: bool,
) -> io::Result<()> {
    write!(out, "{addr:08x}: ")?;
    if show_bytes {
        let hex: Vec<String> = raw.iter().map(|b| format!("{b:02x}")).collect();
        write!(out, "{:<width$}  ", hex.join(" "), width = BYTES_COLUMN_WIDTH)?;
    }
    writeln!(out, "{text}")
}
