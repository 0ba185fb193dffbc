//! Bounded Text Buffer.
//!
//! This module provides `BoundedWriter`, a `fmt::Write` sink over a caller-owned
//! byte slice. It tracks the remaining capacity and silently discards whatever
//! does not fit, so formatting into it can truncate but never overflow.

use std::fmt;
use std::str;

/// A `fmt::Write` implementation that writes into a fixed byte slice.
///
/// Writes past the end of the slice are dropped rather than reported, leaving
/// a valid, truncated prefix of the full output. A multi-byte character that
/// does not fit entirely is dropped as a whole.
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    /// Creates a writer over `buf`; the slice length is the capacity.
    pub const fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            truncated: false,
        }
    }

    /// Total capacity in bytes.
    pub const fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes written so far.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been written.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes still available before the writer starts dropping output.
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Returns `true` once any output has been dropped.
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        // Only whole UTF-8 characters are ever copied in.
        str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        let mut take = s.len().min(self.remaining());
        if take < s.len() {
            self.truncated = true;
            while !s.is_char_boundary(take) {
                take -= 1;
            }
        }

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}
