//! Bounded legacy text fields
//!
//! Fixed-format text the way the legacy record files store it: strings go
//! out with no terminator and no padding, lines come back with every
//! trailing CR/LF stripped (lone-LF and CRLF records read identically), and
//! over-long values truncate silently to their field's capacity.

use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use crate::error::Result;

/// Write the bytes of `text` with no terminator and no padding.
///
/// The empty string is a no-op, so absent fields emit nothing at all.
pub fn write_raw<W: Write>(text: &str, stream: &mut W) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    stream.write_all(text.as_bytes())?;
    Ok(())
}

/// Consume exactly `expected.len()` bytes and report whether they matched.
///
/// The stream position advances past the checked region even on mismatch,
/// so callers can keep reading the record body either way. Hitting end of
/// stream early counts as a mismatch, not an error.
pub fn verify_prefix<R: Read>(stream: &mut R, expected: &[u8]) -> Result<bool> {
    let mut buf = vec![0u8; expected.len()];
    let mut filled = 0;
    while filled < buf.len() {
        match stream.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled == expected.len() && buf == expected)
}

/// Read a line of at most `max_len - 1` bytes, then strip all trailing
/// carriage-return and line-feed bytes.
pub fn read_line<R: BufRead>(stream: &mut R, max_len: usize) -> Result<String> {
    let limit = max_len.saturating_sub(1) as u64;
    let mut raw = Vec::new();
    stream.by_ref().take(limit).read_until(b'\n', &mut raw)?;

    while matches!(raw.last(), Some(b'\r' | b'\n')) {
        raw.pop();
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Copy `src` into a field of `dest_capacity` bytes.
///
/// A value that fits alongside its terminator is kept verbatim. An over-long
/// value keeps exactly `dest_capacity - 2` bytes, matching the legacy
/// fixed-width record copy, which truncated silently rather than reporting
/// an error. Capacities 0 and 1 hold no data at all.
pub fn copy_bounded(dest_capacity: usize, src: &str) -> String {
    let bytes = src.as_bytes();
    if bytes.len() >= dest_capacity {
        let keep = dest_capacity.saturating_sub(2);
        String::from_utf8_lossy(&bytes[..keep]).into_owned()
    } else {
        src.to_string()
    }
}

/// Probe whether `path` can be opened for reading. The handle is dropped
/// immediately; no error is ever raised.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    File::open(path).is_ok()
}

// =============================================================================
// Tests
// =============================================================================
