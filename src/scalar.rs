//! Canonical little-endian scalar I/O
//!
//! Every read consumes exactly N bytes and every write emits exactly N bytes,
//! least-significant byte first, regardless of host byte order. The legacy
//! engine selected between a raw-`fread` fast path and a byte-shuffling slow
//! path with a platform macro; here there is a single implementation built on
//! `from_le_bytes`/`to_le_bytes`, which is bit-identical to both.

use std::io::{Read, Write};

use crate::FLOAT_PAD_BYTES;
use crate::error::{Result, eof_or_io};

/// Read a 16-bit integer, low byte first.
pub fn read_u16<R: Read>(stream: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    stream.read_exact(&mut buf).map_err(eof_or_io)?;
    Ok(u16::from_le_bytes(buf))
}

/// Read a 32-bit integer, low byte first.
pub fn read_u32<R: Read>(stream: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    stream.read_exact(&mut buf).map_err(eof_or_io)?;
    Ok(u32::from_le_bytes(buf))
}

/// Write a 16-bit integer, low byte first.
pub fn write_u16<W: Write>(value: u16, stream: &mut W) -> Result<()> {
    stream.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Write a 32-bit integer, low byte first.
pub fn write_u32<W: Write>(value: u32, stream: &mut W) -> Result<()> {
    stream.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Read a serialized double: [`FLOAT_PAD_BYTES`] reserved bytes (discarded),
/// then 8 bytes of IEEE-754, low byte first. Consumes 12 bytes total.
pub fn read_f64<R: Read>(stream: &mut R) -> Result<f64> {
    let mut pad = [0u8; FLOAT_PAD_BYTES];
    stream.read_exact(&mut pad).map_err(eof_or_io)?;

    let mut buf = [0u8; 8];
    stream.read_exact(&mut buf).map_err(eof_or_io)?;
    Ok(f64::from_le_bytes(buf))
}

/// Write a serialized double: [`FLOAT_PAD_BYTES`] zero bytes, then the 8
/// bytes of the IEEE-754 representation, low byte first. Emits 12 bytes.
pub fn write_f64<W: Write>(value: f64, stream: &mut W) -> Result<()> {
    stream.write_all(&[0u8; FLOAT_PAD_BYTES])?;
    stream.write_all(&value.to_le_bytes())?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
