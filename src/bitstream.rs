//! Packed boolean bitstream
//!
//! Stores one bit per logical flag inside a byte stream. Bits fill each byte
//! from the lowest bit up, so 8 flags pack into 1 byte; writers must call
//! [`BitCursor::flush`] at the end of a pass or up to 7 trailing bits are
//! lost.
//!
//! The legacy engine kept the buffer and both masks as process-wide globals,
//! which corrupted output whenever two streams packed booleans at once. Here
//! the state is an explicit [`BitCursor`] owned by the caller; distinct
//! cursors on distinct streams are fully independent. Within one cursor the
//! read and write sides still share the buffer byte, so a pass in one mode
//! must be drained (and the cursor [`reset`](BitCursor::reset)) before
//! switching modes.

use std::io::{Read, Write};

use crate::error::{Result, eof_or_io};

/// Mask value meaning the cursor is exhausted: the next read must refill the
/// buffer from the stream, the next write must flush it first.
const MASK_EXHAUSTED: u16 = 256;

/// Bit-level cursor over a caller-owned byte stream.
///
/// Invariant: each mask is a power of two in `[1, 128]`, or
/// [`MASK_EXHAUSTED`].
#[derive(Debug, Clone)]
pub struct BitCursor {
    byte: u8,
    read_mask: u16,
    write_mask: u16,
}

impl Default for BitCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl BitCursor {
    /// A fresh cursor, ready to start a read or write pass.
    pub fn new() -> Self {
        Self {
            byte: 0,
            read_mask: MASK_EXHAUSTED,
            write_mask: 1,
        }
    }

    /// Reset both cursors and clear the buffer.
    ///
    /// Call before starting any new boolean read or write pass.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read one bit, fetching the next byte from the stream every 8 calls.
    pub fn read_bit<R: Read>(&mut self, stream: &mut R) -> Result<bool> {
        if self.read_mask == MASK_EXHAUSTED {
            let mut buf = [0u8; 1];
            stream.read_exact(&mut buf).map_err(eof_or_io)?;
            self.byte = buf[0];
            self.read_mask = 1;
        }

        let bit = (u16::from(self.byte) & self.read_mask) != 0;
        self.read_mask <<= 1;
        Ok(bit)
    }

    /// Write one bit, emitting the accumulated byte every 8 calls.
    pub fn write_bit<W: Write>(&mut self, bit: bool, stream: &mut W) -> Result<()> {
        if self.write_mask == MASK_EXHAUSTED {
            stream.write_all(&[self.byte])?;
            self.write_mask = 1;
            self.byte = 0;
        }

        if bit {
            self.byte |= self.write_mask as u8;
        }
        self.write_mask <<= 1;
        Ok(())
    }

    /// Force-emit the accumulated byte, even if fewer than 8 bits were
    /// written, and restart the write cursor. Unwritten high bits are clear.
    pub fn flush<W: Write>(&mut self, stream: &mut W) -> Result<()> {
        stream.write_all(&[self.byte])?;
        self.write_mask = 1;
        self.byte = 0;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
