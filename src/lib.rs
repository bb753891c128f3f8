//! Nether-Rec: legacy save/record codec for Nethercore
//!
//! This crate provides the low-level primitives that Nethercore's legacy
//! save files and asset tables are built from. A record format is nothing
//! but a fixed, caller-defined sequence of these primitives against a
//! sequential byte stream:
//!
//! - **Scalar codec**: 16/32-bit integers and 64-bit floats in canonical
//!   little-endian order, bit-exact on every host platform
//! - **Bitstream packer**: 8 boolean flags densely packed per byte, with
//!   independent read and write bit-cursors
//! - **Bounded text I/O**: non-terminated string fields, line reads with
//!   CR/LF trimming, prefix verification, lossy fixed-capacity copies
//! - **Deterministic LCG**: a reproducible pseudo-random generator for
//!   gameplay values that must replay identically from a seed
//!
//! # Key Features
//!
//! - **Pure Rust**: No platform byte-order branching, no pointer aliasing
//! - **Caller-owned streams**: works against any `Read`/`Write`/`BufRead`;
//!   the codec never opens, closes, or seeks a stream
//! - **No hidden state**: bit-cursors and generator seeds are explicit
//!   values constructed per use-site, safe across distinct streams
//!
//! # Usage
//!
//! ```ignore
//! use std::io::Cursor;
//! use nether_rec::{scalar, text, BitCursor};
//!
//! let mut out = Cursor::new(Vec::new());
//! text::write_raw("NREC", &mut out)?;
//! scalar::write_u32(best_time, &mut out)?;
//!
//! let mut bits = BitCursor::new();
//! for &flag in &weapon_flags {
//!     bits.write_bit(flag, &mut out)?;
//! }
//! bits.flush(&mut out)?;
//! ```
//!
//! # Format Reference
//!
//! The wire layout matches the legacy engine's record files byte for byte:
//! scalars are least-significant-byte first, doubles carry a 4-byte reserved
//! field before their 8 value bytes, and packed booleans fill each byte from
//! the lowest bit up.

mod bitstream;
mod error;
mod rng;
mod scalar;
mod text;

pub use bitstream::BitCursor;
pub use error::{RecError, Result};
pub use rng::{Lcg, RandomOutcome};
pub use scalar::{read_f64, read_u16, read_u32, write_f64, write_u16, write_u32};
pub use text::{copy_bounded, file_exists, read_line, verify_prefix, write_raw};

// =============================================================================
// Constants
// =============================================================================

/// Reserved bytes preceding every serialized double.
///
/// The legacy format stores 12 bytes per double: 4 reserved bytes (skipped on
/// read, zeroed on write) followed by the 8-byte IEEE-754 representation.
/// Their meaning is undocumented; they are preserved for compatibility.
pub const FLOAT_PAD_BYTES: usize = 4;

/// Multiplier of the LCG recurrence.
pub const LCG_MUL: u32 = 0x343FD;

/// Increment of the LCG recurrence.
pub const LCG_ADD: u32 = 0x269EC3;

/// Largest range ([`Lcg::random`] `max - min`) the generator serves.
///
/// A draw over a range at or above this limit returns the sentinel `0`,
/// matching the legacy generator's behavior.
pub const RAND_RANGE_MAX: i32 = 0x7FFF_FFFF;

// =============================================================================
// Tests
// =============================================================================
