//! End-to-end record round-trips through the codec.
//!
//! Drives the primitives in the fixed call sequence a save/profile consumer
//! would use: a magic prefix, scalar fields, a best-time double, a bounded
//! name field, and a run of packed flags.

use std::fs::File;
use std::io::{BufReader, Cursor, Write};

use nether_rec::{
    BitCursor, copy_bounded, file_exists, read_f64, read_line, read_u16, read_u32, verify_prefix,
    write_f64, write_raw, write_u16, write_u32,
};

const MAGIC: &[u8] = b"NREC";

#[test]
fn profile_record_roundtrip_in_memory() {
    let flags = [
        true, true, false, true, false, false, false, true, true, false, true, false,
    ];

    let mut stream = Cursor::new(Vec::new());
    write_raw("NREC", &mut stream).unwrap();
    write_u16(0x0104, &mut stream).unwrap();
    write_u32(9000, &mut stream).unwrap(); // best time, frames
    write_f64(123.456, &mut stream).unwrap();
    write_raw(&copy_bounded(32, "Quote"), &mut stream).unwrap();
    write_raw("\n", &mut stream).unwrap();

    let mut bits = BitCursor::new();
    for &flag in &flags {
        bits.write_bit(flag, &mut stream).unwrap();
    }
    bits.flush(&mut stream).unwrap();

    stream.set_position(0);
    assert!(verify_prefix(&mut stream, MAGIC).unwrap());
    assert_eq!(read_u16(&mut stream).unwrap(), 0x0104);
    assert_eq!(read_u32(&mut stream).unwrap(), 9000);
    assert_eq!(read_f64(&mut stream).unwrap(), 123.456);
    assert_eq!(read_line(&mut stream, 32).unwrap(), "Quote");

    bits.reset();
    for &expected in &flags {
        assert_eq!(bits.read_bit(&mut stream).unwrap(), expected);
    }
}

#[test]
fn wrong_magic_leaves_record_body_readable() {
    let mut stream = Cursor::new(Vec::new());
    write_raw("XXXX", &mut stream).unwrap();
    write_u32(0xCAFE_F00D, &mut stream).unwrap();

    stream.set_position(0);
    assert!(!verify_prefix(&mut stream, MAGIC).unwrap());
    // The cursor sits right after the rejected prefix
    assert_eq!(read_u32(&mut stream).unwrap(), 0xCAFE_F00D);
}

#[test]
fn record_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("290.rec");
    assert!(!file_exists(&path));

    let mut file = File::create(&path).unwrap();
    write_raw("NREC", &mut file).unwrap();
    write_u32(0x0102_0304, &mut file).unwrap();
    let mut bits = BitCursor::new();
    for i in 0..10 {
        bits.write_bit(i % 3 == 0, &mut file).unwrap();
    }
    bits.flush(&mut file).unwrap();
    file.flush().unwrap();
    drop(file);

    assert!(file_exists(&path));

    let mut reader = BufReader::new(File::open(&path).unwrap());
    assert!(verify_prefix(&mut reader, MAGIC).unwrap());
    assert_eq!(read_u32(&mut reader).unwrap(), 0x0102_0304);
    bits.reset();
    for i in 0..10 {
        assert_eq!(bits.read_bit(&mut reader).unwrap(), i % 3 == 0);
    }
}

#[test]
fn scalar_wire_bytes_are_canonical_in_context() {
    let mut stream = Cursor::new(Vec::new());
    write_u16(0xAABB, &mut stream).unwrap();
    write_u32(0x0102_0304, &mut stream).unwrap();
    assert_eq!(
        stream.get_ref().as_slice(),
        &[0xBB, 0xAA, 0x04, 0x03, 0x02, 0x01]
    );
}

#[test]
fn double_field_occupies_twelve_bytes() {
    let mut stream = Cursor::new(Vec::new());
    write_f64(0.5, &mut stream).unwrap();
    write_u16(7, &mut stream).unwrap();

    stream.set_position(0);
    assert_eq!(read_f64(&mut stream).unwrap(), 0.5);
    assert_eq!(read_u16(&mut stream).unwrap(), 7);
    assert_eq!(stream.position(), 14);
}
