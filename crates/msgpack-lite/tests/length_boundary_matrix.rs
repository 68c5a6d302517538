//! Header selection at the fixed/8/16/32-bit length thresholds.

use msgpack_lite::{decode, encode, Value};

fn text(len: usize) -> Value {
    Value::Bytes(vec![b'x'; len])
}

fn array(len: usize) -> Value {
    Value::Array(vec![Value::Nil; len])
}

fn map(len: usize) -> Value {
    Value::Map((0..len).map(|i| (Value::from(i), Value::Nil)).collect())
}

fn header(value: &Value, size: usize) -> Vec<u8> {
    let bytes = encode(value).unwrap();
    assert_eq!(&decode(&bytes).unwrap(), value);
    bytes[..size].to_vec()
}

#[test]
fn str_header_thresholds() {
    assert_eq!(header(&text(0), 1), [0xa0]);
    assert_eq!(header(&text(31), 1), [0xbf]);
    assert_eq!(header(&text(32), 2), [0xd9, 0x20]);
    assert_eq!(header(&text(255), 2), [0xd9, 0xff]);
    assert_eq!(header(&text(256), 3), [0xda, 0x01, 0x00]);
    assert_eq!(header(&text(65535), 3), [0xda, 0xff, 0xff]);
    assert_eq!(header(&text(65536), 5), [0xdb, 0x00, 0x01, 0x00, 0x00]);
}

#[test]
fn str_payload_follows_header_verbatim() {
    let bytes = encode(&text(32)).unwrap();
    assert_eq!(bytes.len(), 2 + 32);
    assert!(bytes[2..].iter().all(|b| *b == b'x'));
}

#[test]
fn array_header_thresholds() {
    assert_eq!(header(&array(15), 1), [0x9f]);
    assert_eq!(header(&array(16), 3), [0xdc, 0x00, 0x10]);
    assert_eq!(header(&array(65535), 3), [0xdc, 0xff, 0xff]);
    assert_eq!(header(&array(65536), 5), [0xdd, 0x00, 0x01, 0x00, 0x00]);
}

#[test]
fn map_header_thresholds() {
    assert_eq!(header(&map(15), 1), [0x8f]);
    assert_eq!(header(&map(16), 3), [0xde, 0x00, 0x10]);
    assert_eq!(header(&map(65535), 3), [0xde, 0xff, 0xff]);
    assert_eq!(header(&map(65536), 5), [0xdf, 0x00, 0x01, 0x00, 0x00]);
}

#[test]
fn array_16_total_size() {
    let bytes = encode(&Value::Array((1..=16).map(Value::from).collect())).unwrap();
    assert_eq!(bytes.len(), 3 + 16);
}
