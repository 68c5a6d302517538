use msgpack_lite::{decode, decode_one, encode, DecodeError, EncodeError, Value};

fn obj(fields: &[(&str, Value)]) -> Value {
    Value::Map(
        fields
            .iter()
            .map(|(k, v)| (Value::from(*k), v.clone()))
            .collect(),
    )
}

#[test]
fn msgpack_encoder_wire_matrix() {
    let cases: Vec<(Value, Vec<u8>)> = vec![
        (Value::Nil, vec![0xc0]),
        (Value::Bool(false), vec![0xc2]),
        (Value::Bool(true), vec![0xc3]),
        (Value::from(0), vec![0x00]),
        (Value::from(5), vec![0x05]),
        (Value::from(127), vec![0x7f]),
        (Value::from(-1), vec![0xff]),
        (Value::from(-32), vec![0xe0]),
        (Value::from(""), vec![0xa0]),
        (Value::from("foo"), vec![0xa3, b'f', b'o', b'o']),
        (Value::Array(vec![]), vec![0x90]),
        (Value::Map(vec![]), vec![0x80]),
        (
            obj(&[("foo", Value::from("bar"))]),
            vec![0x81, 0xa3, b'f', b'o', b'o', 0xa3, b'b', b'a', b'r'],
        ),
        (
            Value::Array(vec![Value::Nil, Value::from(-33), Value::from(300)]),
            vec![0x93, 0xc0, 0xd0, 0xdf, 0xcd, 0x01, 0x2c],
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(encode(&value).unwrap(), expected, "encoding {value:?}");
        assert_eq!(decode(&expected).unwrap(), value, "decoding {expected:02x?}");
    }
}

#[test]
fn integer_family_matrix() {
    let cases: Vec<(Value, Vec<u8>)> = vec![
        (Value::from(128), vec![0xcc, 0x80]),
        (Value::from(u16::MAX), vec![0xcd, 0xff, 0xff]),
        (Value::from(u32::MAX), vec![0xce, 0xff, 0xff, 0xff, 0xff]),
        (
            Value::from(u32::MAX as u64 + 1),
            vec![0xcf, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00],
        ),
        (
            Value::from(i64::MAX),
            vec![0xcf, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
        ),
        (Value::from(-33), vec![0xd0, 0xdf]),
        (Value::from(i8::MIN), vec![0xd0, 0x80]),
        (Value::from(i16::MIN), vec![0xd1, 0x80, 0x00]),
        (Value::from(-1000), vec![0xd1, 0xfc, 0x18]),
        (Value::from(i32::MIN), vec![0xd2, 0x80, 0x00, 0x00, 0x00]),
        (
            Value::from(i32::MIN as i64 - 1),
            vec![0xd3, 0xff, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xff, 0xff],
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(encode(&value).unwrap(), expected, "encoding {value:?}");
        assert_eq!(decode(&expected).unwrap(), value, "decoding {expected:02x?}");
    }
}

#[test]
fn nested_collections_roundtrip() {
    let value = obj(&[
        (
            "arr",
            Value::Array(vec![Value::from(1), Value::Bool(true), Value::Nil]),
        ),
        ("nested", obj(&[("k", Value::Array(vec![Value::Map(vec![])]))])),
        ("bin", Value::Bytes(vec![0x00, 0xff, 0x80])),
    ]);
    let bytes = encode(&value).unwrap();
    assert_eq!(bytes[0], 0x83);
    assert_eq!(decode(&bytes).unwrap(), value);
}

#[test]
fn non_string_map_keys_roundtrip() {
    let value = Value::Map(vec![
        (Value::from(1), Value::from("one")),
        (Value::Nil, Value::Bool(false)),
        (Value::Array(vec![Value::from(2)]), Value::from(3)),
        (Value::from(1), Value::from("dup")),
    ]);
    assert_eq!(decode(&encode(&value).unwrap()).unwrap(), value);
}

#[test]
fn decode_one_walks_concatenated_values() {
    let mut blob = encode(&Value::from("")).unwrap();
    blob.extend(encode(&Value::from(-1)).unwrap());
    blob.extend(encode(&obj(&[("a", Value::Nil)])).unwrap());

    let mut offset = 0;
    let mut values = Vec::new();
    while offset < blob.len() {
        let (value, consumed) = decode_one(&blob, offset).unwrap();
        values.push(value);
        offset += consumed;
    }
    assert_eq!(
        values,
        vec![Value::from(""), Value::from(-1), obj(&[("a", Value::Nil)])]
    );
    assert_eq!(decode_one(&[0xa0, 0x01], 0).unwrap(), (Value::from(""), 1));
}

#[test]
fn float_is_unencodeable() {
    assert_eq!(
        encode(&Value::Float(1.0)),
        Err(EncodeError::UnencodeableType { kind: "float" })
    );
    assert_eq!(
        encode(&obj(&[("x", Value::Float(f64::NAN))])),
        Err(EncodeError::UnencodeableType { kind: "float" })
    );
}

#[test]
fn unallocated_tags_are_undecodeable() {
    let unsupported = [0xc1u8, 0xc4, 0xc5, 0xc6, 0xc7, 0xc8, 0xc9, 0xca, 0xcb]
        .into_iter()
        .chain(0xd4..=0xd8);
    for tag in unsupported {
        assert_eq!(
            decode(&[tag, 0, 0, 0, 0, 0, 0, 0, 0]),
            Err(DecodeError::UndecodeableTag { tag, offset: 0 }),
            "tag {tag:#04x}"
        );
    }
}

#[test]
fn unknown_tag_inside_collection_reports_its_offset() {
    assert_eq!(
        decode(&[0x92, 0x01, 0xcb]),
        Err(DecodeError::UndecodeableTag {
            tag: 0xcb,
            offset: 2,
        })
    );
}
