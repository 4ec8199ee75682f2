use nbt_pack::{Nbt, NbtDecoder, NbtEncoder, NbtError, NbtMap, Tag};

fn map(fields: &[(&str, Nbt)]) -> NbtMap {
    fields
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect()
}

fn encode_payload(value: &Nbt) -> Vec<u8> {
    let mut encoder = NbtEncoder::new();
    encoder.write_native(value).unwrap();
    encoder.writer.flush()
}

fn decode_payload(tag: Tag, bytes: &[u8]) -> Nbt {
    let mut decoder = NbtDecoder::new(bytes);
    let value = decoder.read_value(tag).unwrap();
    value.to_native()
}

#[test]
fn nbt_encoder_wire_matrix() {
    assert_eq!(encode_payload(&Nbt::Byte(0)), vec![0x00]);
    assert_eq!(encode_payload(&Nbt::Byte(-1)), vec![0xff]);
    assert_eq!(encode_payload(&Nbt::Short(0x0102)), vec![0x01, 0x02]);
    assert_eq!(encode_payload(&Nbt::Short(-2)), vec![0xff, 0xfe]);
    assert_eq!(
        encode_payload(&Nbt::Int(0x01020304)),
        vec![0x01, 0x02, 0x03, 0x04]
    );
    assert_eq!(
        encode_payload(&Nbt::Long(1)),
        vec![0, 0, 0, 0, 0, 0, 0, 1]
    );
    assert_eq!(
        encode_payload(&Nbt::Long(-1)),
        vec![0xff; 8]
    );
    assert_eq!(
        encode_payload(&Nbt::Float(1.0)),
        vec![0x3f, 0x80, 0x00, 0x00]
    );
    assert_eq!(
        encode_payload(&Nbt::Double(1.0)),
        vec![0x3f, 0xf0, 0, 0, 0, 0, 0, 0]
    );

    assert_eq!(
        encode_payload(&Nbt::Str("".to_owned())),
        vec![0x00, 0x00]
    );
    assert_eq!(
        encode_payload(&Nbt::Str("abc".to_owned())),
        vec![0x00, 0x03, b'a', b'b', b'c']
    );
    // NUL encodes as the two-byte form C0 80.
    assert_eq!(
        encode_payload(&Nbt::Str("\0".to_owned())),
        vec![0x00, 0x02, 0xc0, 0x80]
    );
    // Supplementary characters encode as a CESU-8 surrogate pair.
    assert_eq!(
        encode_payload(&Nbt::Str("😀".to_owned())),
        vec![0x00, 0x06, 0xed, 0xa0, 0xbd, 0xed, 0xb8, 0x80]
    );

    assert_eq!(
        encode_payload(&Nbt::ByteArray(vec![0xaa, 0xbb])),
        vec![0, 0, 0, 2, 0xaa, 0xbb]
    );
    assert_eq!(
        encode_payload(&Nbt::IntArray(vec![1, -1])),
        vec![0, 0, 0, 2, 0, 0, 0, 1, 0xff, 0xff, 0xff, 0xff]
    );
    assert_eq!(
        encode_payload(&Nbt::LongArray(vec![2])),
        vec![0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2]
    );

    assert_eq!(
        encode_payload(&Nbt::List(vec![Nbt::Byte(1), Nbt::Byte(2)])),
        vec![0x01, 0, 0, 0, 2, 1, 2]
    );
    // An empty list still carries a declared element tag.
    assert_eq!(
        encode_payload(&Nbt::List(vec![])),
        vec![0x00, 0, 0, 0, 0]
    );

    assert_eq!(
        encode_payload(&Nbt::Compound(map(&[("a", Nbt::Byte(7))]))),
        vec![0x01, 0x00, 0x01, b'a', 0x07, 0x00]
    );
    assert_eq!(encode_payload(&Nbt::Compound(vec![])), vec![0x00]);
}

#[test]
fn nbt_decoder_matrix() {
    assert_eq!(decode_payload(Tag::Byte, &[0x80]), Nbt::Byte(-128));
    assert_eq!(decode_payload(Tag::Short, &[0x7f, 0xff]), Nbt::Short(32767));
    assert_eq!(
        decode_payload(Tag::Int, &[0xff, 0xff, 0xff, 0xff]),
        Nbt::Int(-1)
    );
    assert_eq!(
        decode_payload(Tag::Long, &[0x80, 0, 0, 0, 0, 0, 0, 0]),
        Nbt::Long(i64::MIN)
    );
    assert_eq!(
        decode_payload(Tag::Float, &[0xbf, 0x80, 0, 0]),
        Nbt::Float(-1.0)
    );
    assert_eq!(
        decode_payload(Tag::Double, &[0x40, 0x04, 0, 0, 0, 0, 0, 0]),
        Nbt::Double(2.5)
    );
    assert_eq!(
        decode_payload(Tag::Str, &[0x00, 0x02, 0xc0, 0x80]),
        Nbt::Str("\0".to_owned())
    );
    assert_eq!(
        decode_payload(Tag::Str, &[0x00, 0x06, 0xed, 0xa0, 0xbd, 0xed, 0xb8, 0x80]),
        Nbt::Str("😀".to_owned())
    );
    assert_eq!(
        decode_payload(Tag::List, &[0x03, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 2]),
        Nbt::List(vec![Nbt::Int(1), Nbt::Int(2)])
    );
    assert_eq!(
        decode_payload(Tag::Compound, &[0x08, 0x00, 0x01, b'k', 0x00, 0x01, b'v', 0x00]),
        Nbt::Compound(map(&[("k", Nbt::Str("v".to_owned()))]))
    );
}

#[test]
fn nbt_fixed_width_payload_sizes() {
    // Arrays are a 4-byte count plus n elements of the kind's fixed width.
    for n in [0usize, 1, 3, 17] {
        assert_eq!(
            encode_payload(&Nbt::ByteArray(vec![0; n])).len(),
            4 + n
        );
        assert_eq!(
            encode_payload(&Nbt::IntArray(vec![0; n])).len(),
            4 + n * 4
        );
        assert_eq!(
            encode_payload(&Nbt::LongArray(vec![0; n])).len(),
            4 + n * 8
        );
    }
}

#[test]
fn nbt_automated_roundtrip_matrix() {
    let docs = vec![
        map(&[]),
        map(&[("byte", Nbt::Byte(i8::MIN)), ("byte2", Nbt::Byte(i8::MAX))]),
        map(&[("short", Nbt::Short(i16::MIN)), ("short2", Nbt::Short(i16::MAX))]),
        map(&[("int", Nbt::Int(i32::MIN)), ("int2", Nbt::Int(i32::MAX))]),
        map(&[("long", Nbt::Long(i64::MIN)), ("long2", Nbt::Long(i64::MAX))]),
        map(&[("float", Nbt::Float(f32::MIN_POSITIVE)), ("float2", Nbt::Float(-0.0))]),
        map(&[("double", Nbt::Double(f64::MAX)), ("double2", Nbt::Double(1e-300))]),
        map(&[("s", Nbt::Str("".to_owned()))]),
        map(&[("s", Nbt::Str("héllo wörld \0 😀 \u{ffff}".to_owned()))]),
        map(&[("bytes", Nbt::ByteArray((0..=255).collect()))]),
        map(&[("ints", Nbt::IntArray(vec![i32::MIN, -1, 0, 1, i32::MAX]))]),
        map(&[("longs", Nbt::LongArray(vec![i64::MIN, 0, i64::MAX]))]),
        map(&[("list", Nbt::List(vec![]))]),
        map(&[(
            "list",
            Nbt::List(vec![
                Nbt::Str("a".to_owned()),
                Nbt::Str("b".to_owned()),
                Nbt::Str("c".to_owned()),
            ]),
        )]),
        map(&[(
            "lists",
            Nbt::List(vec![
                Nbt::List(vec![Nbt::Int(1)]),
                Nbt::List(vec![Nbt::Int(2), Nbt::Int(3)]),
            ]),
        )]),
        map(&[(
            "a",
            Nbt::Compound(map(&[(
                "b",
                Nbt::Compound(map(&[(
                    "c",
                    Nbt::Compound(map(&[("leaf", Nbt::Str("deep".to_owned()))])),
                )])),
            )])),
        )]),
        map(&[
            ("mixed", Nbt::Compound(map(&[("n", Nbt::Int(1))]))),
            ("arr", Nbt::ByteArray(vec![1, 2, 3])),
            ("l", Nbt::List(vec![Nbt::Compound(map(&[("x", Nbt::Byte(1))]))])),
        ]),
    ];

    for doc in docs {
        for name in ["", "root", "ünïcode"] {
            let mut encoder = NbtEncoder::new();
            let encoded = encoder.encode_named_root_native(name, &doc).unwrap();
            let mut decoder = NbtDecoder::new(&encoded);
            let (decoded_name, decoded) = decoder
                .read_named_root_native()
                .unwrap_or_else(|e| panic!("decode failed for {doc:?}: {e}"));
            assert_eq!(decoded_name, name);
            assert_eq!(decoded, doc);
            assert_eq!(decoder.position(), encoded.len());
        }
    }
}

#[test]
fn nbt_list_preserves_order_and_count() {
    let doc = map(&[(
        "seq",
        Nbt::List((0..100).map(Nbt::Int).collect()),
    )]);
    let mut encoder = NbtEncoder::new();
    let encoded = encoder.encode_named_root_native("", &doc).unwrap();
    let mut decoder = NbtDecoder::new(&encoded);
    let (_, decoded) = decoder.read_named_root_native().unwrap();
    assert_eq!(decoded, doc);
}

#[test]
fn nbt_decode_error_matrix() {
    fn root_err(bytes: &[u8]) -> NbtError {
        NbtDecoder::new(bytes).read_named_root().unwrap_err()
    }

    assert_eq!(root_err(&[]), NbtError::UnexpectedEof);
    assert_eq!(root_err(&[0x0a]), NbtError::UnexpectedEof);
    assert_eq!(root_err(&[0x0a, 0x00, 0x00]), NbtError::UnexpectedEof);
    assert_eq!(root_err(&[0x01, 0x00, 0x00]), NbtError::UnexpectedRootTag(1));
    assert_eq!(root_err(&[0x63]), NbtError::UnexpectedRootTag(0x63));
    // Unknown entry tag inside the root compound.
    assert_eq!(
        root_err(&[0x0a, 0x00, 0x00, 0x0d]),
        NbtError::UnknownTag(13)
    );
    // Entry declared but its payload is missing.
    assert_eq!(
        root_err(&[0x0a, 0x00, 0x00, 0x03, 0x00, 0x01, b'a']),
        NbtError::UnexpectedEof
    );
    // List inside the root declares four elements but carries one.
    assert_eq!(
        root_err(&[
            0x0a, 0x00, 0x00, // root
            0x09, 0x00, 0x01, b'l', // list entry "l"
            0x01, 0x00, 0x00, 0x00, 0x04, // byte list, count 4
            0x07, // a single element
        ]),
        NbtError::UnexpectedEof
    );
    // Malformed modified UTF-8 in an entry name.
    assert_eq!(
        root_err(&[0x0a, 0x00, 0x00, 0x01, 0x00, 0x01, 0xff, 0x00, 0x00]),
        NbtError::InvalidUtf8
    );
}

#[test]
fn nbt_mutf8_roundtrips_through_names_and_strings() {
    let samples = ["", "plain", "null\0inside", "pair 😀🦀", "\u{ffff}\u{800}\u{7f}"];
    for sample in samples {
        let doc = map(&[(sample, Nbt::Str(sample.to_owned()))]);
        let mut encoder = NbtEncoder::new();
        let encoded = encoder.encode_named_root_native(sample, &doc).unwrap();
        let mut decoder = NbtDecoder::new(&encoded);
        let (name, decoded) = decoder.read_named_root_native().unwrap();
        assert_eq!(name, sample);
        assert_eq!(decoded, doc);
    }
}
