//! Property tests for the Format80 decoder

use proptest::prelude::*;
use ra2_pack::{Error, Overrun, PackFormat, format80, unpack};

/// Encode `data` using nothing but literal commands, optionally terminated.
fn literal_stream(data: &[u8], terminate: bool) -> Vec<u8> {
    let mut stream = Vec::with_capacity(data.len() + data.len() / 63 + 2);
    for chunk in data.chunks(63) {
        stream.push(0x80 | chunk.len() as u8);
        stream.extend_from_slice(chunk);
    }
    if terminate {
        stream.push(0x80);
    }
    stream
}

proptest! {
    #[test]
    fn literal_only_stream_reproduces_input(
        data in proptest::collection::vec(any::<u8>(), 0..4096),
        terminate in any::<bool>(),
    ) {
        let stream = literal_stream(&data, terminate);
        let decoded = format80::decode(&stream, data.len()).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn trailing_bytes_after_terminate_are_ignored(
        data in proptest::collection::vec(any::<u8>(), 1..512),
        garbage in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut stream = literal_stream(&data, true);
        stream.extend_from_slice(&garbage);
        let decoded = format80::decode(&stream, data.len()).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn copies_from_unwritten_output_never_succeed(
        prefix in proptest::collection::vec(any::<u8>(), 1..32),
        extra in 0u16..64,
        count in 1u16..64,
    ) {
        let mut stream = literal_stream(&prefix, false);
        let source = prefix.len() as u16 + extra;
        stream.push(0xFF);
        stream.extend_from_slice(&count.to_le_bytes());
        stream.extend_from_slice(&source.to_le_bytes());
        let err = format80::decode(&stream, 4096).unwrap_err();
        let is_read_overrun = matches!(err, Error::BufferOverrun { kind: Overrun::Read, .. });
        prop_assert!(is_read_overrun);
    }

    #[test]
    fn arbitrary_input_never_panics(
        input in proptest::collection::vec(any::<u8>(), 0..256),
        capacity in 0usize..1024,
    ) {
        if let Ok(output) = format80::decode(&input, capacity) {
            prop_assert!(output.len() <= capacity);
        }
        let _ = unpack(&input, PackFormat::Format80);
    }
}
