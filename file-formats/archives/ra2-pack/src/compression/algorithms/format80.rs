//! Westwood Format80 (LCW) decompression
//!
//! The stream is a sequence of one-byte commands, some followed by operands:
//!
//! | command      | operands          | effect                                          |
//! |--------------|-------------------|-------------------------------------------------|
//! | `0xFF`       | count16, pos16    | copy `count` bytes from absolute `pos`          |
//! | `0xFE`       | count16, byte     | write `count` copies of `byte`                  |
//! | `11cccccc`   | pos16             | copy `c + 3` bytes from absolute `pos`          |
//! | `10cccccc`   | `c` input bytes   | copy `c` literal bytes; `c == 0` terminates     |
//! | `0cccpppp`   | p8                | copy `c + 3` bytes from `cursor - (p << 8 \| p8)` |
//!
//! Positions index the output of the current stream. Copies run forward one
//! byte at a time, so a source range overlapping the destination repeats the
//! pattern it has just written.

use ra2_data::BoundedReader;

use crate::compression::Decoded;
use crate::{Error, Result};

const TERMINATE: u8 = 0x80;

/// Decompress a Format80 stream into a buffer of `output_capacity` bytes.
///
/// The returned buffer is truncated to the bytes actually produced.
pub fn decode(input: &[u8], output_capacity: usize) -> Result<Vec<u8>> {
    let mut output = vec![0u8; output_capacity];
    let written = decode_into(input, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Decompress into `output`, returning the number of bytes written.
pub fn decode_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    decode_stream(input, output).map(|decoded| decoded.written)
}

/// Decompress into `output`, also reporting whether the terminate command was seen.
///
/// Running out of input without a terminator is not an error here; the
/// caller decides whether that is acceptable for the stream at hand.
pub fn decode_stream(input: &[u8], output: &mut [u8]) -> Result<Decoded> {
    let mut reader = BoundedReader::new(input);
    let mut out = 0usize;

    while !reader.is_at_end() {
        let cmd = reader.read_u8()?;
        match cmd {
            0xFF => {
                let count = reader.read_u16()? as usize;
                let source = reader.read_u16()? as usize;
                log::trace!("in {}, out {}: 0xFF copy {count} from {source}", reader.position(), out);
                copy_within(output, &mut out, source, count)?;
            }
            0xFE => {
                let count = reader.read_u16()? as usize;
                let value = reader.read_u8()?;
                log::trace!("in {}, out {}: 0xFE fill {count} x 0x{value:02X}", reader.position(), out);
                let target = reserve(output, out, count)?;
                target.fill(value);
                out += count;
            }
            TERMINATE => {
                log::trace!("in {}, out {}: terminate", reader.position(), out);
                return Ok(Decoded {
                    written: out,
                    terminated: true,
                });
            }
            _ if cmd & 0xC0 == 0xC0 => {
                let count = (cmd & 0x3F) as usize + 3;
                let source = reader.read_u16()? as usize;
                log::trace!("in {}, out {}: 0x{cmd:02X} copy {count} from {source}", reader.position(), out);
                copy_within(output, &mut out, source, count)?;
            }
            _ if cmd & 0xC0 == 0x80 => {
                let count = (cmd & 0x3F) as usize;
                let literal = reader.read_bytes(count)?;
                log::trace!("in {}, out {}: 0x{cmd:02X} literal {count}", reader.position(), out);
                let target = reserve(output, out, count)?;
                target.copy_from_slice(literal);
                out += count;
            }
            _ => {
                let count = ((cmd & 0x70) >> 4) as usize + 3;
                let relative = ((cmd & 0x0F) as usize) << 8 | reader.read_u8()? as usize;
                let source = out
                    .checked_sub(relative)
                    .ok_or_else(|| Error::read_overrun(relative, count, out))?;
                log::trace!("in {}, out {}: 0x{cmd:02X} copy {count} from -{relative}", reader.position(), out);
                copy_within(output, &mut out, source, count)?;
            }
        }
    }

    Ok(Decoded {
        written: out,
        terminated: false,
    })
}

fn reserve(output: &mut [u8], out: usize, count: usize) -> Result<&mut [u8]> {
    match out.checked_add(count) {
        Some(end) if end <= output.len() => Ok(&mut output[out..end]),
        _ => Err(Error::write_overrun(out, count, output.len())),
    }
}

fn copy_within(output: &mut [u8], out: &mut usize, source: usize, count: usize) -> Result<()> {
    if count == 0 {
        return Ok(());
    }
    // The first source byte must already exist; the rest may be produced by this copy.
    if source >= *out {
        return Err(Error::read_overrun(source, count, *out));
    }
    reserve(output, *out, count)?;
    for i in 0..count {
        output[*out + i] = output[source + i];
    }
    *out += count;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Overrun;
    use pretty_assertions::assert_eq;
    use ra2_data::ReadError;

    #[test]
    fn literal_then_terminate() {
        let input = [0x83, b'a', b'b', b'c', 0x80];
        assert_eq!(decode(&input, 16).unwrap(), b"abc");
    }

    #[test]
    fn terminate_ignores_trailing_garbage() {
        let input = [0x82, 1, 2, 0x80, 0xFF, 0xFF, 0xFF];
        let mut output = [0u8; 8];
        let decoded = decode_stream(&input, &mut output).unwrap();
        assert_eq!(
            decoded,
            Decoded {
                written: 2,
                terminated: true
            }
        );
    }

    #[test]
    fn exhausted_input_is_not_an_error() {
        let input = [0x81, 9];
        let mut output = [0u8; 4];
        let decoded = decode_stream(&input, &mut output).unwrap();
        assert_eq!(decoded.written, 1);
        assert!(!decoded.terminated);
    }

    #[test]
    fn fill_command() {
        let input = [0xFE, 5, 0, 0x7A, 0x80];
        assert_eq!(decode(&input, 5).unwrap(), vec![0x7A; 5]);
    }

    #[test]
    fn long_absolute_copy() {
        // "ab", then copy 4 bytes starting at 0 (overlapping)
        let input = [0x82, b'a', b'b', 0xFF, 4, 0, 0, 0, 0x80];
        assert_eq!(decode(&input, 6).unwrap(), b"ababab");
    }

    #[test]
    fn short_absolute_copy() {
        // 0xC0 copies 3 bytes from position 1
        let input = [0x84, 1, 2, 3, 4, 0xC0, 1, 0, 0x80];
        assert_eq!(decode(&input, 7).unwrap(), vec![1, 2, 3, 4, 2, 3, 4]);
    }

    #[test]
    fn relative_copy_repeats_pattern() {
        // 0x20 = count 2 + 3, relative offset (0 << 8) | 1
        let input = [0x81, 0x55, 0x20, 0x01, 0x80];
        assert_eq!(decode(&input, 6).unwrap(), vec![0x55; 6]);
    }

    #[test]
    fn relative_offset_uses_low_nibble_as_high_bits() {
        let mut input = vec![0xFE, 0x00, 0x01, 0x11, 0x81, 0x22];
        // copy 3 bytes from 257 back: cursor 257 - 257 = 0
        input.extend_from_slice(&[0x01, 0x01, 0x80]);
        let output = decode(&input, 300).unwrap();
        assert_eq!(output.len(), 260);
        assert_eq!(&output[257..], &[0x11, 0x11, 0x11]);
    }

    #[test]
    fn relative_copy_before_start_is_read_overrun() {
        let input = [0x81, 1, 0x00, 0x05];
        let err = decode(&input, 16).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferOverrun {
                kind: Overrun::Read,
                ..
            }
        ));
    }

    #[test]
    fn absolute_copy_from_unwritten_bytes_is_read_overrun() {
        let input = [0x82, 1, 2, 0xFF, 2, 0, 10, 0];
        let err = decode(&input, 64).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferOverrun {
                kind: Overrun::Read,
                position: 10,
                ..
            }
        ));
    }

    #[test]
    fn copy_past_capacity_is_write_overrun() {
        let input = [0x82, 1, 2, 0xFF, 8, 0, 0, 0];
        let err = decode(&input, 4).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferOverrun {
                kind: Overrun::Write,
                position: 2,
                count: 8,
                limit: 4,
            }
        ));
    }

    #[test]
    fn truncated_literal_is_truncated_input() {
        let input = [0x85, 1, 2];
        let err = decode(&input, 16).unwrap_err();
        assert!(matches!(
            err,
            Error::Read(ReadError::TruncatedInput { wanted: 5, .. })
        ));
    }

    #[test]
    fn truncated_operand_is_truncated_input() {
        let input = [0xFF, 1];
        assert!(matches!(
            decode(&input, 16),
            Err(Error::Read(ReadError::TruncatedInput { .. }))
        ));
    }

    #[test]
    fn decoding_is_repeatable() {
        let input = [0x83, 7, 8, 9, 0x10, 0x03, 0xFE, 3, 0, 1, 0x80];
        let first = decode(&input, 32).unwrap();
        let second = decode(&input, 32).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec![7, 8, 9, 7, 8, 9, 7, 1, 1, 1]);
    }
}
