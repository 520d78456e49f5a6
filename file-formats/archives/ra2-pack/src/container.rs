//! Length-prefixed packed sections
//!
//! A packed buffer is a run of sections, each a four byte header followed by
//! its compressed payload:
//!
//! ```text
//! u16 compressed_len
//! u16 decompressed_len
//! u8  payload[compressed_len]
//! ```
//!
//! Every section is an independent stream. The output is the concatenation of
//! all decoded sections, sized up front from the declared lengths.

use ra2_data::{BoundedReader, ReadError};

use crate::compression::{Decoded, PackFormat, format80, lzo};
use crate::{Error, Result};

const SECTION_HEADER_SIZE: usize = 4;

/// One section of a packed buffer, borrowing its payload from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedSection<'a> {
    /// Declared payload length
    pub compressed_len: u16,
    /// Declared output length
    pub decompressed_len: u16,
    /// The compressed bytes
    pub payload: &'a [u8],
}

/// Decodes the payload of a single section into a slice sized to its declared length.
pub trait SectionDecoder {
    fn decode_section(&mut self, payload: &[u8], output: &mut [u8]) -> Result<Decoded>;
}

impl SectionDecoder for PackFormat {
    fn decode_section(&mut self, payload: &[u8], output: &mut [u8]) -> Result<Decoded> {
        match self {
            PackFormat::Format80 => format80::decode_stream(payload, output),
            PackFormat::Lzo => lzo::decompress_into(payload, output).map(|written| Decoded {
                written,
                terminated: true,
            }),
        }
    }
}

impl<F> SectionDecoder for F
where
    F: FnMut(&[u8], &mut [u8]) -> Result<usize>,
{
    fn decode_section(&mut self, payload: &[u8], output: &mut [u8]) -> Result<Decoded> {
        self(payload, output).map(|written| Decoded {
            written,
            terminated: true,
        })
    }
}

/// Split a packed buffer into its sections, validating every header.
pub fn sections(input: &[u8]) -> Result<Vec<PackedSection<'_>>> {
    let mut reader = BoundedReader::new(input);
    let mut sections = Vec::new();

    while !reader.is_at_end() {
        if reader.remaining() < SECTION_HEADER_SIZE {
            return Err(ReadError::TruncatedInput {
                offset: reader.position(),
                wanted: SECTION_HEADER_SIZE,
                available: reader.remaining(),
            }
            .into());
        }
        let compressed_len = reader.read_u16()?;
        let decompressed_len = reader.read_u16()?;
        log::trace!(
            "Pack section {} at {}: {}/{} bytes",
            sections.len(),
            reader.position() - SECTION_HEADER_SIZE,
            compressed_len,
            decompressed_len
        );
        let payload = reader.read_bytes(compressed_len as usize)?;
        if compressed_len > decompressed_len {
            return Err(Error::PackFormat {
                index: sections.len(),
                compressed: compressed_len,
                decompressed: decompressed_len,
            });
        }
        sections.push(PackedSection {
            compressed_len,
            decompressed_len,
            payload,
        });
    }

    Ok(sections)
}

/// Total output size declared by a packed buffer's headers.
pub fn unpacked_size(input: &[u8]) -> Result<usize> {
    Ok(sections(input)?
        .iter()
        .map(|section| section.decompressed_len as usize)
        .sum())
}

/// Decode every section of `input` with the given format.
pub fn unpack(input: &[u8], format: PackFormat) -> Result<Vec<u8>> {
    let mut decoder = format;
    unpack_with(input, &mut decoder)
}

/// Decode every section of `input` with a caller supplied decoder.
///
/// Only the final section may end by running out of input; earlier sections
/// must reach their terminator.
pub fn unpack_with<D: SectionDecoder + ?Sized>(input: &[u8], decoder: &mut D) -> Result<Vec<u8>> {
    let sections = sections(input)?;
    let total: usize = sections.iter().map(|s| s.decompressed_len as usize).sum();
    let mut output = vec![0u8; total];

    let mut offset = 0;
    for (index, section) in sections.iter().enumerate() {
        let expected = section.decompressed_len as usize;
        let slot = &mut output[offset..offset + expected];
        let decoded = decoder.decode_section(section.payload, slot)?;

        if decoded.written != expected {
            return Err(Error::SectionSizeMismatch {
                index,
                expected,
                actual: decoded.written,
            });
        }
        if !decoded.terminated && index + 1 != sections.len() {
            return Err(Error::UnterminatedSection { index });
        }
        offset += expected;
    }

    log::debug!(
        "Unpacked {} sections: {} bytes to {} bytes",
        sections.len(),
        input.len(),
        total
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn identity(payload: &[u8], output: &mut [u8]) -> Result<usize> {
        let n = payload.len().min(output.len());
        output[..n].copy_from_slice(&payload[..n]);
        Ok(n)
    }

    fn section(compressed: u16, decompressed: u16, payload: &[u8]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend(&compressed.to_le_bytes());
        data.extend(&decompressed.to_le_bytes());
        data.extend(payload);
        data
    }

    #[test]
    fn identity_section() {
        let input = section(4, 4, b"abcd");
        assert_eq!(unpack_with(&input, &mut identity).unwrap(), b"abcd");
    }

    #[test]
    fn sections_concatenate() {
        let mut input = section(2, 2, b"ab");
        input.extend(section(3, 3, b"cde"));
        assert_eq!(unpack_with(&input, &mut identity).unwrap(), b"abcde");
        assert_eq!(unpacked_size(&input).unwrap(), 5);
    }

    #[test]
    fn compressed_larger_than_decompressed() {
        let input = section(4, 3, b"abcd");
        assert!(matches!(
            unpack_with(&input, &mut identity),
            Err(Error::PackFormat {
                index: 0,
                compressed: 4,
                decompressed: 3,
            })
        ));
    }

    #[test]
    fn short_output_is_size_mismatch() {
        let input = section(2, 4, b"ab");
        assert!(matches!(
            unpack_with(&input, &mut identity),
            Err(Error::SectionSizeMismatch {
                index: 0,
                expected: 4,
                actual: 2,
            })
        ));
    }

    #[test]
    fn partial_header_is_truncated() {
        let mut input = section(1, 1, b"a");
        input.extend(&[0x01, 0x00, 0x01]);
        assert!(matches!(
            sections(&input),
            Err(Error::Read(ReadError::TruncatedInput {
                offset: 5,
                wanted: 4,
                available: 3,
            }))
        ));
    }

    #[test]
    fn payload_past_end_is_truncated() {
        let input = section(8, 8, b"abc");
        assert!(matches!(
            sections(&input),
            Err(Error::Read(ReadError::TruncatedInput { wanted: 8, .. }))
        ));
    }

    #[test]
    fn empty_input_unpacks_to_nothing() {
        assert!(unpack(&[], PackFormat::Format80).unwrap().is_empty());
    }

    #[test]
    fn format80_sections_are_independent() {
        // Both sections copy from absolute position 0 of their own output.
        let mut input = section(7, 8, &[0x82, 1, 2, 0xC3, 0x00, 0x00, 0x80]);
        input.extend(section(7, 8, &[0x82, 3, 4, 0xC3, 0x00, 0x00, 0x80]));
        assert_eq!(
            unpack(&input, PackFormat::Format80).unwrap(),
            vec![1, 2, 1, 2, 1, 2, 1, 2, 3, 4, 3, 4, 3, 4, 3, 4]
        );
    }

    #[test]
    fn only_last_format80_section_may_run_out() {
        let unterminated = [0xFE, 5, 0, 9];
        let mut input = section(4, 5, &unterminated);
        input.extend(section(4, 5, &unterminated));
        assert!(matches!(
            unpack(&input, PackFormat::Format80),
            Err(Error::UnterminatedSection { index: 0 })
        ));

        let mut input = section(5, 5, &[0xFE, 5, 0, 9, 0x80]);
        input.extend(section(4, 5, &unterminated));
        assert_eq!(unpack(&input, PackFormat::Format80).unwrap(), vec![9; 10]);
    }
}
