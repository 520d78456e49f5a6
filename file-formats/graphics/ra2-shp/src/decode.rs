//! Frame pixel decoders
//!
//! Every decoder produces a row-major `width * height` buffer of palette
//! indices. Scanline encodings start each row at `y * width`; a row that
//! stores fewer than `width` pixels leaves the remainder at 0. Tools that
//! carry the write position over from the previous row place such short
//! rows differently; here every row is decoded on its own.

use ra2_data::{BoundedReader, ReadError};

use crate::header::{Compression, FrameHeader};
use crate::{Error, Result};

/// Decode the pixels of `header`, whose data lives at `header.offset` in `data`.
pub fn decode_frame(header: &FrameHeader, data: &[u8]) -> Result<Vec<u8>> {
    if header.pixel_count() == 0 {
        return Ok(Vec::new());
    }
    let mut reader = BoundedReader::new(data);
    reader.seek(header.offset as usize)?;
    decode_pixels(header.compression, header.width, header.height, &mut reader)
}

/// Decode `width * height` pixels from the reader's current position.
pub fn decode_pixels(
    compression: Compression,
    width: u16,
    height: u16,
    reader: &mut BoundedReader<'_>,
) -> Result<Vec<u8>> {
    let mut pixels = vec![0u8; width as usize * height as usize];
    if pixels.is_empty() {
        return Ok(pixels);
    }
    match compression {
        Compression::Raw0 | Compression::Raw1 => {
            let bytes = reader.read_bytes(pixels.len())?;
            pixels.copy_from_slice(bytes);
        }
        Compression::Scanline | Compression::ScanlineRle => {
            let rle = compression == Compression::ScanlineRle;
            for (y, row) in pixels.chunks_exact_mut(width as usize).enumerate() {
                let mut line = Scanline {
                    row,
                    index: y,
                    x: 0,
                    height,
                };
                let count = read_scanline_len(reader, y)?;
                if rle {
                    line.decode_rle(reader, count)?;
                } else {
                    line.decode_literal(reader, count)?;
                }
            }
        }
    }
    Ok(pixels)
}

/// Payload length of a scanline; the stored count includes its own two bytes.
fn read_scanline_len(reader: &mut BoundedReader<'_>, scanline: usize) -> Result<usize> {
    let count = reader.read_u16()?;
    count
        .checked_sub(2)
        .map(usize::from)
        .ok_or_else(|| Error::InvalidHeader(format!("scanline {scanline} byte count is {count}")))
}

struct Scanline<'a> {
    row: &'a mut [u8],
    index: usize,
    x: usize,
    height: u16,
}

impl Scanline<'_> {
    fn put(&mut self, value: u8) -> Result<()> {
        let width = self.row.len() as u16;
        let pixel = self.row.get_mut(self.x).ok_or(Error::ImageOverrun {
            scanline: self.index,
            x: self.x,
            width,
            height: self.height,
        })?;
        *pixel = value;
        self.x += 1;
        Ok(())
    }

    fn decode_literal(&mut self, reader: &mut BoundedReader<'_>, count: usize) -> Result<()> {
        for &value in reader.read_bytes(count)? {
            self.put(value)?;
        }
        Ok(())
    }

    fn decode_rle(&mut self, reader: &mut BoundedReader<'_>, count: usize) -> Result<()> {
        let mut remaining = count;
        while remaining > 0 {
            let value = reader.read_u8()?;
            remaining -= 1;
            if value != 0 {
                self.put(value)?;
                continue;
            }

            if remaining == 0 {
                return Err(ReadError::TruncatedInput {
                    offset: reader.position(),
                    wanted: 1,
                    available: 0,
                }
                .into());
            }
            let run = reader.read_u8()? as usize;
            remaining -= 1;
            // Runs past the row end are cut to fit.
            let run = run.min(self.row.len() - self.x);
            self.x += run;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(compression: Compression, width: u16, height: u16, data: &[u8]) -> Result<Vec<u8>> {
        decode_pixels(compression, width, height, &mut BoundedReader::new(data))
    }

    #[test]
    fn raw_frame_is_copied() {
        let pixels = decode(Compression::Raw1, 2, 2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(pixels.chunks(2).collect::<Vec<_>>(), vec![&[1, 2], &[3, 4]]);
        assert_eq!(decode(Compression::Raw0, 2, 2, &[1, 2, 3, 4]).unwrap(), pixels);
    }

    #[test]
    fn raw_frame_short_input() {
        assert!(matches!(
            decode(Compression::Raw1, 2, 2, &[1, 2, 3]),
            Err(Error::Read(ReadError::TruncatedInput { wanted: 4, .. }))
        ));
    }

    #[test]
    fn scanline_copy_skips_counts() {
        let data = [5, 0, 7, 8, 9, 4, 0, 1, 2];
        let pixels = decode(Compression::Scanline, 3, 2, &data).unwrap();
        assert_eq!(pixels, vec![7, 8, 9, 1, 2, 0]);
    }

    #[test]
    fn scanline_copy_past_row_end() {
        let data = [6, 0, 1, 2, 3, 4];
        assert!(matches!(
            decode(Compression::Scanline, 3, 1, &data),
            Err(Error::ImageOverrun {
                scanline: 0,
                x: 3,
                ..
            })
        ));
    }

    #[test]
    fn rle_zero_run() {
        let data = [4, 0, 0, 5];
        assert_eq!(decode(Compression::ScanlineRle, 5, 1, &data).unwrap(), vec![0; 5]);
        assert_eq!(decode(Compression::ScanlineRle, 3, 1, &data).unwrap(), vec![0; 3]);
    }

    #[test]
    fn rle_run_is_clamped_to_row() {
        let data = [5, 0, 9, 0, 4, 4, 0, 0, 9];
        let pixels = decode(Compression::ScanlineRle, 3, 2, &data).unwrap();
        assert_eq!(pixels, vec![9, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn rle_mixes_literals_and_runs() {
        let data = [8, 0, 4, 0, 2, 6, 0, 1];
        let pixels = decode(Compression::ScanlineRle, 5, 1, &data).unwrap();
        assert_eq!(pixels, vec![4, 0, 0, 6, 0]);
    }

    #[test]
    fn rle_scanline_ending_mid_pair() {
        let data = [4, 0, 3, 0, 9, 9];
        assert!(matches!(
            decode(Compression::ScanlineRle, 4, 1, &data),
            Err(Error::Read(ReadError::TruncatedInput { offset: 4, .. }))
        ));
    }

    #[test]
    fn rle_literal_past_row_end() {
        // The run fills both pixels, the trailing literal has nowhere to go.
        let data = [5, 0, 0, 2, 5];
        assert!(matches!(
            decode(Compression::ScanlineRle, 2, 1, &data),
            Err(Error::ImageOverrun { x: 2, .. })
        ));
    }

    #[test]
    fn scanline_count_below_two() {
        assert!(matches!(
            decode(Compression::Scanline, 2, 1, &[1, 0]),
            Err(Error::InvalidHeader(_))
        ));
    }

    #[test]
    fn zero_width_reads_nothing() {
        for compression in [Compression::Raw1, Compression::Scanline, Compression::ScanlineRle] {
            let mut reader = BoundedReader::new(&[4, 0, 1, 2]);
            let pixels = decode_pixels(compression, 0, 3, &mut reader).unwrap();
            assert!(pixels.is_empty());
            assert_eq!(reader.position(), 0);
        }
    }

    #[test]
    fn short_rows_do_not_shift_later_rows() {
        let data = [3, 0, 7, 4, 0, 1, 2];
        let pixels = decode(Compression::Scanline, 3, 2, &data).unwrap();
        assert_eq!(pixels, vec![7, 0, 0, 1, 2, 0]);
    }

    #[test]
    fn decoding_is_repeatable() {
        let data = [8, 0, 4, 0, 2, 6, 0, 1];
        assert_eq!(
            decode(Compression::ScanlineRle, 5, 1, &data).unwrap(),
            decode(Compression::ScanlineRle, 5, 1, &data).unwrap()
        );
    }
}
