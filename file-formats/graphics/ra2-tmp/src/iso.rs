//! Diamond to rectangle pixel layout
//!
//! A tile stores 29 rows of 4, 8, ... 60, ... 8, 4 pixels (900 bytes). Each
//! row is centred in a 60 pixel wide rectangle; the 30th row is left empty.

use ra2_data::BoundedReader;

use crate::Result;

pub const TILE_WIDTH: usize = 60;
pub const TILE_HEIGHT: usize = 30;
/// Bytes in a stored diamond.
pub const ISO_TILE_SIZE: usize = TILE_WIDTH * TILE_HEIGHT / 2;
/// Bytes in the unpacked rectangle.
pub const TILE_PIXELS: usize = TILE_WIDTH * TILE_HEIGHT;

const DIAMOND_ROWS: usize = TILE_HEIGHT - 1;

/// Visible width of diamond row `y`.
pub fn row_width(y: usize) -> usize {
    let half = TILE_WIDTH / 4 - 1;
    if y >= DIAMOND_ROWS {
        0
    } else if y <= half {
        4 * (y + 1)
    } else {
        4 * (DIAMOND_ROWS - y)
    }
}

/// Read one diamond from `reader` into `rect`, leaving pixels outside it untouched.
pub fn read_iso_to_rect(reader: &mut BoundedReader<'_>, rect: &mut [u8; TILE_PIXELS]) -> Result<()> {
    let diamond = reader.read_bytes(ISO_TILE_SIZE)?;
    let mut consumed = 0;
    for (y, row) in rect.chunks_exact_mut(TILE_WIDTH).take(DIAMOND_ROWS).enumerate() {
        let width = row_width(y);
        let margin = (TILE_WIDTH - width) / 2;
        row[margin..margin + width].copy_from_slice(&diamond[consumed..consumed + width]);
        consumed += width;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ra2_data::ReadError;

    #[test]
    fn row_widths_form_a_diamond() {
        let widths: Vec<_> = (0..TILE_HEIGHT).map(row_width).collect();
        assert_eq!(widths[0], 4);
        assert_eq!(widths[13], 56);
        assert_eq!(widths[14], 60);
        assert_eq!(widths[15], 56);
        assert_eq!(widths[28], 4);
        assert_eq!(widths[29], 0);
        assert_eq!(widths.iter().sum::<usize>(), ISO_TILE_SIZE);
    }

    #[test]
    fn rows_are_centred() {
        let diamond: Vec<u8> = (0..ISO_TILE_SIZE).map(|i| (i % 250) as u8 + 1).collect();
        let mut rect = [0u8; TILE_PIXELS];
        read_iso_to_rect(&mut BoundedReader::new(&diamond), &mut rect).unwrap();

        assert_eq!(&rect[..28], &[0; 28]);
        assert_eq!(&rect[28..32], &[1, 2, 3, 4]);
        assert_eq!(&rect[32..60], &[0; 28]);
        // Row 14 spans the whole width.
        assert!(rect[14 * TILE_WIDTH..15 * TILE_WIDTH].iter().all(|&p| p != 0));
        assert!(rect[29 * TILE_WIDTH..].iter().all(|&p| p == 0));
        assert_eq!(rect.iter().filter(|&&p| p != 0).count(), ISO_TILE_SIZE);
    }

    #[test]
    fn short_diamond() {
        let mut rect = [0u8; TILE_PIXELS];
        let err = read_iso_to_rect(&mut BoundedReader::new(&[1; 899]), &mut rect).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Read(ReadError::TruncatedInput { wanted: 900, .. })
        ));
    }
}
