//! 8-bit paint target for tile templates

use custom_debug::Debug;
use ra2_utils::debug;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    #[debug(with = debug::trimmed_collection_fmt)]
    pixels: Vec<u8>,
}

impl Canvas {
    /// A zeroed `width * height` canvas.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(Error::TemplateTooLarge {
                width: width as u64,
                height: height as u64,
            })?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Copy the non-zero pixels of a `width`-wide image to `(x, y)`.
    ///
    /// The whole image must fit; nothing is clipped.
    pub(crate) fn paint(
        &mut self,
        tile: usize,
        x: i64,
        y: i64,
        width: u32,
        height: u32,
        source: &[u8],
    ) -> Result<()> {
        let fits = x >= 0
            && y >= 0
            && x + i64::from(width) <= self.width as i64
            && y + i64::from(height) <= self.height as i64;
        if !fits {
            return Err(Error::TileOutOfRange {
                tile,
                x,
                y,
                width,
                height,
                canvas_width: self.width,
                canvas_height: self.height,
            });
        }
        if width == 0 {
            return Ok(());
        }

        let (x, y) = (x as usize, y as usize);
        for (row, line) in source.chunks_exact(width as usize).take(height as usize).enumerate() {
            let start = (y + row) * self.width + x;
            for (dst, &src) in self.pixels[start..start + line.len()].iter_mut().zip(line) {
                if src != 0 {
                    *dst = src;
                }
            }
        }
        Ok(())
    }
}
