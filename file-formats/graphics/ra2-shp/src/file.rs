use std::fmt;
use std::path::Path;

use custom_debug::Debug;
use ra2_data::BoundedReader;
use ra2_utils::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::decode::decode_frame;
use crate::header::{FrameHeader, ShpHeader};
use crate::{Error, Result};

/// A decoded sprite frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: FrameHeader,
    /// Row-major palette indices, `width * height` bytes
    #[debug(with = debug::trimmed_collection_fmt)]
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn width(&self) -> u16 {
        self.header.width
    }

    pub fn height(&self) -> u16 {
        self.header.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<u8> {
        if x >= self.width() as usize || y >= self.height() as usize {
            return Err(Error::PixelOutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.pixels[y * self.width() as usize + x])
    }
}

/// A fully decoded SHP file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShpFile {
    pub header: ShpHeader,
    frames: Vec<Frame>,
}

impl ShpFile {
    /// Read and decode a SHP file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::parse(&data)
    }

    /// Parse every header, then decode every frame.
    ///
    /// Any frame failing to decode fails the whole file. Callers wanting to
    /// skip bad frames can use [`parse_headers`] and [`decode_frame`] directly.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let (header, frame_headers) = parse_headers(data)?;

        #[cfg(feature = "parallel")]
        let iter = frame_headers.into_par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = frame_headers.into_iter();

        let frames = iter
            .enumerate()
            .map(|(index, header)| {
                let pixels = decode_frame(&header, data).map_err(|e| e.in_frame(index))?;
                log::debug!(
                    "Frame {}: {}x{} at ({}, {}), {}",
                    index,
                    header.width,
                    header.height,
                    header.x,
                    header.y,
                    header.compression
                );
                Ok(Frame { header, pixels })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { header, frames })
    }

    pub fn width(&self) -> u16 {
        self.header.width
    }

    pub fn height(&self) -> u16 {
        self.header.height
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Result<&Frame> {
        self.frames.get(index).ok_or(Error::FrameOutOfRange {
            index,
            count: self.frames.len(),
        })
    }

    pub fn pixel(&self, frame: usize, x: usize, y: usize) -> Result<u8> {
        self.frame(frame)?.pixel(x, y)
    }
}

impl fmt::Display for ShpFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SHP contains {} frames, {} x {} pixels",
            self.frames.len(),
            self.header.width,
            self.header.height
        )?;
        for (i, frame) in self.frames.iter().enumerate() {
            let h = &frame.header;
            writeln!(
                f,
                "  Frame {} - ({}, {}) size [{} {}], compression = {}",
                i,
                h.x,
                h.y,
                h.width,
                h.height,
                h.compression.id()
            )?;
        }
        Ok(())
    }
}

/// Read the file header and every frame header without decoding pixels.
pub fn parse_headers(data: &[u8]) -> Result<(ShpHeader, Vec<FrameHeader>)> {
    let mut reader = BoundedReader::new(data);
    let header: ShpHeader = reader.read()?;
    header.validate()?;
    log::debug!(
        "SHP with {} frames, {}x{}",
        header.frame_count,
        header.width,
        header.height
    );

    let frames = (0..header.frame_count as usize)
        .map(|index| FrameHeader::read(&mut reader, index))
        .collect::<Result<Vec<_>>>()?;
    Ok((header, frames))
}
