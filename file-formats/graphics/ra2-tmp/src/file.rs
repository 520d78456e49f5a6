use std::fmt;
use std::path::Path;

use ra2_data::BoundedReader;

use crate::canvas::Canvas;
use crate::geometry::{Bounds, union};
use crate::header::TmpHeader;
use crate::iso::{TILE_HEIGHT, TILE_WIDTH};
use crate::tile::Tile;
use crate::{Error, Result};

/// Which layers [`TmpFile::composite`] paints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeOptions {
    pub tiles: bool,
    pub extras: bool,
}

impl Default for CompositeOptions {
    fn default() -> Self {
        Self {
            tiles: true,
            extras: true,
        }
    }
}

/// A decoded isometric tile set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmpFile {
    pub header: TmpHeader,
    offsets: Vec<u32>,
    tiles: Vec<Option<Tile>>,
}

impl TmpFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::parse(&data)
    }

    /// Parse the header, the offset table and every non-empty tile.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BoundedReader::new(data);
        let header = TmpHeader::read(&mut reader)?;
        let offsets: Vec<u32> = reader.read_vec(header.tile_count())?;
        log::debug!(
            "TMP with {} x {} tiles",
            header.tiles_x,
            header.tiles_y
        );

        let mut tiles = Vec::with_capacity(offsets.len());
        for (index, &offset) in offsets.iter().enumerate() {
            if offset == 0 {
                tiles.push(None);
                continue;
            }
            let tile = reader
                .seek(offset as usize)
                .map_err(Error::from)
                .and_then(|()| Tile::read(&mut reader, index))
                .map_err(|e| e.in_tile(index))?;
            log::debug!(
                "Tile {} at offset {}: ({}, {}) height {}{}",
                index,
                offset,
                tile.header.x,
                tile.header.y,
                tile.header.height,
                if tile.header.has_extra() { ", has extra" } else { "" }
            );
            tiles.push(Some(tile));
        }

        Ok(Self {
            header,
            offsets,
            tiles,
        })
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// File offset of each tile, 0 for empty tiles.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Non-empty tiles in index order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    /// The tile at `index`, `None` when the slot is empty.
    pub fn tile(&self, index: usize) -> Result<Option<&Tile>> {
        self.tiles
            .get(index)
            .map(Option::as_ref)
            .ok_or(Error::TileIndexOutOfRange {
                index,
                count: self.tiles.len(),
            })
    }

    pub fn tile_at(&self, x: u32, y: u32) -> Result<Option<&Tile>> {
        if x >= self.header.tiles_x || y >= self.header.tiles_y {
            return Err(Error::TileIndexOutOfRange {
                index: y as usize * self.header.tiles_x as usize + x as usize,
                count: self.tiles.len(),
            });
        }
        self.tile(y as usize * self.header.tiles_x as usize + x as usize)
    }

    /// Highest tile height, `None` if every tile is empty.
    pub fn max_height(&self) -> Option<u8> {
        self.tiles().map(|tile| tile.header.height).max()
    }

    fn tile_bounds_at(&self, max_height: u8) -> Option<Bounds> {
        union(self.tiles().map(|tile| {
            Bounds::from_rect(
                i64::from(tile.header.x),
                tile.header.y_at(max_height),
                TILE_WIDTH as u32,
                TILE_HEIGHT as u32,
            )
        }))
    }

    fn extra_bounds_at(&self, max_height: u8) -> Option<Bounds> {
        union(self.tiles().filter(|tile| tile.header.has_extra()).map(|tile| {
            Bounds::from_rect(
                i64::from(tile.header.extra_x),
                tile.header.extra_y_at(max_height),
                tile.header.extra_width,
                tile.header.extra_height,
            )
        }))
    }

    /// Box covering every tile's 60x30 footprint.
    pub fn tile_bounds(&self) -> Option<Bounds> {
        self.tile_bounds_at(self.max_height()?)
    }

    /// Box covering every extra image, `None` when no tile has one.
    pub fn extra_bounds(&self) -> Option<Bounds> {
        self.extra_bounds_at(self.max_height()?)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let max_height = self.max_height()?;
        union(
            self.tile_bounds_at(max_height)
                .into_iter()
                .chain(self.extra_bounds_at(max_height)),
        )
    }

    /// Width and height of [`bounds`](Self::bounds).
    pub fn total_size(&self) -> (u64, u64) {
        self.bounds()
            .map_or((0, 0), |bounds| (bounds.width(), bounds.height()))
    }

    /// A blank canvas exactly the size of the template.
    pub fn new_canvas(&self) -> Result<Canvas> {
        let (width, height) = self.total_size();
        match (usize::try_from(width), usize::try_from(height)) {
            (Ok(w), Ok(h)) => Canvas::new(w, h),
            _ => Err(Error::TemplateTooLarge { width, height }),
        }
    }

    /// Paint every tile and extra onto `canvas`, relative to the top-left of
    /// [`bounds`](Self::bounds).
    ///
    /// Tiles are visited in index order and each tile's extra is painted
    /// right after the tile itself, so later tiles win where they overlap.
    /// Zero pixels are transparent.
    pub fn composite(&self, canvas: &mut Canvas, options: CompositeOptions) -> Result<()> {
        let (Some(max_height), Some(origin)) = (self.max_height(), self.bounds()) else {
            return Ok(());
        };
        for tile in self.tiles() {
            let h = &tile.header;
            if options.tiles {
                canvas.paint(
                    tile.index,
                    i64::from(h.x) - origin.min_x,
                    h.y_at(max_height) - origin.min_y,
                    TILE_WIDTH as u32,
                    TILE_HEIGHT as u32,
                    tile.pixels(),
                )?;
            }
            if let (true, Some(extra)) = (options.extras, tile.extra()) {
                canvas.paint(
                    tile.index,
                    i64::from(h.extra_x) - origin.min_x,
                    h.extra_y_at(max_height) - origin.min_y,
                    h.extra_width,
                    h.extra_height,
                    extra,
                )?;
            }
        }
        Ok(())
    }

    /// Paint every tile's z data the way [`composite`](Self::composite) paints its pixels.
    pub fn composite_heights(&self, canvas: &mut Canvas) -> Result<()> {
        let (Some(max_height), Some(origin)) = (self.max_height(), self.bounds()) else {
            return Ok(());
        };
        for tile in self.tiles() {
            canvas.paint(
                tile.index,
                i64::from(tile.header.x) - origin.min_x,
                tile.header.y_at(max_height) - origin.min_y,
                TILE_WIDTH as u32,
                TILE_HEIGHT as u32,
                tile.heights(),
            )?;
        }
        Ok(())
    }

    pub fn template(&self, options: CompositeOptions) -> Result<Canvas> {
        let mut canvas = self.new_canvas()?;
        self.composite(&mut canvas, options)?;
        Ok(canvas)
    }

    pub fn height_template(&self) -> Result<Canvas> {
        let mut canvas = self.new_canvas()?;
        self.composite_heights(&mut canvas)?;
        Ok(canvas)
    }
}

impl fmt::Display for TmpFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Contains {} x {} tiles of size {} x {}",
            self.header.tiles_x, self.header.tiles_y, self.header.tile_width, self.header.tile_height
        )?;
        for tile in self.tiles() {
            let h = &tile.header;
            writeln!(
                f,
                "Tile {} - offset {}: ({}, {}), height {}, terrain {}, ramp {}, flags 0x{:08X}",
                tile.index,
                self.offsets[tile.index],
                h.x,
                h.y,
                h.height,
                h.terrain_type,
                h.ramp_type,
                h.flags.bits()
            )?;
            if h.has_extra() {
                writeln!(
                    f,
                    "  extra {} x {} at ({}, {})",
                    h.extra_width, h.extra_height, h.extra_x, h.extra_y
                )?;
            }
        }
        Ok(())
    }
}
