use std::io::Write;

use pretty_assertions::assert_eq;
use ra2_data::ReadError;
use ra2_tmp::{Bounds, Canvas, CompositeOptions, Error, ISO_TILE_SIZE, TmpFile};

#[derive(Clone)]
struct TestTile {
    x: i32,
    y: i32,
    height: u8,
    fill: u8,
    z: u8,
    extra: Option<(i32, i32, u32, u32, u8)>,
}

fn tile(x: i32, y: i32, height: u8, fill: u8) -> TestTile {
    TestTile {
        x,
        y,
        height,
        fill,
        z: height + 1,
        extra: None,
    }
}

impl TestTile {
    fn with_extra(mut self, x: i32, y: i32, width: u32, height: u32, fill: u8) -> Self {
        self.extra = Some((x, y, width, height, fill));
        self
    }

    fn encode(&self) -> Vec<u8> {
        let (ex, ey, ew, eh, efill) = self.extra.unwrap_or((0, 0, 0, 0, 0));
        let mut out = Vec::new();
        out.extend(&self.x.to_le_bytes());
        out.extend(&self.y.to_le_bytes());
        out.extend(&[0u8; 12]);
        out.extend(&ex.to_le_bytes());
        out.extend(&ey.to_le_bytes());
        out.extend(&ew.to_le_bytes());
        out.extend(&eh.to_le_bytes());
        out.extend(&u32::from(self.extra.is_some()).to_le_bytes());
        out.extend(&[self.height, 0, 0]);
        out.extend(&[0u8; 9]);
        out.extend(vec![self.fill; ISO_TILE_SIZE]);
        out.extend(vec![self.z; ISO_TILE_SIZE]);
        if self.extra.is_some() {
            out.extend(vec![efill; (ew * eh) as usize]);
        }
        out
    }
}

fn build_tmp(tiles_x: u32, tiles: &[Option<TestTile>]) -> Vec<u8> {
    let tiles_y = tiles.len() as u32 / tiles_x;
    let mut out = Vec::new();
    for v in [tiles_x, tiles_y, 60, 30] {
        out.extend(&v.to_le_bytes());
    }
    let bodies: Vec<Vec<u8>> = tiles
        .iter()
        .map(|t| t.as_ref().map(TestTile::encode).unwrap_or_default())
        .collect();
    let mut offset = out.len() + 4 * tiles.len();
    for body in &bodies {
        let value = if body.is_empty() { 0 } else { offset as u32 };
        out.extend(&value.to_le_bytes());
        offset += body.len();
    }
    for body in bodies {
        out.extend(body);
    }
    out
}

#[test]
fn empty_slots_are_transparent() {
    let data = build_tmp(2, &[Some(tile(0, 0, 0, 5)), None, None, Some(tile(30, 15, 0, 6))]);
    let tmp = TmpFile::parse(&data).unwrap();
    assert_eq!(tmp.tile_count(), 4);
    assert_eq!(tmp.tiles().count(), 2);
    assert!(tmp.tile(1).unwrap().is_none());
    assert_eq!(tmp.offsets()[2], 0);
    assert_eq!(tmp.tile_at(1, 1).unwrap().unwrap().index, 3);
    assert!(matches!(
        tmp.tile(4),
        Err(Error::TileIndexOutOfRange { index: 4, count: 4 })
    ));
    assert!(tmp.tile_at(2, 0).is_err());
}

#[test]
fn tile_pixels_follow_diamond() {
    let tmp = TmpFile::parse(&build_tmp(1, &[Some(tile(0, 0, 3, 9))])).unwrap();
    let t = tmp.tile(0).unwrap().unwrap();
    assert_eq!(t.pixel(0, 14).unwrap(), 9);
    assert_eq!(t.pixel(0, 0).unwrap(), 0);
    assert_eq!(t.pixel(30, 0).unwrap(), 9);
    assert_eq!(t.pixel(30, 29).unwrap(), 0);
    assert_eq!(t.height_pixel(30, 14).unwrap(), 4);
    assert!(matches!(t.pixel(60, 0), Err(Error::PixelOutOfRange { .. })));
    assert!(matches!(t.extra_pixel(0, 0), Err(Error::NoExtraData { tile: 0 })));
}

#[test]
fn extra_pixels_are_bounds_checked() {
    let data = build_tmp(1, &[Some(tile(0, 0, 0, 1).with_extra(5, 5, 3, 2, 7))]);
    let tmp = TmpFile::parse(&data).unwrap();
    let t = tmp.tile(0).unwrap().unwrap();
    assert_eq!(t.extra().unwrap().len(), 6);
    assert_eq!(t.extra_pixel(2, 1).unwrap(), 7);
    assert!(matches!(
        t.extra_pixel(3, 0),
        Err(Error::PixelOutOfRange { x: 3, width: 3, .. })
    ));
}

#[test]
fn tiles_below_max_height_move_down() {
    let data = build_tmp(2, &[Some(tile(0, 0, 2, 1)), Some(tile(60, 0, 0, 2))]);
    let tmp = TmpFile::parse(&data).unwrap();
    assert_eq!(tmp.max_height(), Some(2));

    let top = tmp.tile(0).unwrap().unwrap();
    let low = tmp.tile(1).unwrap().unwrap();
    assert_eq!(top.header.y_at(2), 0);
    assert_eq!(low.header.y_at(2), 30);

    assert_eq!(
        tmp.tile_bounds(),
        Some(Bounds {
            min_x: 0,
            min_y: 0,
            max_x: 120,
            max_y: 60
        })
    );
    assert_eq!(tmp.extra_bounds(), None);
    assert_eq!(tmp.total_size(), (120, 60));
}

#[test]
fn extras_widen_the_bounds() {
    let data = build_tmp(
        2,
        &[
            Some(tile(0, 0, 1, 1).with_extra(-5, -10, 10, 4, 3)),
            Some(tile(10, 0, 0, 2)),
        ],
    );
    let tmp = TmpFile::parse(&data).unwrap();
    assert_eq!(tmp.tile_bounds(), Some(Bounds::from_rect(0, 0, 70, 45)));
    assert_eq!(tmp.extra_bounds(), Some(Bounds::from_rect(-5, -10, 10, 4)));
    assert_eq!(tmp.bounds(), Some(Bounds::from_rect(-5, -10, 75, 55)));
    assert_eq!(tmp.total_size(), (75, 55));
}

#[test]
fn compositing_paints_each_extra_right_after_its_tile() {
    let data = build_tmp(
        2,
        &[
            Some(tile(0, 0, 0, 1).with_extra(25, 5, 10, 4, 3)),
            Some(tile(10, 0, 0, 2)),
        ],
    );
    let tmp = TmpFile::parse(&data).unwrap();
    let canvas = tmp.template(CompositeOptions::default()).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (70, 30));

    // Extra 0 covers tile 0
    assert_eq!(canvas.pixel(26, 5), Some(3));
    // Tile 1 is painted after extra 0
    assert_eq!(canvas.pixel(30, 5), Some(2));
    assert_eq!(canvas.pixel(30, 14), Some(2));
    assert_eq!(canvas.pixel(5, 14), Some(1));
    // Corners outside every diamond stay blank
    assert_eq!(canvas.pixel(0, 0), Some(0));
}

#[test]
fn layers_can_be_skipped() {
    let data = build_tmp(1, &[Some(tile(0, 0, 0, 1).with_extra(0, 0, 60, 30, 8))]);
    let tmp = TmpFile::parse(&data).unwrap();

    let tiles_only = tmp
        .template(CompositeOptions {
            tiles: true,
            extras: false,
        })
        .unwrap();
    assert_eq!(tiles_only.pixel(30, 14), Some(1));
    assert_eq!(tiles_only.pixel(0, 0), Some(0));

    let extras_only = tmp
        .template(CompositeOptions {
            tiles: false,
            extras: true,
        })
        .unwrap();
    assert!(extras_only.pixels().iter().all(|&p| p == 8));
}

#[test]
fn small_canvas_is_an_error() {
    let data = build_tmp(2, &[Some(tile(0, 0, 0, 1)), Some(tile(60, 0, 0, 2))]);
    let tmp = TmpFile::parse(&data).unwrap();
    let mut canvas = Canvas::new(100, 30).unwrap();
    assert!(matches!(
        tmp.composite(&mut canvas, CompositeOptions::default()),
        Err(Error::TileOutOfRange { tile: 1, x: 60, .. })
    ));
}

#[test]
fn far_apart_tiles_are_too_large_for_a_template() {
    let data = build_tmp(
        2,
        &[
            Some(tile(i32::MIN, i32::MIN, 0, 1)),
            Some(tile(i32::MAX, i32::MAX, 0, 2)),
        ],
    );
    let tmp = TmpFile::parse(&data).unwrap();
    let (width, height) = tmp.total_size();
    assert!(width > u64::from(u32::MAX) && height > u64::from(u32::MAX));

    let error = tmp.template(CompositeOptions::default()).unwrap_err();
    assert!(matches!(error, Error::TemplateTooLarge { .. }));
    assert!(error.is_corruption());
    assert!(matches!(
        tmp.height_template(),
        Err(Error::TemplateTooLarge { .. })
    ));
    assert!(matches!(tmp.new_canvas(), Err(Error::TemplateTooLarge { .. })));
}

#[test]
fn height_template_uses_z_data() {
    let data = build_tmp(2, &[Some(tile(0, 0, 1, 1)), Some(tile(60, 0, 0, 2))]);
    let tmp = TmpFile::parse(&data).unwrap();
    let heights = tmp.height_template().unwrap();
    assert_eq!((heights.width(), heights.height()), (120, 45));
    assert_eq!(heights.pixel(30, 14), Some(2));
    assert_eq!(heights.pixel(90, 29), Some(1));
}

#[test]
fn compositing_is_repeatable() {
    let data = build_tmp(2, &[Some(tile(0, 0, 0, 1)), Some(tile(10, 4, 0, 2))]);
    let tmp = TmpFile::parse(&data).unwrap();
    let first = tmp.template(CompositeOptions::default()).unwrap();
    let second = TmpFile::parse(&data)
        .unwrap()
        .template(CompositeOptions::default())
        .unwrap();
    assert_eq!(first.into_pixels(), second.into_pixels());
}

#[test]
fn truncated_tile_names_its_index() {
    let mut data = build_tmp(2, &[Some(tile(0, 0, 0, 1)), Some(tile(60, 0, 0, 2))]);
    data.truncate(data.len() - 100);
    let err = TmpFile::parse(&data).unwrap_err();
    assert!(err.is_corruption());
    match err {
        Error::Tile { index, source } => {
            assert_eq!(index, 1);
            assert!(matches!(*source, Error::Read(ReadError::TruncatedInput { .. })));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn shp_header_is_recognised() {
    let mut data = vec![0u8, 0, 1, 0];
    data.extend([0u8; 12]);
    assert!(matches!(TmpFile::parse(&data), Err(Error::LooksLikeShp)));
}

#[test]
fn all_empty_grid_has_no_geometry() {
    let tmp = TmpFile::parse(&build_tmp(2, &[None, None])).unwrap();
    assert_eq!(tmp.max_height(), None);
    assert_eq!(tmp.bounds(), None);
    assert_eq!(tmp.total_size(), (0, 0));
    assert!(tmp.template(CompositeOptions::default()).unwrap().pixels().is_empty());
}

#[test]
fn open_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&build_tmp(1, &[Some(tile(0, 0, 0, 1))])).unwrap();
    let tmp = TmpFile::open(file.path()).unwrap();
    assert_eq!(tmp.tiles().count(), 1);
    assert!(tmp.to_string().starts_with("Contains 1 x 1 tiles of size 60 x 30\n"));
}
