use pretty_assertions::assert_eq;
use ra2_map::{Error, MapPack, PreviewImage, parse_cells};
use test_case::test_case;

fn section(payload: &[u8], decompressed: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend(&(payload.len() as u16).to_le_bytes());
    data.extend(&decompressed.to_le_bytes());
    data.extend(payload);
    data
}

#[test_case("PreviewPack", MapPack::PreviewPack ; "preview")]
#[test_case("isomappack5", MapPack::IsoMapPack5 ; "iso lowercase")]
#[test_case("OVERLAYPACK", MapPack::OverlayPack ; "overlay uppercase")]
#[test_case("OverlayDataPack", MapPack::OverlayDataPack ; "overlay data")]
fn section_names_parse(name: &str, expected: MapPack) {
    assert_eq!(name.parse::<MapPack>().unwrap(), expected);
}

#[test]
fn unknown_section_name() {
    assert!(matches!(
        "Digest".parse::<MapPack>(),
        Err(Error::UnknownPack(name)) if name == "Digest"
    ));
}

#[test]
fn overlay_pack_concatenates_format80_sections() {
    // A 512 cell overlay split across two sections, all 0xFF (no overlay).
    let mut packed = section(&[0xFE, 0x00, 0x01, 0xFF, 0x80], 256);
    packed.extend(section(&[0xFE, 0x00, 0x01, 0xFF, 0x80], 256));
    let overlay = MapPack::OverlayPack.unpack(&packed).unwrap();
    assert_eq!(overlay.len(), 512);
    assert!(overlay.iter().all(|&b| b == 0xFF));
}

#[test]
fn overlay_pack_errors_carry_section_index() {
    let mut packed = section(&[0xFE, 8, 0, 5, 0x80], 8);
    packed.extend(section(&[0xFE, 8, 0, 5, 0x80], 9));
    assert!(matches!(
        MapPack::OverlayDataPack.unpack(&packed),
        Err(Error::Pack(ra2_pack::Error::SectionSizeMismatch {
            index: 1,
            expected: 9,
            actual: 8,
        }))
    ));
}

#[test]
fn cells_from_unpacked_data() {
    let mut data = Vec::new();
    for x in 0..3i16 {
        data.extend(&x.to_le_bytes());
        data.extend(&7i16.to_le_bytes());
        data.extend(&(x * 10).to_le_bytes());
        data.extend(&[0, 0, 1, 2, 0]);
    }
    let cells = parse_cells(&data).unwrap();
    assert_eq!(
        cells.iter().map(|c| (c.x, c.y, c.tile)).collect::<Vec<_>>(),
        vec![(0, 7, 0), (1, 7, 10), (2, 7, 20)]
    );
    assert!(cells.iter().all(|c| c.sub_tile == 1 && c.z == 2));
}

#[cfg(feature = "lzo")]
#[test]
fn preview_pack_unpacks_lzo_rgb() {
    // Twelve 'a' bytes make a 2x2 RGB thumbnail.
    let lzo = [21, b'a', b'a', b'a', b'a', 0xE0, 0x00, 0x11, 0x00, 0x00];
    let image = PreviewImage::from_pack(&section(&lzo, 12), 2, 2).unwrap();
    assert_eq!(image.pixel(0, 0), Some([b'a'; 3]));
    assert_eq!(image.pixel(1, 1), Some([b'a'; 3]));
}

#[cfg(feature = "lzo")]
#[test]
fn preview_pack_too_small_for_geometry() {
    let lzo = [21, b'a', b'a', b'a', b'a', 0xE0, 0x00, 0x11, 0x00, 0x00];
    assert!(matches!(
        PreviewImage::from_pack(&section(&lzo, 12), 4, 4),
        Err(Error::PreviewSize {
            expected: 48,
            actual: 12,
            ..
        })
    ));
}
