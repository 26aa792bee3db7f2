//! Header and metadata round-trips, in memory and through files.

use proptest::collection::vec;
use proptest::prelude::*;
use smade_blueprint::{
    Blueprint, CodecError, EntityType, Header, Meta, MetaDockedEntry, HEADER_FILE_NAME,
    META_FILE_NAME,
};
use smade_tag::{ByteStream, TagRoot};
use smade_test_utils::strategies::arb_root;
use smade_test_utils::{every_kind_tree, sample_elements, ScratchDir};

// ── Helpers ─────────────────────────────────────────────────────

fn asteroid() -> Header {
    Header {
        version: 1,
        entity_type: EntityType::Asteroid,
        bbox_min: [-1.0, -2.0, -3.0],
        bbox_max: [4.0, 5.0, 6.0],
        elements: sample_elements(),
    }
}

fn docked(name: &str, x: i32) -> MetaDockedEntry {
    MetaDockedEntry {
        name: name.to_string(),
        position: [x, 0, -x],
        size: [1.5, 2.0, 8.0],
        style: 1,
        orientation: 4,
    }
}

fn encode_header(header: &Header) -> Vec<u8> {
    let mut stream = ByteStream::new(Vec::new());
    header.encode(&mut stream).unwrap();
    stream.into_inner()
}

fn encode_meta(meta: &Meta) -> Vec<u8> {
    let mut stream = ByteStream::new(Vec::new());
    meta.encode(&mut stream).unwrap();
    stream.into_inner()
}

// ── Header ──────────────────────────────────────────────────────

#[test]
fn asteroid_header_pairs_are_written_in_ascending_order() {
    let header = asteroid();
    let bytes = encode_header(&header);

    assert_eq!(&bytes[32..36], 3u32.to_be_bytes());
    let pairs: Vec<(u16, u32)> = bytes[36..]
        .chunks_exact(6)
        .map(|c| {
            (
                u16::from_be_bytes([c[0], c[1]]),
                u32::from_be_bytes([c[2], c[3], c[4], c[5]]),
            )
        })
        .collect();
    assert_eq!(pairs, [(3, 42), (7, 800), (13, 900)]);

    let got = Header::decode(&mut ByteStream::new(bytes.as_slice())).unwrap();
    assert_eq!(got, header);
    assert_eq!(got.elements, sample_elements());
    assert_eq!(got.bbox_min, [-1.0, -2.0, -3.0]);
}

#[test]
fn header_bytes_do_not_depend_on_insertion_order() {
    let forward = asteroid();
    let mut reversed = asteroid();
    reversed.elements = sample_elements().into_iter().rev().collect();
    assert_eq!(encode_header(&forward), encode_header(&reversed));
}

#[test]
fn header_file_roundtrip() {
    let dir = ScratchDir::new("header");
    let path = dir.join(HEADER_FILE_NAME);
    asteroid().save(&path).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 36 + 3 * 6);
    assert_eq!(Header::load(&path).unwrap(), asteroid());
}

#[test]
fn missing_header_file_is_io_error() {
    let dir = ScratchDir::new("missing");
    let err = Header::load(dir.join(HEADER_FILE_NAME)).unwrap_err();
    assert!(matches!(err, CodecError::Io(_)));
}

proptest! {
    #[test]
    fn header_roundtrips(
        version in any::<i32>(),
        code in 0..5i32,
        corners in any::<[i16; 6]>(),
        pairs in vec((any::<u16>(), any::<u32>()), 0..64),
    ) {
        let header = Header {
            version,
            entity_type: EntityType::from_code(code).unwrap(),
            bbox_min: [corners[0].into(), corners[1].into(), corners[2].into()],
            bbox_max: [corners[3].into(), corners[4].into(), corners[5].into()],
            elements: pairs.into_iter().collect(),
        };
        let bytes = encode_header(&header);
        prop_assert_eq!(bytes.len(), 36 + 6 * header.elements.len());
        let got = Header::decode(&mut ByteStream::new(bytes.as_slice())).unwrap();
        let keys: Vec<u16> = got.elements.keys().copied().collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(got, header);
    }
}

// ── Meta ────────────────────────────────────────────────────────

#[test]
fn bare_meta_is_five_bytes() {
    let meta = Meta {
        version: 0,
        docked: None,
        tags: None,
    };
    let bytes = encode_meta(&meta);
    assert_eq!(bytes, [0x00, 0x00, 0x00, 0x00, 0x01]);
    assert_eq!(
        Meta::decode(&mut ByteStream::new(bytes.as_slice())).unwrap(),
        meta
    );
}

#[test]
fn meta_with_docking_and_tags_roundtrips() {
    let meta = Meta {
        version: 3,
        docked: Some(vec![docked("turret", 5), docked("shuttle", -12)]),
        tags: Some(every_kind_tree()),
    };
    let bytes = encode_meta(&meta);

    // Docking comes first, the finish byte last.
    assert_eq!(bytes[4], 3);
    assert_eq!(*bytes.last().unwrap(), 1);

    let got = Meta::decode(&mut ByteStream::new(bytes.as_slice())).unwrap();
    assert_eq!(got.version, 3);
    assert_eq!(got.docked.as_deref(), meta.docked.as_deref());
    assert_eq!(got.tags, meta.tags);
}

#[test]
fn tags_before_docking_stop_decoding() {
    // Hand-built record: segment manager first, then a docking section.
    let mut bytes = vec![0, 0, 0, 9, 2];
    let mut stream = ByteStream::new(Vec::new());
    every_kind_tree().encode(&mut stream).unwrap();
    bytes.extend(stream.into_inner());
    bytes.extend([3, 0, 0, 0, 0, 1]);

    let got = Meta::decode(&mut ByteStream::new(bytes.as_slice())).unwrap();
    assert_eq!(got.tags, Some(every_kind_tree()));
    assert_eq!(got.docked, None);
}

#[test]
fn deeply_nested_tag_section_is_an_error() {
    let mut bytes = vec![0u8, 0, 0, 0, 2, 0, 0];
    bytes.extend(std::iter::repeat(0xF3).take(100_000));
    assert!(matches!(
        Meta::decode(&mut ByteStream::new(bytes.as_slice())),
        Err(CodecError::MalformedRecord { .. })
    ));
}

#[test]
fn blueprint_directory_roundtrip() {
    let dir = ScratchDir::new("blueprint");
    let blueprint = Blueprint {
        path: dir.path().to_path_buf(),
        header: asteroid(),
        meta: Some(Meta {
            version: 0,
            docked: Some(vec![docked("dock", 1)]),
            tags: Some(TagRoot::new(every_kind_tree().root)),
        }),
    };
    blueprint.save(dir.path()).unwrap();
    assert!(dir.join(META_FILE_NAME).is_file());
    assert_eq!(Blueprint::open(dir.path()).unwrap(), blueprint);
}

#[test]
fn blueprint_without_meta_file() {
    let dir = ScratchDir::new("header-only");
    asteroid().save(dir.join(HEADER_FILE_NAME)).unwrap();
    let got = Blueprint::open(dir.path()).unwrap();
    assert_eq!(got.header, asteroid());
    assert!(got.meta.is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn meta_roundtrips(
        version in any::<i32>(),
        names in vec("[a-z]{0,10}", 0..4),
        root in arb_root(),
    ) {
        let meta = Meta {
            version,
            docked: Some(names.iter().enumerate().map(|(i, n)| docked(n, i as i32)).collect()),
            tags: Some(root),
        };
        let bytes = encode_meta(&meta);
        prop_assert_eq!(Meta::decode(&mut ByteStream::new(bytes.as_slice())).unwrap(), meta);
    }
}
