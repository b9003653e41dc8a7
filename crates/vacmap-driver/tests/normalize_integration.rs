//! Integration test: raw buffer → decode → normalize
//!
//! Builds a wire buffer by hand, runs it through the decoder, then checks
//! the record the presentation layer would receive.

use vacmap_decoder::MapDecoder;
use vacmap_driver::{DefaultNormalizer, MapNormalizer};

fn push_frame(buf: &mut Vec<u8>, block_type: u16, body: &[u8]) {
    buf.extend_from_slice(&block_type.to_le_bytes());
    buf.extend_from_slice(&u16::try_from(body.len()).unwrap().to_le_bytes());
    buf.extend_from_slice(body);
}

fn words(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[test]
fn full_pipeline_decode_normalize() {
    let mut image = words(&[3000, 1500, 2, 2, 0, 0, 0]);
    image.extend_from_slice(&[0, 1, 1, 0]);

    let mut buf = vec![0u8; 20];
    push_frame(&mut buf, 1, &words(&[100, 200, 4500]));
    push_frame(&mut buf, 2, &image);
    push_frame(&mut buf, 8, &words(&[1000, 2000, 9000]));
    push_frame(&mut buf, 3, &words(&[0, 0, 0, 1, 10, 20]));

    let decoded = MapDecoder::decode(&buf).expect("decoding should succeed");
    assert!(decoded.is_complete());

    let common = DefaultNormalizer.normalize(&decoded.map);
    assert_eq!((common.width, common.height), (2, 2));
    assert_eq!(common.origin_x, 1.5);
    assert_eq!(common.origin_y, 3.0);
    assert_eq!(common.pixels, vec![0, 1, 1, 0]);

    let robot = common.robot_position.expect("robot pose should be present");
    assert_eq!((robot.x, robot.y, robot.angle), (1.0, 2.0, 90.0));

    let charger = common.charger_position.expect("charger pose should be present");
    assert_eq!((charger.x, charger.y, charger.angle), (0.1, 0.2, 45.0));

    // The path is decoded but is not part of the presentation record.
    assert_eq!(decoded.map.path.len(), 1);
}

#[test]
fn map_without_image_normalizes_to_empty_raster() {
    let mut buf = vec![0u8; 20];
    push_frame(&mut buf, 8, &words(&[0, 0, 0]));
    buf.resize(48, 0);

    let decoded = MapDecoder::decode(&buf).expect("decoding should succeed");
    let common = DefaultNormalizer.normalize(&decoded.map);
    assert_eq!((common.width, common.height), (0, 0));
    assert!(common.pixels.is_empty());
    assert!(common.robot_position.is_some());
    assert!(common.charger_position.is_none());
}
