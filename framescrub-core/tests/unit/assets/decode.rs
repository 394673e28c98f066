use std::io::Cursor;

use super::*;

fn encode(img: image::RgbaImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

#[test]
fn decode_png_dimensions_and_premul() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let frame = decode_frame(&encode(img, image::ImageFormat::Png)).unwrap();

    assert_eq!((frame.width, frame.height), (1, 1));
    assert_eq!(frame.origin, FrameOrigin::Decoded);
    assert_eq!(
        frame.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn opaque_pixels_pass_through_unchanged() {
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([12, 34, 56, 255]));
    let frame = decode_frame(&encode(img, image::ImageFormat::Png)).unwrap();
    assert_eq!((frame.width, frame.height), (3, 2));
    assert!(
        frame
            .rgba8_premul
            .chunks_exact(4)
            .all(|px| px == [12, 34, 56, 255])
    );
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = decode_frame(b"definitely not a jpeg").unwrap_err();
    assert!(err.to_string().contains("decode frame"));
}

#[test]
fn premultiply_zeroes_transparent_colour() {
    let mut px = vec![200u8, 100, 50, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}
