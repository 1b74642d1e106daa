//! Integration tests for image-file preprocessing: decoding ordinary
//! image bytes into a normalized grayscale matrix.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, Luma};
use mlp_digits::io::image_bytes_to_grayscale_matrix;
use mlp_digits::MlpError;

/// Encodes a grayscale image as PNG bytes in memory.
fn png_bytes(img: GrayImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn test_png_round_trip_shape_and_normalization() {
    let mut img = GrayImage::new(28, 28);
    img.put_pixel(0, 0, Luma([255]));
    img.put_pixel(27, 27, Luma([255]));
    img.put_pixel(5, 3, Luma([128]));
    let bytes = png_bytes(img);

    let m = image_bytes_to_grayscale_matrix(&bytes, 28, 28).unwrap();
    assert_eq!(m.rows(), 28);
    assert_eq!(m.cols(), 28);
    assert!(m.as_slice().iter().all(|&p| (0.0..=1.0).contains(&p)));

    // Pixel (x, y) lands at matrix element (row = y, col = x).
    assert!((m.at(0, 0).unwrap() - 1.0).abs() < 1e-2);
    assert!((m.at(27, 27).unwrap() - 1.0).abs() < 1e-2);
    assert!((m.at(3, 5).unwrap() - 128.0 / 255.0).abs() < 1e-2);
    assert!(m.at(14, 14).unwrap().abs() < 1e-2);
}

#[test]
fn test_decode_resizes_to_requested_dimensions() {
    let bytes = png_bytes(GrayImage::from_pixel(8, 8, Luma([255])));

    let m = image_bytes_to_grayscale_matrix(&bytes, 28, 28).unwrap();
    assert_eq!(m.rows(), 28);
    assert_eq!(m.cols(), 28);
    // A uniformly white source stays white after resampling.
    assert!(m.as_slice().iter().all(|&p| (p - 1.0).abs() < 1e-2));
}

#[test]
fn test_undecodable_bytes_are_rejected() {
    let garbage = [0xDEu8, 0xAD, 0xBE, 0xEF, 0x00, 0x01];
    assert!(matches!(
        image_bytes_to_grayscale_matrix(&garbage, 28, 28),
        Err(MlpError::Image(_))
    ));
}
