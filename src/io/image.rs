//! Image preprocessing: decode ordinary image files (PNG/JPEG/BMP/GIF)
//! into matrices ready for network inference.

use crate::error::{MlpError, Result};
use crate::math::matrix::Matrix;

/// Decodes image bytes, resizes to `width x height`, converts to
/// grayscale, and normalizes pixels to [0, 1].
///
/// Returns a `height x width` matrix; callers vectorize it before
/// feeding the network.
pub fn image_bytes_to_grayscale_matrix(bytes: &[u8], width: u32, height: u32) -> Result<Matrix> {
    let img = image::load_from_memory(bytes).map_err(|e| MlpError::Image(e.to_string()))?;
    let resized = img.resize_exact(width, height, image::imageops::FilterType::Lanczos3);
    let gray = resized.to_luma8();
    let data = gray.pixels().map(|p| p.0[0] as f32 / 255.0).collect();
    Matrix::from_vec(height as usize, width as usize, data)
}

/// Reads an image file from disk and converts it with
/// [`image_bytes_to_grayscale_matrix`].
pub fn load_grayscale_image(path: &str, width: u32, height: u32) -> Result<Matrix> {
    let bytes = std::fs::read(path)?;
    image_bytes_to_grayscale_matrix(&bytes, width, height)
}
