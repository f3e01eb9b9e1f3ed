use augbox_image::{Image, ImageError};
use rand::Rng;

/// Injects salt-and-pepper noise into an image.
///
/// Each pixel independently becomes pepper (all channels 0.0) with
/// probability `intensity / 2` or salt (all channels 255.0) with the same
/// probability. Pixel values are assumed to live in the 8-bit range.
///
/// The source is copied into `dst` before mutation, so the caller's buffer
/// is never touched even when it holds the only other reference to the
/// pre-noise pixels.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image, same size as `src`.
/// * `intensity` - Fraction of pixels to corrupt, in `[0, 1]`.
/// * `rng` - Random source deciding which pixels to corrupt.
pub fn salt_and_pepper<const C: usize, R: Rng + ?Sized>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    intensity: f32,
    rng: &mut R,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::SizeMismatch(src.size(), dst.size()));
    }

    dst.as_slice_mut().copy_from_slice(src.as_slice());

    for pixel in dst.as_slice_mut().chunks_exact_mut(C) {
        let p = rng.random::<f32>();
        if p < intensity / 2.0 {
            pixel.fill(0.0);
        } else if p > 1.0 - intensity / 2.0 {
            pixel.fill(255.0);
        }
    }

    Ok(())
}
