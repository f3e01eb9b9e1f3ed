//! Rotation projector.
//!
//! Rotates the image by an arbitrary angle about its center, growing the
//! canvas so no pixel content is clipped, and projects every annotation
//! through the exact same transform. The projected box is the minimal
//! axis-aligned rectangle enclosing the four rotated corners: the true
//! rotated region is a parallelogram, but the annotation format is
//! axis-aligned, so re-enclosure systematically overestimates box area
//! for non-trivial angles. This is inherent to the format, not a defect.

use augbox_image::{Image, ImageSize};
use augbox_imgproc::interpolation::InterpolationMode;
use augbox_imgproc::warp::{get_rotation_matrix2d, transform_point_affine, warp_affine};

use crate::annotation::Annotation;
use crate::convert::{to_normalized, to_pixel_corners, CornerBox};
use crate::error::AugmentError;

/// Canvas size required to contain an image rotated by the given matrix.
fn bounding_canvas(size: ImageSize, m: &[f32; 6]) -> ImageSize {
    let (w, h) = (size.width as f32, size.height as f32);
    let abs_cos = m[0].abs();
    let abs_sin = m[1].abs();

    ImageSize {
        width: (h * abs_sin + w * abs_cos) as usize,
        height: (h * abs_cos + w * abs_sin) as usize,
    }
}

/// Rotates an image and its annotations by `angle_deg` degrees about the
/// image center.
///
/// The output canvas grows to `(h·|sin θ| + w·|cos θ|, h·|cos θ| + w·|sin θ|)`
/// so the whole rotated frame stays visible; the returned image carries
/// the new size. Every annotation has its four pixel corners rotated
/// through the same matrix used for the pixel data and is re-enclosed
/// axis-aligned in the new canvas. The canvas dimensions truncate to
/// whole pixels, so a corner on the source frame's edge can overshoot
/// the canvas by under a pixel; the enclosed box is clamped to the
/// canvas before normalization. Degenerate boxes are passed through
/// unfiltered.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `annotations` - The annotation set tied to `src`.
/// * `angle_deg` - Rotation angle in degrees, any real value.
///
/// # Returns
///
/// The rotated image at the grown canvas size and the projected
/// annotation set.
pub fn rotate<const C: usize>(
    src: &Image<f32, C>,
    annotations: &[Annotation],
    angle_deg: f32,
) -> Result<(Image<f32, C>, Vec<Annotation>), AugmentError> {
    let size = src.size();
    let center = (size.width as f32 / 2.0, size.height as f32 / 2.0);

    let mut m = get_rotation_matrix2d(center, angle_deg, 1.0);
    let canvas = bounding_canvas(size, &m);

    // re-center the rotated frame in the grown canvas
    m[2] += canvas.width as f32 / 2.0 - center.0;
    m[5] += canvas.height as f32 / 2.0 - center.1;

    let mut dst = Image::from_size_val(canvas, 0.0)?;
    warp_affine(src, &mut dst, &m, InterpolationMode::Bilinear)?;

    let projected = annotations
        .iter()
        .map(|ann| {
            let corners = to_pixel_corners(ann, size);
            let rotated = corners.corners().map(|(x, y)| {
                let (u, v) = transform_point_affine(x as f32, y as f32, &m);
                (u as f64, v as f64)
            });
            let enclosed = CornerBox::enclosing(&rotated).clamp_to(canvas);
            to_normalized(ann.class_id, &enclosed, canvas)
        })
        .collect();

    Ok((dst, projected))
}
