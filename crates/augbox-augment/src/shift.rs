//! Shift projector.
//!
//! Translates the image by whole-canvas `(tx, ty)` pixels (canvas size
//! unchanged, exposed border filled with the warp's fill value) and
//! translates every annotation with it. Translation is the common case
//! where boxes partially exit the frame, so this projector clamps inline
//! and drops boxes that degenerate: a box clipped to near-nothing
//! carries no training signal and must not survive as a false-positive
//! label.

use augbox_image::Image;
use augbox_imgproc::interpolation::InterpolationMode;
use augbox_imgproc::warp::warp_affine;

use crate::annotation::Annotation;
use crate::convert::{to_normalized, to_pixel_corners, CornerBox};
use crate::error::AugmentError;

/// Whether a projected box is too small to keep.
///
/// A box is degenerate when its normalized width or height is at or
/// below `min_box_fraction`.
pub(crate) fn is_degenerate(ann: &Annotation, min_box_fraction: f64) -> bool {
    ann.w <= min_box_fraction || ann.h <= min_box_fraction
}

/// Translates an image and its annotations by `(tx, ty)` pixels.
///
/// Each annotation has `(tx, ty)` added to all four corner coordinates,
/// is clamped to the canvas bounds, and is dropped entirely when the
/// clamped normalized width or height falls at or below
/// `min_box_fraction`. The output annotation count is therefore at most
/// the input count.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `annotations` - The annotation set tied to `src`.
/// * `tx` - Horizontal translation in pixels (positive moves right).
/// * `ty` - Vertical translation in pixels (positive moves down).
/// * `min_box_fraction` - Minimum usable normalized extent for a
///   surviving box.
///
/// # Returns
///
/// The shifted image and the filtered, projected annotation set.
pub fn shift<const C: usize>(
    src: &Image<f32, C>,
    annotations: &[Annotation],
    tx: f32,
    ty: f32,
    min_box_fraction: f64,
) -> Result<(Image<f32, C>, Vec<Annotation>), AugmentError> {
    let size = src.size();

    let m = [1.0, 0.0, tx, 0.0, 1.0, ty];
    let mut dst = Image::from_size_val(size, 0.0)?;
    warp_affine(src, &mut dst, &m, InterpolationMode::Bilinear)?;

    let projected = annotations
        .iter()
        .filter_map(|ann| {
            let corners = to_pixel_corners(ann, size);
            let shifted = CornerBox {
                x1: corners.x1 + tx as f64,
                y1: corners.y1 + ty as f64,
                x2: corners.x2 + tx as f64,
                y2: corners.y2 + ty as f64,
            }
            .clamp_to(size);
            let projected = to_normalized(ann.class_id, &shifted, size);
            (!is_degenerate(&projected, min_box_fraction)).then_some(projected)
        })
        .collect();

    Ok((dst, projected))
}

#[cfg(test)]
mod tests {
    use super::shift;
    use crate::annotation::Annotation;
    use approx::assert_relative_eq;
    use augbox_image::{Image, ImageSize};

    fn image_100x100() -> Image<f32, 1> {
        Image::from_size_val(
            ImageSize {
                width: 100,
                height: 100,
            },
            0.0,
        )
        .unwrap()
    }

    fn box_ann(cx: f64, cy: f64, w: f64, h: f64) -> Annotation {
        Annotation {
            class_id: 0,
            cx,
            cy,
            w,
            h,
        }
    }

    #[test]
    fn shift_zero_is_identity() {
        let image = image_100x100();
        let anns = vec![box_ann(0.5, 0.5, 0.2, 0.2)];

        let (shifted, projected) = shift(&image, &anns, 0.0, 0.0, 0.035).unwrap();

        assert_eq!(shifted.size(), image.size());
        assert_eq!(projected, anns);
    }

    #[test]
    fn shift_moves_box_center() {
        let image = image_100x100();
        let anns = vec![box_ann(0.5, 0.5, 0.2, 0.2)];

        let (_, projected) = shift(&image, &anns, 10.0, -20.0, 0.035).unwrap();

        assert_eq!(projected.len(), 1);
        assert_relative_eq!(projected[0].cx, 0.6, epsilon = 1e-6);
        assert_relative_eq!(projected[0].cy, 0.3, epsilon = 1e-6);
        assert_relative_eq!(projected[0].w, 0.2, epsilon = 1e-6);
        assert_relative_eq!(projected[0].h, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn shift_clips_box_at_border() {
        let image = image_100x100();
        let anns = vec![box_ann(0.5, 0.5, 0.2, 0.2)];

        // right half of the box leaves the frame
        let (_, projected) = shift(&image, &anns, 50.0, 0.0, 0.035).unwrap();

        assert_eq!(projected.len(), 1);
        // corners (90, 110) clamp to (90, 100)
        assert_relative_eq!(projected[0].cx, 0.95, epsilon = 1e-6);
        assert_relative_eq!(projected[0].w, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn shift_drops_box_pushed_out_of_frame() {
        let image = image_100x100();
        let anns = vec![box_ann(0.5, 0.5, 0.2, 0.2)];

        // corners clamp to x in [100, 100]: zero width, no training signal
        let (_, projected) = shift(&image, &anns, 60.0, 0.0, 0.035).unwrap();

        assert!(projected.is_empty());
    }

    #[test]
    fn shift_drops_only_the_exiting_box() {
        let image = image_100x100();
        let anns = vec![
            box_ann(0.2, 0.5, 0.1, 0.1),
            box_ann(0.95, 0.5, 0.08, 0.08),
        ];

        let (_, projected) = shift(&image, &anns, 20.0, 0.0, 0.035).unwrap();

        assert_eq!(projected.len(), anns.len() - 1);
        assert_relative_eq!(projected[0].cx, 0.4, epsilon = 1e-6);
    }
}
