//! Perspective projector.
//!
//! Warps the image through a homography that pulls each canvas corner
//! inward by a caller-supplied pixel displacement, then projects every
//! annotation through the same homography. As with rotation, the
//! projected box is the minimal axis-aligned enclosure of the four
//! mapped corners.
//!
//! Out-of-frame policy: corners that map outside the canvas are clamped
//! to it and boxes whose clamped extent degenerates below
//! `min_box_fraction` are dropped, matching the shift projector. One
//! policy for every projector that can push boxes out of frame.

use augbox_image::{Image, ImageError};
use augbox_imgproc::interpolation::InterpolationMode;
use augbox_imgproc::warp::{
    get_perspective_transform, transform_point_perspective, warp_perspective,
};

use crate::annotation::Annotation;
use crate::convert::{to_normalized, to_pixel_corners, CornerBox};
use crate::error::AugmentError;
use crate::shift::is_degenerate;

/// Per-corner inward displacements, in pixels.
///
/// Each field moves the named canvas corner diagonally toward the image
/// center by that many pixels, defining the destination quadrilateral of
/// the warp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerspectiveParams {
    /// Displacement of the top-left corner.
    pub top_left: f32,
    /// Displacement of the top-right corner.
    pub top_right: f32,
    /// Displacement of the bottom-left corner.
    pub bottom_left: f32,
    /// Displacement of the bottom-right corner.
    pub bottom_right: f32,
}

impl PerspectiveParams {
    /// The homography matrix mapping the full `width` x `height` canvas
    /// rectangle to the displaced quadrilateral.
    pub fn matrix(&self, width: usize, height: usize) -> Result<[f32; 9], ImageError> {
        let (w, h) = (width as f32, height as f32);

        let src = [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)];
        let dst = [
            (self.top_left, self.top_left),
            (w - self.top_right, self.top_right),
            (w - self.bottom_right, h - self.bottom_right),
            (self.bottom_left, h - self.bottom_left),
        ];

        get_perspective_transform(&src, &dst)
    }
}

/// Warps an image and its annotations through a corner-displacement
/// homography. The canvas size is unchanged.
///
/// For each annotation the four pixel corners are mapped through the same
/// homography applied to the pixels, re-enclosed axis-aligned, clamped to
/// the canvas, and dropped when the clamped normalized width or height is
/// at or below `min_box_fraction`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `annotations` - The annotation set tied to `src`.
/// * `params` - The four corner displacements.
/// * `min_box_fraction` - Minimum usable normalized extent for a
///   surviving box.
///
/// # Returns
///
/// The warped image and the filtered, projected annotation set.
pub fn perspective<const C: usize>(
    src: &Image<f32, C>,
    annotations: &[Annotation],
    params: &PerspectiveParams,
    min_box_fraction: f64,
) -> Result<(Image<f32, C>, Vec<Annotation>), AugmentError> {
    let size = src.size();
    let m = params.matrix(size.width, size.height)?;

    let mut dst = Image::from_size_val(size, 0.0)?;
    warp_perspective(src, &mut dst, &m, InterpolationMode::Bilinear)?;

    let projected = annotations
        .iter()
        .filter_map(|ann| {
            let corners = to_pixel_corners(ann, size);
            let mapped = corners.corners().map(|(x, y)| {
                let (u, v) = transform_point_perspective(x as f32, y as f32, &m);
                (u as f64, v as f64)
            });
            let enclosed = CornerBox::enclosing(&mapped).clamp_to(size);
            let projected = to_normalized(ann.class_id, &enclosed, size);
            (!is_degenerate(&projected, min_box_fraction)).then_some(projected)
        })
        .collect();

    Ok((dst, projected))
}
