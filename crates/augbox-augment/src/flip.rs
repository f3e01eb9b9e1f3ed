//! Flip projector.
//!
//! Mirrors the image along one axis and reflects the annotation centers
//! directly in normalized space: `cx' = 1 - cx` for a horizontal flip,
//! `cy' = 1 - cy` for a vertical one. This is the only projector that
//! never round-trips through pixel corners, so it is exact and free of
//! integer-truncation error. Keep it that way.

use augbox_image::Image;
use augbox_imgproc::flip::{horizontal_flip, vertical_flip};

use crate::annotation::Annotation;
use crate::error::AugmentError;

/// Mirror axis for the flip projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
}

/// Mirrors an image and its annotations along the chosen axis.
///
/// The canvas size is unchanged; box extents and the center coordinate
/// on the other axis are untouched.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `annotations` - The annotation set tied to `src`.
/// * `axis` - The mirror axis.
///
/// # Returns
///
/// The mirrored image and annotation set.
pub fn flip<T, const C: usize>(
    src: &Image<T, C>,
    annotations: &[Annotation],
    axis: FlipAxis,
) -> Result<(Image<T, C>, Vec<Annotation>), AugmentError>
where
    T: Copy + Send + Sync,
{
    let dst = match axis {
        FlipAxis::Horizontal => horizontal_flip(src)?,
        FlipAxis::Vertical => vertical_flip(src)?,
    };

    let mirrored = annotations
        .iter()
        .map(|ann| match axis {
            FlipAxis::Horizontal => Annotation {
                cx: 1.0 - ann.cx,
                ..*ann
            },
            FlipAxis::Vertical => Annotation {
                cy: 1.0 - ann.cy,
                ..*ann
            },
        })
        .collect();

    Ok((dst, mirrored))
}

#[cfg(test)]
mod tests {
    use super::{flip, FlipAxis};
    use crate::annotation::Annotation;
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
    fn flip_horizontal_mirrors_cx() {
        let image = image_100x100();
        let anns = vec![box_ann(0.25, 0.625, 0.1, 0.2)];

        let (flipped, mirrored) = flip(&image, &anns, FlipAxis::Horizontal).unwrap();

        assert_eq!(flipped.size(), image.size());
        assert_eq!(mirrored[0].cx, 0.75);
        assert_eq!(mirrored[0].cy, 0.625);
        assert_eq!(mirrored[0].w, 0.1);
        assert_eq!(mirrored[0].h, 0.2);
    }

    #[test]
    fn flip_vertical_mirrors_cy() {
        let image = image_100x100();
        let anns = vec![box_ann(0.25, 0.625, 0.1, 0.2)];

        let (_, mirrored) = flip(&image, &anns, FlipAxis::Vertical).unwrap();

        assert_eq!(mirrored[0].cx, 0.25);
        assert_eq!(mirrored[0].cy, 0.375);
    }

    #[test]
    fn flip_symmetric_box_is_unchanged() {
        let image = image_100x100();
        let anns = vec![box_ann(0.5, 0.5, 0.2, 0.2)];

        let (_, mirrored) = flip(&image, &anns, FlipAxis::Horizontal).unwrap();
        assert_eq!(mirrored, anns);
    }

    #[test]
    fn flip_involution_is_bit_exact() {
        let image = image_100x100();
        let anns = vec![
            box_ann(0.5, 0.5, 0.2, 0.2),
            box_ann(0.125, 0.8125, 0.0625, 0.25),
            box_ann(0.375, 0.0625, 0.125, 0.03125),
        ];

        for axis in [FlipAxis::Horizontal, FlipAxis::Vertical] {
            let (once, mirrored) = flip(&image, &anns, axis).unwrap();
            let (twice, back) = flip(&once, &mirrored, axis).unwrap();
            assert_eq!(back, anns);
            assert_eq!(twice.as_slice(), image.as_slice());
        }
    }

    #[test]
    fn flip_class_id_preserved() {
        let image = image_100x100();
        let mut ann = box_ann(0.1, 0.2, 0.05, 0.05);
        ann.class_id = 11;

        let (_, mirrored) = flip(&image, &[ann], FlipAxis::Vertical).unwrap();
        assert_eq!(mirrored[0].class_id, 11);
    }
}
