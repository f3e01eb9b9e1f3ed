//! Conversions between the normalized center format and the ephemeral
//! pixel corner format used inside the projection math.
//!
//! The corner step truncates to whole pixels, so a round trip
//! `to_normalized(to_pixel_corners(a))` matches the input only up to one
//! pixel's worth of truncation error. This is an accepted, bounded source
//! of imprecision; the normalized step rounds to a fixed 10 decimal
//! places so results are reproducible across runs.

use augbox_image::ImageSize;

use crate::annotation::Annotation;

/// Decimal places kept by the normalized conversion.
const NORMALIZED_PRECISION: f64 = 1e10;

/// A box in pixel corner format.
///
/// `(x1, y1)` is the upper-left corner and `(x2, y2)` the lower-right
/// corner. Only used transiently inside a projector; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerBox {
    /// X-coordinate of the upper-left corner.
    pub x1: f64,
    /// Y-coordinate of the upper-left corner.
    pub y1: f64,
    /// X-coordinate of the lower-right corner.
    pub x2: f64,
    /// Y-coordinate of the lower-right corner.
    pub y2: f64,
}

impl CornerBox {
    /// The four corner points in top-left, top-right, bottom-right,
    /// bottom-left order.
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.x1, self.y1),
            (self.x2, self.y1),
            (self.x2, self.y2),
            (self.x1, self.y2),
        ]
    }

    /// The smallest axis-aligned box enclosing the given points.
    pub fn enclosing(points: &[(f64, f64)]) -> Self {
        let mut x1 = f64::INFINITY;
        let mut y1 = f64::INFINITY;
        let mut x2 = f64::NEG_INFINITY;
        let mut y2 = f64::NEG_INFINITY;

        for &(x, y) in points {
            x1 = x1.min(x);
            y1 = y1.min(y);
            x2 = x2.max(x);
            y2 = y2.max(y);
        }

        CornerBox { x1, y1, x2, y2 }
    }

    /// Clamps both corners to the canvas bounds `[0, width]` x `[0, height]`.
    pub fn clamp_to(&self, size: ImageSize) -> Self {
        let (w, h) = (size.width as f64, size.height as f64);
        CornerBox {
            x1: self.x1.clamp(0.0, w),
            y1: self.y1.clamp(0.0, h),
            x2: self.x2.clamp(0.0, w),
            y2: self.y2.clamp(0.0, h),
        }
    }
}

/// Converts an annotation to pixel corner format.
///
/// Corner coordinates are truncated to whole pixels. No bounds clamping
/// is performed here; callers clamp as needed.
pub fn to_pixel_corners(ann: &Annotation, size: ImageSize) -> CornerBox {
    let (img_w, img_h) = (size.width as f64, size.height as f64);

    let bbox_w = ann.w * img_w;
    let bbox_h = ann.h * img_h;
    let center_x = ann.cx * img_w;
    let center_y = ann.cy * img_h;

    CornerBox {
        x1: (center_x - bbox_w / 2.0).trunc(),
        y1: (center_y - bbox_h / 2.0).trunc(),
        x2: (center_x + bbox_w / 2.0).trunc(),
        y2: (center_y + bbox_h / 2.0).trunc(),
    }
}

/// Converts a pixel corner box back to normalized center format.
///
/// Each normalized field is rounded to 10 decimal places for
/// reproducibility.
pub fn to_normalized(class_id: u32, corners: &CornerBox, size: ImageSize) -> Annotation {
    let (img_w, img_h) = (size.width as f64, size.height as f64);

    Annotation {
        class_id,
        cx: round_normalized((corners.x1 + corners.x2) / (2.0 * img_w)),
        cy: round_normalized((corners.y1 + corners.y2) / (2.0 * img_h)),
        w: round_normalized((corners.x2 - corners.x1) / img_w),
        h: round_normalized((corners.y2 - corners.y1) / img_h),
    }
}

fn round_normalized(v: f64) -> f64 {
    (v * NORMALIZED_PRECISION).round() / NORMALIZED_PRECISION
}
