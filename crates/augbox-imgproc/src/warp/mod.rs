//! Geometric image transformations.
//!
//! Warping operations resample pixels through an inverse-mapped affine or
//! perspective transform. The point-mapping helpers are public so that
//! callers can project geometry (e.g. bounding-box corners) through the
//! exact same transform applied to the pixel data.

mod affine;
mod perspective;

pub use affine::{
    get_rotation_matrix2d, invert_affine_transform, transform_point_affine, warp_affine,
};
pub use perspective::{get_perspective_transform, transform_point_perspective, warp_perspective};
