#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// annotation record parsing and formatting.
pub mod annotation;

/// normalized center <-> pixel corner conversions.
pub mod convert;

mod error;

/// flip projector.
pub mod flip;

/// perspective warp projector.
pub mod perspective;

/// augmentation pipeline composition.
pub mod pipeline;

/// rotation projector.
pub mod rotate;

/// translation projector.
pub mod shift;

pub use crate::annotation::{Annotation, AnnotationError};
pub use crate::error::AugmentError;
