use crate::image::ImageSize;

/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the pixel data cannot be cast to the target type.
    #[error("Failed to cast image data")]
    CastError,

    /// Error when two images are expected to have the same size.
    #[error("Image sizes do not match (src: {0}, dst: {1})")]
    SizeMismatch(ImageSize, ImageSize),

    /// Error when a transform matrix is singular.
    #[error("Cannot compute the determinant of the transform")]
    CannotComputeDeterminant,
}
