use augbox_image::ImageError;

/// An error type for the augmentation engine.
#[derive(thiserror::Error, Debug)]
pub enum AugmentError {
    /// Error coming from an underlying image operation.
    #[error(transparent)]
    Image(#[from] ImageError),
}
