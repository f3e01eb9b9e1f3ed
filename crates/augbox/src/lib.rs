#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use augbox_image as image;

#[doc(inline)]
pub use augbox_imgproc as imgproc;

#[doc(inline)]
pub use augbox_augment as augment;
