#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image flipping module.
pub mod flip;

/// utilities for interpolation.
pub mod interpolation;

/// pixel noise injection module.
pub mod noise;

/// module containing parallelization utilities.
pub mod parallel;

/// image geometric transformations module.
pub mod warp;
