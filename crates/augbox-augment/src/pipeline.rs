//! Augmentation pipeline composition.
//!
//! A pipeline applies a fixed, caller-chosen sequence of stages to an
//! (image, annotations) sample, each stage consuming the previous
//! stage's output. Composition is not commutative: rotating then
//! shifting differs from shifting then rotating, because canvas
//! dimensions and clamp bounds depend on accumulated state. The current
//! canvas size always travels on the current image, so stages after a
//! rotation see the grown canvas, not the original one.
//!
//! Stage parameters are sampled from caller-supplied ranges using an
//! explicitly passed random generator; the projectors themselves stay
//! pure functions of their inputs.

use augbox_image::Image;
use augbox_imgproc::noise::salt_and_pepper;
use log::debug;
use rand::Rng;

use crate::annotation::Annotation;
use crate::error::AugmentError;
use crate::flip::{flip, FlipAxis};
use crate::perspective::{perspective, PerspectiveParams};
use crate::rotate::rotate;
use crate::shift::shift;

/// An image together with the annotation set tied to it.
#[derive(Debug, Clone)]
pub struct Sample<const C: usize> {
    /// The pixel buffer.
    pub image: Image<f32, C>,
    /// The annotations, ordered as parsed.
    pub annotations: Vec<Annotation>,
}

/// One augmentation stage with its parameter sampling range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    /// Rotate by an angle drawn from `[min_deg, max_deg]` degrees.
    Rotate {
        /// Minimum rotation angle in degrees.
        min_deg: f32,
        /// Maximum rotation angle in degrees.
        max_deg: f32,
    },
    /// Perspective warp with each corner displacement drawn from
    /// `[0, max_displacement]` pixels.
    Perspective {
        /// Maximum per-corner displacement in pixels.
        max_displacement: f32,
        /// Minimum usable normalized extent for surviving boxes.
        min_box_fraction: f64,
    },
    /// Mirror along a uniformly chosen axis.
    Flip,
    /// Translate by offsets drawn from `[min_px, max_px]` pixels on each
    /// axis independently.
    Shift {
        /// Minimum translation in pixels.
        min_px: f32,
        /// Maximum translation in pixels.
        max_px: f32,
        /// Minimum usable normalized extent for surviving boxes.
        min_box_fraction: f64,
    },
    /// Salt-and-pepper noise with intensity drawn from
    /// `[0, max_intensity]`. Annotations pass through untouched.
    SaltAndPepper {
        /// Maximum fraction of pixels to corrupt.
        max_intensity: f32,
    },
}

/// An ordered sequence of augmentation stages.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Creates a pipeline from an ordered stage list.
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// The configured stages, in evaluation order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Applies every stage in order to the sample, sampling stage
    /// parameters from `rng`.
    ///
    /// The input sample is left untouched; each stage produces a fresh
    /// image and annotation set.
    ///
    /// # Panics
    ///
    /// Panics if a stage's sampling range is empty (min greater than
    /// max), mirroring the behavior of [`rand::Rng::random_range`].
    pub fn apply<const C: usize, R: Rng + ?Sized>(
        &self,
        sample: &Sample<C>,
        rng: &mut R,
    ) -> Result<Sample<C>, AugmentError> {
        let mut current = sample.clone();

        for stage in &self.stages {
            current = apply_stage(stage, &current, rng)?;
        }

        Ok(current)
    }
}

fn apply_stage<const C: usize, R: Rng + ?Sized>(
    stage: &Stage,
    sample: &Sample<C>,
    rng: &mut R,
) -> Result<Sample<C>, AugmentError> {
    let (image, annotations) = match *stage {
        Stage::Rotate { min_deg, max_deg } => {
            let angle = rng.random_range(min_deg..=max_deg);
            debug!("rotate: angle={angle}");
            rotate(&sample.image, &sample.annotations, angle)?
        }
        Stage::Perspective {
            max_displacement,
            min_box_fraction,
        } => {
            let params = PerspectiveParams {
                top_left: rng.random_range(0.0..=max_displacement),
                top_right: rng.random_range(0.0..=max_displacement),
                bottom_left: rng.random_range(0.0..=max_displacement),
                bottom_right: rng.random_range(0.0..=max_displacement),
            };
            debug!("perspective: params={params:?}");
            perspective(&sample.image, &sample.annotations, &params, min_box_fraction)?
        }
        Stage::Flip => {
            let axis = if rng.random_bool(0.5) {
                FlipAxis::Horizontal
            } else {
                FlipAxis::Vertical
            };
            debug!("flip: axis={axis:?}");
            flip(&sample.image, &sample.annotations, axis)?
        }
        Stage::Shift {
            min_px,
            max_px,
            min_box_fraction,
        } => {
            let tx = rng.random_range(min_px..=max_px);
            let ty = rng.random_range(min_px..=max_px);
            debug!("shift: tx={tx} ty={ty}");
            shift(&sample.image, &sample.annotations, tx, ty, min_box_fraction)?
        }
        Stage::SaltAndPepper { max_intensity } => {
            let intensity = rng.random_range(0.0..=max_intensity);
            debug!("salt_and_pepper: intensity={intensity}");
            let mut dst = Image::from_size_val(sample.image.size(), 0.0)?;
            salt_and_pepper(&sample.image, &mut dst, intensity, rng)?;
            (dst, sample.annotations.clone())
        }
    };

    Ok(Sample { image, annotations })
}

#[cfg(test)]
mod tests {
    use super::{Pipeline, Sample, Stage};
    use crate::annotation::Annotation;
    use augbox_image::{Image, ImageSize};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_100x100() -> Sample<1> {
        Sample {
            image: Image::from_size_val(
                ImageSize {
                    width: 100,
                    height: 100,
                },
                0.0,
            )
            .unwrap(),
            annotations: vec![Annotation {
                class_id: 0,
                cx: 0.5,
                cy: 0.5,
                w: 0.2,
                h: 0.2,
            }],
        }
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let sample = sample_100x100();
        let mut rng = StdRng::seed_from_u64(0);

        let out = Pipeline::default().apply(&sample, &mut rng).unwrap();

        assert_eq!(out.image.as_slice(), sample.image.as_slice());
        assert_eq!(out.annotations, sample.annotations);
    }

    #[test]
    fn pipeline_threads_canvas_size_between_stages() {
        let sample = sample_100x100();
        let mut rng = StdRng::seed_from_u64(1);

        let pipeline = Pipeline::new(vec![
            Stage::Rotate {
                min_deg: 45.0,
                max_deg: 45.0,
            },
            Stage::Shift {
                min_px: 0.0,
                max_px: 0.0,
                min_box_fraction: 0.035,
            },
        ]);

        let out = pipeline.apply(&sample, &mut rng).unwrap();

        // the shift stage must see the grown 141x141 canvas
        assert_eq!(out.image.size().width, 141);
        assert_eq!(out.image.size().height, 141);
        assert_eq!(out.annotations.len(), 1);
    }

    #[test]
    fn pipeline_is_deterministic_for_a_seed() {
        let sample = sample_100x100();
        let pipeline = Pipeline::new(vec![
            Stage::Rotate {
                min_deg: -30.0,
                max_deg: 30.0,
            },
            Stage::Flip,
            Stage::Shift {
                min_px: -10.0,
                max_px: 10.0,
                min_box_fraction: 0.035,
            },
        ]);

        let out_a = pipeline
            .apply(&sample, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let out_b = pipeline
            .apply(&sample, &mut StdRng::seed_from_u64(99))
            .unwrap();

        assert_eq!(out_a.annotations, out_b.annotations);
        assert_eq!(out_a.image.as_slice(), out_b.image.as_slice());
    }

    #[test]
    fn noise_stage_passes_annotations_through() {
        let sample = sample_100x100();
        let mut rng = StdRng::seed_from_u64(3);

        let pipeline = Pipeline::new(vec![Stage::SaltAndPepper { max_intensity: 0.1 }]);
        let out = pipeline.apply(&sample, &mut rng).unwrap();

        assert_eq!(out.annotations, sample.annotations);
        assert_eq!(out.image.size(), sample.image.size());
    }

    #[test]
    fn input_sample_is_not_mutated() {
        let sample = sample_100x100();
        let pixels_before = sample.image.as_slice().to_vec();
        let mut rng = StdRng::seed_from_u64(4);

        let pipeline = Pipeline::new(vec![Stage::SaltAndPepper { max_intensity: 1.0 }]);
        let _ = pipeline.apply(&sample, &mut rng).unwrap();

        assert_eq!(sample.image.as_slice(), pixels_before.as_slice());
    }
}
