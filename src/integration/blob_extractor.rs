//! Candidate extraction from foreground masks.
//!
//! The background-subtraction model itself stays external: anything that turns
//! a frame into a binary mask implements [`ForegroundModel`]. [`BlobExtractor`]
//! labels the 8-connected regions of that mask and reports one candidate per
//! region, with the region's pixel count as its area.
//!
//! # Example
//!
//! ```
//! use motion_tracker_rs::{BlobExtractor, CandidateSource, ForegroundModel};
//! use ndarray::Array2;
//!
//! // Any non-zero luminance byte counts as foreground.
//! struct Threshold;
//!
//! impl ForegroundModel for Threshold {
//!     type Error = std::convert::Infallible;
//!
//!     fn apply(&mut self, input: &[u8], width: u32, height: u32) -> Result<Array2<bool>, Self::Error> {
//!         let shape = (height as usize, width as usize);
//!         Ok(Array2::from_shape_fn(shape, |(y, x)| input[y * width as usize + x] > 0))
//!     }
//! }
//!
//! let mut extractor = BlobExtractor::new(Threshold);
//! let frame = [0, 9, 9, 0, 9, 9];
//! let candidates = extractor.detect(&frame, 3, 2).unwrap();
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].area, 4.0);
//! ```

use ndarray::{Array2, ArrayView2};
use thiserror::Error;

use super::{CandidateBuilder, CandidateSource};
use crate::tracker::Candidate;

/// Replaceable background-subtraction primitive.
///
/// Parameters such as history length or variance threshold belong to the
/// implementation, not to the tracker.
pub trait ForegroundModel {
    /// Error type for model failures.
    type Error: std::error::Error + 'static;

    /// Update the background model with `input` and return its foreground mask,
    /// shaped `(height, width)`.
    fn apply(&mut self, input: &[u8], width: u32, height: u32)
    -> Result<Array2<bool>, Self::Error>;
}

/// Error type for mask-based extraction.
#[derive(Debug, Error)]
pub enum ExtractError<E>
where
    E: std::error::Error + 'static,
{
    /// The model returned a mask that does not cover the frame.
    #[error("mask shape {got:?} does not match frame shape {expected:?}")]
    MaskShape {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// The foreground model failed.
    #[error("foreground model failed")]
    Model(#[source] E),
}

/// `CandidateSource` that labels connected regions of a model's mask.
pub struct BlobExtractor<M: ForegroundModel> {
    model: M,
}

impl<M: ForegroundModel> BlobExtractor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Label the 8-connected foreground regions of `mask`.
    ///
    /// Regions are returned in raster order of their first pixel.
    pub fn find_blobs(mask: ArrayView2<bool>) -> Vec<Candidate> {
        let (rows, cols) = mask.dim();
        let mut visited = Array2::from_elem((rows, cols), false);
        let mut blobs = Vec::new();

        for y in 0..rows {
            for x in 0..cols {
                if !mask[[y, x]] || visited[[y, x]] {
                    continue;
                }
                blobs.push(grow_blob(mask, &mut visited, (y, x)));
            }
        }

        blobs
    }
}

/// Flood-fill one region starting at `seed` and summarize it.
fn grow_blob(mask: ArrayView2<bool>, visited: &mut Array2<bool>, seed: (usize, usize)) -> Candidate {
    let (rows, cols) = mask.dim();
    let mut stack = vec![seed];
    visited[seed] = true;

    let (mut min_x, mut min_y) = (seed.1, seed.0);
    let (mut max_x, mut max_y) = (seed.1, seed.0);
    let mut pixels = 0usize;

    while let Some((y, x)) = stack.pop() {
        pixels += 1;
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);

        for ny in y.saturating_sub(1)..=(y + 1).min(rows - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(cols - 1) {
                if mask[[ny, nx]] && !visited[[ny, nx]] {
                    visited[[ny, nx]] = true;
                    stack.push((ny, nx));
                }
            }
        }
    }

    CandidateBuilder::new()
        .tlwh(
            min_x as f32,
            min_y as f32,
            (max_x - min_x + 1) as f32,
            (max_y - min_y + 1) as f32,
        )
        .area(pixels as f32)
        .build()
}

impl<M: ForegroundModel> CandidateSource for BlobExtractor<M> {
    type Error = ExtractError<M::Error>;

    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Candidate>, Self::Error> {
        let mask = self
            .model
            .apply(input, width, height)
            .map_err(ExtractError::Model)?;

        let expected = (height as usize, width as usize);
        if mask.dim() != expected {
            return Err(ExtractError::MaskShape {
                expected,
                got: mask.dim(),
            });
        }

        Ok(Self::find_blobs(mask.view()))
    }
}
