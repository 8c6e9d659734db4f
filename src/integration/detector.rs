//! Trait for foreground extraction backends.

use crate::tracker::Candidate;

/// Trait for foreground extraction backends.
///
/// Implement this trait to connect any background-subtraction routine to the
/// motion tracker.
///
/// # Example
///
/// ```
/// use motion_tracker_rs::{Candidate, CandidateSource};
///
/// struct MyExtractor;
///
/// impl CandidateSource for MyExtractor {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, _input: &[u8], _width: u32, _height: u32) -> Result<Vec<Candidate>, Self::Error> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait CandidateSource {
    /// Error type for extraction failures.
    type Error;

    /// Segment one frame and return its foreground regions.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Candidate>, Self::Error>;
}

/// Helper trait for converting backend-specific outputs to `Candidate`.
pub trait IntoCandidates {
    /// Convert the output into a vector of candidates.
    fn into_candidates(self) -> Vec<Candidate>;
}

impl IntoCandidates for Vec<Candidate> {
    fn into_candidates(self) -> Vec<Candidate> {
        self
    }
}

/// `(x, y, width, height, area)` tuples, as produced by most contour routines.
impl IntoCandidates for Vec<(f32, f32, f32, f32, f32)> {
    fn into_candidates(self) -> Vec<Candidate> {
        self.into_iter()
            .map(|(x, y, w, h, area)| Candidate::new(x, y, w, h, area))
            .collect()
    }
}
