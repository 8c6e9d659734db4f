//! MotionPipeline for combining foreground extraction with tracking.

use crate::tracker::{DetectionResult, MotionTracker, TrackerConfig};

use super::CandidateSource;

/// Bundles a `CandidateSource` with a `MotionTracker` for end-to-end,
/// frame-by-frame tracking of a single video stream.
pub struct MotionPipeline<D: CandidateSource> {
    source: D,
    tracker: MotionTracker,
}

impl<D: CandidateSource> MotionPipeline<D> {
    /// Create a new pipeline with the given source and tracker config.
    pub fn new(source: D, config: TrackerConfig) -> Self {
        Self {
            source,
            tracker: MotionTracker::new(config),
        }
    }

    /// Create a new pipeline with default tracker configuration.
    pub fn with_default_config(source: D) -> Self {
        Self::new(source, TrackerConfig::default())
    }

    /// Segment a single frame and advance the tracker.
    ///
    /// Extraction errors are returned without touching the tracker state.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<DetectionResult, D::Error> {
        let candidates = self.source.detect(input, width, height)?;
        Ok(self.tracker.update(&candidates))
    }

    /// Reset the tracker. The source keeps its own state.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut D {
        &mut self.source
    }

    pub fn tracker(&self) -> &MotionTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut MotionTracker {
        &mut self.tracker
    }
}
