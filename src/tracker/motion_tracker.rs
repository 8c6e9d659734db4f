//! Single-object motion tracker state machine.

use nalgebra::Point2;
use tracing::{debug, info};

use crate::tracker::matching::{self, Candidate};
use crate::tracker::rect::Rect;
use crate::tracker::result::{DetectionResult, Estimate};
use crate::tracker::smoothing::ExponentialSmoother;
use crate::tracker::track_state::TrackState;

/// Configuration for the MotionTracker.
///
/// Values are not validated. A negative `max_misses` invalidates the track on
/// its first miss.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Candidates with a smaller pixel area are treated as noise
    pub min_area: f32,
    /// Largest center displacement accepted as the same object
    pub max_jump_distance: f32,
    /// Consecutive misses tolerated before the track is lost
    pub max_misses: i32,
    /// Weight of a new detection in the smoothed center
    pub smooth_alpha: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_area: 400.0,
            max_jump_distance: 100.0,
            max_misses: 15,
            smooth_alpha: 0.5,
        }
    }
}

/// Anchor of an initialized track.
#[derive(Debug, Clone, Copy)]
struct Track {
    smoothed_center: Point2<f32>,
    last_bbox: Rect,
}

impl Track {
    fn estimate(&self) -> Estimate {
        Estimate {
            bbox: self.last_bbox,
            center: self.smoothed_center,
        }
    }
}

pub struct MotionTracker {
    config: TrackerConfig,
    track: Option<Track>,
    miss_count: u32,
    frame_id: u64,
}

impl Default for MotionTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl MotionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            track: None,
            miss_count: 0,
            frame_id: 0,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Replace the configuration. Applies from the next `update`.
    pub fn set_config(&mut self, config: TrackerConfig) {
        self.config = config;
    }

    /// Drop all track state. The next `update` behaves like the first one.
    pub fn reset(&mut self) {
        self.track = None;
        self.miss_count = 0;
        self.frame_id = 0;
    }

    pub fn is_initialized(&self) -> bool {
        self.track.is_some()
    }

    /// Consecutive frames since the last matched candidate.
    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    pub fn smoothed_center(&self) -> Option<Point2<f32>> {
        self.track.map(|t| t.smoothed_center)
    }

    pub fn last_bounding_box(&self) -> Option<Rect> {
        self.track.map(|t| t.last_bbox)
    }

    /// Frames processed since construction or the last `reset`.
    pub fn frame_count(&self) -> u64 {
        self.frame_id
    }

    pub fn state(&self) -> TrackState {
        match self.track {
            None => TrackState::Uninitialized,
            Some(_) if self.miss_count == 0 => TrackState::Tracked,
            Some(_) if self.within_miss_budget() => TrackState::Coasting,
            Some(_) => TrackState::Lost,
        }
    }

    fn within_miss_budget(&self) -> bool {
        i64::from(self.miss_count) <= i64::from(self.config.max_misses)
    }

    /// Process the candidates of one frame.
    pub fn update(&mut self, candidates: &[Candidate]) -> DetectionResult {
        self.frame_id += 1;

        // Step 1: Drop noise and malformed regions
        let candidates = matching::filter_by_area(candidates, self.config.min_area);

        // Step 2: Associate with the current track, or anchor the first one
        let Some(track) = self.track else {
            return self.acquire(&candidates);
        };

        match matching::select_nearest(
            &candidates,
            &track.smoothed_center,
            self.config.max_jump_distance,
        ) {
            Some((idx, dist)) => {
                let candidate = &candidates[idx];
                let smoother = ExponentialSmoother::new(self.config.smooth_alpha);
                let updated = Track {
                    smoothed_center: smoother.smooth(&track.smoothed_center, &candidate.center()),
                    last_bbox: candidate.bbox,
                };
                debug!(
                    frame = self.frame_id,
                    distance = dist,
                    x = updated.smoothed_center.x,
                    y = updated.smoothed_center.y,
                    "matched candidate"
                );
                self.track = Some(updated);
                self.miss_count = 0;
                DetectionResult::Detected(updated.estimate())
            }
            None => self.miss(track),
        }
    }

    /// Anchor the first track on the largest surviving candidate.
    fn acquire(&mut self, candidates: &[Candidate]) -> DetectionResult {
        let Some(idx) = matching::select_largest(candidates) else {
            return DetectionResult::Lost(None);
        };

        let candidate = &candidates[idx];
        let track = Track {
            smoothed_center: candidate.center(),
            last_bbox: candidate.bbox,
        };
        info!(
            frame = self.frame_id,
            area = candidate.area,
            x = track.smoothed_center.x,
            y = track.smoothed_center.y,
            "track acquired"
        );
        self.track = Some(track);
        self.miss_count = 0;
        DetectionResult::Detected(track.estimate())
    }

    /// Carry the last position forward without moving the smoothed center.
    fn miss(&mut self, track: Track) -> DetectionResult {
        let was_lost = self.state() == TrackState::Lost;
        self.miss_count = self.miss_count.saturating_add(1);
        if self.within_miss_budget() {
            debug!(
                frame = self.frame_id,
                misses = self.miss_count,
                "no qualifying candidate, predicting"
            );
            return DetectionResult::Predicted(track.estimate());
        }
        if !was_lost {
            info!(
                frame = self.frame_id,
                misses = self.miss_count,
                "track lost"
            );
        }
        DetectionResult::Lost(Some(track.estimate()))
    }
}
