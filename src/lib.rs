//! Single-object motion tracking over background-subtraction candidates.
//!
//! The [`MotionTracker`] consumes the foreground regions found in each frame,
//! drops the ones too small to be the object, associates the nearest one with
//! the current track and smooths its center. Frames without a usable region
//! carry the last position forward until the miss budget runs out.
//!
//! ```
//! use motion_tracker_rs::{Candidate, MotionTracker, TrackerConfig};
//!
//! let mut tracker = MotionTracker::new(TrackerConfig::default());
//! let result = tracker.update(&[Candidate::new(10.0, 10.0, 30.0, 30.0, 900.0)]);
//! assert!(result.is_detected());
//! assert_eq!(result.estimate().unwrap().center.x, 25.0);
//! ```

pub mod integration;
pub mod tracker;

pub use integration::{
    BlobExtractor, CandidateBuilder, CandidateSource, ExtractError, ForegroundModel,
    IntoCandidates, MotionPipeline,
};
pub use tracker::{
    Candidate, DetectionRecord, DetectionResult, Estimate, MotionTracker, Rect, TrackState,
    TrackerConfig,
};
