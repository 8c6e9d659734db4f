mod matching;
mod motion_tracker;
mod rect;
mod result;
mod smoothing;
mod track_state;

pub use matching::{Candidate, filter_by_area, select_largest, select_nearest};
pub use motion_tracker::{MotionTracker, TrackerConfig};
pub use rect::Rect;
pub use result::{DetectionRecord, DetectionResult, Estimate};
pub use smoothing::ExponentialSmoother;
pub use track_state::TrackState;
