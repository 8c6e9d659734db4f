//! Per-frame tracker output.

use nalgebra::Point2;

use crate::tracker::rect::Rect;

/// Location estimate of the tracked object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub bbox: Rect,
    pub center: Point2<f32>,
}

/// Outcome of a single `MotionTracker::update` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionResult {
    /// A candidate was matched this frame.
    Detected(Estimate),
    /// No match; the last known position is carried forward.
    Predicted(Estimate),
    /// Nothing trustworthy. Carries the stale estimate, if any, for diagnostics.
    Lost(Option<Estimate>),
}

impl DetectionResult {
    pub fn is_detected(&self) -> bool {
        matches!(self, Self::Detected(_))
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Lost(_))
    }

    /// The estimate to act on. `None` once the track is lost.
    pub fn estimate(&self) -> Option<&Estimate> {
        match self {
            Self::Detected(e) | Self::Predicted(e) => Some(e),
            Self::Lost(_) => None,
        }
    }

    /// Flatten into the boolean-flag record consumed outside the tracker.
    pub fn to_record(&self) -> DetectionRecord {
        let estimate = match self {
            Self::Detected(e) | Self::Predicted(e) | Self::Lost(Some(e)) => *e,
            Self::Lost(None) => Estimate {
                bbox: Rect::default(),
                center: Point2::origin(),
            },
        };
        DetectionRecord {
            bounding_box: estimate.bbox,
            center: estimate.center,
            is_detected: self.is_detected(),
            is_valid: self.is_valid(),
        }
    }
}

impl From<DetectionResult> for DetectionRecord {
    fn from(result: DetectionResult) -> Self {
        result.to_record()
    }
}

/// Plain data record for rendering and logging layers.
///
/// When `is_valid` is false, `bounding_box` and `center` mean "track lost" only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionRecord {
    pub bounding_box: Rect,
    pub center: Point2<f32>,
    pub is_detected: bool,
    pub is_valid: bool,
}
