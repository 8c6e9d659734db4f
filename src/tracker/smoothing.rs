//! Per-axis exponential smoothing of the tracked center.

use nalgebra::Point2;

/// Exponential moving average over 2D points.
///
/// `alpha` is the weight of the new observation. It is not clamped: 0 never
/// moves the estimate, 1 snaps to every observation.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialSmoother {
    alpha: f32,
}

impl ExponentialSmoother {
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// `alpha * observed + (1 - alpha) * prior`, per axis.
    pub fn smooth(&self, prior: &Point2<f32>, observed: &Point2<f32>) -> Point2<f32> {
        Point2::from(observed.coords * self.alpha + prior.coords * (1.0 - self.alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_alpha_is_midpoint() {
        let s = ExponentialSmoother::new(0.5);
        let out = s.smooth(&Point2::new(25.0, 25.0), &Point2::new(35.0, 35.0));
        assert_eq!(out, Point2::new(30.0, 30.0));
    }

    #[test]
    fn test_alpha_extremes() {
        let prior = Point2::new(10.0, -4.0);
        let observed = Point2::new(50.0, 20.0);
        assert_eq!(ExponentialSmoother::new(0.0).smooth(&prior, &observed), prior);
        assert_eq!(
            ExponentialSmoother::new(1.0).smooth(&prior, &observed),
            observed
        );
    }

    #[test]
    fn test_result_on_segment() {
        let prior = Point2::new(0.0, 0.0);
        let observed = Point2::new(40.0, 80.0);
        let out = ExponentialSmoother::new(0.25).smooth(&prior, &observed);
        assert!((out.x - 10.0).abs() < 1e-5);
        assert!((out.y - 20.0).abs() < 1e-5);
    }
}
