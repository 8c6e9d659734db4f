//! Builder for creating Candidate objects from various box formats.

use crate::tracker::{Candidate, Rect};

/// Builder for creating `Candidate` objects from various box formats.
///
/// The area defaults to the box area when not set explicitly.
#[derive(Debug, Clone, Default)]
pub struct CandidateBuilder {
    bbox: Rect,
    area: Option<f32>,
}

impl CandidateBuilder {
    /// Create a new candidate builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.bbox = Rect::from_tlbr(x1, y1, x2, y2);
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.bbox = Rect::new(cx - w / 2.0, cy - h / 2.0, w, h);
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.bbox = Rect::new(x, y, w, h);
        self
    }

    /// Set the foreground pixel count.
    pub fn area(mut self, area: f32) -> Self {
        self.area = Some(area);
        self
    }

    /// Build the final `Candidate`.
    pub fn build(self) -> Candidate {
        let area = self.area.unwrap_or_else(|| self.bbox.area());
        Candidate::from_rect(self.bbox, area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_builder() {
        let c = CandidateBuilder::new()
            .tlbr(10.0, 20.0, 50.0, 80.0)
            .area(1234.0)
            .build();

        assert_eq!(c.area, 1234.0);
        assert_eq!(c.bbox.to_tlwh(), [10.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn test_area_defaults_to_box_area() {
        let c = CandidateBuilder::new().xywh(25.0, 25.0, 30.0, 20.0).build();

        assert_eq!(c.area, 600.0);
        assert_eq!(c.bbox.to_tlwh(), [10.0, 15.0, 30.0, 20.0]);
    }
}
