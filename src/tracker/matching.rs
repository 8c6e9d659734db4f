//! Candidate filtering and single-track association.

use nalgebra::{Point2, distance};

use crate::tracker::rect::Rect;

/// Foreground region reported by the extractor for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Bounding box in TLWH format
    pub bbox: Rect,
    /// Pixel count of the foreground blob
    pub area: f32,
}

impl Candidate {
    pub fn new(x: f32, y: f32, width: f32, height: f32, area: f32) -> Self {
        Self {
            bbox: Rect::new(x, y, width, height),
            area,
        }
    }

    pub fn from_rect(bbox: Rect, area: f32) -> Self {
        Self { bbox, area }
    }

    #[inline]
    pub fn center(&self) -> Point2<f32> {
        self.bbox.center()
    }

    pub fn is_well_formed(&self) -> bool {
        self.bbox.is_well_formed() && self.area.is_finite() && self.area >= 0.0
    }
}

/// Keep well-formed candidates whose area reaches `min_area`, in input order.
///
/// Malformed candidates are dropped regardless of `min_area`.
pub fn filter_by_area(candidates: &[Candidate], min_area: f32) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| c.is_well_formed() && c.area >= min_area)
        .copied()
        .collect()
}

/// Index of the candidate with the largest area. The first one wins ties.
pub fn select_largest(candidates: &[Candidate]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, c) in candidates.iter().enumerate() {
        match best {
            Some((_, area)) if c.area <= area => {}
            _ => best = Some((i, c.area)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index and distance of the candidate whose center is nearest to `anchor`,
/// provided that distance is at most `max_distance`. The first one wins ties.
pub fn select_nearest(
    candidates: &[Candidate],
    anchor: &Point2<f32>,
    max_distance: f32,
) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, c) in candidates.iter().enumerate() {
        let dist = distance(anchor, &c.center());
        // NaN distances and gates fail this comparison
        let within_gate = dist <= max_distance;
        match best {
            _ if !within_gate => {}
            Some((_, d)) if dist >= d => {}
            _ => best = Some((i, dist)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_area() {
        let candidates = vec![
            Candidate::new(0.0, 0.0, 10.0, 10.0, 399.0),
            Candidate::new(0.0, 0.0, 20.0, 20.0, 400.0),
            Candidate::new(0.0, 0.0, 30.0, 30.0, 900.0),
        ];
        let kept = filter_by_area(&candidates, 400.0);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].area, 400.0);
        assert_eq!(kept[1].area, 900.0);
    }

    #[test]
    fn test_filter_drops_malformed_with_negative_min_area() {
        let candidates = vec![
            Candidate::new(0.0, 0.0, -10.0, 10.0, 100.0),
            Candidate::new(0.0, 0.0, 10.0, 10.0, -5.0),
            Candidate::new(0.0, 0.0, 10.0, 10.0, 0.0),
        ];
        let kept = filter_by_area(&candidates, -100.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].area, 0.0);
    }

    #[test]
    fn test_select_largest_first_wins_ties() {
        let candidates = vec![
            Candidate::new(0.0, 0.0, 10.0, 10.0, 500.0),
            Candidate::new(50.0, 50.0, 10.0, 10.0, 800.0),
            Candidate::new(90.0, 90.0, 10.0, 10.0, 800.0),
        ];
        assert_eq!(select_largest(&candidates), Some(1));
        assert_eq!(select_largest(&[]), None);
    }

    #[test]
    fn test_select_nearest_within_gate() {
        let anchor = Point2::new(25.0, 25.0);
        let candidates = vec![
            // center (105, 105), ~113 away
            Candidate::new(95.0, 95.0, 20.0, 20.0, 400.0),
            // center (45, 25), 20 away
            Candidate::new(35.0, 15.0, 20.0, 20.0, 400.0),
            // center (25, 35), 10 away
            Candidate::new(15.0, 25.0, 20.0, 20.0, 400.0),
        ];
        let (idx, dist) = select_nearest(&candidates, &anchor, 100.0).unwrap();
        assert_eq!(idx, 2);
        assert!((dist - 10.0).abs() < 1e-5);

        assert!(select_nearest(&candidates[..1], &anchor, 100.0).is_none());
    }

    #[test]
    fn test_select_nearest_gate_is_inclusive_and_first_wins() {
        let anchor = Point2::new(0.0, 0.0);
        let candidates = vec![
            // center (100, 0)
            Candidate::new(90.0, -10.0, 20.0, 20.0, 400.0),
            // center (0, 100)
            Candidate::new(-10.0, 90.0, 20.0, 20.0, 400.0),
        ];
        let (idx, dist) = select_nearest(&candidates, &anchor, 100.0).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(dist, 100.0);
    }
}
