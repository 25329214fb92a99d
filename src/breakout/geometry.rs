use std::ops::Range;

use egui::Rect;

/// Strict rectangle overlap test: edge or corner contact alone is no hit
/// (`Rect::intersects` would already count touching rects).
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    spans_overlap(a.min.x..a.max.x, b.min.x..b.max.x) && spans_overlap(a.min.y..a.max.y, b.min.y..b.max.y)
}

/// Strict 1D interval overlap
pub fn spans_overlap(a: Range<f32>, b: Range<f32>) -> bool {
    a.start < b.end && b.start < a.end
}

#[cfg(test)]
mod tests {
    use std::ops::Range;

    use egui::{Pos2, Rect};
    use rstest::rstest;

    use super::*;

    fn rect(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Rect {
        Rect::from_min_max(Pos2::new(min_x, min_y), Pos2::new(max_x, max_y))
    }

    #[rstest]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(5.0, 5.0, 15.0, 15.0), true)]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(2.0, 2.0, 8.0, 8.0), true)]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(9.9, 9.9, 20.0, 20.0), true)]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(10.0, 0.0, 20.0, 10.0), false)]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(0.0, 10.0, 10.0, 20.0), false)]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(10.0, 10.0, 20.0, 20.0), false)]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(11.0, 0.0, 20.0, 10.0), false)]
    fn rects_overlap_is_strict(#[case] a: Rect, #[case] b: Rect, #[case] expected: bool) {
        assert_eq!(rects_overlap(&a, &b), expected);
        assert_eq!(rects_overlap(&b, &a), expected);
    }

    #[rstest]
    #[case(0.0..10.0, 9.9..20.0, true)]
    #[case(3.0..4.0, 0.0..10.0, true)]
    #[case(0.0..10.0, 10.0..20.0, false)]
    #[case(0.0..10.0, -5.0..0.0, false)]
    #[case(0.0..10.0, 11.0..20.0, false)]
    fn spans_overlap_is_strict(#[case] a: Range<f32>, #[case] b: Range<f32>, #[case] expected: bool) {
        assert_eq!(spans_overlap(a.clone(), b.clone()), expected);
        assert_eq!(spans_overlap(b, a), expected);
    }
}
