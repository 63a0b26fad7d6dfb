//! Envelope curve-stitching: connecting evenly spaced points on two rays in
//! reverse order, so the straight strokes trace out a parabolic envelope.

use crate::canvas::Canvas;
use crate::geometry::Point;

/// Stitch the angle formed by `ray_end_a`, `apex`, `ray_end_b`. Each ray is
/// divided into 2^depth equal segments; interior point i on ray A is joined
/// to interior point 2^depth - i on ray B, pen lifted between strokes.
/// Depth 0 leaves no interior points, so nothing is drawn.
pub fn stitch<C: Canvas>(
    canvas: &mut C,
    ray_end_a: Point,
    apex: Point,
    ray_end_b: Point,
    depth: u32,
) {
    let divisions = 1u64 << depth;
    for i in 1..divisions {
        let a = apex.lerp(ray_end_a, i as f64 / divisions as f64);
        let b = apex.lerp(ray_end_b, (divisions - i) as f64 / divisions as f64);
        canvas.move_to(a);
        canvas.line_to(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::StrokeList;

    fn right_angle_stitch(depth: u32) -> StrokeList {
        let mut list = StrokeList::new();
        stitch(
            &mut list,
            Point::new(8.0, 0.0),
            Point::ORIGIN,
            Point::new(0.0, 8.0),
            depth,
        );
        list
    }

    #[test]
    fn depth_zero_draws_nothing() {
        assert!(right_angle_stitch(0).strokes().is_empty());
    }

    #[test]
    fn stroke_count_is_interior_point_count() {
        for depth in 0..8 {
            let list = right_angle_stitch(depth);
            assert_eq!(
                list.strokes().len(),
                (1usize << depth) - 1,
                "depth {depth}"
            );
        }
    }

    #[test]
    fn pairing_is_reversed() {
        // depth 2: 4 divisions, interior points at 1/4, 2/4, 3/4.
        let list = right_angle_stitch(2);
        let strokes = list.strokes();
        assert_eq!(strokes.len(), 3);
        // First stroke: nearest point to the apex on A, farthest on B.
        assert_eq!(strokes[0].from, Point::new(2.0, 0.0));
        assert_eq!(strokes[0].to, Point::new(0.0, 6.0));
        // Middle stroke joins the two midpoints.
        assert_eq!(strokes[1].from, Point::new(4.0, 0.0));
        assert_eq!(strokes[1].to, Point::new(0.0, 4.0));
        assert_eq!(strokes[2].from, Point::new(6.0, 0.0));
        assert_eq!(strokes[2].to, Point::new(0.0, 2.0));
    }

    #[test]
    fn points_stay_on_their_rays() {
        let apex = Point::new(1.0, 1.0);
        let end_a = Point::new(9.0, 1.0);
        let mut list = StrokeList::new();
        stitch(&mut list, end_a, apex, Point::new(1.0, -7.0), 3);
        for stroke in list.strokes() {
            // Ray A is horizontal at y = 1, ray B vertical at x = 1.
            assert!((stroke.from.y - 1.0).abs() < 1e-12);
            assert!((stroke.to.x - 1.0).abs() < 1e-12);
        }
    }
}
