//! Recursive midpoint subdivision of a triangle.

use crate::canvas::Canvas;
use crate::geometry::Triangle;

/// Draw the outline of `tri` (v0 -> v1 -> v2 -> v0).
pub fn outline<C: Canvas>(canvas: &mut C, tri: &Triangle) {
    let [v0, v1, v2] = tri.vertices;
    canvas.move_to(v0);
    canvas.line_to(v1);
    canvas.line_to(v2);
    canvas.line_to(v0);
}

/// Sierpinski subdivision: draw the triangle formed by the midpoints of the
/// three edges, then recurse into the three corner sub-triangles. Depth 0
/// draws nothing beyond what the caller already drew.
pub fn subdivide<C: Canvas>(canvas: &mut C, tri: &Triangle, depth: u32) {
    if depth == 0 {
        return;
    }
    let v = tri.vertices;
    // Midpoints of edges (v0,v1), (v1,v2), (v2,v0).
    let m = [
        v[0].midpoint(v[1]),
        v[1].midpoint(v[2]),
        v[2].midpoint(v[0]),
    ];
    canvas.move_to(m[2]);
    canvas.line_to(m[0]);
    canvas.line_to(m[1]);
    canvas.line_to(m[2]);
    for i in 0..3 {
        let corner = Triangle::new(m[i], m[(i + 1) % 3], v[(i + 1) % 3]);
        subdivide(canvas, &corner, depth - 1);
    }
}
