//! The three top-level compositions, built from the subdivision and stitching
//! primitives. All of them draw around the origin and size themselves from
//! the window height so the figure fits with a fixed margin.

use clap::ValueEnum;

use crate::canvas::{Canvas, Turtle};
use crate::envelope::stitch;
use crate::geometry::{side_for_height, Point, Triangle};
use crate::sierpinski::{outline, subdivide};

/// Margin kept between the figure and the window edge, in pixels.
const PADDING: f64 = 50.0;
/// Floor for the figure scale so tiny windows still draw something.
const MIN_SCALE: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// One large equilateral triangle, recursively subdivided.
    #[value(name = "sierpinski_triangle")]
    SierpinskiTriangle,
    /// Six envelope fans arranged radially at 60-degree increments.
    #[value(name = "envelope_star")]
    EnvelopeStar,
    /// Alternating subdivided triangles with envelope fans in the gaps.
    #[value(name = "sierpinski_envelope")]
    SierpinskiEnvelope,
}

/// Radial scale of the figure for a given window height: half the height
/// minus the margin.
pub fn figure_scale(window_height: f64) -> f64 {
    (window_height / 2.0 - PADDING).max(MIN_SCALE)
}

/// Draw `pattern` onto `canvas`, sized for `window_height`.
pub fn render<C: Canvas>(canvas: &mut C, pattern: Pattern, window_height: f64, depth: u32) {
    let scale = figure_scale(window_height);
    match pattern {
        Pattern::SierpinskiTriangle => sierpinski_triangle(canvas, scale, depth),
        Pattern::EnvelopeStar => envelope_star(canvas, scale, depth),
        Pattern::SierpinskiEnvelope => sierpinski_envelope(canvas, scale, depth),
    }
}

fn sierpinski_triangle<C: Canvas>(canvas: &mut C, scale: f64, depth: u32) {
    // The triangle spans the full canvas height, 2 * scale. Its centroid
    // sits a sixth of the height below the bounding-box center, so shift it
    // down to center the figure vertically.
    let height = 2.0 * scale;
    let tri = Triangle::equilateral(Point::new(0.0, -height / 6.0), side_for_height(height));
    outline(canvas, &tri);
    subdivide(canvas, &tri, depth);
}

fn envelope_star<C: Canvas>(canvas: &mut C, scale: f64, depth: u32) {
    let spoke = |i: u32| Point::ORIGIN.advance((i as f64 * 60.0).to_radians(), scale);
    for i in 0..6 {
        stitch(canvas, spoke(i), Point::ORIGIN, spoke((i + 1) % 6), depth);
    }
}

fn sierpinski_envelope<C: Canvas>(canvas: &mut C, scale: f64, depth: u32) {
    // Fan six triangle slots around the origin, drawing every other one:
    // walk the triangle's edges with the pen down, then turn 60 degrees to
    // the next slot.
    let side = scale;
    let mut triangles: Vec<Triangle> = Vec::with_capacity(3);
    {
        let mut turtle = Turtle::new(canvas);
        for slot in 0..6 {
            if slot % 2 == 0 {
                let mut verts = [Point::ORIGIN; 3];
                for vert in &mut verts {
                    *vert = turtle.position();
                    turtle.forward(side);
                    turtle.left(120.0);
                }
                triangles.push(Triangle::new(verts[0], verts[1], verts[2]));
            }
            turtle.left(60.0);
        }
    }
    for tri in &triangles {
        subdivide(canvas, tri, depth);
    }
    // Stitch the three gaps between adjacent triangle tips, apex at the
    // origin: each triangle's far vertex pairs with the next one's near
    // vertex, 120 degrees around.
    for i in 0..3 {
        let a = triangles[i].vertices[2];
        let b = triangles[(i + 1) % 3].vertices[1];
        stitch(canvas, a, Point::ORIGIN, b, depth);
    }
}
