//! Drawing surface abstraction. The pattern generators only ever move a pen
//! between points, so the surface is two operations: reposition with the pen
//! up, or drag it down to the next point. Collecting strokes into a list keeps
//! the geometry testable without a window.

use crate::geometry::Point;

/// A drawn segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub from: Point,
    pub to: Point,
}

pub trait Canvas {
    /// Reposition the pen without drawing.
    fn move_to(&mut self, p: Point);
    /// Drag the pen from its current position to `p`, drawing a stroke.
    fn line_to(&mut self, p: Point);
}

/// Canvas that records strokes for later rasterization (or inspection in
/// tests).
#[derive(Debug, Default)]
pub struct StrokeList {
    pos: Point,
    strokes: Vec<Stroke>,
}

impl StrokeList {
    pub fn new() -> Self {
        Self {
            pos: Point::ORIGIN,
            strokes: Vec::new(),
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn into_strokes(self) -> Vec<Stroke> {
        self.strokes
    }
}

impl Canvas for StrokeList {
    fn move_to(&mut self, p: Point) {
        self.pos = p;
    }

    fn line_to(&mut self, p: Point) {
        self.strokes.push(Stroke { from: self.pos, to: p });
        self.pos = p;
    }
}

/// Pen with a position and heading, for compositions that walk and turn
/// rather than jump between absolute coordinates.
pub struct Turtle<'a, C: Canvas> {
    canvas: &'a mut C,
    pos: Point,
    /// Radians, 0 = east, counter-clockwise positive.
    heading: f64,
}

impl<'a, C: Canvas> Turtle<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.move_to(Point::ORIGIN);
        Self {
            canvas,
            pos: Point::ORIGIN,
            heading: 0.0,
        }
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    /// Advance `dist` along the current heading, drawing.
    pub fn forward(&mut self, dist: f64) {
        let next = self.pos.advance(self.heading, dist);
        self.canvas.line_to(next);
        self.pos = next;
    }

    /// Turn counter-clockwise by `degrees`.
    pub fn left(&mut self, degrees: f64) {
        self.heading += degrees.to_radians();
    }
}
