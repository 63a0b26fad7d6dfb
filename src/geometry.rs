//! Plain value types for the pattern generators. World coordinates are
//! centered on the origin with +y up; the rasterizer flips to screen space.

/// 2D point in world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Arithmetic mean of the two endpoints.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Point at fraction `t` of the way from `self` toward `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn distance(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Point reached by advancing `dist` from `self` along `heading` (radians,
    /// 0 = east, counter-clockwise positive).
    pub fn advance(self, heading: f64, dist: f64) -> Point {
        Point::new(self.x + dist * heading.cos(), self.y + dist * heading.sin())
    }
}

/// Three vertices in counter-clockwise winding order. Construction keeps the
/// vertices non-collinear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(v0: Point, v1: Point, v2: Point) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Equilateral triangle with the given side length, centroid at `center`,
    /// apex pointing up.
    pub fn equilateral(center: Point, side: f64) -> Self {
        // Circumradius of an equilateral triangle.
        let r = side / 3f64.sqrt();
        let vertex = |deg: f64| center.advance(deg.to_radians(), r);
        Self::new(vertex(210.0), vertex(330.0), vertex(90.0))
    }

    /// Vertical extent of the triangle.
    pub fn height(&self) -> f64 {
        let ys = self.vertices.map(|v| v.y);
        let min = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        max - min
    }
}

/// Side length of an equilateral triangle whose vertical extent is `height`.
pub fn side_for_height(height: f64) -> f64 {
    2.0 * height / 3f64.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn midpoint_is_symmetric() {
        let a = Point::new(1.0, -3.5);
        let b = Point::new(-2.25, 8.0);
        assert_eq!(a.midpoint(b), b.midpoint(a));
        let m = a.midpoint(b);
        assert!((m.x - (-0.625)).abs() < EPS);
        assert!((m.y - 2.25).abs() < EPS);
    }

    #[test]
    fn lerp_hits_endpoints_and_middle() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, -4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), a.midpoint(b));
    }

    #[test]
    fn advance_follows_heading() {
        let p = Point::ORIGIN.advance(std::f64::consts::FRAC_PI_2, 5.0);
        assert!(p.x.abs() < EPS);
        assert!((p.y - 5.0).abs() < EPS);
    }

    #[test]
    fn side_for_height_round_trips() {
        let height = 320.0;
        let side = side_for_height(height);
        let tri = Triangle::equilateral(Point::ORIGIN, side);
        assert!((tri.height() - height).abs() < 1e-6);
    }

    #[test]
    fn equilateral_sides_are_equal() {
        let tri = Triangle::equilateral(Point::new(3.0, -1.0), 100.0);
        let [a, b, c] = tri.vertices;
        assert!((a.distance(b) - 100.0).abs() < 1e-9);
        assert!((b.distance(c) - 100.0).abs() < 1e-9);
        assert!((c.distance(a) - 100.0).abs() < 1e-9);
    }
}
