//! Basic building blocks: points and line segments in the maze plane.
//!
//! All angles at this level are degrees. `Point::rotate` is not a proper
//! rotation: its second row is `[sin θ, -cos θ]`, a rotation composed with a
//! reflection across the pivot's horizontal axis. The sensor model is built
//! on this exact transform, so it is kept as-is rather than corrected.

use std::{
    f64::consts::PI,
    ops::{Add, Sub},
};

use nalgebra::{Matrix2, Vector2};

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees / 180.0 * PI
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, point: Self) -> f64 {
        ((self.x - point.x).powi(2) + (self.y - point.y).powi(2)).sqrt()
    }

    /// Angle of the vector from the origin to this point, in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        let ang = self.y.atan2(self.x) / PI * 180.0;
        if ang < 0.0 {
            ang + 360.0
        } else {
            ang
        }
    }

    /// Transform this point by `angle` degrees about `pivot`.
    ///
    /// The matrix is `[cos θ, -sin θ; sin θ, -cos θ]`, so a zero angle leaves
    /// only points on the pivot's horizontal axis fixed.
    pub fn rotate(&self, angle: f64, pivot: Self) -> Self {
        let rad = deg_to_rad(angle);
        let (s, c) = rad.sin_cos();
        let rotated = Matrix2::new(c, -s, s, -c) * Vector2::new(self.x - pivot.x, self.y - pivot.y);
        Self::new(rotated.x + pivot.x, rotated.y + pivot.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> Point {
        self.a
    }

    pub fn b(&self) -> Point {
        self.b
    }

    pub fn midpoint(&self) -> Point {
        Point::new((self.a.x + self.b.x) / 2.0, (self.a.y + self.b.y) / 2.0)
    }

    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Distance from `p` to the nearest point of the segment.
    ///
    /// Projects `p` onto the carrier line and clamps the parameter to the
    /// segment; outside `[0, 1]` the nearer endpoint wins. A zero-length
    /// segment short-circuits to 0.0 regardless of `p`.
    pub fn distance(&self, p: Point) -> f64 {
        let u_top = (p.x - self.a.x) * (self.b.x - self.a.x)
            + (p.y - self.a.y) * (self.b.y - self.a.y);
        let u_bot = self.length().powi(2);
        if u_bot == 0.0 {
            return 0.0;
        }

        let u = u_top / u_bot;
        if !(0.0..=1.0).contains(&u) {
            return self.a.distance(p).min(self.b.distance(p));
        }

        let projection = Point::new(
            self.a.x + u * (self.b.x - self.a.x),
            self.a.y + u * (self.b.y - self.a.y),
        );
        projection.distance(p)
    }

    /// Strict-interior intersection with `other`.
    ///
    /// Returns `None` for parallel or collinear segments (zero denominator,
    /// no fallback) and for crossings at an endpoint; only crossings with
    /// both line parameters strictly inside `(0, 1)` count.
    pub fn intersect(&self, other: Segment) -> Option<Point> {
        let (a, b) = (self.a, self.b);
        let (c, d) = (other.a, other.b);

        let r_top = (a.y - c.y) * (d.x - c.x) - (a.x - c.x) * (d.y - c.y);
        let s_top = (a.y - c.y) * (b.x - a.x) - (a.x - c.x) * (b.y - a.y);
        let denom = (b.x - a.x) * (d.y - c.y) - (b.y - a.y) * (d.x - c.x);

        if denom == 0.0 {
            return None;
        }

        let r = r_top / denom;
        let s = s_top / denom;
        if r > 0.0 && r < 1.0 && s > 0.0 && s < 1.0 {
            Some(Point::new(a.x + r * (b.x - a.x), a.y + r * (b.y - a.y)))
        } else {
            None
        }
    }
}
