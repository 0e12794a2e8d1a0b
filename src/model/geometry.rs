//! Screen-space geometry (pure Rust, no FFI).
//!
//! All coordinates are absolute virtual-screen pixels: +x right, +y down,
//! origin at the primary monitor's top-left. The virtual screen can start at
//! negative coordinates when a monitor sits left of or above the primary.

/// A 2D point in absolute virtual-screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components are finite (no NaN, no infinity).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle in radians of the vector from `self` to `other`.
    ///
    /// Zero points right; positive angles turn clockwise on screen because
    /// +y points down.
    pub fn angle_to(&self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Component-wise interpolation: `self + (other - self) * t`.
    ///
    /// For finite endpoints and `t` in [0, 1] the result stays finite, even
    /// when `other - self` overflows.
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point {
            x: lerp_component(self.x, other.x, t),
            y: lerp_component(self.y, other.y, t),
        }
    }
}

fn lerp_component(a: f64, b: f64, t: f64) -> f64 {
    let delta = b - a;
    if delta.is_finite() {
        a + delta * t
    } else {
        a * (1.0 - t) + b * t
    }
}

/// Bounding rectangle of all monitors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualScreen {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl VirtualScreen {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Geometric centre of the virtual screen, in absolute coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Convert an absolute screen point into overlay-local coordinates.
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x - self.left, p.y - self.top)
    }

    /// Top-left anchor of a `box_w` x `box_h` shape centred on `p`, in
    /// overlay-local coordinates.
    pub fn canvas_anchor(&self, p: Point, box_w: f64, box_h: f64) -> Point {
        let local = self.to_local(p);
        Point::new(local.x - box_w / 2.0, local.y - box_h / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        assert!((a.distance_to(Point::new(300.0, 400.0)) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn angle_follows_screen_axes() {
        let o = Point::new(0.0, 0.0);
        assert_eq!(o.angle_to(Point::new(10.0, 0.0)), 0.0);
        assert!((o.angle_to(Point::new(0.0, 10.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((o.angle_to(Point::new(-10.0, 0.0)) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn lerp_survives_overflowing_span() {
        let a = Point::new(-1e308, 0.0);
        let b = Point::new(1e308, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!(mid.is_finite());
        assert_eq!(mid.x, 0.0);
    }

    #[test]
    fn non_finite_points_are_detected() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn center_accounts_for_negative_origin() {
        let screen = VirtualScreen::new(-1920.0, 0.0, 3840.0, 1080.0);
        assert_eq!(screen.center(), Point::new(0.0, 540.0));
    }

    #[test]
    fn canvas_anchor_subtracts_origin_and_half_box() {
        let screen = VirtualScreen::new(-1920.0, -200.0, 3840.0, 1280.0);
        let anchor = screen.canvas_anchor(Point::new(100.0, 100.0), 40.0, 30.0);
        assert_eq!(anchor, Point::new(2000.0, 285.0));
    }
}
