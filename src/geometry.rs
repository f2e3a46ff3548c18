//! Picker geometry: the hue annulus, the saturation/value triangle and the
//! integer bounding square.
//!
//! Offsets are wheel-local: measured from the picker center in screen pixels,
//! with y growing downward. Wheel angles run counter-clockwise on screen from
//! 3 o'clock, so a point straight above the center sits at π/2.

use std::f64::consts::TAU;

use floem::kurbo::{Point, Rect, Vec2};

/// Slack for points on a triangle edge, absorbing barycentric rounding.
const EDGE_EPSILON: f64 = 1e-9;

/// Integer screen rectangle; `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ScreenRect {
    /// Square of side `2 * radius` centered on `center`.
    pub fn centered_square(center: (i32, i32), radius: i32) -> Self {
        Self {
            left: center.0 - radius,
            top: center.1 - radius,
            right: center.0 + radius,
            bottom: center.1 + radius,
        }
    }

    /// [`ScreenRect::centered_square`], or `None` when an edge or the side
    /// length does not fit in an `i32`.
    pub fn checked_centered_square(center: (i32, i32), radius: i32) -> Option<Self> {
        let rect = Self {
            left: center.0.checked_sub(radius)?,
            top: center.1.checked_sub(radius)?,
            right: center.0.checked_add(radius)?,
            bottom: center.1.checked_add(radius)?,
        };
        rect.right.checked_sub(rect.left)?;
        rect.bottom.checked_sub(rect.top)?;
        Some(rect)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn to_kurbo(self) -> Rect {
        Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

/// Offset on the circle of `radius` at wheel angle `angle` (radians).
pub fn wheel_offset(angle: f64, radius: f64) -> Vec2 {
    Vec2::new(radius * angle.cos(), -radius * angle.sin())
}

/// The hue ring: every point whose distance from the center lies within
/// `[radius - half_width, radius + half_width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    pub radius: f64,
    pub half_width: f64,
}

impl Annulus {
    pub fn inner_radius(&self) -> f64 {
        self.radius - self.half_width
    }

    pub fn outer_radius(&self) -> f64 {
        self.radius + self.half_width
    }

    /// Wheel angle in [0, 2π) of an offset inside the ring.
    ///
    /// The center itself never hits: it has no direction, and it can only
    /// fall inside the band when `half_width >= radius`.
    pub fn angle_of(&self, offset: Vec2) -> Option<f64> {
        let dist = offset.hypot();
        if dist == 0.0 || dist < self.inner_radius() || dist > self.outer_radius() {
            return None;
        }

        let cos = (offset.dot(Vec2::new(1.0, 0.0)) / dist).clamp(-1.0, 1.0);
        let angle = cos.acos();
        // acos only covers the upper half plane.
        if offset.y > 0.0 {
            Some(TAU - angle)
        } else {
            Some(angle)
        }
    }
}

/// Barycentric weights of a point relative to the triangle `a`, `b`, `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Barycentric {
    pub fn is_inside(&self) -> bool {
        self.a >= -EDGE_EPSILON && self.b >= -EDGE_EPSILON && self.c >= -EDGE_EPSILON
    }

    /// Saturation and value of the point `c * hue + b * white + a * black`.
    ///
    /// Value is the largest RGB component of that blend (`b + c`), and the
    /// smallest is `b`, so saturation is `c / (b + c)`.
    pub fn saturation_value(&self) -> (f64, f64) {
        let b = self.b.max(0.0);
        let c = self.c.max(0.0);
        let v = (b + c).min(1.0);
        let s = if v > 0.0 { (c / (b + c)).min(1.0) } else { 0.0 };
        (s, v)
    }
}

/// The saturation/value triangle, inscribed in the ring's inner circle.
///
/// * `a`: value = 0 (black)
/// * `b`: saturation = 0 (white)
/// * `c`: the chosen hue at full chroma, pointing at that hue on the ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn inscribed(radius: f64, hue_degrees: f64) -> Self {
        let theta = hue_degrees.to_radians();
        let third = TAU / 3.0;
        Self {
            c: wheel_offset(theta, radius),
            b: wheel_offset(theta + third, radius),
            a: wheel_offset(theta + 2.0 * third, radius),
        }
    }

    /// `None` when the triangle has collapsed to a line or a point.
    pub fn barycentric(&self, offset: Vec2) -> Option<Barycentric> {
        let v0 = self.b - self.a;
        let v1 = self.c - self.a;
        let v2 = offset - self.a;

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let denom = d00 * d11 - d01 * d01;
        if denom.abs() <= f64::EPSILON {
            return None;
        }

        let b = (d11 * d20 - d01 * d21) / denom;
        let c = (d00 * d21 - d01 * d20) / denom;
        Some(Barycentric { a: 1.0 - b - c, b, c })
    }

    /// Saturation and value under `offset`, if it lies in the triangle.
    pub fn saturation_value_at(&self, offset: Vec2) -> Option<(f64, f64)> {
        self.barycentric(offset)
            .filter(Barycentric::is_inside)
            .map(|w| w.saturation_value())
    }

    /// Offset showing `(s, v)`; the inverse of [`Triangle::saturation_value_at`].
    pub fn point_for(&self, s: f64, v: f64) -> Vec2 {
        let wc = s * v;
        let wb = v - wc;
        let wa = 1.0 - v;
        self.a * wa + self.b * wb + self.c * wc
    }
}

/// What a region hit changes in the held color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution {
    /// New hue in degrees.
    Hue(f64),
    SaturationValue { s: f64, v: f64 },
}

/// A clickable part of the picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    Annulus(Annulus),
    Triangle(Triangle),
}

impl Region {
    pub fn hit_test(&self, offset: Vec2) -> Option<Contribution> {
        match self {
            Region::Annulus(ring) => ring
                .angle_of(offset)
                .map(|angle| Contribution::Hue(angle.to_degrees())),
            Region::Triangle(tri) => tri
                .saturation_value_at(offset)
                .map(|(s, v)| Contribution::SaturationValue { s, v }),
        }
    }
}

/// Wheel-local offset of a screen point.
pub fn offset_from(center: (i32, i32), point: Point) -> Vec2 {
    point - Point::new(f64::from(center.0), f64::from(center.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn ring() -> Annulus {
        Annulus {
            radius: 50.0,
            half_width: 5.0,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_annulus_angles() {
        let r = ring();
        assert_eq!(r.angle_of(Vec2::new(50.0, 0.0)), Some(0.0));
        assert!(approx(r.angle_of(Vec2::new(0.0, -50.0)).unwrap(), PI / 2.0));
        assert!(approx(r.angle_of(Vec2::new(-50.0, 0.0)).unwrap(), PI));
        assert!(approx(r.angle_of(Vec2::new(0.0, 50.0)).unwrap(), 3.0 * PI / 2.0));
    }

    #[test]
    fn test_annulus_band_is_inclusive() {
        let r = ring();
        assert!(r.angle_of(Vec2::new(45.0, 0.0)).is_some());
        assert!(r.angle_of(Vec2::new(55.0, 0.0)).is_some());
        assert!(r.angle_of(Vec2::new(44.9, 0.0)).is_none());
        assert!(r.angle_of(Vec2::new(0.0, -70.0)).is_none());
    }

    #[test]
    fn test_annulus_center_never_hits() {
        let fat = Annulus {
            radius: 5.0,
            half_width: 10.0,
        };
        assert_eq!(fat.angle_of(Vec2::ZERO), None);
        assert!(fat.angle_of(Vec2::new(1.0, 0.0)).is_some());
    }

    #[test]
    fn test_triangle_corners() {
        let tri = Triangle::inscribed(40.0, 0.0);
        assert!(approx(tri.c.x, 40.0) && approx(tri.c.y, 0.0));

        let (s, v) = tri.saturation_value_at(tri.c).unwrap();
        assert!(approx(s, 1.0) && approx(v, 1.0));
        let (s, v) = tri.saturation_value_at(tri.b).unwrap();
        assert!(approx(s, 0.0) && approx(v, 1.0));
        let (_, v) = tri.saturation_value_at(tri.a).unwrap();
        assert!(approx(v, 0.0));
    }

    #[test]
    fn test_triangle_edges() {
        let tri = Triangle::inscribed(40.0, 75.0);
        // Halfway along white -> hue: full value, half saturation.
        let (s, v) = tri.saturation_value_at((tri.b + tri.c) * 0.5).unwrap();
        assert!(approx(s, 0.5) && approx(v, 1.0));
        // Halfway along black -> hue: full saturation, half value.
        let (s, v) = tri.saturation_value_at((tri.a + tri.c) * 0.5).unwrap();
        assert!(approx(s, 1.0) && approx(v, 0.5));
    }

    #[test]
    fn test_triangle_outside() {
        let tri = Triangle::inscribed(40.0, 0.0);
        assert_eq!(tri.saturation_value_at(Vec2::new(41.0, 0.0)), None);
        assert_eq!(tri.saturation_value_at(Vec2::new(-30.0, 0.0)), None);
    }

    #[test]
    fn test_point_for_inverts_hit() {
        let tri = Triangle::inscribed(40.0, 200.0);
        for (s, v) in [(0.3, 0.7), (1.0, 0.2), (0.5, 1.0)] {
            let (s2, v2) = tri.saturation_value_at(tri.point_for(s, v)).unwrap();
            assert!(approx(s, s2) && approx(v, v2), "({s}, {v}) -> ({s2}, {v2})");
        }
    }

    #[test]
    fn test_degenerate_triangle() {
        let tri = Triangle::inscribed(0.0, 0.0);
        assert_eq!(tri.barycentric(Vec2::ZERO), None);
    }

    #[test]
    fn test_region_contributions() {
        let wheel = Region::Annulus(ring());
        assert_eq!(
            wheel.hit_test(Vec2::new(50.0, 0.0)),
            Some(Contribution::Hue(0.0))
        );
        let tri = Region::Triangle(Triangle::inscribed(40.0, 0.0));
        assert!(matches!(
            tri.hit_test(Vec2::ZERO),
            Some(Contribution::SaturationValue { .. })
        ));
        assert_eq!(tri.hit_test(Vec2::new(50.0, 0.0)), None);
    }

    #[test]
    fn test_centered_square() {
        let r = ScreenRect::centered_square((80, 80), 40);
        assert_eq!(
            r,
            ScreenRect {
                left: 40,
                top: 40,
                right: 120,
                bottom: 120
            }
        );
        assert_eq!((r.width(), r.height()), (80, 80));
    }

    #[test]
    fn test_checked_centered_square() {
        assert_eq!(
            ScreenRect::checked_centered_square((80, 80), 40),
            Some(ScreenRect::centered_square((80, 80), 40))
        );
        assert_eq!(ScreenRect::checked_centered_square((i32::MAX - 10, 0), 20), None);
        assert_eq!(ScreenRect::checked_centered_square((0, i32::MIN + 5), 10), None);
        // Edges fit but the side length does not.
        assert_eq!(ScreenRect::checked_centered_square((0, 0), i32::MAX / 2 + 1), None);
    }
}
