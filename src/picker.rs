//! Picker state: the held HSV color and the response to pointer input.
//!
//! A [`ColorPicker`] owns its layout, its two clickable regions and the pixel
//! buffer the GUI blits. Each pointer event goes through
//! [`ColorPicker::update`], which hit-tests the regions in a fixed order and
//! applies the first hit. The caller reacts to the returned [`PickResult`].

use std::ops::{BitOr, BitOrAssign};

use floem::kurbo::{Point, Vec2};

use crate::color::{Hsv, SolidColor};
use crate::constants;
use crate::error::PickerError;
use crate::geometry::{self, Annulus, Contribution, Region, ScreenRect, Triangle};
use crate::math;
use crate::pixel::PixelFormat;

/// What changed after an input event. Flags combine with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickResult(u8);

impl PickResult {
    pub const NOTHING: Self = Self(0);
    /// The held color changed; the caller should read it.
    pub const CHANGE_COLOR: Self = Self(1 << 1);
    /// The picker's own pixels are stale; call [`ColorPicker::render`].
    pub const REDRAW_PICKER: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_nothing(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for PickResult {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PickResult {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Screen placement and ring dimensions of a picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerLayout {
    /// Center in screen pixel coordinates.
    pub center: (i32, i32),
    /// Half the side of the square the picker draws into.
    pub bound_radius_px: i32,
    pub wheel_radius: f64,
    pub wheel_half_width: f64,
}

impl PickerLayout {
    /// Check the invariants every picker relies on.
    pub fn validate(&self) -> Result<(), PickerError> {
        if !self.wheel_half_width.is_finite() || self.wheel_half_width <= 0.0 {
            return Err(PickerError::NonPositiveHalfWidth(self.wheel_half_width));
        }
        if !self.wheel_radius.is_finite() || self.wheel_radius <= 0.0 {
            return Err(PickerError::NonPositiveRadius(self.wheel_radius));
        }
        let outer_radius = self.wheel_radius + self.wheel_half_width;
        if f64::from(self.bound_radius_px) < outer_radius {
            return Err(PickerError::BoundsTooSmall {
                bound_radius_px: self.bound_radius_px,
                outer_radius,
            });
        }
        let bounds = ScreenRect::checked_centered_square(self.center, self.bound_radius_px)
            .ok_or(PickerError::CoordinateOverflow {
                center: self.center,
                bound_radius_px: self.bound_radius_px,
            })?;
        if bounds.left < 0 || bounds.top < 0 {
            return Err(PickerError::OffScreen {
                left: bounds.left,
                top: bounds.top,
            });
        }
        Ok(())
    }

    pub fn bounds(&self) -> ScreenRect {
        ScreenRect::centered_square(self.center, self.bound_radius_px)
    }

    fn annulus(&self) -> Annulus {
        Annulus {
            radius: self.wheel_radius,
            half_width: self.wheel_half_width,
        }
    }
}

impl Default for PickerLayout {
    fn default() -> Self {
        Self {
            center: (constants::BOUND_RADIUS_PX, constants::BOUND_RADIUS_PX),
            bound_radius_px: constants::BOUND_RADIUS_PX,
            wheel_radius: constants::WHEEL_RADIUS,
            wheel_half_width: constants::WHEEL_HALF_WIDTH,
        }
    }
}

/// A hue wheel with a saturation/value triangle inside it.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    layout: PickerLayout,
    bounds: ScreenRect,
    ring: Annulus,
    triangle: Triangle,
    /// Row-major, `bounds.width() * bounds.height()` packed pixels.
    pixels: Vec<u32>,
    hsv: Hsv,
}

impl ColorPicker {
    pub fn new(layout: PickerLayout) -> Result<Self, PickerError> {
        layout.validate()?;
        let bounds = layout.bounds();
        let hsv = Hsv::default();
        log::debug!(
            "color picker at {:?}, ring {}±{}, {}x{} px",
            layout.center,
            layout.wheel_radius,
            layout.wheel_half_width,
            bounds.width(),
            bounds.height()
        );
        let ring = layout.annulus();
        Ok(Self {
            layout,
            bounds,
            ring,
            triangle: inscribed_triangle(&ring, hsv.h),
            pixels: vec![0; pixel_count(&bounds)],
            hsv,
        })
    }

    /// Clickable regions in hit-test order: the ring first, then the triangle.
    fn regions(&self) -> [Region; 2] {
        [Region::Annulus(self.ring), Region::Triangle(self.triangle)]
    }

    fn first_hit(&self, offset: Vec2) -> Option<Contribution> {
        self.regions()
            .iter()
            .find_map(|region| region.hit_test(offset))
    }

    pub fn layout(&self) -> PickerLayout {
        self.layout
    }

    /// Move or resize the picker. The pixel buffer is reallocated only when
    /// the bounding square changes size, and must be re-rendered either way.
    pub fn set_layout(&mut self, layout: PickerLayout) -> Result<PickResult, PickerError> {
        layout.validate()?;
        let bounds = layout.bounds();
        if pixel_count(&bounds) != self.pixels.len() {
            self.pixels = vec![0; pixel_count(&bounds)];
        }
        self.layout = layout;
        self.bounds = bounds;
        self.ring = layout.annulus();
        self.triangle = inscribed_triangle(&self.ring, self.hsv.h);
        Ok(PickResult::REDRAW_PICKER)
    }

    pub fn set_center(&mut self, center: (i32, i32)) -> Result<PickResult, PickerError> {
        self.set_layout(PickerLayout {
            center,
            ..self.layout
        })
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Replace the held color. Only a hue change moves the triangle.
    pub fn set_hsv(&mut self, hsv: Hsv) -> PickResult {
        let hsv = hsv.normalized();
        let mut result = PickResult::NOTHING;
        if hsv.h != self.hsv.h {
            self.triangle = inscribed_triangle(&self.ring, hsv.h);
            result |= PickResult::REDRAW_PICKER;
        }
        if hsv != self.hsv {
            result |= PickResult::CHANGE_COLOR;
        }
        self.hsv = hsv;
        result
    }

    /// Seed the picker from an RGB color. Grays keep the current hue so the
    /// triangle does not jump back to red.
    pub fn set_color(&mut self, color: SolidColor) -> PickResult {
        let mut hsv = color.to_hsv();
        if hsv.s == 0.0 || hsv.v == 0.0 {
            hsv.h = self.hsv.h;
        }
        self.set_hsv(hsv)
    }

    /// Display (sRGB) color of the current selection.
    pub fn rgb(&self) -> SolidColor {
        SolidColor::from_hsv(self.hsv)
    }

    /// The current selection in linear light, ready for blending on canvas.
    pub fn linear_rgb(&self) -> SolidColor {
        let (r, g, b) = math::srgb_to_linear(self.hsv.to_rgb());
        SolidColor::from_rgba(r, g, b, 1.0)
    }

    fn offset(&self, point: Point) -> Vec2 {
        geometry::offset_from(self.layout.center, point)
    }

    /// Wheel angle in radians, in [0, 2π), when `point` is on the ring.
    pub fn hits_wheel(&self, point: Point) -> Option<f64> {
        self.ring.angle_of(self.offset(point))
    }

    /// Whether `point` lands on the ring or in the triangle.
    pub fn is_inside(&self, point: Point) -> bool {
        self.first_hit(self.offset(point)).is_some()
    }

    /// Apply a pointer event at screen position `point`.
    pub fn update(&mut self, point: Point) -> PickResult {
        match self.first_hit(self.offset(point)) {
            Some(Contribution::Hue(h)) => {
                let h = math::normalize_hue(h);
                self.hsv.h = h;
                self.triangle = inscribed_triangle(&self.ring, h);
                log::trace!("picked hue {h:.1}");
                PickResult::CHANGE_COLOR | PickResult::REDRAW_PICKER
            }
            Some(Contribution::SaturationValue { s, v }) => {
                self.hsv.s = s;
                self.hsv.v = v;
                log::trace!("picked saturation {s:.3}, value {v:.3}");
                PickResult::CHANGE_COLOR
            }
            None => PickResult::NOTHING,
        }
    }

    /// The square the picker draws into, in screen coordinates.
    pub fn draw_rect(&self) -> ScreenRect {
        let rect = self.bounds;
        debug_assert!(rect.left >= 0, "picker draw rect starts off screen: {rect:?}");
        debug_assert!(rect.top >= 0, "picker draw rect starts off screen: {rect:?}");
        rect
    }

    pub fn triangle(&self) -> Triangle {
        self.triangle
    }

    /// Screen position of the hue cursor on the ring.
    pub fn hue_cursor(&self) -> Point {
        self.center_point()
            + geometry::wheel_offset(self.hsv.h.to_radians(), self.layout.wheel_radius)
    }

    /// Screen position of the saturation/value cursor in the triangle.
    pub fn sv_cursor(&self) -> Point {
        self.center_point() + self.triangle.point_for(self.hsv.s, self.hsv.v)
    }

    fn center_point(&self) -> Point {
        Point::new(
            f64::from(self.layout.center.0),
            f64::from(self.layout.center.1),
        )
    }

    /// Packed pixels of the draw rect, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Rasterize the ring and the triangle into the pixel buffer.
    ///
    /// Pixel `(i, j)` stands for screen point `(left + i, top + j)` and is
    /// colored by the same hit tests `update` uses: ring pixels show their
    /// hue at full saturation and value, triangle pixels show their
    /// saturation and value at the current hue, and everything else is
    /// transparent.
    pub fn render(&mut self, format: &PixelFormat) {
        let width = self.bounds.width();
        let radius = f64::from(self.layout.bound_radius_px);
        let transparent = format.encode(SolidColor::TRANSPARENT);
        let hue = self.hsv.h;
        let regions = self.regions();

        for (index, pixel) in self.pixels.iter_mut().enumerate() {
            let i = index as i32 % width;
            let j = index as i32 / width;
            let offset = Vec2::new(f64::from(i) - radius, f64::from(j) - radius);

            *pixel = match regions.iter().find_map(|region| region.hit_test(offset)) {
                Some(Contribution::Hue(h)) => {
                    format.encode(SolidColor::from_hsv(Hsv::new(h, 1.0, 1.0)))
                }
                Some(Contribution::SaturationValue { s, v }) => {
                    format.encode(SolidColor::from_hsv(Hsv::new(hue, s, v)))
                }
                None => transparent,
            };
        }
    }
}

/// The triangle fills the ring's hole, its hue corner pointing at `hue`.
fn inscribed_triangle(ring: &Annulus, hue: f64) -> Triangle {
    Triangle::inscribed(ring.inner_radius().max(0.0), hue)
}

fn pixel_count(bounds: &ScreenRect) -> usize {
    (bounds.width().max(0) as usize) * (bounds.height().max(0) as usize)
}
