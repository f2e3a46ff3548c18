//! Color value types shared by the picker, the pixel codec and the view.

use serde::{Deserialize, Serialize};

use crate::math;

/// A hue/saturation/value triple.
///
/// `h` is in degrees, `s` and `v` in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Same color with the hue reduced to [0, 360).
    pub fn normalized(self) -> Self {
        Self {
            h: math::normalize_hue(self.h),
            ..self
        }
    }

    /// Display (sRGB) color of this HSV value.
    pub fn to_rgb(self) -> (f64, f64, f64) {
        math::hsv_to_rgb(self.h, self.s, self.v)
    }
}

impl Default for Hsv {
    /// Opaque black with a red hue corner, the state a fresh picker starts in.
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }
}

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    pub const TRANSPARENT: Self = Self::from_rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgba(1.0, 1.0, 1.0, 1.0);

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Create from f64 RGBA (all 0.0–1.0).
    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from an HSV value.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let (r, g, b) = hsv.to_rgb();
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to HSV, dropping alpha.
    pub fn to_hsv(&self) -> Hsv {
        let (h, s, v) = math::rgb_to_hsv(self.r, self.g, self.b);
        Hsv { h, s, v }
    }

    /// Same color with RGB decoded from sRGB to linear light. Alpha is
    /// already linear and passes through.
    pub fn to_linear(&self) -> Self {
        let (r, g, b) = math::srgb_to_linear((self.r, self.g, self.b));
        Self { r, g, b, a: self.a }
    }

    pub fn rgb(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}
