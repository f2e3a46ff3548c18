//! Color math: direct conversions without external dependencies.
//!
//! Hue is in degrees, every other component is normalized `f64` in 0.0–1.0.

/// Largest rounding error tolerated in a conversion result before it is
/// treated as a domain bug.
const RANGE_EPSILON: f64 = 1e-9;

/// Reduce any hue to [0, 360) with a floored modulo.
///
/// Negative hues wrap around (`-30` becomes `330`). `rem_euclid` can round a
/// tiny negative input up to exactly 360, which is folded back to 0.
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// HSV → RGB. Hue in degrees (any value, normalized first), `s`/`v` 0.0–1.0.
///
/// Every output channel is in 0.0–1.0 for in-range `s` and `v`; anything
/// else is an upstream bug and trips a debug assertion.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let hh = normalize_hue(h) / 60.0;
    let sector = (hh.floor() as u32) % 6;
    let c = v * s;
    let x = c * (1.0 - ((hh % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match sector {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let rgb = (r + m, g + m, b + m);

    debug_assert!(
        in_unit_range(rgb.0) && in_unit_range(rgb.1) && in_unit_range(rgb.2),
        "hsv_to_rgb({h}, {s}, {v}) produced out-of-range {rgb:?}"
    );
    rgb
}

/// RGB → HSV. Returns hue in degrees [0, 360); achromatic colors get hue 0.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (normalize_hue(h), s, v)
}

/// Decode one gamma-encoded sRGB channel to linear light.
pub fn srgb_channel_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Decode a display (sRGB) triple to linear RGB, channel by channel.
pub fn srgb_to_linear((r, g, b): (f64, f64, f64)) -> (f64, f64, f64) {
    (
        srgb_channel_to_linear(r),
        srgb_channel_to_linear(g),
        srgb_channel_to_linear(b),
    )
}

fn in_unit_range(c: f64) -> bool {
    (-RANGE_EPSILON..=1.0 + RANGE_EPSILON).contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: (f64, f64, f64), b: (f64, f64, f64), eps: f64) {
        assert!(
            (a.0 - b.0).abs() < eps && (a.1 - b.1).abs() < eps && (a.2 - b.2).abs() < eps,
            "expected {b:?} ~= {a:?}"
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out-of-range")]
    fn test_hsv_to_rgb_rejects_oversaturated_input() {
        hsv_to_rgb(0.0, 2.0, 1.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out-of-range")]
    fn test_hsv_to_rgb_rejects_overbright_input() {
        hsv_to_rgb(200.0, 0.5, 1.5);
    }

    #[test]
    fn test_hsv_to_rgb_fixed_points() {
        approx_eq(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0), 1e-12);
        approx_eq(hsv_to_rgb(120.0, 1.0, 1.0), (0.0, 1.0, 0.0), 1e-12);
        approx_eq(hsv_to_rgb(240.0, 1.0, 1.0), (0.0, 0.0, 1.0), 1e-12);
        approx_eq(hsv_to_rgb(0.0, 0.0, 1.0), (1.0, 1.0, 1.0), 1e-12);
        for h in [0.0, 45.0, 200.0, 359.0] {
            for s in [0.0, 0.5, 1.0] {
                approx_eq(hsv_to_rgb(h, s, 0.0), (0.0, 0.0, 0.0), 1e-12);
            }
        }
    }

    #[test]
    fn test_hsv_to_rgb_stays_in_unit_range() {
        for hi in 0..720 {
            let h = hi as f64 * 0.5;
            for si in 0..=20 {
                for vi in 0..=20 {
                    let (r, g, b) = hsv_to_rgb(h, si as f64 / 20.0, vi as f64 / 20.0);
                    for c in [r, g, b] {
                        assert!((0.0..=1.0).contains(&c), "h={h} s={si} v={vi} -> {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_hsv_to_rgb_continuous_across_sectors() {
        for boundary in [60.0, 120.0, 180.0, 240.0, 300.0] {
            let below = hsv_to_rgb(boundary - 0.001, 1.0, 1.0);
            let above = hsv_to_rgb(boundary + 0.001, 1.0, 1.0);
            approx_eq(below, above, 1e-3);
        }
        // Wrap-around seam between sector 5 and sector 0.
        approx_eq(hsv_to_rgb(359.999, 1.0, 1.0), hsv_to_rgb(0.001, 1.0, 1.0), 1e-3);
    }

    #[test]
    fn test_hue_normalization() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert!(normalize_hue(-1e-20) < 360.0);
        approx_eq(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0), 1e-12);
        approx_eq(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0), 1e-12);
    }

    #[test]
    fn test_rgb_to_hsv_inverts_hsv_to_rgb() {
        for (h, s, v) in [(0.0, 1.0, 1.0), (90.0, 0.5, 0.8), (210.0, 0.25, 0.4), (330.0, 1.0, 0.6)] {
            let (r, g, b) = hsv_to_rgb(h, s, v);
            approx_eq(rgb_to_hsv(r, g, b), (h, s, v), 1e-9);
        }
        assert_eq!(rgb_to_hsv(0.5, 0.5, 0.5), (0.0, 0.0, 0.5));
    }

    #[test]
    fn test_srgb_to_linear_endpoints_and_monotonic() {
        assert_eq!(srgb_channel_to_linear(0.0), 0.0);
        assert!((srgb_channel_to_linear(1.0) - 1.0).abs() < 1e-12);

        let mut prev = srgb_channel_to_linear(0.0);
        for i in 1..=1000 {
            let next = srgb_channel_to_linear(i as f64 / 1000.0);
            assert!(next >= prev, "not monotonic at {i}");
            prev = next;
        }
    }

    #[test]
    fn test_srgb_to_linear_branches() {
        let (r, g, b) = srgb_to_linear((0.04045, 0.5, 1.0));
        assert!((r - 0.04045 / 12.92).abs() < 1e-12);
        assert!((g - 0.214_041_140_5).abs() < 1e-9);
        assert!((b - 1.0).abs() < 1e-12);
    }
}
