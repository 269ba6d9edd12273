use crate::Float;

use super::{LuvLch, Srgb, WhitePoint};

// CIE-L* constants for lightness in [0..100], as used by the HSLuv
// reference implementation.
const KAPPA: Float = 903.2962962962963;
const EPSILON: Float = 0.0088564516790356308;

// Rows of the XYZ -> linear RGB matrix; must stay identical to the
// constants in Xyz::to_linear_rgb.
const M: [[Float; 3]; 3] = [
    [3.2409699419045214, -1.5373831775700935, -0.49861076029300328],
    [-0.96924363628087983, 1.8759675015077207, 0.041555057407175613],
    [0.055630079696993609, -0.20397695888897657, 1.0569715142428786],
];

/// The six boundary lines (slope, intercept) of the sRGB gamut in the u'v'
/// chroma plane at lightness `l` (in [0..100]).
fn get_bounds(l: Float) -> [(Float, Float); 6] {
    let sub1 = (l + 16.0).powi(3) / 1560896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut ret = [(0.0, 0.0); 6];
    for (i, row) in M.iter().enumerate() {
        for k in 0..2 {
            let k_f = k as Float;
            let top1 = (284517.0 * row[0] - 94839.0 * row[2]) * sub2;
            let top2 = (838422.0 * row[2] + 769860.0 * row[1] + 731718.0 * row[0]) * l * sub2
                - 769860.0 * k_f * l;
            let bottom = (632260.0 * row[2] - 126452.0 * row[1]) * sub2 + 126452.0 * k_f;
            ret[i * 2 + k] = (top1 / bottom, top2 / bottom);
        }
    }
    ret
}

fn length_of_ray_until_intersect(theta: Float, x: Float, y: Float) -> Float {
    y / (theta.sin() - x * theta.cos())
}

/// Maximum chroma the sRGB gamut permits at lightness `l` and hue `h`:
/// the nearest positive ray-line intersection over the six boundary lines.
pub(crate) fn max_chroma_for(l: Float, h: Float) -> Float {
    let h_rad = h / 360.0 * std::f64::consts::PI * 2.0;

    let mut min_length = Float::MAX;
    for (x, y) in get_bounds(l) {
        let length = length_of_ray_until_intersect(h_rad, x, y);
        if length > 0.0 && length < min_length {
            min_length = length;
        }
    }
    min_length
}

/// Maximum chroma that is safe at lightness `l` regardless of hue: the
/// distance from the achromatic point to the nearest boundary line along
/// that line's own perpendicular.
pub(crate) fn max_safe_chroma_for(l: Float) -> Float {
    let mut min_length = Float::MAX;
    for (m1, b1) in get_bounds(l) {
        // Intersection of the line with its perpendicular through origin.
        let x = -b1 / (m1 + 1.0 / m1);
        let y = b1 + x * m1;
        let dist = (x * x + y * y).sqrt();
        if dist < min_length {
            min_length = dist;
        }
    }
    min_length
}

/// A color in HSLuv. Hue in [0..360], saturation and lightness in [0..1].
///
/// HSLuv is a human-friendly alternative to HSL built on cylindrical
/// CIELUV, with saturation scaled against the gamut boundary so that every
/// (h, s, l) triple is displayable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsluv {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

impl Hsluv {
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l }
    }

    pub fn to_luv_lch(&self) -> LuvLch {
        let l = 100.0 * self.l;
        let s = 100.0 * self.s;

        let c = if !(0.00000001..=99.9999999).contains(&l) {
            0.0
        } else {
            max_chroma_for(l, self.h) / 100.0 * s
        };

        LuvLch::new((l / 100.0).clamp(0.0, 1.0), c / 100.0, self.h)
    }

    /// The returned color is clamped, so this never produces an invalid
    /// display color.
    pub fn to_srgb(&self) -> Srgb {
        self.to_luv_lch()
            .to_luv()
            .to_xyz_with(WhitePoint::HSLUV_D65)
            .to_linear_rgb()
            .to_srgb()
            .clamped()
    }
}

/// A color in HPLuv, the pastel variant of HSLuv whose saturation is scaled
/// against the hue-independent safe chroma. Only pastel colors are
/// representable; saturation can exceed 1 for anything else.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hpluv {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

impl Hpluv {
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l }
    }

    pub fn to_luv_lch(&self) -> LuvLch {
        let l = 100.0 * self.l;
        let s = 100.0 * self.s;

        let c = if !(0.00000001..=99.9999999).contains(&l) {
            0.0
        } else {
            max_safe_chroma_for(l) / 100.0 * s
        };

        LuvLch::new(l / 100.0, c / 100.0, self.h)
    }

    pub fn to_srgb(&self) -> Srgb {
        self.to_luv_lch()
            .to_luv()
            .to_xyz_with(WhitePoint::HSLUV_D65)
            .to_linear_rgb()
            .to_srgb()
            .clamped()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn extreme_lightness_has_zero_chroma() {
        assert_eq!(Hsluv::new(120.0, 1.0, 0.0).to_luv_lch().c, 0.0);
        assert_eq!(Hsluv::new(120.0, 1.0, 1.0).to_luv_lch().c, 0.0);
        assert_eq!(Hpluv::new(120.0, 1.0, 0.0).to_luv_lch().c, 0.0);
    }

    #[test]
    fn safe_chroma_no_larger_than_hue_chroma() {
        for l in [10.0, 35.0, 50.0, 75.0, 90.0] {
            let safe = max_safe_chroma_for(l);
            for h in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0] {
                assert!(safe <= max_chroma_for(l, h) + 1e-9);
            }
        }
    }

    #[test]
    fn round_trip_through_display() {
        for (h, s, l) in [(12.0, 0.5, 0.5), (230.0, 0.8, 0.3), (345.0, 0.2, 0.9)] {
            let hsluv = Hsluv::new(h, s, l);
            let back = hsluv.to_srgb().to_hsluv();
            assert_abs_diff_eq!(back.h, hsluv.h, epsilon = 1e-6);
            assert_abs_diff_eq!(back.s, hsluv.s, epsilon = 1e-6);
            assert_abs_diff_eq!(back.l, hsluv.l, epsilon = 1e-6);
        }
    }

    #[test]
    fn pure_hues_are_displayable() {
        for h in 0..36 {
            let c = Hsluv::new(h as Float * 10.0, 1.0, 0.5).to_srgb();
            assert!(c.is_valid());
        }
    }
}
