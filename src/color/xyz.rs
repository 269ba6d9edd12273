use derive_more::{Add, Sub};

use crate::Float;

use super::{Lab, LinearRgb, Luv, OkLab, OkLch, Srgb, WhitePoint};

/// A color in CIE XYZ, the standard tristimulus space, almost in [0..1].
#[derive(Clone, Copy, Debug, Default, PartialEq, Add, Sub)]
pub struct Xyz {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

fn lab_f(t: Float) -> Float {
    if t > 6.0 / 29.0 * 6.0 / 29.0 * 6.0 / 29.0 {
        t.cbrt()
    } else {
        t / 3.0 * 29.0 / 6.0 * 29.0 / 6.0 + 4.0 / 29.0
    }
}

/// The u'v' chromaticity of an XYZ triple, with the zero denominator of
/// black mapped to (0, 0).
pub(crate) fn xyz_to_uv(x: Float, y: Float, z: Float) -> (Float, Float) {
    let denom = x + 15.0 * y + 3.0 * z;
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

impl Xyz {
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Convert to linear RGB. Inverse of [`LinearRgb::to_xyz`]; the matrix
    /// constants are likewise fixed by the reference vectors.
    pub fn to_linear_rgb(&self) -> LinearRgb {
        LinearRgb::new(
            3.2409699419045214 * self.x - 1.5373831775700935 * self.y
                - 0.49861076029300328 * self.z,
            -0.96924363628087983 * self.x
                + 1.8759675015077207 * self.y
                + 0.041555057407175613 * self.z,
            0.055630079696993609 * self.x - 0.20397695888897657 * self.y
                + 1.0569715142428786 * self.z,
        )
    }

    pub fn to_srgb(&self) -> Srgb {
        self.to_linear_rgb().to_srgb()
    }

    /// Convert to CIE L*a*b* using D65 as reference white.
    pub fn to_lab(&self) -> Lab {
        self.to_lab_with(WhitePoint::D65)
    }

    pub fn to_lab_with(&self, wref: WhitePoint) -> Lab {
        let fy = lab_f(self.y / wref.y);
        Lab::new(
            1.16 * fy - 0.16,
            5.0 * (lab_f(self.x / wref.x) - fy),
            2.0 * (fy - lab_f(self.z / wref.z)),
        )
    }

    pub fn to_luv(&self) -> Luv {
        self.to_luv_with(WhitePoint::D65)
    }

    // As R's grDevices does, with L rescaled into [0..1].
    pub fn to_luv_with(&self, wref: WhitePoint) -> Luv {
        let l = if self.y / wref.y <= 6.0 / 29.0 * 6.0 / 29.0 * 6.0 / 29.0 {
            self.y / wref.y * (29.0 / 3.0 * 29.0 / 3.0 * 29.0 / 3.0) / 100.0
        } else {
            1.16 * (self.y / wref.y).cbrt() - 0.16
        };
        let (u, v) = xyz_to_uv(self.x, self.y, self.z);
        let (un, vn) = xyz_to_uv(wref.x, wref.y, wref.z);
        Luv::new(l, 13.0 * l * (u - un), 13.0 * l * (v - vn))
    }

    /// Convert to OkLab: cone responses, cube root, then the Lab-like
    /// projection. Constants from https://bottosson.github.io/posts/oklab/
    pub fn to_oklab(&self) -> OkLab {
        let l_ = (0.8189330101 * self.x + 0.3618667424 * self.y - 0.1288597137 * self.z).cbrt();
        let m_ = (0.0329845436 * self.x + 0.9293118715 * self.y + 0.0361456387 * self.z).cbrt();
        let s_ = (0.0482003018 * self.x + 0.2643662691 * self.y + 0.6338517070 * self.z).cbrt();
        OkLab::new(
            0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        )
    }

    pub fn to_oklch(&self) -> OkLch {
        self.to_oklab().to_oklch()
    }

    pub fn to_xyy(&self) -> XyY {
        self.to_xyy_with(WhitePoint::D65)
    }

    pub fn to_xyy_with(&self, wref: WhitePoint) -> XyY {
        let n = self.x + self.y + self.z;
        let (x, y) = if n.abs() < 1e-14 {
            // For black, Bruce Lindbloom recommends the reference white's
            // chromaticity.
            (
                wref.x / (wref.x + wref.y + wref.z),
                wref.y / (wref.x + wref.y + wref.z),
            )
        } else {
            (self.x / n, self.y / n)
        };
        XyY::new(x, y, self.y)
    }
}

/// A color in CIE xyY: chromaticity plus luminance, all in [0..1].
///
/// See http://www.brucelindbloom.com/Eqn_XYZ_to_xyY.html
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XyY {
    pub x: Float,
    pub y: Float,
    /// Luminance (the capital Y of the XYZ triple).
    pub yy: Float,
}

impl XyY {
    pub const fn new(x: Float, y: Float, yy: Float) -> Self {
        Self { x, y, yy }
    }

    pub fn to_xyz(&self) -> Xyz {
        if -1e-14 < self.y && self.y < 1e-14 {
            Xyz::new(0.0, self.yy, 0.0)
        } else {
            Xyz::new(
                self.yy / self.y * self.x,
                self.yy,
                self.yy / self.y * (1.0 - self.x - self.y),
            )
        }
    }

    pub fn to_srgb(&self) -> Srgb {
        self.to_xyz().to_srgb()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn uv_chromaticity_of_black_is_zero() {
        assert_eq!(xyz_to_uv(0.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn xyy_of_black_takes_white_chromaticity() {
        let xyy = Xyz::new(0.0, 0.0, 0.0).to_xyy();
        assert_abs_diff_eq!(xyy.x, 0.312727, epsilon = 1e-6);
        assert_abs_diff_eq!(xyy.y, 0.329023, epsilon = 1e-6);
        assert_abs_diff_eq!(xyy.yy, 0.0);
    }

    // https://bottosson.github.io/posts/oklab/#table-of-example-xyz-and-oklab-pairs
    #[test]
    fn oklab_reference_pairs() {
        let pairs = [
            (0.950, 1.000, 1.089, 1.000, 0.000, 0.000),
            (1.000, 0.000, 0.000, 0.450, 1.236, -0.019),
            (0.000, 1.000, 0.000, 0.922, -0.671, 0.263),
            (0.000, 0.000, 1.000, 0.153, -1.415, -0.449),
        ];
        for (x, y, z, l, a, b) in pairs {
            let lab = Xyz::new(x, y, z).to_oklab();
            assert_abs_diff_eq!(lab.l, l, epsilon = 1e-3);
            assert_abs_diff_eq!(lab.a, a, epsilon = 1e-3);
            assert_abs_diff_eq!(lab.b, b, epsilon = 1e-3);

            let xyz = OkLab::new(l, a, b).to_xyz();
            assert_abs_diff_eq!(xyz.x, x, epsilon = 5e-3);
            assert_abs_diff_eq!(xyz.y, y, epsilon = 5e-3);
            assert_abs_diff_eq!(xyz.z, z, epsilon = 5e-3);
        }
    }
}
