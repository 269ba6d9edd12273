use derive_more::{Add, Sub};

use crate::Float;

use super::xyz::xyz_to_uv;
use super::{Hpluv, Hsluv, Srgb, WhitePoint, Xyz, DEG_PER_RAD, RAD_PER_DEG};

/// A color in CIE L*u*v*, rescaled so that L* is in [0..1] and u*, v* are
/// in about [-1..1] for in-gamut colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Add, Sub)]
pub struct Luv {
    pub l: Float,
    pub u: Float,
    pub v: Float,
}

impl Luv {
    pub const fn new(l: Float, u: Float, v: Float) -> Self {
        Self { l, u, v }
    }

    pub fn to_xyz(&self) -> Xyz {
        self.to_xyz_with(WhitePoint::D65)
    }

    pub fn to_xyz_with(&self, wref: WhitePoint) -> Xyz {
        // y = wref.y * lab_finv((l + 0.16) / 1.16), split at the linear toe.
        let mut y = if self.l <= 0.08 {
            wref.y * self.l * 100.0 * 3.0 / 29.0 * 3.0 / 29.0 * 3.0 / 29.0
        } else {
            let t = (self.l + 0.16) / 1.16;
            wref.y * t * t * t
        };
        let (un, vn) = xyz_to_uv(wref.x, wref.y, wref.z);
        let mut x = 0.0;
        let mut z = 0.0;
        if self.l != 0.0 {
            let u = self.u / (13.0 * self.l) + un;
            let v = self.v / (13.0 * self.l) + vn;
            x = y * 9.0 * u / (4.0 * v);
            z = y * (12.0 - 3.0 * u - 20.0 * v) / (4.0 * v);
        } else {
            y = 0.0;
        }
        Xyz::new(x, y, z)
    }

    /// Rectangular-to-polar conversion into cylindrical CIELUV.
    pub fn to_luv_lch(&self) -> LuvLch {
        // Same near-zero guard as Lab::to_lch.
        let h = if (self.v - self.u).abs() > 1e-4 && self.u.abs() > 1e-4 {
            (DEG_PER_RAD * self.v.atan2(self.u) + 360.0) % 360.0
        } else {
            0.0
        };
        LuvLch::new(self.l, (self.u * self.u + self.v * self.v).sqrt(), h)
    }

    pub fn to_srgb(&self) -> Srgb {
        self.to_xyz().to_srgb()
    }

    pub fn to_srgb_with(&self, wref: WhitePoint) -> Srgb {
        self.to_xyz_with(wref).to_srgb()
    }
}

/// Cylindrical CIE L*u*v*. Hue in [0..360], chroma and lightness in [0..1]
/// although chroma can overshoot 1.0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LuvLch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

impl LuvLch {
    pub const fn new(l: Float, c: Float, h: Float) -> Self {
        Self { l, c, h }
    }

    pub fn to_luv(&self) -> Luv {
        let h = RAD_PER_DEG * self.h;
        Luv::new(self.l, self.c * h.cos(), self.c * h.sin())
    }

    /// Scale the chroma against the gamut boundary at this lightness and
    /// hue, giving HSLuv saturation.
    pub fn to_hsluv(&self) -> Hsluv {
        // The boundary code works in [0..100] coordinates.
        let l = self.l * 100.0;
        let c = self.c * 100.0;

        let s = if !(0.00000001..=99.9999999).contains(&l) {
            0.0
        } else {
            c / super::hsluv::max_chroma_for(l, self.h) * 100.0
        };
        Hsluv::new(
            self.h,
            (s / 100.0).clamp(0.0, 1.0),
            (l / 100.0).clamp(0.0, 1.0),
        )
    }

    /// Scale the chroma against the hue-independent safe boundary, giving
    /// HPLuv saturation.
    pub fn to_hpluv(&self) -> Hpluv {
        let l = self.l * 100.0;
        let c = self.c * 100.0;

        let s = if !(0.00000001..=99.9999999).contains(&l) {
            0.0
        } else {
            c / super::hsluv::max_safe_chroma_for(l) * 100.0
        };
        Hpluv::new(self.h, s / 100.0, l / 100.0)
    }

    pub fn to_srgb(&self) -> Srgb {
        self.to_srgb_with(WhitePoint::D65)
    }

    pub fn to_srgb_with(&self, wref: WhitePoint) -> Srgb {
        self.to_luv().to_srgb_with(wref)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn black_round_trips_to_origin() {
        let xyz = Luv::new(0.0, 0.0, 0.0).to_xyz();
        assert_eq!((xyz.x, xyz.y, xyz.z), (0.0, 0.0, 0.0));
    }

    #[test]
    fn luv_lch_round_trip() {
        let luv = Luv::new(0.53241, 1.75015, 0.37756);
        let back = luv.to_luv_lch().to_luv();
        assert_abs_diff_eq!(back.l, luv.l, epsilon = 1e-12);
        assert_abs_diff_eq!(back.u, luv.u, epsilon = 1e-12);
        assert_abs_diff_eq!(back.v, luv.v, epsilon = 1e-12);
    }
}
