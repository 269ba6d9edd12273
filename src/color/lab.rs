use derive_more::{Add, Sub};

use crate::Float;

use super::{Srgb, WhitePoint, Xyz, DEG_PER_RAD, RAD_PER_DEG};

/// A color in CIE L*a*b*, rescaled so that L is in [0..1] and a, b are in
/// about [-1..1] for in-gamut colors.
///
/// Note that many (L, a, b) combinations have no corresponding valid RGB
/// color; check [`Srgb::is_valid`] on the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Add, Sub)]
pub struct Lab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

fn lab_finv(t: Float) -> Float {
    if t > 6.0 / 29.0 {
        t * t * t
    } else {
        3.0 * 6.0 / 29.0 * 6.0 / 29.0 * (t - 4.0 / 29.0)
    }
}

impl Lab {
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self { l, a, b }
    }

    pub fn to_xyz(&self) -> Xyz {
        self.to_xyz_with(WhitePoint::D65)
    }

    pub fn to_xyz_with(&self, wref: WhitePoint) -> Xyz {
        let l2 = (self.l + 0.16) / 1.16;
        Xyz::new(
            wref.x * lab_finv(l2 + self.a / 5.0),
            wref.y * lab_finv(l2),
            wref.z * lab_finv(l2 - self.b / 2.0),
        )
    }

    /// Rectangular-to-polar conversion into HCL coordinates.
    pub fn to_lch(&self) -> Lch {
        // atan2 is unstable if a ~= b and both are almost zero, so force the
        // hue to 0 there.
        let h = if (self.b - self.a).abs() > 1e-4 && self.a.abs() > 1e-4 {
            (DEG_PER_RAD * self.b.atan2(self.a) + 360.0) % 360.0
        } else {
            0.0
        };
        Lch::new(self.l, (self.a * self.a + self.b * self.b).sqrt(), h)
    }

    pub fn to_srgb(&self) -> Srgb {
        self.to_xyz().to_srgb()
    }

    pub fn to_srgb_with(&self, wref: WhitePoint) -> Srgb {
        self.to_xyz_with(wref).to_srgb()
    }
}

/// Cylindrical CIE L*a*b*, also known as HCL. Hue in [0..360], chroma and
/// lightness in [0..1] although chroma can overshoot 1.0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

impl Lch {
    pub fn new(l: Float, c: Float, h: Float) -> Self {
        Self { l, c, h: h % 360.0 }
    }

    pub fn to_lab(&self) -> Lab {
        let h = RAD_PER_DEG * self.h;
        Lab::new(self.l, self.c * h.cos(), self.c * h.sin())
    }

    pub fn to_srgb(&self) -> Srgb {
        self.to_srgb_with(WhitePoint::D65)
    }

    pub fn to_srgb_with(&self, wref: WhitePoint) -> Srgb {
        self.to_lab().to_xyz_with(wref).to_srgb()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn near_zero_chroma_forces_hue_zero() {
        let lch = Lab::new(0.5, 1e-5, -1e-5).to_lch();
        assert_eq!(lch.h, 0.0);
    }

    #[test]
    fn lch_round_trip() {
        let lab = Lab::new(0.532408, 0.800925, 0.672032);
        let back = lab.to_lch().to_lab();
        assert_abs_diff_eq!(back.l, lab.l, epsilon = 1e-12);
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 1e-12);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 1e-12);
    }

    #[test]
    fn white_is_achromatic() {
        let lab = Srgb::new(1.0, 1.0, 1.0).to_lab();
        assert_abs_diff_eq!(lab.l, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(lab.a, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(lab.b, 0.0, epsilon = 1e-6);
    }
}
