use derive_more::{Add, Sub};

use crate::Float;

use super::{Srgb, Xyz, DEG_PER_RAD, RAD_PER_DEG};

/// A color in OkLab.
///
/// See https://bottosson.github.io/posts/oklab/
#[derive(Clone, Copy, Debug, Default, PartialEq, Add, Sub)]
pub struct OkLab {
    /// Perceived lightness.
    pub l: Float,
    /// How green/red the color is.
    pub a: Float,
    /// How blue/yellow the color is.
    pub b: Float,
}

impl OkLab {
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self { l, a, b }
    }

    pub fn to_xyz(&self) -> Xyz {
        let l_ = 0.9999999984505196 * self.l + 0.39633779217376774 * self.a
            + 0.2158037580607588 * self.b;
        let m_ = 1.0000000088817607 * self.l
            - 0.10556134232365633 * self.a
            - 0.0638541747717059 * self.b;
        let s_ = 1.0000000546724108 * self.l
            - 0.08948418209496574 * self.a
            - 1.2914855378640917 * self.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        Xyz::new(
            1.2268798733741557 * l - 0.5578149965554813 * m + 0.28139105017721594 * s,
            -0.04057576262431372 * l + 1.1122868293970594 * m - 0.07171106666151696 * s,
            -0.07637294974672142 * l - 0.4214933239627916 * m + 1.5869240244272422 * s,
        )
    }

    pub fn to_oklch(&self) -> OkLch {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        let mut h = self.b.atan2(self.a);
        if h < 0.0 {
            h += 2.0 * std::f64::consts::PI;
        }
        OkLch::new(self.l, c, h * DEG_PER_RAD)
    }

    pub fn to_srgb(&self) -> Srgb {
        self.to_xyz().to_srgb()
    }
}

/// Cylindrical OkLab. Hue in [0..360).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OkLch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

impl OkLch {
    pub const fn new(l: Float, c: Float, h: Float) -> Self {
        Self { l, c, h }
    }

    pub fn to_oklab(&self) -> OkLab {
        let h = self.h * RAD_PER_DEG;
        OkLab::new(self.l, self.c * h.cos(), self.c * h.sin())
    }

    pub fn to_xyz(&self) -> Xyz {
        self.to_oklab().to_xyz()
    }

    pub fn to_srgb(&self) -> Srgb {
        self.to_oklab().to_srgb()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::color::LinearRgb;

    #[test]
    fn oklch_reference_pairs() {
        let pairs = [
            (55.0, 0.17, -0.14, 0.22, 320.528),
            (90.0, 0.32, 0.00, 0.32, 0.0),
            (10.0, 0.00, -0.40, 0.40, 270.0),
        ];
        for (l, a, b, c, h) in pairs {
            let lch = OkLab::new(l, a, b).to_oklch();
            assert_abs_diff_eq!(lch.l, l, epsilon = 1e-3);
            assert_abs_diff_eq!(lch.c, c, epsilon = 1e-3);
            assert_abs_diff_eq!(lch.h, h, epsilon = 1e-3);

            let lab = lch.to_oklab();
            assert_abs_diff_eq!(lab.a, a, epsilon = 1e-3);
            assert_abs_diff_eq!(lab.b, b, epsilon = 1e-3);
        }
    }

    #[test]
    fn linear_rgb_primaries() {
        let pairs = [
            (1.0, 1.0, 1.0, 1.000, 0.000, 0.000),
            (1.0, 0.0, 0.0, 0.627955, 0.224863, 0.125846),
            (0.0, 1.0, 0.0, 0.86644, -0.233888, 0.179498),
            (0.0, 0.0, 1.0, 0.452014, -0.032457, -0.311528),
            (0.0, 1.0, 1.0, 0.905399, -0.149444, -0.039398),
            (1.0, 0.0, 1.0, 0.701674, 0.274566, -0.169156),
            (1.0, 1.0, 0.0, 0.967983, -0.071369, 0.198570),
            (0.0, 0.0, 0.0, 0.000000, 0.000000, 0.000000),
        ];
        for (r, g, b, l, a, bb) in pairs {
            let lab = LinearRgb::new(r, g, b).to_xyz().to_oklab();
            assert_abs_diff_eq!(lab.l, l, epsilon = 2e-3);
            assert_abs_diff_eq!(lab.a, a, epsilon = 2e-3);
            assert_abs_diff_eq!(lab.b, bb, epsilon = 2e-3);
        }
    }
}
