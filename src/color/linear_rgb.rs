use derive_more::{Add, Sub};

use crate::Float;

use super::{Srgb, Xyz};

/// A color in linear-light RGB with sRGB primaries, i.e. display RGB with
/// the gamma companding removed. Out-of-gamut components are valid and
/// expected as intermediates.
///
/// See http://www.brucelindbloom.com/Eqn_RGB_to_XYZ.html
#[derive(Clone, Copy, Debug, Default, PartialEq, Add, Sub)]
pub struct LinearRgb {
    pub r: Float,
    pub g: Float,
    pub b: Float,
}

fn delinearize(v: Float) -> Float {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

// The fractional root is much harder to approximate with a single
// polynomial, so the fast variant splits the range in three.
fn delinearize_fast(v: Float) -> Float {
    if v > 0.2 {
        let v1 = v - 0.6;
        let v2 = v1 * v1;
        let v3 = v2 * v1;
        let v4 = v2 * v2;
        let v5 = v3 * v2;
        0.442430344268235 + 0.592178981271708 * v - 0.287864782562636 * v2
            + 0.253214392068985 * v3
            - 0.272557158129811 * v4
            + 0.325554383321718 * v5
    } else if v > 0.03 {
        let v1 = v - 0.115;
        let v2 = v1 * v1;
        let v3 = v2 * v1;
        let v4 = v2 * v2;
        let v5 = v3 * v2;
        0.194915592891669 + 1.55227076330229 * v - 3.93691860257828 * v2
            + 18.0679839248761 * v3
            - 101.468750302746 * v4
            + 632.341487393927 * v5
    } else {
        // The low end is highly nonlinear, as the constants suggest.
        let v1 = v - 0.015;
        let v2 = v1 * v1;
        let v3 = v2 * v1;
        let v4 = v2 * v2;
        let v5 = v3 * v2;
        0.0519565234928877 + 5.09316778537561 * v - 99.0338180489702 * v2
            + 3484.52322764895 * v3
            - 150028.083412663 * v4
            + 7168008.42971613 * v5
    }
}

impl LinearRgb {
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Apply the sRGB gamma companding, giving a display color.
    pub fn to_srgb(&self) -> Srgb {
        Srgb::new(
            delinearize(self.r),
            delinearize(self.g),
            delinearize(self.b),
        )
    }

    /// Polynomial approximation of [`LinearRgb::to_srgb`]. See
    /// [`Srgb::to_linear_fast`] for the accuracy contract.
    pub fn to_srgb_fast(&self) -> Srgb {
        Srgb::new(
            delinearize_fast(self.r),
            delinearize_fast(self.g),
            delinearize_fast(self.b),
        )
    }

    /// Convert to CIE XYZ. The matrix is the sRGB/D65 reference one and must
    /// stay bit-for-bit as given to match the reference test vectors.
    pub fn to_xyz(&self) -> Xyz {
        Xyz::new(
            0.41239079926595948 * self.r + 0.35758433938387796 * self.g
                + 0.18048078840183429 * self.b,
            0.21263900587151036 * self.r
                + 0.71516867876775593 * self.g
                + 0.072192315360733715 * self.b,
            0.019330818715591851 * self.r
                + 0.11919477979462599 * self.g
                + 0.95053215224966058 * self.b,
        )
    }
}
