use std::str::FromStr;

use derive_more::{Add, Sub};

use crate::Float;

use super::{
    Hpluv, Hsl, Hsluv, Hsv, Lab, Lch, LinearRgb, Luv, LuvLch, OkLab, OkLch, ParseColorError,
    Rgb255, WhitePoint, XyY, Xyz,
};

/// Tolerance for [`Srgb::almost_eq`], one step of an 8-bit channel.
pub const DELTA: Float = 1.0 / 255.0;

/// A color in display (gamma-companded) sRGB, nominally with all components
/// in [0..1].
///
/// Components are not validated or clamped, so that the type stays practical
/// as an intermediate when converting between spaces that produce values
/// outside the displayable gamut. Callers that need a displayable color
/// should use [`Srgb::is_valid`] and [`Srgb::clamped`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Add, Sub)]
pub struct Srgb {
    pub r: Float,
    pub g: Float,
    pub b: Float,
}

fn linearize(v: Float) -> Float {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

// A much faster and still quite precise linearization using a 6th-order
// Taylor approximation.
fn linearize_fast(v: Float) -> Float {
    let v1 = v - 0.5;
    let v2 = v1 * v1;
    let v3 = v2 * v1;
    let v4 = v2 * v2;
    // let v5 = v3 * v2;
    -0.248750514614486 + 0.925583310193438 * v + 1.16740237321695 * v2 + 0.280457026598666 * v3
        - 0.0757991963780179 * v4 // + 0.0437040411548932 * v5
}

impl Srgb {
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Whether the color exists in display RGB space, i.e. all components
    /// are in [0..1].
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.r)
            && (0.0..=1.0).contains(&self.g)
            && (0.0..=1.0).contains(&self.b)
    }

    /// Clamp each component to [0..1]. A no-op for valid colors.
    pub fn clamped(&self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Equality within the tolerance `delta` summed over the channels.
    pub fn almost_eq_within(&self, other: &Self, delta: Float) -> bool {
        (self.r - other.r).abs() + (self.g - other.g).abs() + (self.b - other.b).abs()
            < 3.0 * delta
    }

    /// Equality within the tolerance [`DELTA`] (1/255).
    pub fn almost_eq(&self, other: &Self) -> bool {
        self.almost_eq_within(other, DELTA)
    }

    /// Remove the gamma companding, giving linear-light RGB.
    pub fn to_linear(&self) -> LinearRgb {
        LinearRgb::new(linearize(self.r), linearize(self.g), linearize(self.b))
    }

    /// Polynomial approximation of [`Srgb::to_linear`]. The combined channel
    /// error against the exact function stays below 6/255 over the 8-bit
    /// RGB cube.
    pub fn to_linear_fast(&self) -> LinearRgb {
        LinearRgb::new(
            linearize_fast(self.r),
            linearize_fast(self.g),
            linearize_fast(self.b),
        )
    }

    pub fn to_xyz(&self) -> Xyz {
        self.to_linear().to_xyz()
    }

    /// Convert to CIE L*a*b* using D65 as reference white.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }

    /// Convert to CIE L*a*b*, taking into account a given reference white.
    /// (i.e. the monitor's white)
    pub fn to_lab_with(&self, wref: WhitePoint) -> Lab {
        self.to_xyz().to_lab_with(wref)
    }

    /// Convert to HCL (cylindrical Lab) using D65 as reference white.
    /// H is in [0..360], C and L in [0..1] although C can overshoot 1.0.
    pub fn to_lch(&self) -> Lch {
        self.to_lab().to_lch()
    }

    pub fn to_lch_with(&self, wref: WhitePoint) -> Lch {
        self.to_lab_with(wref).to_lch()
    }

    /// Convert to CIE L*u*v* using D65 as reference white. L* is in [0..1]
    /// and both u* and v* are in about [-1..1].
    pub fn to_luv(&self) -> Luv {
        self.to_xyz().to_luv()
    }

    pub fn to_luv_with(&self, wref: WhitePoint) -> Luv {
        self.to_xyz().to_luv_with(wref)
    }

    pub fn to_luv_lch(&self) -> LuvLch {
        self.to_luv_lch_with(WhitePoint::D65)
    }

    pub fn to_luv_lch_with(&self, wref: WhitePoint) -> LuvLch {
        self.to_luv_with(wref).to_luv_lch()
    }

    pub fn to_oklab(&self) -> OkLab {
        self.to_xyz().to_oklab()
    }

    pub fn to_oklch(&self) -> OkLch {
        self.to_oklab().to_oklch()
    }

    /// Hue, saturation and luminance of the color in HSLuv. Hue in [0..360],
    /// saturation and luminance in [0..1].
    pub fn to_hsluv(&self) -> Hsluv {
        self.to_luv_lch_with(WhitePoint::HSLUV_D65).to_hsluv()
    }

    /// Like [`Srgb::to_hsluv`] but for the pastel-only HPLuv space. The
    /// saturation can be much larger than 1 for colors HPLuv can't
    /// represent.
    pub fn to_hpluv(&self) -> Hpluv {
        self.to_luv_lch_with(WhitePoint::HSLUV_D65).to_hpluv()
    }

    pub fn to_hsl(&self) -> Hsl {
        let min = self.r.min(self.g).min(self.b);
        let max = self.r.max(self.g).max(self.b);

        let l = (max + min) / 2.0;

        if min == max {
            return Hsl::new(0.0, 0.0, l);
        }

        let s = if l < 0.5 {
            (max - min) / (max + min)
        } else {
            (max - min) / (2.0 - max - min)
        };

        let mut h = if max == self.r {
            (self.g - self.b) / (max - min)
        } else if max == self.g {
            2.0 + (self.b - self.r) / (max - min)
        } else {
            4.0 + (self.r - self.g) / (max - min)
        };
        h *= 60.0;
        if h < 0.0 {
            h += 360.0;
        }

        Hsl::new(h, s, l)
    }

    pub fn to_hsv(&self) -> Hsv {
        let min = self.r.min(self.g).min(self.b);
        let v = self.r.max(self.g).max(self.b);
        let c = v - min;

        let mut s = 0.0;
        if v != 0.0 {
            s = c / v;
        }

        // 0 instead of "undefined" for the achromatic case.
        let mut h = 0.0;
        if min != v {
            if v == self.r {
                h = ((self.g - self.b) / c) % 6.0;
            }
            if v == self.g {
                h = (self.b - self.r) / c + 2.0;
            }
            if v == self.b {
                h = (self.r - self.g) / c + 4.0;
            }
            h *= 60.0;
            if h < 0.0 {
                h += 360.0;
            }
        }
        Hsv::new(h, s, v)
    }

    /// Convert to CIE xyY. The reference white is only used for black input.
    pub fn to_xyy(&self) -> XyY {
        self.to_xyz().to_xyy()
    }

    pub fn to_xyy_with(&self, wref: WhitePoint) -> XyY {
        self.to_xyz().to_xyy_with(wref)
    }

    /// The 8-bit form, rounding and clamping each channel to 0..=255.
    pub fn to_rgb255(&self) -> Rgb255 {
        Rgb255::new(
            (self.r * 255.0 + 0.5) as i32,
            (self.g * 255.0 + 0.5) as i32,
            (self.b * 255.0 + 0.5) as i32,
        )
    }

    /// Lowercase 6-digit hex form, e.g. `#ff8000`.
    pub fn hex(&self) -> String {
        self.to_rgb255().hex()
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parses a "html" hex color string, either in the 3 digit "#f0c" or
    /// 6 digit "#ff1034" form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::rgb255::parse_hex(s)
    }
}
