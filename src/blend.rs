//! Blending (interpolation) between two colors in various spaces.
//!
//! Blending in display RGB produces muddy in-between colors; the Lab, Luv
//! and LuvLch variants travel through a perceptually uniform space instead
//! and give much nicer gradients.

use crate::color::{Hsv, Lch, LuvLch, Srgb};
use crate::Float;

/// Interpolates between angles (in degrees) along the shorter arc, used
/// for hue blending. `t` in [0..1].
pub fn interp_angle(a0: Float, a1: Float, t: Float) -> Float {
    // Based on the shortAngleDist comment in
    // https://gist.github.com/shaunlebron/8832585
    let delta = (((a1 - a0) % 360.0) + 540.0) % 360.0 - 180.0;
    (a0 + t * delta + 360.0) % 360.0
}

fn lerp(v0: Float, v1: Float, t: Float) -> Float {
    v0 + t * (v1 - v0)
}

/// Blends in display RGB space. Prefer [`lab`] or [`luv`] for gradients
/// meant for human eyes.
pub fn rgb(c1: &Srgb, c2: &Srgb, t: Float) -> Srgb {
    Srgb::new(
        lerp(c1.r, c2.r, t),
        lerp(c1.g, c2.g, t),
        lerp(c1.b, c2.b, t),
    )
}

/// Blends in linear RGB space, a good option for image processing where
/// light intensities should mix physically.
pub fn linear_rgb(c1: &Srgb, c2: &Srgb, t: Float) -> Srgb {
    let c1 = c1.to_linear();
    let c2 = c2.to_linear();
    crate::color::LinearRgb::new(
        lerp(c1.r, c2.r, t),
        lerp(c1.g, c2.g, t),
        lerp(c1.b, c2.b, t),
    )
    .to_srgb()
}

/// Blends in L*a*b* space.
pub fn lab(c1: &Srgb, c2: &Srgb, t: Float) -> Srgb {
    let c1 = c1.to_lab();
    let c2 = c2.to_lab();
    crate::color::Lab::new(
        lerp(c1.l, c2.l, t),
        lerp(c1.a, c2.a, t),
        lerp(c1.b, c2.b, t),
    )
    .to_srgb()
}

/// Blends in L*u*v* space.
pub fn luv(c1: &Srgb, c2: &Srgb, t: Float) -> Srgb {
    let c1 = c1.to_luv();
    let c2 = c2.to_luv();
    crate::color::Luv::new(
        lerp(c1.l, c2.l, t),
        lerp(c1.u, c2.u, t),
        lerp(c1.v, c2.v, t),
    )
    .to_srgb()
}

/// Blends in HSV space, interpolating hue along the shorter arc.
pub fn hsv(c1: &Srgb, c2: &Srgb, t: Float) -> Srgb {
    let mut h1 = c1.to_hsv();
    let mut h2 = c2.to_hsv();

    // An achromatic endpoint has no meaningful hue of its own, so adopt
    // the other color's instead of sweeping through red.
    if h1.s == 0.0 && h2.s != 0.0 {
        h1.h = h2.h;
    } else if h2.s == 0.0 && h1.s != 0.0 {
        h2.h = h1.h;
    }

    Hsv::new(
        interp_angle(h1.h, h2.h, t),
        lerp(h1.s, h2.s, t),
        lerp(h1.v, h2.v, t),
    )
    .to_srgb()
}

/// Blends in CIE-L*C*h° space, interpolating hue along the shorter arc.
/// The result is clamped into the displayable range.
pub fn hcl(c1: &Srgb, c2: &Srgb, t: Float) -> Srgb {
    let mut l1 = c1.to_lch();
    let mut l2 = c2.to_lch();

    // Near-gray endpoints carry a numerically meaningless hue; adopt the
    // other color's.
    if l1.c <= 0.00015 && l2.c >= 0.00015 {
        l1.h = l2.h;
    } else if l2.c <= 0.00015 && l1.c >= 0.00015 {
        l2.h = l1.h;
    }

    Lch::new(
        lerp(l1.l, l2.l, t),
        lerp(l1.c, l2.c, t),
        interp_angle(l1.h, l2.h, t),
    )
    .to_srgb()
    .clamped()
}

/// Blends in cylindrical CIELUV space, interpolating hue along the shorter
/// arc.
pub fn luv_lch(c1: &Srgb, c2: &Srgb, t: Float) -> Srgb {
    let l1 = c1.to_luv_lch();
    let l2 = c2.to_luv_lch();
    LuvLch::new(
        lerp(l1.l, l2.l, t),
        lerp(l1.c, l2.c, t),
        interp_angle(l1.h, l2.h, t),
    )
    .to_srgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLEND_FNS: [fn(&Srgb, &Srgb, Float) -> Srgb; 7] =
        [rgb, linear_rgb, lab, luv, hsv, hcl, luv_lch];

    #[test]
    fn endpoints_reproduce_inputs() {
        let c1: Srgb = "#1a1a46".parse().unwrap();
        let c2: Srgb = "#666666".parse().unwrap();
        for blend in BLEND_FNS {
            assert_eq!(blend(&c1, &c2, 0.0).hex(), "#1a1a46");
            assert_eq!(blend(&c1, &c2, 1.0).hex(), "#666666");
        }
    }

    #[test]
    fn midpoints_are_displayable() {
        let c1: Srgb = "#ff0000".parse().unwrap();
        let c2: Srgb = "#00ff00".parse().unwrap();
        for blend in BLEND_FNS {
            let mid = blend(&c1, &c2, 0.5).clamped();
            assert!(mid.is_valid(), "{mid:?}");
        }
    }

    #[test]
    fn angle_interpolation_takes_shorter_arc() {
        assert_eq!(interp_angle(0.0, 90.0, 0.5), 45.0);
        assert_eq!(interp_angle(350.0, 10.0, 0.5), 0.0);
        assert_eq!(interp_angle(10.0, 350.0, 0.5), 0.0);
        assert_eq!(interp_angle(180.0, 180.0, 0.25), 180.0);
    }

    #[test]
    fn gray_adopts_partner_hue() {
        let gray = Srgb::new(0.5, 0.5, 0.5);
        let red = Srgb::new(1.0, 0.0, 0.0);
        // If gray kept hue 0 this would be a plain desaturated red anyway,
        // so approach from a hue far from red instead.
        let cyan = Srgb::new(0.0, 1.0, 1.0);
        let near_cyan = hsv(&gray, &cyan, 0.9);
        assert!(near_cyan.to_hsv().h > 170.0 && near_cyan.to_hsv().h < 190.0);
        let near_red = hsv(&red, &gray, 0.1);
        let h = near_red.to_hsv().h;
        assert!(h < 1.0 || h > 359.0, "hue drifted to {h}");
    }
}
