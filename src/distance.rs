//! Perceptual and geometric distance metrics between colors.
//!
//! All metrics are symmetric and yield 0 for identical inputs. CIE94 and
//! CIEDE2000 are not Euclidean metrics; the triangle inequality is not
//! guaranteed for them.

use crate::color::{Lab, Srgb};
use crate::Float;

fn sq(v: Float) -> Float {
    v * v
}

/// Euclidean distance in display RGB space.
///
/// This is not a good measure of visual similarity; rather do it in Lab
/// space.
pub fn rgb(c1: &Srgb, c2: &Srgb) -> Float {
    (sq(c1.r - c2.r) + sq(c1.g - c2.g) + sq(c1.b - c2.b)).sqrt()
}

/// Euclidean distance in linear RGB space. Not useful for measuring how
/// humans perceive color, but might be useful for other things, like
/// dithering.
pub fn linear_rgb(c1: &Srgb, c2: &Srgb) -> Float {
    let c1 = c1.to_linear();
    let c2 = c2.to_linear();
    (sq(c1.r - c2.r) + sq(c1.g - c2.g) + sq(c1.b - c2.b)).sqrt()
}

/// Color distance algorithm developed by Thiadmer Riemersma. It uses RGB
/// coordinates, but it has similar results to CIELUV, making it both fast
/// and reasonably accurate.
///
/// See https://www.compuphase.com/cmetric.htm
pub fn riemersma(c1: &Srgb, c2: &Srgb) -> Float {
    let r_avg = (c1.r + c2.r) / 2.0;
    let dr = c1.r - c2.r;
    let dg = c1.g - c2.g;
    let db = c1.b - c2.b;
    ((2.0 + r_avg) * dr * dr + 4.0 * dg * dg + (2.0 + (1.0 - r_avg)) * db * db).sqrt()
}

/// Euclidean distance in L*a*b* space, a good measure of visual
/// similarity. 0 means identical colors, 1 or higher means they differ a
/// lot.
pub fn lab(c1: &Srgb, c2: &Srgb) -> Float {
    lab_euclidean(&c1.to_lab(), &c2.to_lab())
}

/// CIE76 is the plain Lab distance.
pub fn cie76(c1: &Srgb, c2: &Srgb) -> Float {
    lab(c1, c2)
}

/// Euclidean distance in L*u*v* space, likewise a good measure of visual
/// similarity.
pub fn luv(c1: &Srgb, c2: &Srgb) -> Float {
    let c1 = c1.to_luv();
    let c2 = c2.to_luv();
    (sq(c1.l - c2.l) + sq(c1.u - c2.u) + sq(c1.v - c2.v)).sqrt()
}

/// Euclidean distance in HSLuv space, with the hue delta scaled by 1/100
/// so all three axes contribute comparable magnitudes.
pub fn hsluv(c1: &Srgb, c2: &Srgb) -> Float {
    let c1 = c1.to_hsluv();
    let c2 = c2.to_hsluv();
    (sq((c1.h - c2.h) / 100.0) + sq(c1.s - c2.s) + sq(c1.l - c2.l)).sqrt()
}

/// Euclidean distance in HPLuv space, hue scaled as for [`hsluv`].
pub fn hpluv(c1: &Srgb, c2: &Srgb) -> Float {
    let c1 = c1.to_hpluv();
    let c2 = c2.to_hpluv();
    (sq((c1.h - c2.h) / 100.0) + sq(c1.s - c2.s) + sq(c1.l - c2.l)).sqrt()
}

pub(crate) fn lab_euclidean(c1: &Lab, c2: &Lab) -> Float {
    (sq(c1.l - c2.l) + sq(c1.a - c2.a) + sq(c1.b - c2.b)).sqrt()
}

/// CIE94 color difference. More accurate than plain Lab distance, but also
/// more work.
pub fn cie94(cl: &Srgb, cr: &Srgb) -> Float {
    cie94_lab(&cl.to_lab(), &cr.to_lab())
}

pub fn cie94_lab(cl: &Lab, cr: &Lab) -> Float {
    // The formula expects L,a,b ranges 100x larger than this crate keeps
    // them. Scaling the inputs up and the distance back down is less
    // error-prone than adjusting every constant.
    let (l1, a1, b1) = (100.0 * cl.l, 100.0 * cl.a, 100.0 * cl.b);
    let (l2, a2, b2) = (100.0 * cr.l, 100.0 * cr.a, 100.0 * cr.b);

    let kl = 1.0; // 2.0 for textiles
    let kc = 1.0;
    let kh = 1.0;
    let k1 = 0.045; // 0.048 for textiles
    let k2 = 0.015; // 0.014 for textiles

    let delta_l = l1 - l2;
    let c1 = (sq(a1) + sq(b1)).sqrt();
    let c2 = (sq(a2) + sq(b2)).sqrt();
    let delta_cab = c1 - c2;

    // Not taking the square root here for stability, and it's unnecessary.
    let delta_hab2 = sq(a1 - a2) + sq(b1 - b2) - sq(delta_cab);
    let sl = 1.0;
    let sc = 1.0 + k1 * c1;
    let sh = 1.0 + k2 * c1;

    let v_l2 = sq(delta_l / (kl * sl));
    let v_c2 = sq(delta_cab / (kc * sc));
    let v_h2 = delta_hab2 / sq(kh * sh);

    (v_l2 + v_c2 + v_h2).sqrt() * 0.01
}

/// Delta E 2000 color difference: more expensive but more accurate than
/// both [`lab`] and [`cie94`].
pub fn ciede2000(c1: &Srgb, c2: &Srgb) -> Float {
    ciede2000_klch(c1, c2, 1.0, 1.0, 1.0)
}

/// Delta E 2000 with custom values for the weighting factors kL, kC and kH.
pub fn ciede2000_klch(cl: &Srgb, cr: &Srgb, kl: Float, kc: Float, kh: Float) -> Float {
    ciede2000_klch_lab(&cl.to_lab(), &cr.to_lab(), kl, kc, kh)
}

pub fn ciede2000_lab(lab1: &Lab, lab2: &Lab) -> Float {
    ciede2000_klch_lab(lab1, lab2, 1.0, 1.0, 1.0)
}

pub fn ciede2000_klch_lab(lab1: &Lab, lab2: &Lab, kl: Float, kc: Float, kh: Float) -> Float {
    use std::f64::consts::PI;

    // As with CIE94, scale the ranges up beforehand and the result back
    // down afterwards.
    let (l1, a1, b1) = (100.0 * lab1.l, 100.0 * lab1.a, 100.0 * lab1.b);
    let (l2, a2, b2) = (100.0 * lab2.l, 100.0 * lab2.a, 100.0 * lab2.b);

    let cab1 = (sq(a1) + sq(b1)).sqrt();
    let cab2 = (sq(a2) + sq(b2)).sqrt();
    let cab_mean = (cab1 + cab2) / 2.0;

    let g = 0.5 * (1.0 - (cab_mean.powi(7) / (cab_mean.powi(7) + 25.0_f64.powi(7))).sqrt());
    let ap1 = (1.0 + g) * a1;
    let ap2 = (1.0 + g) * a2;
    let cp1 = (sq(ap1) + sq(b1)).sqrt();
    let cp2 = (sq(ap2) + sq(b2)).sqrt();

    // Hue is defined as 0 when a' and b are both exactly zero.
    let mut hp1 = 0.0;
    if b1 != ap1 || ap1 != 0.0 {
        hp1 = b1.atan2(ap1);
        if hp1 < 0.0 {
            hp1 += PI * 2.0;
        }
        hp1 *= 180.0 / PI;
    }
    let mut hp2 = 0.0;
    if b2 != ap2 || ap2 != 0.0 {
        hp2 = b2.atan2(ap2);
        if hp2 < 0.0 {
            hp2 += PI * 2.0;
        }
        hp2 *= 180.0 / PI;
    }

    let delta_lp = l2 - l1;
    let delta_cp = cp2 - cp1;
    let cp_product = cp1 * cp2;
    // The hue difference only wraps when both chromas are nonzero.
    let mut dhp = 0.0;
    if cp_product != 0.0 {
        dhp = hp2 - hp1;
        if dhp > 180.0 {
            dhp -= 360.0;
        } else if dhp < -180.0 {
            dhp += 360.0;
        }
    }
    let delta_hp = 2.0 * cp_product.sqrt() * (dhp / 2.0 * PI / 180.0).sin();

    let lp_mean = (l1 + l2) / 2.0;
    let cp_mean = (cp1 + cp2) / 2.0;
    let mut hp_mean = hp1 + hp2;
    if cp_product != 0.0 {
        hp_mean /= 2.0;
        if (hp1 - hp2).abs() > 180.0 {
            if hp1 + hp2 < 360.0 {
                hp_mean += 180.0;
            } else {
                hp_mean -= 180.0;
            }
        }
    }

    let t = 1.0 - 0.17 * ((hp_mean - 30.0) * PI / 180.0).cos()
        + 0.24 * (2.0 * hp_mean * PI / 180.0).cos()
        + 0.32 * ((3.0 * hp_mean + 6.0) * PI / 180.0).cos()
        - 0.2 * ((4.0 * hp_mean - 63.0) * PI / 180.0).cos();
    let delta_theta = 30.0 * (-sq((hp_mean - 275.0) / 25.0)).exp();
    let rc = 2.0 * (cp_mean.powi(7) / (cp_mean.powi(7) + 25.0_f64.powi(7))).sqrt();
    let sl = 1.0 + (0.015 * sq(lp_mean - 50.0)) / (20.0 + sq(lp_mean - 50.0)).sqrt();
    let sc = 1.0 + 0.045 * cp_mean;
    let sh = 1.0 + 0.015 * cp_mean * t;
    let rt = -(2.0 * delta_theta * PI / 180.0).sin() * rc;

    (sq(delta_lp / (kl * sl))
        + sq(delta_cp / (kc * sc))
        + sq(delta_hp / (kh * sh))
        + rt * (delta_cp / (kc * sc)) * (delta_hp / (kh * sh)))
        .sqrt()
        * 0.01
}
