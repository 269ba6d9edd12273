use crate::Float;

use super::Srgb;

/// A color in classic hexcone HSL. Hue in [0..360), saturation and
/// lightness in [0..1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

impl Hsl {
    pub fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h: h % 360.0, s, l }
    }

    pub fn to_srgb(&self) -> Srgb {
        if self.s == 0.0 {
            return Srgb::new(self.l, self.l, self.l);
        }

        let t1 = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let t2 = 2.0 * self.l - t1;

        let h = self.h / 360.0;
        let channel = |mut t: Float| {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if 6.0 * t < 1.0 {
                t2 + (t1 - t2) * 6.0 * t
            } else if 2.0 * t < 1.0 {
                t1
            } else if 3.0 * t < 2.0 {
                t2 + (t1 - t2) * (2.0 / 3.0 - t) * 6.0
            } else {
                t2
            }
        };

        Srgb::new(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
    }
}

/// A color in classic hexcone HSV. Hue in [0..360], saturation and value
/// in [0..1].
///
/// From http://en.wikipedia.org/wiki/HSL_and_HSV
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub h: Float,
    pub s: Float,
    pub v: Float,
}

impl Hsv {
    pub fn new(h: Float, s: Float, v: Float) -> Self {
        Self {
            h: h.clamp(0.0, 360.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    pub fn to_srgb(&self) -> Srgb {
        let hp = self.h / 60.0;
        let c = self.v * self.s;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

        let m = self.v - c;
        let (r, g, b) = match hp {
            hp if (0.0..1.0).contains(&hp) => (c, x, 0.0),
            hp if (1.0..2.0).contains(&hp) => (x, c, 0.0),
            hp if (2.0..3.0).contains(&hp) => (0.0, c, x),
            hp if (3.0..4.0).contains(&hp) => (0.0, x, c),
            hp if (4.0..5.0).contains(&hp) => (x, 0.0, c),
            hp if (5.0..=6.0).contains(&hp) => (c, 0.0, x),
            _ => (0.0, 0.0, 0.0),
        };

        Srgb::new(m + r, m + g, m + b)
    }
}
