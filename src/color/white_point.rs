use crate::Float;

/// Reference white tristimulus values used by the Lab/Luv family of
/// conversions. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WhitePoint {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl WhitePoint {
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    pub const D65: Self = Self::new(0.95047, 1.00000, 1.08883);
    pub const D50: Self = Self::new(0.96422, 1.00000, 0.82521);

    /// HSLuv uses a rounded version of D65. This has no impact on the final
    /// RGB values, but keeps internal operations in line with the reference
    /// test values. See https://github.com/hsluv/hsluv/issues/79
    pub(crate) const HSLUV_D65: Self = Self::new(0.95045592705167, 1.0, 1.089057750759878);
}
