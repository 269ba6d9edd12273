mod hsl;
mod hsluv;
mod lab;
mod linear_rgb;
mod luv;
mod oklab;
pub(crate) mod rgb255;
mod srgb;
mod white_point;
mod xyz;

pub use hsl::{Hsl, Hsv};
pub use hsluv::{Hpluv, Hsluv};
pub use lab::{Lab, Lch};
pub use linear_rgb::LinearRgb;
pub use luv::{Luv, LuvLch};
pub use oklab::{OkLab, OkLch};
pub use rgb255::{ParseColorError, Rgb255};
pub use srgb::{Srgb, DELTA};
pub use white_point::WhitePoint;
pub use xyz::{XyY, Xyz};

use crate::Float;

pub(crate) const DEG_PER_RAD: Float = 57.29577951308232087721;
pub(crate) const RAD_PER_DEG: Float = 0.01745329251994329576;
