pub mod blend;
pub mod color;
pub mod distance;
pub mod palette;
pub mod sort;
pub mod util;

// Component representation. The reference conversion constants and test
// vectors are double-precision, so the crate is fixed to f64.
pub type Float = f64;
