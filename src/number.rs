//! Numeric values accepted by `assert_equals_number`.

use std::fmt::{Debug, Display};

/// A primitive number compared with `==` and printed unquoted in failure reasons.
///
/// Both sides of a comparison share one type, so `3_i32` and `3_i64` cannot be
/// mixed by accident. Floats follow IEEE equality: `NaN` never equals itself
/// and `0.0` equals `-0.0`.
pub trait Number: Copy + PartialEq + Display + Debug {}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(impl Number for $t {})*
    };
}

impl_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
