use std::ops::Add;

/// Numeric edge weight.
///
/// `one` is the weight of an edge added without an explicit weight and
/// `zero` is the neutral element when summing up the weight of a graph.
pub trait Weight: Add<Self, Output = Self> + PartialEq + Clone + Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

macro_rules! impl_int_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }
            }
        )*
    };
}

impl_int_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);
