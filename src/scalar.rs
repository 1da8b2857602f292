//! Scalar field abstraction.
//!
//! Every tensor, vector and accumulator is generic over a commutative ring
//! element. Only `+`, `×`, zero, one and an exact embedding of small counts
//! (for multiplicity factors) are required.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul};

use half::f16;
use num_complex::Complex;
use num_traits::{Num, NumAssign, One, Zero};

/// Element type of the contraction engine.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + Send
    + Sync
    + 'static
{
    /// Embeds a permutation count into the field.
    fn from_count(count: u64) -> Self;
}

macro_rules! impl_scalar_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn from_count(count: u64) -> Self {
                    count as $t
                }
            }
        )*
    };
}

impl_scalar_primitive!(f32, f64, i32, i64, i128, isize, u32, u64, u128, usize);

impl Scalar for f16 {
    #[inline]
    fn from_count(count: u64) -> Self {
        f16::from_f64(count as f64)
    }
}

impl<T> Scalar for Complex<T>
where
    T: Scalar + Num + NumAssign,
{
    #[inline]
    fn from_count(count: u64) -> Self {
        Complex::new(T::from_count(count), T::zero())
    }
}

/// Dot product of two equally long slices.
pub(crate) fn dot<T: Scalar>(lhs: &[T], rhs: &[T]) -> T {
    lhs.iter()
        .zip(rhs)
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}
