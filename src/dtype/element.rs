//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Trait for types that can be elements of a tensor
///
/// This trait connects Rust's type system to modekit's runtime dtype system.
/// It's implemented for the primitive numeric types the mode kernel supports.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - values are moved into worker tasks
/// - `Pod + Zeroable` - safe byte reinterpretation (bytemuck)
/// - `PartialOrd` - value equality and ordering as the type defines it
pub trait Element: Copy + Send + Sync + Pod + Zeroable + PartialOrd + Debug + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Total ordering used for sorting.
    ///
    /// Integers use their natural order. Floats use IEEE 754 `totalOrder`:
    /// `-0.0` sorts before `+0.0`, a NaN with the sign bit clear sorts after
    /// every number and one with the sign bit set sorts before every number.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Zero value
    fn zero() -> Self;
}

macro_rules! impl_int_element {
    ($($t:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

impl_int_element!(
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
);

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

#[cfg(feature = "f16")]
impl Element for half::f16 {
    const DTYPE: DType = DType::F16;

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        half::f16::total_cmp(self, other)
    }

    #[inline]
    fn zero() -> Self {
        half::f16::ZERO
    }
}

#[cfg(feature = "f16")]
impl Element for half::bf16 {
    const DTYPE: DType = DType::BF16;

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        half::bf16::total_cmp(self, other)
    }

    #[inline]
    fn zero() -> Self {
        half::bf16::ZERO
    }
}
