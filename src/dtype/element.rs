//! Element trait for mapping Rust types to DType

use super::DType;
use std::fmt::Debug;

/// Trait for types that can be elements of a sequence
///
/// This trait connects Rust's type system to sift's runtime dtype system.
/// It's implemented for all primitive numeric types.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - values move freely between worker threads
/// - `PartialEq` - equality for `count` and `remove`
/// - `PartialOrd` - ordering for threshold predicates
/// - `Debug` - diagnostics in assertions and logs
///
/// Floating point `NaN` never compares equal, so `count(data, NaN)` is always 0
/// and `remove(data, NaN)` retains every element.
pub trait Element: Copy + Send + Sync + PartialEq + PartialOrd + Debug + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type (saturating for integers)
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// Parity of the integral part
    ///
    /// Integers test their low bit exactly. Floats are truncated toward zero
    /// first; NaN and infinities are never even.
    fn is_even(self) -> bool;

    /// Truthiness: every value except zero is true
    #[inline]
    fn is_truthy(self) -> bool {
        self != Self::zero()
    }
}

macro_rules! impl_element_int {
    ($($t:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }

                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn is_even(self) -> bool {
                    self & 1 == 0
                }
            }
        )*
    };
}

impl_element_int!(
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
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn is_even(self) -> bool {
        self.trunc().rem_euclid(2.0) == 0.0
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn is_even(self) -> bool {
        self.trunc().rem_euclid(2.0) == 0.0
    }
}

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

#[cfg(feature = "f16")]
impl Element for half::f16 {
    const DTYPE: DType = DType::F16;

    #[inline]
    fn to_f64(self) -> f64 {
        half::f16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::f16::from_f64(v)
    }

    #[inline]
    fn zero() -> Self {
        half::f16::ZERO
    }

    #[inline]
    fn is_even(self) -> bool {
        self.to_f64().is_even()
    }
}

#[cfg(feature = "f16")]
impl Element for half::bf16 {
    const DTYPE: DType = DType::BF16;

    #[inline]
    fn to_f64(self) -> f64 {
        half::bf16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::bf16::from_f64(v)
    }

    #[inline]
    fn zero() -> Self {
        half::bf16::ZERO
    }

    #[inline]
    fn is_even(self) -> bool {
        self.to_f64().is_even()
    }
}
