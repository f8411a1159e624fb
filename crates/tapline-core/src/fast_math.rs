//! Fast mathematical approximations for control and DSP code.
//!
//! These functions trade full IEEE 754 precision for speed on targets
//! without hardware transcendental support (Cortex-M4/M7, etc.). Each
//! function documents its maximum error and its behavior on degenerate input.
//!
//! # When to use
//!
//! | Function | Replaces | Use case | Max error |
//! |----------|----------|----------|-----------|
//! | [`sign`] | `signum` | branch-free sign of an error term | exact |
//! | [`abs`] | `fabs` / `abs` | generic over signed and unsigned | exact |
//! | [`sqrt`] | `libm::sqrtf` | magnitudes; never returns NaN | exact (libm) |
//! | [`hypot`] | `libm::hypotf` | vector length of small values | overflow-prone |
//! | [`fast_atan`] | `libm::atanf` | phase/angle estimation | < 0.0064 rad |
//! | [`fast_atan2`] | `libm::atan2f` | phase/angle estimation | < 0.0064 rad |
//! | [`sin_cos`] | `sinf` + `cosf` | rotations, oscillators, Park/Clarke | < 3e-5 |
//!
//! # Degenerate input
//!
//! - [`sqrt`] of a negative number or NaN is `0`, never NaN.
//! - [`hypot`] computes `x² + y²` directly and overflows for magnitudes above
//!   roughly `1.8e19` (`f32`). Use `libm::hypotf` where that matters.
//! - [`sin_cos`] does not range-check: any finite angle is wrapped
//!   arithmetically; NaN and infinity produce NaN.
//!
//! # Performance
//!
//! Estimated Cortex-M7 cycles per call:
//!
//! | Function | Fast | libm equivalent |
//! |----------|------|-----------------|
//! | `fast_atan` | ~20 | ~100 (`atanf`) |
//! | `sin_cos` | ~18 | ~200 (`sinf` + `cosf`) |

use crate::consts::MathConst;
use crate::hint::unlikely;
use crate::lut::{SIN_TABLE_SIZE, TableScalar, cos_index};
use core::ops::{Add, Mul};

/// Sign of a value as `-1`, `0` or `1`.
pub trait Sign: Copy {
    /// See [`sign`].
    fn sign(self) -> i32;
}

/// Absolute value, defined for signed and unsigned types alike.
pub trait Abs: Copy {
    /// See [`abs`].
    fn abs(self) -> Self;
}

/// Square root that never produces NaN.
pub trait Sqrt: Copy {
    /// See [`sqrt`].
    fn sqrt(self) -> Self;
}

/// Table- and rational-approximation trigonometry.
pub trait FastTrig: Copy {
    /// See [`fast_atan`].
    fn fast_atan(self) -> Self;
    /// See [`fast_atan2`]; `self` is `y`.
    fn fast_atan2(self, x: Self) -> Self;
    /// See [`sin_cos`].
    fn table_sin_cos(self) -> (Self, Self);
}

macro_rules! impl_signed_int {
    ($($t:ty),*) => {
        $(
            impl Sign for $t {
                #[inline]
                fn sign(self) -> i32 {
                    i32::from(self.wrapping_neg() < 0) - i32::from(self < 0)
                }
            }

            impl Abs for $t {
                #[inline]
                fn abs(self) -> Self {
                    self.wrapping_abs()
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_int {
    ($($t:ty),*) => {
        $(
            impl Sign for $t {
                #[inline]
                fn sign(self) -> i32 {
                    1
                }
            }

            impl Abs for $t {
                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }
        )*
    };
}

macro_rules! impl_int_sqrt {
    ($($t:ty),*) => {
        $(
            impl Sqrt for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    Sqrt::sqrt(self as f32) as $t
                }
            }
        )*
    };
}

impl_signed_int!(i8, i16, i32, i64, i128, isize);
impl_unsigned_int!(u8, u16, u32, u64, u128, usize);
impl_int_sqrt!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($t:ty, fabs = $fabs:path, sqrt = $sqrt:path, trunc = $trunc:path) => {
        impl Sign for $t {
            #[inline]
            fn sign(self) -> i32 {
                // signbit(-x) - signbit(x): no compare, no branch
                i32::from((-self).is_sign_negative()) - i32::from(self.is_sign_negative())
            }
        }

        impl Abs for $t {
            #[inline]
            fn abs(self) -> Self {
                $fabs(self)
            }
        }

        impl Sqrt for $t {
            #[inline]
            fn sqrt(self) -> Self {
                if unlikely(!(self >= 0.0)) {
                    0.0
                } else {
                    $sqrt(self)
                }
            }
        }

        impl FastTrig for $t {
            #[inline]
            fn fast_atan(self) -> Self {
                let x = self;
                if x > 1.0 {
                    <$t as MathConst>::HALF_PI - (45.0 * x * x + 12.0) / (45.0 * x * x * x + 27.0 * x)
                } else if x < -1.0 {
                    -<$t as MathConst>::HALF_PI - (45.0 * x * x + 12.0) / (45.0 * x * x * x + 27.0 * x)
                } else {
                    (12.0 * x * x * x + 45.0 * x) / (27.0 * x * x + 45.0)
                }
            }

            #[inline]
            fn fast_atan2(self, x: Self) -> Self {
                let y = self;
                if x > 0.0 {
                    FastTrig::fast_atan(y / x)
                } else if y >= 0.0 && x < 0.0 {
                    <$t as MathConst>::PI + FastTrig::fast_atan(y / x)
                } else if y < 0.0 && x < 0.0 {
                    -<$t as MathConst>::PI + FastTrig::fast_atan(y / x)
                } else if y > 0.0 && x == 0.0 {
                    <$t as MathConst>::HALF_PI
                } else if y < 0.0 && x == 0.0 {
                    -<$t as MathConst>::HALF_PI
                } else {
                    0.0
                }
            }

            #[inline]
            fn table_sin_cos(self) -> (Self, Self) {
                let table = <$t as TableScalar>::sin_table();

                // |theta| in turns, integer part dropped
                let turns = $fabs(self * <$t as MathConst>::INV_TWO_PI);
                let turns = turns - $trunc(turns);

                let findex = SIN_TABLE_SIZE as $t * turns;
                let whole = findex as usize;
                let fract = findex - whole as $t;
                let index_s = whole % SIN_TABLE_SIZE;
                let index_c = cos_index(index_s);

                let (s1, s2) = (table[index_s], table[index_s + 1]);
                let (c1, c2) = (table[index_c], table[index_c + 1]);

                let sin = Sign::sign(self) as $t * ((1.0 - fract) * s1 + fract * s2);
                let cos = (1.0 - fract) * c1 + fract * c2;
                (sin, cos)
            }
        }
    };
}

impl_float!(f32, fabs = libm::fabsf, sqrt = libm::sqrtf, trunc = libm::truncf);
impl_float!(f64, fabs = libm::fabs, sqrt = libm::sqrt, trunc = libm::trunc);

/// Sign of `x` as an integer.
///
/// Signed types use `signbit(-x) − signbit(x)`, which is branch-free for
/// floats. This formula's edge cases are kept as they are:
///
/// | Input | Result |
/// |-------|--------|
/// | `> 0` | `1` |
/// | `< 0` | `-1` |
/// | `0` (integer) | `0` |
/// | `+0.0` | `1` (sign bit of `-0.0` is set) |
/// | `-0.0` | `-1` |
/// | NaN | `±1`, following its sign bit |
/// | `iN::MIN` | `0` (`-MIN` wraps to `MIN`) |
///
/// Unsigned types always return `1`.
///
/// # Examples
///
/// ```
/// use tapline_core::fast_math::sign;
///
/// assert_eq!(sign(-3.5_f32), -1);
/// assert_eq!(sign(2_i32), 1);
/// assert_eq!(sign(0_i32), 0);
/// assert_eq!(sign(0_u8), 1);
/// ```
#[inline]
pub fn sign<T: Sign>(x: T) -> i32 {
    x.sign()
}

/// Absolute value. Identity for unsigned types; wraps for integer `MIN`.
///
/// # Examples
///
/// ```
/// use tapline_core::fast_math::abs;
///
/// assert_eq!(abs(-2.5_f64), 2.5);
/// assert_eq!(abs(-7_i16), 7);
/// assert_eq!(abs(7_u16), 7);
/// ```
#[inline]
pub fn abs<T: Abs>(x: T) -> T {
    Abs::abs(x)
}

/// Square root that returns `0` instead of NaN.
///
/// Floats call `libm` and return `0` whenever `!(x >= 0)`, which covers
/// negative values and NaN. Integers go through `f32` and truncate back.
///
/// # Examples
///
/// ```
/// use tapline_core::fast_math::sqrt;
///
/// assert_eq!(sqrt(16.0_f32), 4.0);
/// assert_eq!(sqrt(-1.0_f32), 0.0);
/// assert_eq!(sqrt(f64::NAN), 0.0);
/// assert_eq!(sqrt(10_u32), 3);
/// ```
#[inline]
pub fn sqrt<T: Sqrt>(x: T) -> T {
    Sqrt::sqrt(x)
}

/// Euclidean norm `sqrt(x² + y²)`.
///
/// Unlike `libm::hypotf` there is no scaling step: `x * x + y * y` overflows
/// to infinity once either magnitude passes `sqrt(T::MAX)`. Cheap and exact
/// enough for sensor vectors and normalized signals.
///
/// # Examples
///
/// ```
/// use tapline_core::fast_math::hypot;
///
/// assert_eq!(hypot(3.0_f32, 4.0), 5.0);
/// assert!(hypot(1e20_f32, 0.0).is_infinite());
/// ```
#[inline]
pub fn hypot<T>(x: T, y: T) -> T
where
    T: Sqrt + Add<Output = T> + Mul<Output = T>,
{
    sqrt(x * x + y * y)
}

/// Arctangent from a rational approximation derived from Gauss quadrature.
///
/// ```text
/// |x| ≤ 1:  atan(x) ≈ (12x³ + 45x) / (27x² + 45)
/// |x| > 1:  atan(x) ≈ ±π/2 − (45x² + 12) / (45x³ + 27x)
/// ```
///
/// The second form is the first applied to `1/x`, reflected about `π/2`.
///
/// # Accuracy
///
/// Maximum absolute error < 0.0064 rad, reached near `|x| = 1`; typical
/// error for `|x| < 0.5` is below 2e-4 rad.
///
/// # Examples
///
/// ```
/// use tapline_core::fast_math::fast_atan;
///
/// assert_eq!(fast_atan(0.0_f32), 0.0);
/// assert!((fast_atan(0.5_f32) - 0.5_f32.atan()).abs() < 1e-3);
/// assert!((fast_atan(-10.0_f64) - (-10.0_f64).atan()).abs() < 1e-3);
/// ```
#[inline]
pub fn fast_atan<T: FastTrig>(x: T) -> T {
    x.fast_atan()
}

/// Four-quadrant arctangent of `y / x` built on [`fast_atan`].
///
/// | Case | Result |
/// |------|--------|
/// | `x > 0` | `atan(y/x)` |
/// | `x < 0, y ≥ 0` | `π + atan(y/x)` |
/// | `x < 0, y < 0` | `−π + atan(y/x)` |
/// | `x == 0, y > 0` | `π/2` |
/// | `x == 0, y < 0` | `−π/2` |
/// | `x == 0, y == 0` | `0` |
///
/// # Examples
///
/// ```
/// use tapline_core::fast_math::fast_atan2;
/// use core::f32::consts::{FRAC_PI_2, PI};
///
/// assert_eq!(fast_atan2(1.0_f32, 0.0), FRAC_PI_2);
/// assert_eq!(fast_atan2(-1.0_f32, 0.0), -FRAC_PI_2);
/// assert_eq!(fast_atan2(0.0_f32, 0.0), 0.0);
/// assert!((fast_atan2(0.0_f32, -1.0) - PI).abs() < 1e-6);
/// ```
#[inline]
pub fn fast_atan2<T: FastTrig>(y: T, x: T) -> T {
    y.fast_atan2(x)
}

/// Sine and cosine of `theta` (radians) from one lookup in the sine table.
///
/// `|theta|/(2π)` is reduced to `[0, 1)` by dropping its integer part and
/// scaled to a fractional table index. The entries on either side of that
/// index are linearly interpolated; the cosine uses the same fraction a
/// quarter table ahead. The sign of `theta` is applied to the sine only.
///
/// # Accuracy
///
/// Linear interpolation over 512 intervals: maximum absolute error about
/// `(2π/512)²/8 ≈ 1.9e-5`. Exact at table breakpoints, so
/// `sin_cos(0.0) == (0.0, 1.0)`. Large angles lose precision in the `f32`
/// reduction exactly as `theta / 2π` does.
///
/// # Examples
///
/// ```
/// use tapline_core::fast_math::sin_cos;
///
/// assert_eq!(sin_cos(0.0_f32), (0.0, 1.0));
///
/// let (s, c) = sin_cos(core::f32::consts::FRAC_PI_2);
/// assert!((s - 1.0).abs() < 1e-4);
/// assert!(c.abs() < 1e-4);
/// ```
#[inline]
pub fn sin_cos<T: FastTrig>(theta: T) -> (T, T) {
    theta.table_sin_cos()
}
