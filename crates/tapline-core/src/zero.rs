//! Additive identity for sample and coefficient types.
//!
//! Every delay cell in this crate starts at, and is reset to, the additive
//! identity of its sample type. Scalars get this from a literal; aggregate
//! types usually have a named constructor (`zeros()`, `ZERO`, ...) that does
//! not line up with `Default`. [`ZeroValue`] is the one place a type states
//! which value that is.
//!
//! # Custom types
//!
//! ```rust
//! use tapline_core::ZeroValue;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Accel {
//!     x: f32,
//!     y: f32,
//! }
//!
//! impl Accel {
//!     const ORIGIN: Self = Self { x: 0.0, y: 0.0 };
//! }
//!
//! impl ZeroValue for Accel {
//!     fn zero() -> Self {
//!         Self::ORIGIN
//!     }
//! }
//!
//! assert_eq!(Accel::zero(), Accel { x: 0.0, y: 0.0 });
//! ```

/// A type with a known additive identity.
///
/// There is deliberately no blanket implementation over `Default`, so types
/// whose zero comes from a factory function can implement this directly.
pub trait ZeroValue: Sized {
    /// Returns the additive identity (`x + zero() == x`).
    fn zero() -> Self;
}

macro_rules! impl_zero_value {
    ($zero:literal => $($t:ty),*) => {
        $(
            impl ZeroValue for $t {
                #[inline]
                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_zero_value!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_zero_value!(0.0 => f32, f64);

/// Shorthand for `T::zero()`.
#[inline]
pub fn zero<T: ZeroValue>() -> T {
    T::zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_additive_identity() {
        assert_eq!(zero::<i32>(), 0);
        assert_eq!(zero::<u8>(), 0);
        assert_eq!(zero::<f32>() + 1.5, 1.5);
        assert_eq!(zero::<f64>(), 0.0);
    }

    #[test]
    fn float_zero_is_positive() {
        assert!(zero::<f32>().is_sign_positive());
        assert!(zero::<f64>().is_sign_positive());
    }
}
