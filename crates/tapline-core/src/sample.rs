//! Capability bounds for samples and coefficients, plus a fixed-size
//! vector sample type.
//!
//! The filters and the controller never look inside a sample. They need:
//!
//! | Operation | Used for |
//! |-----------|----------|
//! | `T + T`, `T - T` | accumulating taps and delay cells |
//! | `T * C` | weighting a sample by a coefficient |
//! | `T::zero()` | initial and cleared state |
//!
//! Anything that provides those works with every component: plain scalars,
//! [`Frame`], or a caller's own matrix type.

use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::zero::ZeroValue;

/// Scalar coefficient type.
///
/// Coefficients multiply samples and are combined among themselves when
/// deriving recurrence weights (PID). Blanket-implemented.
pub trait Coefficient:
    Copy + ZeroValue + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<C> Coefficient for C where
    C: Copy + ZeroValue + Add<Output = C> + Sub<Output = C> + Mul<Output = C>
{
}

/// Sample type that can be weighted by coefficients of type `C`.
///
/// Blanket-implemented for every type with the required operators.
pub trait Sample<C>:
    Copy + ZeroValue + Add<Output = Self> + Sub<Output = Self> + Mul<C, Output = Self>
{
}

impl<T, C> Sample<C> for T where
    T: Copy + ZeroValue + Add<Output = T> + Sub<Output = T> + Mul<C, Output = T>
{
}

/// Fixed-size vector sample: `N` scalars processed in lockstep.
///
/// Arithmetic is element-wise; multiplication takes a scalar. Running a
/// `Frame<f32, 3>` through one filter instance filters three channels with a
/// single set of coefficients.
///
/// # Example
///
/// ```rust
/// use tapline_core::{BiquadCascadeDf2t, Frame};
///
/// // y = 0.5·x + 0.5·x[n-1]
/// let mut smooth = BiquadCascadeDf2t::<Frame<f32, 3>, f32, 1>::new([[0.5, 0.5, 0.0, 0.0, 0.0]]);
///
/// let first = smooth.process(Frame::new([2.0, 4.0, -2.0]));
/// assert_eq!(first, Frame::new([1.0, 2.0, -1.0]));
/// let second = smooth.process(Frame::new([2.0, 4.0, -2.0]));
/// assert_eq!(second, Frame::new([2.0, 4.0, -2.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<S, const N: usize>([S; N]);

impl<S, const N: usize> Frame<S, N> {
    /// Wraps an array of channel values.
    pub const fn new(values: [S; N]) -> Self {
        Self(values)
    }

    /// Returns the channel values.
    pub const fn as_array(&self) -> &[S; N] {
        &self.0
    }

    /// Consumes the frame, returning the channel values.
    pub fn into_array(self) -> [S; N] {
        self.0
    }

    /// Number of channels.
    pub const fn channels(&self) -> usize {
        N
    }
}

impl<S: Copy, const N: usize> Frame<S, N> {
    /// A frame with every channel set to `value`.
    pub const fn splat(value: S) -> Self {
        Self([value; N])
    }
}

impl<S: Copy + ZeroValue, const N: usize> ZeroValue for Frame<S, N> {
    #[inline]
    fn zero() -> Self {
        Self([S::zero(); N])
    }
}

impl<S, const N: usize> From<[S; N]> for Frame<S, N> {
    fn from(values: [S; N]) -> Self {
        Self(values)
    }
}

impl<S, const N: usize> Index<usize> for Frame<S, N> {
    type Output = S;

    fn index(&self, channel: usize) -> &S {
        &self.0[channel]
    }
}

impl<S, const N: usize> IndexMut<usize> for Frame<S, N> {
    fn index_mut(&mut self, channel: usize) -> &mut S {
        &mut self.0[channel]
    }
}

impl<S: Copy + Add<Output = S>, const N: usize> Add for Frame<S, N> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs = *lhs + rhs;
        }
        self
    }
}

impl<S: Copy + Sub<Output = S>, const N: usize> Sub for Frame<S, N> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs = *lhs - rhs;
        }
        self
    }
}

impl<S: Copy + Mul<Output = S>, const N: usize> Mul<S> for Frame<S, N> {
    type Output = Self;

    #[inline]
    fn mul(mut self, scale: S) -> Self {
        for value in &mut self.0 {
            *value = *value * scale;
        }
        self
    }
}

impl<S: Copy + Neg<Output = S>, const N: usize> Neg for Frame<S, N> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self {
        for value in &mut self.0 {
            *value = -*value;
        }
        self
    }
}
