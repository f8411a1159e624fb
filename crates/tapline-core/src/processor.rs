//! Shared per-sample contract.
//!
//! Every filter and the controller consume one sample and produce one. The
//! [`Processor`] trait captures that so they can be chained or stored
//! behind a common bound.
//!
//! ## Design Decisions
//!
//! - **Sample type as an associated type**: each instance processes exactly
//!   one sample type, fixed when the component is instantiated, so a
//!   `Frame<f32, 3>` filter and an `f64` filter are both processors and
//!   calls like `chain.clear()` need no annotations.
//!
//! - **Object-safe**: `dyn Processor<Sample = f32>` works for runtime chains;
//!   static dispatch through [`Chain`] is preferred.
//!
//! - **Per sample only**: no block API. Callers loop.

use crate::biquad::{BiquadCascade, BiquadCascadeDf2t};
use crate::fir::Fir;
use crate::pid::Pid;
use crate::sample::{Coefficient, Sample};

/// A stateful one-in, one-out transformer.
///
/// # Example
///
/// ```rust
/// use tapline_core::Processor;
///
/// struct Gain(f32);
///
/// impl Processor for Gain {
///     type Sample = f32;
///
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.0
///     }
///
///     fn clear(&mut self) {}
/// }
///
/// let mut gain = Gain(0.5);
/// assert_eq!(gain.process(3.0), 1.5);
/// ```
pub trait Processor {
    /// Sample type consumed and produced.
    type Sample;

    /// Consumes one sample and returns one, advancing internal state.
    fn process(&mut self, input: Self::Sample) -> Self::Sample;

    /// Returns internal state to its freshly constructed value.
    ///
    /// Coefficients and gains are kept.
    fn clear(&mut self);
}

/// Extension trait for chaining processors.
pub trait ProcessorExt: Processor + Sized {
    /// Chains `self` with `next`; the output of `self` feeds `next`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tapline_core::{BiquadCascadeDf2t, Fir, Processor, ProcessorExt};
    ///
    /// let smooth = Fir::<f32, f32, 2>::new([0.5, 0.5]);
    /// let gain = BiquadCascadeDf2t::<f32, f32, 1>::new([[4.0, 0.0, 0.0, 0.0, 0.0]]);
    ///
    /// let mut chain = smooth.chain(gain);
    /// assert_eq!(chain.process(1.0), 2.0);
    /// assert_eq!(chain.process(1.0), 4.0);
    /// ```
    fn chain<P: Processor<Sample = Self::Sample>>(self, next: P) -> Chain<Self, P> {
        Chain {
            first: self,
            second: next,
        }
    }
}

impl<P: Processor> ProcessorExt for P {}

/// Two processors in series.
///
/// Created by [`ProcessorExt::chain`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: Processor, B: Processor<Sample = A::Sample>> Processor for Chain<A, B> {
    type Sample = A::Sample;

    #[inline]
    fn process(&mut self, input: A::Sample) -> A::Sample {
        let mid = self.first.process(input);
        self.second.process(mid)
    }

    fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
    }
}

impl<A, B> Chain<A, B> {
    /// The upstream processor.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The upstream processor, mutably.
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    /// The downstream processor.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// The downstream processor, mutably.
    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }

    /// Splits the chain back into its two halves.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<T: Sample<C>, C: Coefficient, const STAGES: usize> Processor
    for BiquadCascade<T, C, STAGES>
{
    type Sample = T;

    #[inline]
    fn process(&mut self, input: T) -> T {
        Self::process(self, input)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T: Sample<C>, C: Coefficient, const STAGES: usize> Processor
    for BiquadCascadeDf2t<T, C, STAGES>
{
    type Sample = T;

    #[inline]
    fn process(&mut self, input: T) -> T {
        Self::process(self, input)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T: Sample<C>, C: Coefficient, const TAPS: usize> Processor for Fir<T, C, TAPS> {
    type Sample = T;

    #[inline]
    fn process(&mut self, input: T) -> T {
        Self::process(self, input)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T: Sample<C>, C: Coefficient> Processor for Pid<T, C> {
    type Sample = T;

    #[inline]
    fn process(&mut self, input: T) -> T {
        Self::process(self, input)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}
