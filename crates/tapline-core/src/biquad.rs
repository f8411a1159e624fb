//! Cascaded biquad (second-order section) filters.
//!
//! Two realizations of the same transfer function:
//!
//! - [`BiquadCascade`] - Direct Form I. Four delay cells per section, with
//!   adjacent sections sharing cells (section `k`'s output history is section
//!   `k + 1`'s input history).
//! - [`BiquadCascadeDf2t`] - Transposed Direct Form II. Two delay cells per
//!   section and a smaller intermediate dynamic range; the better choice for
//!   limited-precision sample types.
//!
//! Both feed the output of each section into the next and produce one output
//! sample per input sample.
//!
//! # Coefficient layout
//!
//! Each section is `[b0, b1, b2, a1, a2]`, normalized so `a0 = 1`, with the
//! **feedback coefficients pre-negated**:
//!
//! ```text
//! y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
//!                + a1*y[n-1] + a2*y[n-2]
//! ```
//!
//! This is the CMSIS-DSP convention. Coefficients from a design tool that
//! uses `- a1*y[n-1] - a2*y[n-2]` must have `a1` and `a2` negated.
//!
//! Coefficient design (cutoff, Q, ...) is out of scope; coefficients come
//! from the caller.

use crate::error::FilterError;
use crate::sample::{Coefficient, Sample};

/// Coefficients of one second-order section, feedback terms pre-negated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionCoefficients<C> {
    /// Feedforward `x[n]`
    pub b0: C,
    /// Feedforward `x[n-1]`
    pub b1: C,
    /// Feedforward `x[n-2]`
    pub b2: C,
    /// Feedback `y[n-1]` (added)
    pub a1: C,
    /// Feedback `y[n-2]` (added)
    pub a2: C,
}

impl<C: Copy> SectionCoefficients<C> {
    /// Creates a section from its five coefficients.
    pub const fn new(b0: C, b1: C, b2: C, a1: C, a2: C) -> Self {
        Self { b0, b1, b2, a1, a2 }
    }

    /// Creates a section from `[b0, b1, b2, a1, a2]`.
    pub const fn from_array([b0, b1, b2, a1, a2]: [C; 5]) -> Self {
        Self { b0, b1, b2, a1, a2 }
    }

    /// Returns `[b0, b1, b2, a1, a2]`.
    pub const fn to_array(self) -> [C; 5] {
        [self.b0, self.b1, self.b2, self.a1, self.a2]
    }
}

impl<C: Copy> From<[C; 5]> for SectionCoefficients<C> {
    fn from(coeffs: [C; 5]) -> Self {
        Self::from_array(coeffs)
    }
}

/// Unpacks a flat `[b0, b1, b2, a1, a2, b0, ...]` slice into sections.
fn sections_from_slice<C: Copy, const STAGES: usize>(
    component: &'static str,
    coeffs: &[C],
) -> Result<[[C; 5]; STAGES], FilterError> {
    FilterError::check_count(component, 5 * STAGES, coeffs.len())?;
    Ok(core::array::from_fn(|stage| {
        core::array::from_fn(|k| coeffs[5 * stage + k])
    }))
}

/// Cascade of `STAGES` biquad sections in Direct Form I.
///
/// `T` is the sample type (scalar, [`Frame`](crate::Frame), or any type
/// implementing [`Sample<C>`]); `C` is the coefficient type.
///
/// # Structure
///
/// ```text
///        ┌──────── stage 0 ────────┐   ┌──────── stage 1 ────────┐
/// x ──►  b0·x + b1·x1 + b2·x2        ──► ...                        ──► y
///        + a1·y1 + a2·y2               (stage 0's y1, y2 are stage 1's x1, x2)
/// ```
///
/// Coefficients are fixed at construction.
///
/// # Example
///
/// ```rust
/// use tapline_core::BiquadCascade;
///
/// // Two sections: a one-sample delay, then a gain of 2.
/// let mut filter = BiquadCascade::<f32, f32, 2>::new([
///     [0.0, 1.0, 0.0, 0.0, 0.0],
///     [2.0, 0.0, 0.0, 0.0, 0.0],
/// ]);
///
/// assert_eq!(filter.process(1.0), 0.0);
/// assert_eq!(filter.process(0.0), 2.0);
/// assert_eq!(filter.process(0.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct BiquadCascade<T, C, const STAGES: usize> {
    coeffs: [[C; 5]; STAGES],
    /// x[n-1], x[n-2] of each stage
    inputs: [[T; 2]; STAGES],
    /// y[n-1], y[n-2] of the final stage
    outputs: [T; 2],
}

impl<T: Sample<C>, C: Coefficient, const STAGES: usize> BiquadCascade<T, C, STAGES> {
    /// Creates a cascade from `[b0, b1, b2, a1, a2]` per section, with zeroed state.
    ///
    /// `STAGES` must be at least 1 (checked at compile time).
    pub fn new(coeffs: [[C; 5]; STAGES]) -> Self {
        const { assert!(STAGES > 0, "a biquad cascade needs at least one section") };
        Self {
            coeffs,
            inputs: [[T::zero(); 2]; STAGES],
            outputs: [T::zero(); 2],
        }
    }

    /// Creates a cascade from named section coefficients.
    pub fn from_sections(sections: [SectionCoefficients<C>; STAGES]) -> Self {
        Self::new(sections.map(SectionCoefficients::to_array))
    }

    /// Creates a cascade from a flat slice of `5 * STAGES` coefficients.
    ///
    /// # Errors
    ///
    /// [`FilterError::CoefficientCount`] if the slice length is not `5 * STAGES`.
    pub fn try_from_slice(coeffs: &[C]) -> Result<Self, FilterError> {
        sections_from_slice::<C, STAGES>("biquad cascade", coeffs).map(Self::new)
    }

    /// Section coefficients as given at construction.
    pub fn coefficients(&self) -> &[[C; 5]; STAGES] {
        &self.coeffs
    }

    /// Number of sections.
    pub const fn stages(&self) -> usize {
        STAGES
    }

    /// Zeroes every delay cell. Coefficients are unchanged.
    pub fn clear(&mut self) {
        for cells in &mut self.inputs {
            *cells = [T::zero(); 2];
        }
        self.outputs = [T::zero(); 2];
    }

    /// Runs one sample through every section.
    #[inline]
    pub fn process(&mut self, input: T) -> T {
        let mut x = input;
        for stage in 0..STAGES {
            let [b0, b1, b2, a1, a2] = self.coeffs[stage];
            let [x1, x2] = self.inputs[stage];
            let [y1, y2] = if stage + 1 < STAGES {
                self.inputs[stage + 1]
            } else {
                self.outputs
            };

            // y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] + a1*y[n-1] + a2*y[n-2]
            let y = x * b0 + x1 * b1 + x2 * b2 + y1 * a1 + y2 * a2;

            self.inputs[stage] = [x, x1];
            x = y;
        }
        self.outputs = [x, self.outputs[0]];
        x
    }
}

/// Cascade of `STAGES` biquad sections in Transposed Direct Form II.
///
/// ```text
///  y[n] = b0*x[n] + d1[n-1]
/// d1[n] = b1*x[n] + a1*y[n] + d2[n-1]
/// d2[n] = b2*x[n] + a2*y[n]
/// ```
///
/// Same coefficient layout and output as [`BiquadCascade`] (to within
/// rounding), with half the state.
///
/// # Example
///
/// ```rust
/// use tapline_core::BiquadCascadeDf2t;
///
/// // Leaky integrator: y[n] = x[n] + 0.5*y[n-1]
/// let mut filter = BiquadCascadeDf2t::<f64, f64, 1>::new([[1.0, 0.0, 0.0, 0.5, 0.0]]);
///
/// assert_eq!(filter.process(1.0), 1.0);
/// assert_eq!(filter.process(0.0), 0.5);
/// assert_eq!(filter.process(0.0), 0.25);
/// ```
#[derive(Debug, Clone)]
pub struct BiquadCascadeDf2t<T, C, const STAGES: usize> {
    coeffs: [[C; 5]; STAGES],
    /// d1, d2 of each stage
    state: [[T; 2]; STAGES],
}

impl<T: Sample<C>, C: Coefficient, const STAGES: usize> BiquadCascadeDf2t<T, C, STAGES> {
    /// Creates a cascade from `[b0, b1, b2, a1, a2]` per section, with zeroed state.
    ///
    /// `STAGES` must be at least 1 (checked at compile time).
    pub fn new(coeffs: [[C; 5]; STAGES]) -> Self {
        const { assert!(STAGES > 0, "a biquad cascade needs at least one section") };
        Self {
            coeffs,
            state: [[T::zero(); 2]; STAGES],
        }
    }

    /// Creates a cascade from named section coefficients.
    pub fn from_sections(sections: [SectionCoefficients<C>; STAGES]) -> Self {
        Self::new(sections.map(SectionCoefficients::to_array))
    }

    /// Creates a cascade from a flat slice of `5 * STAGES` coefficients.
    ///
    /// # Errors
    ///
    /// [`FilterError::CoefficientCount`] if the slice length is not `5 * STAGES`.
    pub fn try_from_slice(coeffs: &[C]) -> Result<Self, FilterError> {
        sections_from_slice::<C, STAGES>("biquad cascade (df2t)", coeffs).map(Self::new)
    }

    /// Section coefficients as given at construction.
    pub fn coefficients(&self) -> &[[C; 5]; STAGES] {
        &self.coeffs
    }

    /// Number of sections.
    pub const fn stages(&self) -> usize {
        STAGES
    }

    /// Zeroes every delay cell. Coefficients are unchanged.
    pub fn clear(&mut self) {
        for cells in &mut self.state {
            *cells = [T::zero(); 2];
        }
    }

    /// Runs one sample through every section.
    #[inline]
    pub fn process(&mut self, input: T) -> T {
        let mut x = input;
        for (coeffs, cells) in self.coeffs.iter().zip(self.state.iter_mut()) {
            let [b0, b1, b2, a1, a2] = *coeffs;
            let [d1, d2] = *cells;

            let y = x * b0 + d1;
            *cells = [x * b1 + y * a1 + d2, x * b2 + y * a2];

            x = y;
        }
        x
    }
}
