//! Finite impulse response filter over a doubled ring buffer.
//!
//! Every sample is written twice, at `top` and `top + TAPS`, so the most
//! recent `TAPS` inputs are always one contiguous window of the buffer and
//! the inner product runs without wrap-around or modulo.
//!
//! ```text
//! buffer: [ s0 s1 s2 s3 | s0 s1 s2 s3 ]
//!                ^top          (window = buffer[top .. top + TAPS])
//! ```
//!
//! Coefficient `k` weights the input `k` samples ago, so an impulse produces
//! the coefficients in order.

use crate::error::FilterError;
use crate::sample::{Coefficient, Sample};

/// `TAPS`-tap FIR filter.
///
/// Coefficients can be replaced wholesale at any time (adaptive filtering);
/// the delay line is kept.
///
/// # Example
///
/// ```rust
/// use tapline_core::Fir;
///
/// // 3-point moving average
/// let mut fir = Fir::<f32, f32, 3>::new([1.0 / 3.0; 3]);
///
/// fir.process(3.0);
/// fir.process(3.0);
/// let y = fir.process(3.0);
/// assert!((y - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Fir<T, C, const TAPS: usize> {
    coeffs: [C; TAPS],
    state: [[T; TAPS]; 2],
    top: usize,
}

impl<T: Sample<C>, C: Coefficient, const TAPS: usize> Fir<T, C, TAPS> {
    /// Creates a filter with the given taps and a zeroed delay line.
    ///
    /// `TAPS` must be at least 1 (checked at compile time).
    pub fn new(coeffs: [C; TAPS]) -> Self {
        const { assert!(TAPS > 0, "an FIR filter needs at least one tap") };
        Self {
            coeffs,
            state: [[T::zero(); TAPS]; 2],
            top: 0,
        }
    }

    /// Creates a filter from a slice of exactly `TAPS` coefficients.
    ///
    /// # Errors
    ///
    /// [`FilterError::CoefficientCount`] if `coeffs.len() != TAPS`.
    pub fn try_from_slice(coeffs: &[C]) -> Result<Self, FilterError> {
        FilterError::check_count("fir", TAPS, coeffs.len())?;
        Ok(Self::new(core::array::from_fn(|k| coeffs[k])))
    }

    /// Current taps.
    pub fn coefficients(&self) -> &[C; TAPS] {
        &self.coeffs
    }

    /// Replaces every tap. The delay line is untouched.
    pub fn set_coefficients(&mut self, coeffs: [C; TAPS]) {
        self.coeffs = coeffs;
    }

    /// Replaces every tap from a slice of exactly `TAPS` coefficients.
    ///
    /// On error the current taps are kept.
    ///
    /// # Errors
    ///
    /// [`FilterError::CoefficientCount`] if `coeffs.len() != TAPS`.
    pub fn try_set_coefficients(&mut self, coeffs: &[C]) -> Result<(), FilterError> {
        FilterError::check_count("fir", TAPS, coeffs.len())?;
        self.coeffs = core::array::from_fn(|k| coeffs[k]);
        #[cfg(feature = "tracing")]
        tracing::debug!(taps = TAPS, "fir: coefficients replaced");
        Ok(())
    }

    /// Number of taps.
    pub const fn taps(&self) -> usize {
        TAPS
    }

    /// Zeroes the delay line. The write position is kept.
    pub fn clear(&mut self) {
        for sample in self.state.as_flattened_mut() {
            *sample = T::zero();
        }
    }

    /// Pushes one sample and returns the filtered output.
    #[inline]
    pub fn process(&mut self, input: T) -> T {
        let buffer = self.state.as_flattened_mut();
        buffer[self.top] = input;
        buffer[self.top + TAPS] = input;
        self.top = (self.top + 1) % TAPS;

        // Window is oldest..newest; coefficient k pairs with the sample k steps back.
        let window = &buffer[self.top..self.top + TAPS];
        let mut acc = T::zero();
        for (sample, coeff) in window.iter().rev().zip(self.coeffs.iter()) {
            acc = acc + *sample * *coeff;
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_yields_coefficients_in_order() {
        let taps = [0.5_f64, -0.25, 0.125, 2.0];
        let mut fir = Fir::<f64, f64, 4>::new(taps);

        let mut response = [0.0; 8];
        for (n, out) in response.iter_mut().enumerate() {
            *out = fir.process(if n == 0 { 1.0 } else { 0.0 });
        }
        assert_eq!(response, [0.5, -0.25, 0.125, 2.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn single_tap_is_a_gain() {
        let mut fir = Fir::<f32, f32, 1>::new([3.0]);
        assert_eq!(fir.process(2.0), 6.0);
        assert_eq!(fir.process(-1.0), -3.0);
        assert_eq!(fir.top, 0);
    }

    #[test]
    fn write_position_wraps() {
        let mut fir = Fir::<i32, i32, 3>::new([1, 0, 0]);
        for n in 0..7 {
            assert_eq!(fir.process(n), n);
        }
        assert_eq!(fir.top, 7 % 3);
    }

    #[test]
    fn clear_zeroes_buffer_and_keeps_cursor() {
        let mut fir = Fir::<f32, f32, 4>::new([0.25; 4]);
        for _ in 0..5 {
            fir.process(1.0);
        }
        let cursor = fir.top;
        fir.clear();
        assert_eq!(fir.top, cursor);
        assert!(fir.state.as_flattened().iter().all(|&s| s == 0.0));
        assert_eq!(fir.process(1.0), 0.25);
    }

    #[test]
    fn clear_matches_fresh_instance() {
        let taps = [0.1_f64, 0.2, 0.3, 0.4, 0.5];
        let mut used = Fir::<f64, f64, 5>::new(taps);
        for n in 0..13 {
            used.process(n as f64);
        }
        used.clear();
        let mut fresh = Fir::<f64, f64, 5>::new(taps);
        for n in 0..10 {
            let x = libm::sin(n as f64 * 0.7);
            assert_eq!(used.process(x), fresh.process(x));
        }
    }

    #[test]
    fn coefficient_replacement_keeps_history() {
        let mut fir = Fir::<f32, f32, 2>::new([1.0, 0.0]);
        fir.process(4.0);
        fir.set_coefficients([0.0, 1.0]);
        // previous input is still in the delay line
        assert_eq!(fir.process(0.0), 4.0);
        assert_eq!(fir.coefficients(), &[0.0, 1.0]);
    }

    #[test]
    fn slice_setters_check_length() {
        let mut fir = Fir::<f32, f32, 3>::try_from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(fir.taps(), 3);

        let err = fir.try_set_coefficients(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            FilterError::CoefficientCount {
                component: "fir",
                expected: 3,
                found: 2,
            }
        );
        assert_eq!(fir.coefficients(), &[1.0, 2.0, 3.0]);

        fir.try_set_coefficients(&[3.0, 2.0, 1.0]).unwrap();
        assert_eq!(fir.coefficients(), &[3.0, 2.0, 1.0]);
        assert!(Fir::<f32, f32, 3>::try_from_slice(&[]).is_err());
    }
}
