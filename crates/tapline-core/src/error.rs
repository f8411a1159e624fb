//! Construction-time errors.
//!
//! The per-sample path never fails. Errors only come from building an
//! instance out of a runtime-sized slice, where the coefficient count cannot
//! be checked by the type system.

use thiserror::Error;

/// Errors from slice-based constructors and setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The slice length does not match the component's compile-time size.
    #[error("{component} expects {expected} coefficients, found {found}")]
    CoefficientCount {
        /// Component being built, e.g. `"biquad cascade"`.
        component: &'static str,
        /// Coefficients required by the const-generic size.
        expected: usize,
        /// Coefficients supplied.
        found: usize,
    },
}

impl FilterError {
    /// Returns `Ok(())` if `found == expected`, otherwise a [`FilterError::CoefficientCount`].
    pub(crate) fn check_count(
        component: &'static str,
        expected: usize,
        found: usize,
    ) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!("{component}: rejected {found} coefficients, expected {expected}");
            Err(Self::CoefficientCount {
                component,
                expected,
                found,
            })
        }
    }
}
