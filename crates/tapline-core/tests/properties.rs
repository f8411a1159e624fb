//! Property-based tests for tapline-core primitives.
//!
//! Tests structural equivalences (DF1 vs DF2T), impulse responses, reset
//! behavior and the fast-math edge-case policies using proptest for
//! randomized input generation.

use proptest::prelude::*;
use tapline_core::{
    BiquadCascade, BiquadCascadeDf2t, Fir, Pid, Processor, fast_atan, sign, sin_cos, sqrt,
};

/// A stable section from pole radius/angle and arbitrary zeros.
///
/// Poles at `r·e^{±jθ}` give `a1 = 2r·cos θ`, `a2 = -r²` in the
/// pre-negated convention.
fn stable_section(r: f64, theta: f64, b: [f64; 3]) -> [f64; 5] {
    [b[0], b[1], b[2], 2.0 * r * libm::cos(theta), -r * r]
}

fn section_strategy() -> impl Strategy<Value = [f64; 5]> {
    (
        0.0f64..0.9,
        0.0f64..core::f64::consts::PI,
        prop::array::uniform3(-1.0f64..=1.0),
    )
        .prop_map(|(r, theta, b)| stable_section(r, theta, b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Direct Form I and Transposed Direct Form II agree within rounding for
    /// any stable cascade and bounded input.
    #[test]
    fn df1_matches_df2t(
        s0 in section_strategy(),
        s1 in section_strategy(),
        input in prop::collection::vec(-1.0f64..=1.0, 1..256),
    ) {
        let mut df1 = BiquadCascade::<f64, f64, 2>::new([s0, s1]);
        let mut df2t = BiquadCascadeDf2t::<f64, f64, 2>::new([s0, s1]);

        let mut peak: f64 = 0.0;
        for (n, &x) in input.iter().enumerate() {
            let (a, b) = (df1.process(x), df2t.process(x));
            peak = peak.max(a.abs());
            prop_assert!(
                (a - b).abs() <= 1e-8 * (1.0 + peak),
                "sample {}: df1 {} vs df2t {}", n, a, b
            );
        }
    }

    /// An impulse through an N-tap FIR reproduces the taps, then silence.
    #[test]
    fn fir_impulse_response_is_coefficients(
        taps in prop::array::uniform8(-10.0f64..10.0),
        tail in 1usize..16,
    ) {
        let mut fir = Fir::<f64, f64, 8>::new(taps);
        prop_assert_eq!(fir.process(1.0), taps[0]);
        for &tap in &taps[1..] {
            prop_assert_eq!(fir.process(0.0), tap);
        }
        for _ in 0..tail {
            prop_assert_eq!(fir.process(0.0), 0.0);
        }
    }

    /// The same holds from any write position, after clearing.
    #[test]
    fn fir_impulse_after_clear_from_any_cursor(
        taps in prop::array::uniform5(-1.0f64..1.0),
        warmup in prop::collection::vec(-1.0f64..1.0, 0..20),
    ) {
        let mut fir = Fir::<f64, f64, 5>::new(taps);
        for &x in &warmup {
            fir.process(x);
        }
        fir.clear();
        let response: Vec<f64> = (0..5).map(|n| fir.process(if n == 0 { 1.0 } else { 0.0 })).collect();
        prop_assert_eq!(response, taps.to_vec());
    }

    /// PID with only a unit proportional gain passes its input through.
    #[test]
    fn pid_proportional_identity(input in prop::collection::vec(-1000i64..1000, 1..128)) {
        // Integer samples keep the identity exact.
        let mut pid = Pid::<i64, i64>::new(1, 0, 0);
        for &x in &input {
            prop_assert_eq!(pid.process(x), x);
        }
    }

    /// `set_output` followed by `output` returns the value exactly.
    #[test]
    fn pid_output_round_trip(
        gains in prop::array::uniform3(-5.0f32..5.0),
        history in prop::collection::vec(-1.0f32..1.0, 0..10),
        value in prop::num::f32::NORMAL,
    ) {
        let mut pid = Pid::<f32, f32>::from_gains(gains);
        for &x in &history {
            pid.process(x);
        }
        pid.set_output(value);
        prop_assert_eq!(pid.output(), value);
        prop_assert_eq!(pid.weights(), Pid::<f32, f32>::from_gains(gains).weights());
    }

    /// After `clear`, every component matches a fresh instance.
    #[test]
    fn clear_equals_fresh(
        s0 in section_strategy(),
        taps in prop::array::uniform4(-1.0f64..1.0),
        gains in prop::array::uniform3(-2.0f64..2.0),
        history in prop::collection::vec(-1.0f64..1.0, 1..64),
        probe in prop::collection::vec(-1.0f64..1.0, 1..16),
    ) {
        fn check<P: Processor<Sample = f64>>(mut used: P, mut fresh: P, history: &[f64], probe: &[f64]) -> Result<(), TestCaseError> {
            for &x in history {
                used.process(x);
            }
            used.clear();
            for &x in probe {
                prop_assert_eq!(used.process(x), fresh.process(x));
            }
            Ok(())
        }

        check(BiquadCascade::<f64, f64, 1>::new([s0]), BiquadCascade::new([s0]), &history, &probe)?;
        check(BiquadCascadeDf2t::<f64, f64, 1>::new([s0]), BiquadCascadeDf2t::new([s0]), &history, &probe)?;
        // FIR keeps its cursor, but a zeroed buffer reads the same from any position.
        check(Fir::<f64, f64, 4>::new(taps), Fir::new(taps), &history, &probe)?;
        check(Pid::<f64, f64>::from_gains(gains), Pid::from_gains(gains), &history, &probe)?;
    }

    /// `sqrt` never produces NaN, for any bit pattern.
    #[test]
    fn sqrt_never_nan(bits in any::<u64>()) {
        let x = f64::from_bits(bits);
        let y = sqrt(x);
        prop_assert!(!y.is_nan(), "sqrt({:e}) = NaN", x);
        if !(x >= 0.0) {
            prop_assert_eq!(y, 0.0);
        }
    }

    /// `sin_cos` stays within the interpolation bound of libm.
    #[test]
    fn sin_cos_error_bound(theta in -1000.0f64..1000.0) {
        let (s, c) = sin_cos(theta);
        prop_assert!((s - libm::sin(theta)).abs() < 3e-5, "sin({}) = {}", theta, s);
        prop_assert!((c - libm::cos(theta)).abs() < 3e-5, "cos({}) = {}", theta, c);
    }

    /// `sin_cos` sine is odd and cosine is even.
    #[test]
    fn sin_cos_symmetry(theta in -100.0f32..100.0) {
        let (s, c) = sin_cos(theta);
        let (sn, cn) = sin_cos(-theta);
        prop_assert_eq!(sn, -s);
        prop_assert_eq!(cn, c);
    }

    /// `fast_atan` is odd and bounded by pi/2.
    #[test]
    fn fast_atan_is_odd_and_bounded(x in -1.0e6f64..1.0e6) {
        let y = fast_atan(x);
        prop_assert_eq!(fast_atan(-x), -y);
        prop_assert!(y.abs() <= core::f64::consts::FRAC_PI_2 + 1e-12);
        prop_assert!((y - libm::atan(x)).abs() < 0.0064);
    }

    /// `sign` agrees with the comparison sign for non-zero finite values.
    #[test]
    fn sign_matches_comparison(x in prop::num::f64::NORMAL) {
        let expected = if x > 0.0 { 1 } else { -1 };
        prop_assert_eq!(sign(x), expected);
    }
}
