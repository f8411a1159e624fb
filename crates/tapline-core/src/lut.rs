//! Full-period sine lookup table, synthesized at compile time.
//!
//! The table holds `N + 1` entries with `values[i] ≈ sin(2π·i/N)` and
//! `values[0] == values[N] == 0`. Cosine reads the same table a quarter
//! period ahead: `cos(2π·i/N) == values[(i + N/4) % N]`.
//!
//! # Synthesis
//!
//! Everything runs in `const fn` during compilation; at runtime the tables
//! are plain `static` arrays.
//!
//! 1. **Seed.** `sin(dx)` and `cos(dx)` for `dx = 2π/N` from short
//!    Maclaurin polynomials in Horner form (the step is small, so 5 and 6
//!    terms are exact to `f64` precision at `N = 512`).
//! 2. **Doubling.** The first eighth period `[0, N/8]` is grown from the seed
//!    with the angle-addition identities
//!
//!    ```text
//!    sin(a + b) = sin a·cos b + cos a·sin b
//!    cos(a + b) = cos a·cos b − sin a·sin b
//!    ```
//!
//!    following the halving chain `I, ⌈I/2⌉, …, 1` of `I = N/8`: a prefix
//!    covering `[0, h]` extends itself to `[0, 2h]` (or `[0, 2h − 1]` for odd
//!    targets) using `a = h·dx`, `b = k·dx`.
//! 3. **Folding.** The eighth period becomes a full period through the eight
//!    octant symmetries of sine, followed by a trailing zero:
//!
//!    | Octant | Source |
//!    |--------|--------|
//!    | 0 | `sin[k]` |
//!    | 1 | `cos[I − k]` |
//!    | 2 | `cos[k]` |
//!    | 3 | `sin[I − k]` |
//!    | 4–7 | octants 0–3, negated |
//!
//! 4. **Narrowing.** All of the above is `f64`; the `f32` table is rounded
//!    from it once, at the end.
//!
//! The quarter-period points come straight from `cos[0] = 1` and
//! `sin[0] = 0`, so `values[0]`, `values[N/4]`, `values[N/2]`,
//! `values[3N/4]` and `values[N]` are exact.

use crate::consts::MathConst;

/// Number of table intervals per period.
///
/// Must stay a multiple of 8 for the octant folding. Resizing changes the
/// interpolation error of [`sin_cos`](crate::fast_math::sin_cos); re-check the
/// accuracy tests when doing so.
pub const SIN_TABLE_SIZE: usize = 512;

/// Number of table entries (`SIN_TABLE_SIZE + 1`, the extra entry closes the period).
pub const SIN_TABLE_LEN: usize = SIN_TABLE_SIZE + 1;

/// Maclaurin terms used for the `sin(dx)` seed.
const SIN_SEED_TERMS: u32 = 5;

/// Maclaurin terms used for the `cos(dx)` seed.
const COS_SEED_TERMS: u32 = 6;

/// `x − x³/3! + x⁵/5! − …` with `terms` terms, nested as
/// `x − x²/(2·3)·(x − x²/(4·5)·(…))`.
const fn maclaurin_sin(x: f64, terms: u32) -> f64 {
    let x2 = x * x;
    let mut acc = x;
    let mut m = terms - 1;
    while m >= 1 {
        let mf = m as f64;
        acc = x - x2 / (2.0 * mf * (2.0 * mf + 1.0)) * acc;
        m -= 1;
    }
    acc
}

/// `1 − x²/2! + x⁴/4! − …` with `terms` terms, nested like [`maclaurin_sin`].
const fn maclaurin_cos(x: f64, terms: u32) -> f64 {
    let x2 = x * x;
    let mut acc = 1.0;
    let mut m = terms - 1;
    while m >= 1 {
        let mf = m as f64;
        acc = 1.0 - x2 / (2.0 * mf * (2.0 * mf - 1.0)) * acc;
        m -= 1;
    }
    acc
}

/// Synthesizes a full sine period of `LEN - 1` intervals in `f64`.
///
/// `LEN - 1` must be a positive multiple of 8; anything else fails
/// compilation when used in a `const`/`static` initializer.
///
/// # Example
///
/// ```rust
/// use tapline_core::lut::synthesize_sine;
///
/// const COARSE: [f64; 17] = synthesize_sine::<17>();
///
/// assert_eq!(COARSE[0], 0.0);
/// assert_eq!(COARSE[4], 1.0);
/// assert_eq!(COARSE[12], -1.0);
/// assert!((COARSE[2] - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
pub const fn synthesize_sine<const LEN: usize>() -> [f64; LEN] {
    assert!(
        LEN > 1 && (LEN - 1) % 8 == 0,
        "sine table size must be a positive multiple of 8"
    );
    let size = LEN - 1;
    let eighth = size / 8;
    let dx = <f64 as MathConst>::TWO_PI / size as f64;

    // Eighth-period scratch, valid on [0, eighth].
    let mut sin = [0.0_f64; LEN];
    let mut cos = [0.0_f64; LEN];
    cos[0] = 1.0;
    sin[1] = maclaurin_sin(dx, SIN_SEED_TERMS);
    cos[1] = maclaurin_cos(dx, COS_SEED_TERMS);

    // Halving chain, largest first; 64 levels covers any usize.
    let mut chain = [0_usize; 64];
    let mut depth = 0;
    let mut target = eighth;
    while target > 1 {
        chain[depth] = target;
        depth += 1;
        target = target.div_ceil(2);
    }

    // Grow [0, half] into [0, target] in place; reads stay at or below `half`.
    while depth > 0 {
        depth -= 1;
        let target = chain[depth];
        let half = target.div_ceil(2);
        let mut k = 0;
        while k < target / 2 {
            sin[half + 1 + k] = sin[half] * cos[1 + k] + cos[half] * sin[1 + k];
            cos[half + 1 + k] = cos[half] * cos[1 + k] - sin[half] * sin[1 + k];
            k += 1;
        }
    }

    let mut values = [0.0_f64; LEN];
    let mut k = 0;
    while k < eighth {
        values[k] = sin[k];
        values[eighth + k] = cos[eighth - k];
        values[2 * eighth + k] = cos[k];
        values[3 * eighth + k] = sin[eighth - k];
        values[4 * eighth + k] = -sin[k];
        values[5 * eighth + k] = -cos[eighth - k];
        values[6 * eighth + k] = -cos[k];
        values[7 * eighth + k] = -sin[eighth - k];
        k += 1;
    }
    values[size] = 0.0;
    values
}

/// Rounds a synthesized `f64` table to `f32`, entry by entry.
pub const fn narrow_to_f32<const LEN: usize>(wide: [f64; LEN]) -> [f32; LEN] {
    let mut narrow = [0.0_f32; LEN];
    let mut i = 0;
    while i < LEN {
        narrow[i] = wide[i] as f32;
        i += 1;
    }
    narrow
}

const SINE_F64: [f64; SIN_TABLE_LEN] = synthesize_sine::<SIN_TABLE_LEN>();

/// One sine period at `f64` precision.
pub static SIN_TABLE_F64: [f64; SIN_TABLE_LEN] = SINE_F64;

/// One sine period at `f32` precision, narrowed from [`SIN_TABLE_F64`]'s values.
pub static SIN_TABLE_F32: [f32; SIN_TABLE_LEN] = narrow_to_f32(SINE_F64);

/// Element types that have a sine table.
pub trait TableScalar: Copy + 'static {
    /// The process-wide sine table for this element type.
    fn sin_table() -> &'static [Self; SIN_TABLE_LEN];
}

impl TableScalar for f32 {
    #[inline]
    fn sin_table() -> &'static [f32; SIN_TABLE_LEN] {
        &SIN_TABLE_F32
    }
}

impl TableScalar for f64 {
    #[inline]
    fn sin_table() -> &'static [f64; SIN_TABLE_LEN] {
        &SIN_TABLE_F64
    }
}

/// Table index of the cosine matching sine index `index` (quarter-period shift).
#[inline]
pub const fn cos_index(index: usize) -> usize {
    (index + SIN_TABLE_SIZE / 4) % SIN_TABLE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(i: usize) -> f64 {
        libm::sin(core::f64::consts::TAU * i as f64 / SIN_TABLE_SIZE as f64)
    }

    #[test]
    fn f64_table_matches_libm() {
        let mut max_err: f64 = 0.0;
        for i in 0..SIN_TABLE_LEN {
            max_err = max_err.max((SIN_TABLE_F64[i] - reference(i)).abs());
        }
        // Rounding accumulated along the doubling chain, plus the reference's own
        // angle rounding, stays well below 1e-14.
        assert!(max_err < 1e-14, "max f64 table error {max_err:e}");
    }

    #[test]
    fn f32_table_matches_libm() {
        for i in 0..SIN_TABLE_LEN {
            let expected = reference(i) as f32;
            let err = (SIN_TABLE_F32[i] - expected).abs();
            assert!(
                err <= 2.0 * f32::EPSILON,
                "entry {i}: table {} vs {expected}",
                SIN_TABLE_F32[i]
            );
        }
    }

    #[test]
    fn breakpoints_are_exact() {
        let n = SIN_TABLE_SIZE;
        assert_eq!(SIN_TABLE_F64[0], 0.0);
        assert_eq!(SIN_TABLE_F64[n / 4], 1.0);
        assert_eq!(SIN_TABLE_F64[n / 2], 0.0);
        assert_eq!(SIN_TABLE_F64[3 * n / 4], -1.0);
        assert_eq!(SIN_TABLE_F64[n], 0.0);
        assert_eq!(SIN_TABLE_F32[0], 0.0);
        assert_eq!(SIN_TABLE_F32[n / 4], 1.0);
        assert_eq!(SIN_TABLE_F32[3 * n / 4], -1.0);
    }

    #[test]
    fn second_half_is_negated_first_half() {
        let half = SIN_TABLE_SIZE / 2;
        for i in 0..half {
            assert_eq!(SIN_TABLE_F64[i + half], -SIN_TABLE_F64[i], "index {i}");
            assert_eq!(SIN_TABLE_F32[i + half], -SIN_TABLE_F32[i], "index {i}");
        }
    }

    #[test]
    fn quarter_shift_is_cosine() {
        for i in 0..SIN_TABLE_SIZE {
            let expected = libm::cos(core::f64::consts::TAU * i as f64 / SIN_TABLE_SIZE as f64);
            assert!((SIN_TABLE_F64[cos_index(i)] - expected).abs() < 1e-14);
        }
    }

    #[test]
    fn smallest_table_folds_one_step() {
        const TINY: [f64; 9] = synthesize_sine::<9>();
        let s = core::f64::consts::FRAC_1_SQRT_2;
        let expected = [0.0, s, 1.0, s, 0.0, -s, -1.0, -s, 0.0];
        for (got, want) in TINY.iter().zip(expected) {
            assert!((got - want).abs() < 1e-8, "{got} vs {want}");
        }
    }

    #[test]
    fn odd_eighth_lengths_are_filled() {
        // eighth = 3 and 5 exercise the odd branch of the halving chain
        const T24: [f64; 25] = synthesize_sine::<25>();
        const T40: [f64; 41] = synthesize_sine::<41>();
        for (i, v) in T24.iter().enumerate() {
            let expected = libm::sin(core::f64::consts::TAU * i as f64 / 24.0);
            assert!((v - expected).abs() < 1e-7, "T24[{i}] = {v}, expected {expected}");
        }
        for (i, v) in T40.iter().enumerate() {
            let expected = libm::sin(core::f64::consts::TAU * i as f64 / 40.0);
            assert!((v - expected).abs() < 1e-8, "T40[{i}] = {v}, expected {expected}");
        }
    }

    #[test]
    fn maclaurin_seed_is_accurate_for_small_angles() {
        let dx = core::f64::consts::TAU / 512.0;
        assert!((maclaurin_sin(dx, 5) - libm::sin(dx)).abs() < 1e-16);
        assert!((maclaurin_cos(dx, 6) - libm::cos(dx)).abs() <= 2.0 * f64::EPSILON);
    }
}
