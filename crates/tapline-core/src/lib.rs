//! Tapline Core - allocation-free filter and control primitives
//!
//! This crate provides per-sample signal-processing building blocks for
//! sensor conditioning, control loops and audio, designed for real-time use
//! with zero allocation and constant time per sample.
//!
//! # Core Abstractions
//!
//! ## Filters and Control
//!
//! - [`BiquadCascade`] - Cascaded second-order sections, Direct Form I
//! - [`BiquadCascadeDf2t`] - Cascaded second-order sections, Transposed Direct Form II
//! - [`Fir`] - Tapped delay line filter with replaceable coefficients
//! - [`Pid`] - PID controller as a single discrete recurrence
//!
//! All four implement [`Processor`]; [`ProcessorExt::chain`] builds a
//! zero-cost [`Chain`].
//!
//! ## Sample Types
//!
//! Every component is generic over the sample type `T` and the coefficient
//! type `C`. Scalars work out of the box; [`Frame`] filters `N` channels in
//! lockstep; any type with `+`, `-`, `* C` and a [`ZeroValue`] works too.
//!
//! ## Fast Math
//!
//! - [`sin_cos`] - Sine and cosine from one interpolated table lookup
//! - [`fast_atan`], [`fast_atan2`] - Rational arctangent approximations
//! - [`sign`], [`abs`], [`sqrt`], [`hypot`] - Generic helpers with fixed edge-case policies
//!
//! The sine table behind [`sin_cos`] is synthesized by the compiler; see [`lut`].
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded targets.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tapline-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `std` (default) | `std::error::Error` for [`FilterError`] |
//! | `tracing` | `debug!` events from construction-time operations |
//! | `serde` | `Serialize`/`Deserialize` for [`SectionCoefficients`] |
//!
//! # Example
//!
//! ```rust
//! use tapline_core::{BiquadCascadeDf2t, Frame, Pid, Processor, ProcessorExt};
//!
//! // Smooth a 3-axis reading, then regulate it toward zero.
//! let smooth = BiquadCascadeDf2t::<Frame<f32, 3>, f32, 1>::new([[0.25, 0.25, 0.0, 0.5, 0.0]]);
//! let regulate = Pid::<Frame<f32, 3>, f32>::new(0.8, 0.05, 0.0);
//! let mut pipeline = smooth.chain(regulate);
//!
//! for reading in [[0.1, -0.2, 0.3], [0.12, -0.18, 0.31]] {
//!     let command = pipeline.process(Frame::new(reading));
//!     assert_eq!(command.channels(), 3);
//! }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations, no errors on the per-sample path
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Compile-time sizing**: Stage and tap counts are const generics
//! - **Zero-cost abstractions**: Static dispatch chains optimize away

#![cfg_attr(not(feature = "std"), no_std)]

pub mod biquad;
pub mod consts;
pub mod error;
pub mod fast_math;
pub mod fir;
pub mod hint;
pub mod lut;
pub mod pid;
pub mod processor;
pub mod sample;
pub mod zero;

// Re-export main types at crate root
pub use biquad::{BiquadCascade, BiquadCascadeDf2t, SectionCoefficients};
pub use consts::MathConst;
pub use error::FilterError;
pub use fast_math::{
    Abs, FastTrig, Sign, Sqrt, abs, fast_atan, fast_atan2, hypot, sign, sin_cos, sqrt,
};
pub use fir::Fir;
pub use lut::{SIN_TABLE_LEN, SIN_TABLE_SIZE, TableScalar};
pub use pid::Pid;
pub use processor::{Chain, Processor, ProcessorExt};
pub use sample::{Coefficient, Frame, Sample};
pub use zero::ZeroValue;
