//! Design files for tapline filters and controllers.
//!
//! A design set is a TOML document holding named biquad cascades, FIR
//! filters and PID controllers. This crate loads, validates and saves those
//! documents and builds ready-to-run `tapline-core` instances from them.
//!
//! # Features
//!
//! - **Design sets**: Load and save named designs from TOML files
//! - **Validation**: Section shape, finite values, unique names per kind
//! - **Builders**: Turn a design into a sized `tapline-core` instance
//!
//! # Example
//!
//! ```rust,no_run
//! use tapline_config::{BiquadDesign, BiquadForm, DesignSet, PidDesign};
//!
//! // Load a design set from file
//! let set = DesignSet::load("conditioning.toml").unwrap();
//! let mut lowpass = set.biquad("lowpass").unwrap().build_df2t::<f32, 2>().unwrap();
//! let y = lowpass.process(0.5);
//!
//! // Create a design set programmatically
//! let set = DesignSet::new("loop")
//!     .with_description("Heater control")
//!     .with_biquad(
//!         BiquadDesign::new("sensor")
//!             .with_form(BiquadForm::Df1)
//!             .with_section([0.2, 0.4, 0.2, 0.6, -0.2]),
//!     )
//!     .with_pid(PidDesign::new("heater", 1.2, 0.05, 0.0));
//!
//! set.save("loop.toml").unwrap();
//! # let _ = y;
//! ```

mod design;
mod error;

/// Design validation.
pub mod validation;

pub use design::{
    BiquadDesign, BiquadForm, DesignScalar, DesignSet, FirDesign, PidDesign, SectionSpec,
};
pub use error::ConfigError;
pub use validation::{
    ValidationError, ValidationResult, validate_biquad, validate_design_set, validate_fir,
    validate_pid,
};
