//! Design validation.
//!
//! Checks the shape of designs before any instance is built: names present
//! and unique per kind, five finite coefficients per biquad section, at
//! least one section or tap, finite gains. Sizes against a particular
//! const-generic instance are checked later, by the builders.
//!
//! # Example
//!
//! ```rust
//! use tapline_config::{DesignSet, FirDesign, ValidationError, validate_design_set};
//!
//! let set = DesignSet::new("demo").with_fir(FirDesign::new("empty", Vec::new()));
//!
//! assert_eq!(
//!     validate_design_set(&set),
//!     Err(ValidationError::NoTaps { design: "empty".to_string() })
//! );
//! ```

use std::collections::HashSet;
use thiserror::Error;

use crate::design::{BiquadDesign, DesignSet, FirDesign, PidDesign};

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A design has an empty name.
    #[error("{kind} design has an empty name")]
    EmptyName {
        /// Design kind (`"biquad"`, `"fir"` or `"pid"`).
        kind: &'static str,
    },

    /// Two designs of the same kind share a name.
    #[error("duplicate {kind} design name: {name}")]
    DuplicateName {
        /// Design kind.
        kind: &'static str,
        /// The repeated name.
        name: String,
    },

    /// A biquad design has no sections.
    #[error("biquad design '{design}' has no sections")]
    NoSections {
        /// Name of the design.
        design: String,
    },

    /// A biquad section does not have exactly five coefficients.
    #[error("section {section} of biquad design '{design}' has {found} coefficients, expected 5")]
    SectionLength {
        /// Name of the design.
        design: String,
        /// Zero-based section index.
        section: usize,
        /// Number of coefficients given.
        found: usize,
    },

    /// An FIR design has no taps.
    #[error("fir design '{design}' has no taps")]
    NoTaps {
        /// Name of the design.
        design: String,
    },

    /// A coefficient or gain is NaN or infinite.
    #[error("{field} of design '{design}' is not finite: {value}")]
    NonFinite {
        /// Name of the design.
        design: String,
        /// Location of the value, e.g. `sections[1][3]` or `kd`.
        field: String,
        /// The offending value.
        value: f64,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn finish(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

fn check_finite(
    errors: &mut Vec<ValidationError>,
    design: &str,
    field: impl FnOnce() -> String,
    value: f64,
) {
    if !value.is_finite() {
        errors.push(ValidationError::NonFinite {
            design: design.to_string(),
            field: field(),
            value,
        });
    }
}

fn check_name(errors: &mut Vec<ValidationError>, kind: &'static str, name: &str) {
    if name.trim().is_empty() {
        errors.push(ValidationError::EmptyName { kind });
    }
}

fn biquad_errors(design: &BiquadDesign, errors: &mut Vec<ValidationError>) {
    check_name(errors, "biquad", &design.name);
    if design.sections.is_empty() {
        errors.push(ValidationError::NoSections {
            design: design.name.clone(),
        });
    }
    for (section, spec) in design.sections.iter().enumerate() {
        let values = spec.values();
        if values.len() != 5 {
            errors.push(ValidationError::SectionLength {
                design: design.name.clone(),
                section,
                found: values.len(),
            });
        }
        for (k, &value) in values.iter().enumerate() {
            check_finite(errors, &design.name, || format!("sections[{section}][{k}]"), value);
        }
    }
}

fn fir_errors(design: &FirDesign, errors: &mut Vec<ValidationError>) {
    check_name(errors, "fir", &design.name);
    if design.taps.is_empty() {
        errors.push(ValidationError::NoTaps {
            design: design.name.clone(),
        });
    }
    for (k, &value) in design.taps.iter().enumerate() {
        check_finite(errors, &design.name, || format!("taps[{k}]"), value);
    }
}

fn pid_errors(design: &PidDesign, errors: &mut Vec<ValidationError>) {
    check_name(errors, "pid", &design.name);
    for (field, value) in ["kp", "ki", "kd"].into_iter().zip(design.gains()) {
        check_finite(errors, &design.name, || field.to_string(), value);
    }
}

fn duplicate_errors<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for name in names {
        if !seen.insert(name) && reported.insert(name) {
            errors.push(ValidationError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
}

/// Validate a single biquad design.
pub fn validate_biquad(design: &BiquadDesign) -> ValidationResult<()> {
    let mut errors = Vec::new();
    biquad_errors(design, &mut errors);
    finish(errors)
}

/// Validate a single FIR design.
pub fn validate_fir(design: &FirDesign) -> ValidationResult<()> {
    let mut errors = Vec::new();
    fir_errors(design, &mut errors);
    finish(errors)
}

/// Validate a single PID design.
pub fn validate_pid(design: &PidDesign) -> ValidationResult<()> {
    let mut errors = Vec::new();
    pid_errors(design, &mut errors);
    finish(errors)
}

/// Validate every design in a set, plus name uniqueness within each kind.
///
/// All problems are collected; more than one is reported as
/// [`ValidationError::Multiple`].
pub fn validate_design_set(set: &DesignSet) -> ValidationResult<()> {
    let mut errors = Vec::new();

    for design in &set.biquad {
        biquad_errors(design, &mut errors);
    }
    for design in &set.fir {
        fir_errors(design, &mut errors);
    }
    for design in &set.pid {
        pid_errors(design, &mut errors);
    }

    duplicate_errors("biquad", set.biquad.iter().map(|d| d.name.as_str()), &mut errors);
    duplicate_errors("fir", set.fir.iter().map(|d| d.name.as_str()), &mut errors);
    duplicate_errors("pid", set.pid.iter().map(|d| d.name.as_str()), &mut errors);

    if !errors.is_empty() {
        tracing::warn!(set = %set.name, errors = errors.len(), "design set failed validation");
    }
    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::SectionSpec;

    fn valid_set() -> DesignSet {
        DesignSet::new("valid")
            .with_biquad(BiquadDesign::new("lp").with_section([0.2, 0.4, 0.2, 0.6, -0.2]))
            .with_fir(FirDesign::new("avg", vec![0.5, 0.5]))
            .with_pid(PidDesign::new("loop", 1.0, 0.1, 0.0))
    }

    #[test]
    fn valid_set_passes() {
        assert_eq!(validate_design_set(&valid_set()), Ok(()));
    }

    #[test]
    fn short_section_is_rejected() {
        let design =
            BiquadDesign::new("short").with_section(SectionSpec::Array(vec![1.0, 0.0, 0.0, 0.0]));
        assert_eq!(
            validate_biquad(&design),
            Err(ValidationError::SectionLength {
                design: "short".to_string(),
                section: 0,
                found: 4,
            })
        );
    }

    #[test]
    fn empty_cascade_is_rejected() {
        let design = BiquadDesign::new("none");
        assert!(matches!(
            validate_biquad(&design),
            Err(ValidationError::NoSections { .. })
        ));
    }

    #[test]
    fn non_finite_values_name_their_location() {
        let design = FirDesign::new("bad", vec![0.5, f64::NAN]);
        match validate_fir(&design) {
            Err(ValidationError::NonFinite { field, .. }) => assert_eq!(field, "taps[1]"),
            other => panic!("unexpected {other:?}"),
        }

        let pid = PidDesign::new("bad", 1.0, f64::INFINITY, 0.0);
        match validate_pid(&pid) {
            Err(ValidationError::NonFinite { field, value, .. }) => {
                assert_eq!(field, "ki");
                assert!(value.is_infinite());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn duplicates_are_per_kind() {
        // Same name across kinds is fine.
        let set = valid_set().with_fir(FirDesign::new("lp", vec![1.0]));
        assert_eq!(validate_design_set(&set), Ok(()));

        let set = valid_set()
            .with_pid(PidDesign::new("loop", 2.0, 0.0, 0.0))
            .with_pid(PidDesign::new("loop", 3.0, 0.0, 0.0));
        assert_eq!(
            validate_design_set(&set),
            Err(ValidationError::DuplicateName {
                kind: "pid",
                name: "loop".to_string(),
            })
        );
    }

    #[test]
    fn errors_are_collected() {
        let set = DesignSet::new("broken")
            .with_biquad(BiquadDesign::new(""))
            .with_fir(FirDesign::new("empty", Vec::new()));
        match validate_design_set(&set) {
            Err(ValidationError::Multiple(errors)) => {
                assert_eq!(errors.len(), 3, "{errors:?}");
                assert!(errors.contains(&ValidationError::EmptyName { kind: "biquad" }));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn multiple_display_joins_messages() {
        let err = ValidationError::Multiple(vec![
            ValidationError::EmptyName { kind: "fir" },
            ValidationError::NoTaps {
                design: "x".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "multiple validation errors: fir design has an empty name; fir design 'x' has no taps"
        );
    }
}
