//! Design file format and instance builders.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tapline_core::{
    BiquadCascade, BiquadCascadeDf2t, Coefficient, Fir, Pid, Processor, Sample,
    SectionCoefficients,
};

use crate::error::ConfigError;
use crate::validation::{
    ValidationResult, validate_biquad, validate_design_set, validate_fir, validate_pid,
};

/// Scalar types that instances can be built for.
///
/// Design files store `f64`; building narrows to the instance's scalar.
pub trait DesignScalar: Coefficient + Sample<Self> + 'static {
    /// Converts a stored coefficient.
    fn from_f64(value: f64) -> Self;
}

impl DesignScalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl DesignScalar for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

/// Structural realization of a biquad cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiquadForm {
    /// Direct Form I
    Df1,
    /// Transposed Direct Form II
    #[default]
    Df2t,
}

/// One biquad section as written in a design file.
///
/// Either a plain array `[b0, b1, b2, a1, a2]` or a table with named fields
/// `{ b0 = .., b1 = .., b2 = .., a1 = .., a2 = .. }`. Feedback terms are
/// pre-negated in both spellings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionSpec {
    /// `[b0, b1, b2, a1, a2]`; the length is checked by validation.
    Array(Vec<f64>),
    /// Named coefficients.
    Named(SectionCoefficients<f64>),
}

impl SectionSpec {
    /// Coefficients in `[b0, b1, b2, a1, a2]` order.
    pub fn values(&self) -> Vec<f64> {
        match self {
            SectionSpec::Array(values) => values.clone(),
            SectionSpec::Named(section) => section.to_array().to_vec(),
        }
    }
}

impl From<[f64; 5]> for SectionSpec {
    fn from(values: [f64; 5]) -> Self {
        SectionSpec::Array(values.to_vec())
    }
}

impl From<SectionCoefficients<f64>> for SectionSpec {
    fn from(section: SectionCoefficients<f64>) -> Self {
        SectionSpec::Named(section)
    }
}

/// A named biquad cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiquadDesign {
    /// Name used for lookup.
    pub name: String,

    /// Realization used by [`BiquadDesign::build`] (defaults to `df2t`).
    #[serde(default)]
    pub form: BiquadForm,

    /// Sections in processing order.
    pub sections: Vec<SectionSpec>,
}

impl BiquadDesign {
    /// Create a design with no sections.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            form: BiquadForm::default(),
            sections: Vec::new(),
        }
    }

    /// Set the realization.
    pub fn with_form(mut self, form: BiquadForm) -> Self {
        self.form = form;
        self
    }

    /// Append a section.
    pub fn with_section(mut self, section: impl Into<SectionSpec>) -> Self {
        self.sections.push(section.into());
        self
    }

    /// Number of sections.
    pub fn stages(&self) -> usize {
        self.sections.len()
    }

    /// Check this design on its own.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_biquad(self)
    }

    fn flat_coefficients<T: DesignScalar>(&self) -> Result<Vec<T>, ConfigError> {
        self.validate()?;
        Ok(self
            .sections
            .iter()
            .flat_map(SectionSpec::values)
            .map(T::from_f64)
            .collect())
    }

    /// Build a Direct Form I cascade with exactly `STAGES` sections.
    pub fn build_df1<T: DesignScalar, const STAGES: usize>(
        &self,
    ) -> Result<BiquadCascade<T, T, STAGES>, ConfigError> {
        let flat = self.flat_coefficients::<T>()?;
        let cascade = BiquadCascade::try_from_slice(&flat)?;
        tracing::debug!(design = %self.name, stages = STAGES, "built df1 biquad cascade");
        Ok(cascade)
    }

    /// Build a Transposed Direct Form II cascade with exactly `STAGES` sections.
    pub fn build_df2t<T: DesignScalar, const STAGES: usize>(
        &self,
    ) -> Result<BiquadCascadeDf2t<T, T, STAGES>, ConfigError> {
        let flat = self.flat_coefficients::<T>()?;
        let cascade = BiquadCascadeDf2t::try_from_slice(&flat)?;
        tracing::debug!(design = %self.name, stages = STAGES, "built df2t biquad cascade");
        Ok(cascade)
    }

    /// Build the realization named by [`BiquadDesign::form`].
    pub fn build<T: DesignScalar, const STAGES: usize>(
        &self,
    ) -> Result<Box<dyn Processor<Sample = T>>, ConfigError> {
        let cascade: Box<dyn Processor<Sample = T>> = match self.form {
            BiquadForm::Df1 => Box::new(self.build_df1::<T, STAGES>()?),
            BiquadForm::Df2t => Box::new(self.build_df2t::<T, STAGES>()?),
        };
        Ok(cascade)
    }
}

/// A named FIR filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirDesign {
    /// Name used for lookup.
    pub name: String,

    /// Taps; `taps[k]` weights the input `k` samples ago.
    pub taps: Vec<f64>,
}

impl FirDesign {
    /// Create a design from its taps.
    pub fn new(name: impl Into<String>, taps: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            taps: taps.into(),
        }
    }

    /// Check this design on its own.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_fir(self)
    }

    /// Build a filter with exactly `TAPS` taps.
    pub fn build<T: DesignScalar, const TAPS: usize>(&self) -> Result<Fir<T, T, TAPS>, ConfigError> {
        self.validate()?;
        let taps: Vec<T> = self.taps.iter().copied().map(T::from_f64).collect();
        let fir = Fir::try_from_slice(&taps)?;
        tracing::debug!(design = %self.name, taps = TAPS, "built fir filter");
        Ok(fir)
    }
}

/// A named PID controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PidDesign {
    /// Name used for lookup.
    pub name: String,

    /// Proportional gain.
    pub kp: f64,

    /// Integral gain per sample (defaults to 0).
    #[serde(default)]
    pub ki: f64,

    /// Derivative gain per sample (defaults to 0).
    #[serde(default)]
    pub kd: f64,
}

impl PidDesign {
    /// Create a design from its gains.
    pub fn new(name: impl Into<String>, kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            name: name.into(),
            kp,
            ki,
            kd,
        }
    }

    /// `[kp, ki, kd]`.
    pub fn gains(&self) -> [f64; 3] {
        [self.kp, self.ki, self.kd]
    }

    /// Check this design on its own.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_pid(self)
    }

    /// Build a controller with zeroed state.
    pub fn build<T: DesignScalar>(&self) -> Result<Pid<T, T>, ConfigError> {
        self.validate()?;
        let pid = Pid::from_gains(self.gains().map(T::from_f64));
        tracing::debug!(design = %self.name, "built pid controller");
        Ok(pid)
    }
}

/// A named collection of filter and controller designs.
///
/// # TOML Format
///
/// ```toml
/// name = "sensor-conditioning"
/// description = "IMU front end"
///
/// [[biquad]]
/// name = "lowpass"
/// form = "df1"
/// sections = [
///     [0.2, 0.4, 0.2, 0.6, -0.2],
///     { b0 = 0.1, b1 = 0.2, b2 = 0.1, a1 = 0.9, a2 = -0.3 },
/// ]
///
/// [[fir]]
/// name = "smoother"
/// taps = [0.25, 0.25, 0.25, 0.25]
///
/// [[pid]]
/// name = "heater"
/// kp = 1.2
/// ki = 0.05
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignSet {
    /// Name of the set.
    pub name: String,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Biquad cascade designs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub biquad: Vec<BiquadDesign>,

    /// FIR designs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fir: Vec<FirDesign>,

    /// PID designs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pid: Vec<PidDesign>,
}

impl DesignSet {
    /// Create an empty set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            biquad: Vec::new(),
            fir: Vec::new(),
            pid: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a biquad design.
    pub fn with_biquad(mut self, design: BiquadDesign) -> Self {
        self.biquad.push(design);
        self
    }

    /// Add an FIR design.
    pub fn with_fir(mut self, design: FirDesign) -> Self {
        self.fir.push(design);
        self
    }

    /// Add a PID design.
    pub fn with_pid(mut self, design: PidDesign) -> Self {
        self.pid.push(design);
        self
    }

    /// Load and validate a design set from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let set = Self::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            name = %set.name,
            designs = set.len(),
            "loaded design set"
        );
        Ok(set)
    }

    /// Parse and validate a design set from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let set: DesignSet = toml::from_str(toml_str)?;
        set.validate()?;
        Ok(set)
    }

    /// Save the set to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the set to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every design and the uniqueness of names.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_design_set(self)
    }

    /// Look up a biquad design by name.
    pub fn biquad(&self, name: &str) -> Result<&BiquadDesign, ConfigError> {
        self.biquad
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| ConfigError::not_found("biquad", name))
    }

    /// Look up an FIR design by name.
    pub fn fir(&self, name: &str) -> Result<&FirDesign, ConfigError> {
        self.fir
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| ConfigError::not_found("fir", name))
    }

    /// Look up a PID design by name.
    pub fn pid(&self, name: &str) -> Result<&PidDesign, ConfigError> {
        self.pid
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| ConfigError::not_found("pid", name))
    }

    /// Total number of designs.
    pub fn len(&self) -> usize {
        self.biquad.len() + self.fir.len() + self.pid.len()
    }

    /// Check if the set holds no designs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DesignSet {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
