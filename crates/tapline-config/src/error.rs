//! Errors raised while loading, saving or building designs.

use std::path::PathBuf;
use tapline_core::FilterError;
use thiserror::Error;

/// Everything that can go wrong between a design file and a running instance.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A design file could not be read.
    #[error("cannot read design file '{path}': {source}")]
    ReadFile {
        /// File that was opened.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// A design file could not be written.
    #[error("cannot write design file '{path}': {source}")]
    WriteFile {
        /// File that was created.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML or does not match the design schema.
    #[error("invalid design TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The set could not be rendered as TOML.
    #[error("cannot render design TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No design of the requested kind has this name.
    #[error("{kind} design not found: {name}")]
    DesignNotFound {
        /// `"biquad"`, `"fir"` or `"pid"`.
        kind: &'static str,
        /// Name that was looked up.
        name: String,
    },

    /// The designs parsed but are malformed.
    #[error("invalid design: {0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// The design does not fit the requested instance size.
    #[error("cannot build filter: {0}")]
    Filter(#[from] FilterError),
}

impl ConfigError {
    pub(crate) fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        ConfigError::DesignNotFound {
            kind,
            name: name.into(),
        }
    }
}
