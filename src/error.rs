use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the configuration paths.
///
/// The nominal simulation run has no recoverable-error taxonomy: initial
/// conditions are fixed literals and a malformed step count falls back to
/// the default rather than failing. Only explicit config file handling can
/// error.
#[derive(Debug, Error)]
pub enum Error {
    /// Propagated I/O errors from reading or writing a config file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid TOML for [`crate::config::SimulationConfig`].
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized back to TOML.
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
