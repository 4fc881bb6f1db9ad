use std::num::ParseFloatError;
use thiserror::Error;

/// Errors raised while acquiring a geodetic position
#[derive(Error, Debug)]
pub enum LlhError {
    #[error("Usage: {program} lat_deg lon_deg _hae_km")]
    Usage { program: String },

    #[error("Invalid {field}: '{value}' ({source})")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

impl LlhError {
    /// True for the wrong-argument-count case, which is recovered by printing usage
    pub fn is_usage(&self) -> bool {
        matches!(self, LlhError::Usage { .. })
    }
}

pub type Result<T> = std::result::Result<T, LlhError>;
