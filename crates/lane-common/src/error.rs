//! Error types for the battle lane.
//!
//! The simulation core itself never fails; these errors belong to the outer
//! surfaces (configuration files, stimulus payloads, snapshots).

use thiserror::Error;

/// Top-level error type for lane operations.
#[derive(Debug, Error)]
pub enum LaneError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Stimulus payload could not be decoded
    #[error("Invalid stimulus payload: {0}")]
    Stimulus(#[from] serde_json::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading and saving errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be encoded
    #[error("Failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),

    /// A value is outside its accepted range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Result type alias for lane operations.
pub type LaneResult<T> = Result<T, LaneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_wraps() {
        let err: LaneError = ConfigError::InvalidValue {
            field: "max_frame_dt",
            reason: "must be positive".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Config error: Invalid value for max_frame_dt: must be positive"
        );
    }

    #[test]
    fn test_stimulus_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = LaneError::from(json_err);
        assert!(matches!(err, LaneError::Stimulus(_)));
    }
}
