use thiserror::Error;

/// Top-level error type for armature-core.
#[derive(Debug, Error)]
pub enum ArmatureError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid drag sensitivity: {0} (must be finite and > 0)")]
    InvalidSensitivity(f32),

    #[error("Invalid gripper gap: min_gap={min}, max_gap={max} (need 0 <= min < max)")]
    InvalidGripperGap { min: f32, max: f32 },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Failed name lookups. Carries only the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown joint: {0} (expected base, shoulder, elbow or gripper)")]
    UnknownJoint(String),

    #[error("Unknown drag handle: {0} (expected shoulder_base, elbow or gripper)")]
    UnknownHandle(String),

    #[error("Unknown drag tracking mode: {0} (expected absolute or incremental)")]
    UnknownTracking(String),

    #[error("Malformed assignment: {0} (expected NAME=VALUE)")]
    MalformedAssignment(String),

    #[error("Malformed point: {0} (expected X,Y)")]
    MalformedPoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armature_error_from_config_error() {
        let err = ConfigError::InvalidSensitivity(-1.0);
        let wrapped: ArmatureError = err.into();
        assert!(matches!(wrapped, ArmatureError::Config(_)));
        assert!(wrapped.to_string().contains("-1"));
    }

    #[test]
    fn armature_error_from_parse_error() {
        let err = ParseError::UnknownJoint("wrist".into());
        let wrapped: ArmatureError = err.into();
        assert!(matches!(wrapped, ArmatureError::Parse(_)));
        assert!(wrapped.to_string().contains("wrist"));
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::InvalidSensitivity(0.0).to_string(),
            "Invalid drag sensitivity: 0 (must be finite and > 0)"
        );
        assert_eq!(
            ConfigError::InvalidGripperGap { min: 0.3, max: 0.1 }.to_string(),
            "Invalid gripper gap: min_gap=0.3, max_gap=0.1 (need 0 <= min < max)"
        );
        assert_eq!(
            ConfigError::InvalidValue {
                field: "drag.absolute_scale.base".into(),
                message: "must be finite".into()
            }
            .to_string(),
            "Invalid value for drag.absolute_scale.base: must be finite"
        );
    }

    #[test]
    fn parse_error_display_messages() {
        assert_eq!(
            ParseError::UnknownHandle("wrist".into()).to_string(),
            "Unknown drag handle: wrist (expected shoulder_base, elbow or gripper)"
        );
        assert_eq!(
            ParseError::UnknownTracking("relative".into()).to_string(),
            "Unknown drag tracking mode: relative (expected absolute or incremental)"
        );
        assert_eq!(
            ParseError::MalformedAssignment("elbow".into()).to_string(),
            "Malformed assignment: elbow (expected NAME=VALUE)"
        );
        assert_eq!(
            ParseError::MalformedPoint("1;2".into()).to_string(),
            "Malformed point: 1;2 (expected X,Y)"
        );
    }
}
