//! Configuration fixtures.

use armature_core::ArmConfig;

/// Incremental tracking with the default ×5 / ×10 scales and every handle.
pub const INCREMENTAL_TOML: &str = r#"
[drag]
tracking = "incremental"
sensitivity = 0.5
"#;

/// Absolute tracking with gripper drag disabled.
pub const NO_GRIPPER_DRAG_TOML: &str = r#"
[drag]
tracking = "absolute"
enabled_handles = ["shoulder_base", "elbow"]
"#;

/// Start raised, with a wide gripper.
pub const RAISED_WIDE_TOML: &str = r"
[initial_pose]
shoulder = 0.0
elbow = 0.0

[gripper]
max_gap = 0.5
";

/// Parse one of the fixtures above.
///
/// # Panics
///
/// Panics if `toml` is not a valid configuration.
pub fn fixture_config(toml: &str) -> ArmConfig {
    ArmConfig::from_toml_str(toml).expect("fixture config must be valid")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
