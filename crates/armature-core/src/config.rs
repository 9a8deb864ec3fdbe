use std::fmt;
use std::str::FromStr;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ParseError};
use crate::handle::DragHandle;
use crate::joint::JointId;
use crate::pose::Pose;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_sensitivity() -> f32 {
    0.5
}
fn default_enabled_handles() -> Vec<DragHandle> {
    DragHandle::ALL.to_vec()
}
const fn default_absolute_scale() -> JointScales {
    JointScales::new(1.0, 1.0, 1.0, 10.0)
}
const fn default_incremental_scale() -> JointScales {
    JointScales::new(5.0, 5.0, 5.0, 10.0)
}
const fn default_min_gap() -> f32 {
    0.1
}
const fn default_max_gap() -> f32 {
    0.3
}
const fn default_base() -> f32 {
    0.0
}
const fn default_shoulder() -> f32 {
    -45.0
}
const fn default_elbow() -> f32 {
    45.0
}
const fn default_gripper() -> f32 {
    50.0
}

// ---------------------------------------------------------------------------
// InitialPoseConfig
// ---------------------------------------------------------------------------

/// Startup pose as written in a config file. Values are clamped when
/// converted into a [`Pose`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialPoseConfig {
    #[serde(default = "default_base")]
    pub base: f32,
    #[serde(default = "default_shoulder")]
    pub shoulder: f32,
    #[serde(default = "default_elbow")]
    pub elbow: f32,
    #[serde(default = "default_gripper")]
    pub gripper: f32,
}

impl Default for InitialPoseConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            shoulder: default_shoulder(),
            elbow: default_elbow(),
            gripper: default_gripper(),
        }
    }
}

impl InitialPoseConfig {
    #[must_use]
    pub fn to_pose(&self) -> Pose {
        Pose::new(self.base, self.shoulder, self.elbow, self.gripper)
    }
}

// ---------------------------------------------------------------------------
// DragTracking
// ---------------------------------------------------------------------------

/// How pointer motion is accumulated into joint values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragTracking {
    /// Recompute from the drag-start snapshot and the total displacement.
    #[default]
    Absolute,
    /// Add each per-event delta to the live value.
    Incremental,
}

impl DragTracking {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Incremental => "incremental",
        }
    }
}

impl fmt::Display for DragTracking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DragTracking {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" => Ok(Self::Absolute),
            "incremental" => Ok(Self::Incremental),
            _ => Err(ParseError::UnknownTracking(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// JointScales
// ---------------------------------------------------------------------------

/// Per-joint multiplier applied on top of the drag sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointScales {
    pub base: f32,
    pub shoulder: f32,
    pub elbow: f32,
    pub gripper: f32,
}

impl JointScales {
    #[must_use]
    pub const fn new(base: f32, shoulder: f32, elbow: f32, gripper: f32) -> Self {
        Self {
            base,
            shoulder,
            elbow,
            gripper,
        }
    }

    /// Same factor for every joint.
    #[must_use]
    pub const fn uniform(scale: f32) -> Self {
        Self::new(scale, scale, scale, scale)
    }

    pub const fn get(&self, joint: JointId) -> f32 {
        match joint {
            JointId::Base => self.base,
            JointId::Shoulder => self.shoulder,
            JointId::Elbow => self.elbow,
            JointId::Gripper => self.gripper,
        }
    }

    #[must_use]
    pub const fn with(mut self, joint: JointId, scale: f32) -> Self {
        match joint {
            JointId::Base => self.base = scale,
            JointId::Shoulder => self.shoulder = scale,
            JointId::Elbow => self.elbow = scale,
            JointId::Gripper => self.gripper = scale,
        }
        self
    }

    fn validate(&self, table: &str) -> Result<(), ConfigError> {
        for joint in JointId::ALL {
            let scale = self.get(joint);
            if !scale.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field: format!("drag.{table}.{joint}"),
                    message: format!("must be finite, got {scale}"),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DragConfig
// ---------------------------------------------------------------------------

/// Pointer-drag behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Absolute (default) or incremental tracking.
    #[serde(default)]
    pub tracking: DragTracking,

    /// Degrees (or percent) per pixel before the per-joint scale (default: 0.5).
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,

    /// Handles that accept drag gestures. All three by default.
    #[serde(default = "default_enabled_handles")]
    pub enabled_handles: Vec<DragHandle>,

    /// Per-joint scale in absolute mode (default: ×1, gripper ×10).
    #[serde(default = "default_absolute_scale")]
    pub absolute_scale: JointScales,

    /// Per-joint scale in incremental mode (default: ×5, gripper ×10).
    #[serde(default = "default_incremental_scale")]
    pub incremental_scale: JointScales,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            tracking: DragTracking::default(),
            sensitivity: default_sensitivity(),
            enabled_handles: default_enabled_handles(),
            absolute_scale: default_absolute_scale(),
            incremental_scale: default_incremental_scale(),
        }
    }
}

impl DragConfig {
    /// Default config switched to incremental tracking.
    #[must_use]
    pub fn incremental() -> Self {
        Self::default().with_tracking(DragTracking::Incremental)
    }

    #[must_use]
    pub const fn with_tracking(mut self, tracking: DragTracking) -> Self {
        self.tracking = tracking;
        self
    }

    #[must_use]
    pub const fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Replace the scale table of the active tracking mode.
    #[must_use]
    pub const fn with_scales(mut self, scales: JointScales) -> Self {
        match self.tracking {
            DragTracking::Absolute => self.absolute_scale = scales,
            DragTracking::Incremental => self.incremental_scale = scales,
        }
        self
    }

    /// Enable or disable gestures on one handle.
    #[must_use]
    pub fn with_handle(mut self, handle: DragHandle, enabled: bool) -> Self {
        self.enabled_handles.retain(|h| *h != handle);
        if enabled {
            self.enabled_handles.push(handle);
        }
        self
    }

    #[must_use]
    pub fn is_enabled(&self, handle: DragHandle) -> bool {
        self.enabled_handles.contains(&handle)
    }

    /// Scale table for the active tracking mode.
    #[must_use]
    pub const fn scales(&self) -> &JointScales {
        match self.tracking {
            DragTracking::Absolute => &self.absolute_scale,
            DragTracking::Incremental => &self.incremental_scale,
        }
    }

    /// Effective value change per pixel for `joint`.
    #[must_use]
    pub const fn gain(&self, joint: JointId) -> f32 {
        self.sensitivity * self.scales().get(joint)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(ConfigError::InvalidSensitivity(self.sensitivity));
        }
        self.absolute_scale.validate("absolute_scale")?;
        self.incremental_scale.validate("incremental_scale")?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GripperConfig
// ---------------------------------------------------------------------------

/// Finger separation range, in scene units per side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GripperConfig {
    #[serde(default = "default_min_gap")]
    pub min_gap: f32,
    #[serde(default = "default_max_gap")]
    pub max_gap: f32,
}

impl Default for GripperConfig {
    fn default() -> Self {
        Self {
            min_gap: default_min_gap(),
            max_gap: default_max_gap(),
        }
    }
}

impl GripperConfig {
    /// Per-side finger offset for an opening in `[0, 100]`.
    ///
    /// The opening is clamped first, so the result is always within
    /// `[min_gap, max_gap]`.
    #[must_use]
    pub fn gap(&self, opening: f32) -> f32 {
        let t = JointId::Gripper.range().clamp(opening) / 100.0;
        self.min_gap + t * (self.max_gap - self.min_gap)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.min_gap.is_finite()
            && self.max_gap.is_finite()
            && self.min_gap >= 0.0
            && self.min_gap < self.max_gap;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidGripperGap {
                min: self.min_gap,
                max: self.max_gap,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// ArmConfig
// ---------------------------------------------------------------------------

/// Complete arm configuration, loadable from TOML.
///
/// ```toml
/// [initial_pose]
/// shoulder = -30.0
///
/// [drag]
/// tracking = "incremental"
/// enabled_handles = ["shoulder_base", "elbow"]
///
/// [gripper]
/// max_gap = 0.35
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Resource)]
pub struct ArmConfig {
    #[serde(default)]
    pub initial_pose: InitialPoseConfig,
    #[serde(default)]
    pub drag: DragConfig,
    #[serde(default)]
    pub gripper: GripperConfig,
}

impl ArmConfig {
    /// Validate configuration. Returns Err on invalid values.
    ///
    /// An out-of-range initial pose is not an error: it is clamped like any
    /// other input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.drag.validate()?;
        self.gripper.validate()?;
        Ok(())
    }

    /// Initial pose, clamped.
    #[must_use]
    pub fn initial_pose(&self) -> Pose {
        self.initial_pose.to_pose()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_config_is_valid() {
        let config = ArmConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.drag.tracking, DragTracking::Absolute);
        assert_relative_eq!(config.drag.sensitivity, 0.5);
        assert_eq!(config.drag.enabled_handles.len(), 3);
        assert_eq!(config.initial_pose(), Pose::INITIAL);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = ArmConfig::from_toml_str("").unwrap();
        assert_eq!(config, ArmConfig::default());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = ArmConfig::from_toml_str(
            r#"
            [initial_pose]
            elbow = 90.0

            [drag]
            tracking = "incremental"
            enabled_handles = ["shoulder_base", "elbow"]

            [gripper]
            max_gap = 0.4
            "#,
        )
        .unwrap();

        assert_relative_eq!(config.initial_pose().elbow(), 90.0);
        assert_relative_eq!(config.initial_pose().shoulder(), -45.0);
        assert_eq!(config.drag.tracking, DragTracking::Incremental);
        assert!(!config.drag.is_enabled(DragHandle::Gripper));
        assert!(config.drag.is_enabled(DragHandle::Elbow));
        assert_relative_eq!(config.gripper.min_gap, 0.1);
        assert_relative_eq!(config.gripper.max_gap, 0.4);
    }

    #[test]
    fn out_of_range_initial_pose_is_clamped() {
        let config = ArmConfig::from_toml_str("[initial_pose]\nshoulder = 135.0\n").unwrap();
        assert_relative_eq!(config.initial_pose().shoulder(), 90.0);
    }

    #[test]
    fn rejects_non_positive_sensitivity() {
        let err = ArmConfig::from_toml_str("[drag]\nsensitivity = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSensitivity(_)));
    }

    #[test]
    fn rejects_inverted_gripper_gap() {
        let err =
            ArmConfig::from_toml_str("[gripper]\nmin_gap = 0.3\nmax_gap = 0.1\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGripperGap { .. }));
    }

    #[test]
    fn rejects_non_finite_scale() {
        let config = ArmConfig {
            drag: DragConfig::default().with_scales(JointScales::uniform(f32::INFINITY)),
            ..ArmConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("drag.absolute_scale.base"));
    }

    #[test]
    fn rejects_unknown_tracking() {
        let err = ArmConfig::from_toml_str("[drag]\ntracking = \"relative\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let err = ArmConfig::from_file("/nonexistent/armature.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn from_file_round_trip() {
        let path = std::env::temp_dir().join(format!("armature-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[drag]\nsensitivity = 0.25\n").unwrap();
        let config = ArmConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_relative_eq!(config.drag.sensitivity, 0.25);
    }

    #[test]
    fn gain_follows_tracking_mode() {
        let absolute = DragConfig::default();
        assert_relative_eq!(absolute.gain(JointId::Base), 0.5);
        assert_relative_eq!(absolute.gain(JointId::Gripper), 5.0);

        let incremental = DragConfig::incremental();
        assert_relative_eq!(incremental.gain(JointId::Shoulder), 2.5);
        assert_relative_eq!(incremental.gain(JointId::Gripper), 5.0);
    }

    #[test]
    fn with_scales_targets_active_table() {
        let config = DragConfig::incremental().with_scales(JointScales::uniform(1.0));
        assert_relative_eq!(config.incremental_scale.elbow, 1.0);
        assert_relative_eq!(config.absolute_scale.gripper, 10.0);
    }

    #[test]
    fn with_handle_toggles() {
        let config = DragConfig::default().with_handle(DragHandle::Gripper, false);
        assert!(!config.is_enabled(DragHandle::Gripper));
        let config = config.with_handle(DragHandle::Gripper, true);
        assert!(config.is_enabled(DragHandle::Gripper));
        assert_eq!(config.enabled_handles.len(), 3);
    }

    #[test]
    fn gripper_gap_interpolates() {
        let gripper = GripperConfig::default();
        assert_relative_eq!(gripper.gap(0.0), 0.1, epsilon = 1e-6);
        assert_relative_eq!(gripper.gap(50.0), 0.2, epsilon = 1e-6);
        assert_relative_eq!(gripper.gap(100.0), 0.3, epsilon = 1e-6);
        assert_relative_eq!(gripper.gap(250.0), 0.3, epsilon = 1e-6);
    }

    #[test]
    fn tracking_parse() {
        assert_eq!(
            "Incremental".parse::<DragTracking>().unwrap(),
            DragTracking::Incremental
        );
        assert!("relative".parse::<DragTracking>().is_err());
        assert_eq!(DragTracking::Absolute.to_string(), "absolute");
    }
}
