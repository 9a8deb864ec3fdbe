//! Interactive viewer for the armature robot arm.
//!
//! `armature-viz` provides a windowed Bevy application with:
//! - Orbit camera for scene inspection
//! - Drag handles on the shoulder, elbow and wrist spheres
//! - Grab / grabbing cursor feedback
//! - egui side panel with one slider per joint, reset and theme toggle
//!
//! # Usage
//!
//! ```no_run
//! use bevy::prelude::*;
//! use armature_core::ArmatureCorePlugin;
//! use armature_input::ArmatureInputPlugin;
//! use armature_kinematics::ArmatureKinematicsPlugin;
//! use armature_viz::ArmatureVizPlugin;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins((ArmatureCorePlugin, ArmatureKinematicsPlugin, ArmatureInputPlugin))
//!     .add_plugins(ArmatureVizPlugin)
//!     .run();
//! ```

pub mod camera;
pub mod config;
pub mod picking;
pub mod plugin;
pub mod scene;
pub mod sync;
pub mod ui;

pub use config::VizConfig;
pub use plugin::ArmatureVizPlugin;
pub use scene::{HandleVisual, SegmentVisual};
