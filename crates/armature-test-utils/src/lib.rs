//! Shared test fixtures and utilities for armature crates.
//!
//! Provides reusable helpers for building headless Bevy test apps and
//! configuration fixtures.

pub mod app;
pub mod fixtures;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use app::{arm_test_app, default_arm_app, minimal_test_app, send_inputs};
pub use fixtures::{INCREMENTAL_TOML, NO_GRIPPER_DRAG_TOML, RAISED_WIDE_TOML, fixture_config};
