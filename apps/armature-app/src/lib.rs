//! Support code for the `armature-app` binary: argument parsers and the
//! headless arm used by the `pose` and `drag` subcommands.

pub mod args;
pub mod headless;

pub use headless::{HeadlessArm, SegmentReport};
