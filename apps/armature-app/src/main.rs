//! Armature robot arm CLI.
//!
//! Provides four modes of operation:
//! - `run`: Open the interactive viewer (default)
//! - `pose`: Apply joint values headlessly and print segment positions
//! - `drag`: Replay a drag gesture headlessly and print the resulting pose
//! - `info`: Print workspace crate versions and the default configuration

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bevy::prelude::*;
use clap::{Parser, Subcommand};

use armature_app::HeadlessArm;
use armature_app::args::{parse_assignment, parse_point};
use armature_core::prelude::*;
use armature_core::{ArmatureError, JointScales};
use armature_input::ArmatureInputPlugin;
use armature_kinematics::ArmatureKinematicsPlugin;
use armature_viz::ArmatureVizPlugin;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Articulated robot arm with slider and drag control.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive viewer.
    Run {
        /// TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply joint values through the input router and print every
    /// segment's world position.
    Pose {
        #[arg(long, allow_negative_numbers = true)]
        base: Option<f32>,
        #[arg(long, allow_negative_numbers = true)]
        shoulder: Option<f32>,
        #[arg(long, allow_negative_numbers = true)]
        elbow: Option<f32>,
        #[arg(long, allow_negative_numbers = true)]
        gripper: Option<f32>,

        /// Extra `NAME=VALUE` assignments, applied after the flags in order.
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(JointId, f32)>,

        /// TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay a pointer drag on a handle and print the resulting pose.
    Drag {
        /// `shoulder_base`, `elbow` or `gripper`.
        #[arg(long)]
        handle: DragHandle,

        /// Start point `X,Y` in screen pixels (Y down).
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Vec2,

        /// End point `X,Y`.
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Vec2,

        /// Number of move events.
        #[arg(short, long, default_value_t = 10)]
        steps: u32,

        /// Override the configured tracking mode.
        #[arg(short, long)]
        tracking: Option<DragTracking>,

        /// Use scale 1 for every joint, as in the reference drag examples.
        #[arg(long)]
        unit_scale: bool,

        /// TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn load_config(path: Option<&Path>) -> Result<ArmConfig, ArmatureError> {
    Ok(path.map_or_else(|| Ok(ArmConfig::default()), ArmConfig::from_file)?)
}

fn run_viewer(config: ArmConfig) {
    App::new()
        .insert_resource(config)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Armature Robot Arm".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((ArmatureCorePlugin, ArmatureKinematicsPlugin, ArmatureInputPlugin))
        .add_plugins(ArmatureVizPlugin)
        .run();
}

fn print_pose(pose: Pose) {
    for (joint, value) in pose.iter() {
        println!("  {:<9} {value:>8.2}{}", joint.name(), joint.unit());
    }
}

fn run_pose(config: ArmConfig, values: &[(JointId, f32)]) {
    let mut arm = HeadlessArm::new(config);
    arm.set_joints(values);

    println!("pose:");
    print_pose(arm.pose());
    println!();
    println!("segments:");
    for segment in arm.report() {
        let p = segment.position;
        println!(
            "  {:<10} ({:>7.3}, {:>7.3}, {:>7.3})  rot={:.1}",
            segment.name, p.x, p.y, p.z, segment.rotation
        );
    }
}

fn run_drag(config: ArmConfig, handle: DragHandle, from: Vec2, to: Vec2, steps: u32) {
    let tracking = config.drag.tracking;
    let mut arm = HeadlessArm::new(config);
    let before = arm.pose();
    arm.drag(handle, from, to, steps);

    println!("drag {handle} {from} -> {to} in {steps} moves ({tracking})");
    println!("before:");
    print_pose(before);
    println!("after:");
    print_pose(arm.pose());
}

fn run_info() {
    let config = ArmConfig::default();

    println!("armature v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  armature-core        {}", env!("CARGO_PKG_VERSION"));
    println!("  armature-kinematics  {}", env!("CARGO_PKG_VERSION"));
    println!("  armature-drag        {}", env!("CARGO_PKG_VERSION"));
    println!("  armature-input       {}", env!("CARGO_PKG_VERSION"));
    println!("  armature-viz         {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("joints:");
    for joint in JointId::ALL {
        let range = joint.range();
        println!(
            "  {:<9} [{}, {}]{}",
            joint.name(),
            range.min,
            range.max,
            joint.unit()
        );
    }
    println!();
    println!(
        "default drag: tracking={}, sensitivity={}",
        config.drag.tracking, config.drag.sensitivity
    );
    println!(
        "default gripper gap: {}..{}",
        config.gripper.min_gap, config.gripper.max_gap
    );
    println!();
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run { config }) => load_config(config.as_deref()).map(run_viewer),
        Some(Commands::Pose {
            base,
            shoulder,
            elbow,
            gripper,
            set,
            config,
        }) => load_config(config.as_deref()).map(|config| {
            let flags = [
                (JointId::Base, base),
                (JointId::Shoulder, shoulder),
                (JointId::Elbow, elbow),
                (JointId::Gripper, gripper),
            ];
            let mut values: Vec<_> = flags
                .into_iter()
                .filter_map(|(joint, value)| value.map(|v| (joint, v)))
                .collect();
            values.extend(set);
            run_pose(config, &values);
        }),
        Some(Commands::Drag {
            handle,
            from,
            to,
            steps,
            tracking,
            unit_scale,
            config,
        }) => load_config(config.as_deref()).map(|mut config| {
            if let Some(tracking) = tracking {
                config.drag.tracking = tracking;
            }
            if unit_scale {
                config.drag = config.drag.with_scales(JointScales::uniform(1.0));
            }
            run_drag(config, handle, from, to, steps);
        }),
        Some(Commands::Info) => {
            run_info();
            Ok(())
        }
        None => load_config(None).map(run_viewer),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
