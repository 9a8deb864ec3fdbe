//! Argument parsers for the CLI.

use bevy::math::Vec2;

use armature_core::{JointId, ParseError};

/// Parse `NAME=VALUE`, e.g. `elbow=90`.
pub fn parse_assignment(s: &str) -> Result<(JointId, f32), ParseError> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| ParseError::MalformedAssignment(s.to_string()))?;
    let joint = name.parse::<JointId>()?;
    let value = value
        .trim()
        .parse::<f32>()
        .map_err(|_| ParseError::MalformedAssignment(s.to_string()))?;
    Ok((joint, value))
}

/// Parse a screen point `X,Y`.
pub fn parse_point(s: &str) -> Result<Vec2, ParseError> {
    let malformed = || ParseError::MalformedPoint(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(malformed)?;
    let x = x.trim().parse::<f32>().map_err(|_| malformed())?;
    let y = y.trim().parse::<f32>().map_err(|_| malformed())?;
    Ok(Vec2::new(x, y))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
