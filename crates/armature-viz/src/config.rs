//! Visualization configuration.

use bevy::prelude::*;

/// Runtime configuration for the viewer.
#[derive(Resource, Clone, Debug)]
pub struct VizConfig {
    /// Show the egui side panel.
    pub show_panel: bool,
    /// Dark panel and background.
    pub dark_theme: bool,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            show_panel: true,
            dark_theme: true,
        }
    }
}

impl VizConfig {
    /// Viewport background for the current theme.
    pub fn clear_color(&self) -> Color {
        if self.dark_theme {
            Color::srgb(0.08, 0.09, 0.11)
        } else {
            Color::srgb(0.85, 0.87, 0.9)
        }
    }
}
