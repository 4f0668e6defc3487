//! # GUI Theme
//!
//! Dark retail-terminal palette for egui. High contrast, sharp edges,
//! one accent color for the active screen and primary actions.

use egui::{Color32, Context, Stroke, Visuals};

/// Color palette used across all screens.
pub struct Theme {
    /// Window and panel background
    pub background: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text (hints, table metadata)
    pub dim: Color32,
    /// Accent for the active screen and primary buttons
    pub selected: Color32,
    /// Panel and widget borders
    pub border: Color32,
    /// Success green
    pub success: Color32,
    /// Error red
    pub error: Color32,
    /// Warning amber
    pub warning: Color32,
    /// Info blue
    pub info: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(16, 18, 22),
            text: Color32::from_rgb(235, 235, 235),
            dim: Color32::from_rgb(140, 145, 150),
            selected: Color32::from_rgb(46, 134, 222),
            border: Color32::from_rgb(52, 56, 62),
            success: Color32::from_rgb(46, 204, 113),
            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(241, 196, 15),
            info: Color32::from_rgb(100, 150, 255),
        }
    }
}

impl Theme {
    /// Color for a stock level: normal, low (5 or less), or out.
    pub fn stock_color(&self, stock: i64) -> Color32 {
        if stock <= 0 {
            self.error
        } else if stock <= 5 {
            self.warning
        } else {
            self.text
        }
    }
}

/// Install the theme into the egui context. Called once at startup.
pub fn apply(ctx: &Context) {
    let theme = Theme::default();
    let mut visuals = Visuals::dark();
    visuals.panel_fill = theme.background;
    visuals.window_fill = theme.background;
    visuals.selection.bg_fill = theme.selected;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme.border);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, theme.selected);
    ctx.set_visuals(visuals);
}
