//! Watch palette and the desktop window styling around the face.

use egui::{Color32, Rounding, Stroke, Style, Visuals};

use crate::geometry::Color;

/// Host colours for the watch palette.
pub struct FaceColors;

impl FaceColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);

    /// `None` for [`Color::Clear`]: nothing gets painted.
    pub fn to_color32(color: Color) -> Option<Color32> {
        match color {
            Color::Clear => None,
            Color::Black => Some(Self::BLACK),
            Color::White => Some(Self::WHITE),
        }
    }
}

/// Styling for the window hosting the face.
pub struct FaceTheme {
    /// Fill behind the watch screen.
    pub bezel: Color32,
}

impl Default for FaceTheme {
    fn default() -> Self {
        Self { bezel: FaceColors::BLACK }
    }
}

impl FaceTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.bezel;
        visuals.panel_fill = self.bezel;
        visuals.window_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::NONE;
        visuals.window_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(0.0);
        style.spacing.item_spacing = egui::vec2(0.0, 0.0);

        ctx.set_style(style);
    }

    /// Panel frame: bezel fill, no margin
    pub fn screen_frame(&self) -> egui::Frame {
        egui::Frame::none().fill(self.bezel).inner_margin(egui::Margin::same(0.0))
    }
}
