//! Neopix theme
//!
//! Light visuals with square corners and 1px black outlines, so the
//! chrome stays out of the way of the artwork.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Colors used by the chrome.
pub struct NeoColors;

impl NeoColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    /// Panel background behind the canvas.
    pub const PAPER: Color32 = Color32::from_rgb(236, 236, 236);
    pub const HOVER: Color32 = Color32::from_rgb(214, 214, 214);
}

/// Theme configuration for Neopix windows
#[derive(Debug, Clone, PartialEq)]
pub struct NeoTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for NeoTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 20.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 5.0,
        }
    }
}

impl NeoTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    pub fn style(&self) -> Style {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = NeoColors::WHITE;
        visuals.panel_fill = NeoColors::PAPER;
        visuals.extreme_bg_color = NeoColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, NeoColors::BLACK);

        let outline = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = Stroke::new(1.0, NeoColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, NeoColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        outline(&mut visuals.widgets.inactive);
        outline(&mut visuals.widgets.hovered);
        outline(&mut visuals.widgets.active);
        outline(&mut visuals.widgets.open);
        visuals.widgets.inactive.weak_bg_fill = NeoColors::WHITE;
        visuals.widgets.hovered.weak_bg_fill = NeoColors::HOVER;

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style
    }
}
