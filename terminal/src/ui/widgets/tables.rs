//! # Table Helpers
//!
//! Shared bits for the management tables: loading and empty states and
//! small stat cards used above tables and on the dashboard.

use egui;

use crate::ui::theme::Theme;

/// Render a centered loading indicator.
pub fn render_loading(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.spinner();
        ui.label(message);
        ui.add_space(30.0);
    });
}

/// Render a centered empty-table placeholder.
pub fn render_empty_state(ui: &mut egui::Ui, message: &str, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.label(egui::RichText::new(message).color(theme.dim).size(15.0));
        ui.add_space(30.0);
    });
}

/// Render one stat card: a small caption over a large value.
pub fn render_stat_card(
    ui: &mut egui::Ui,
    caption: &str,
    value: &str,
    accent: egui::Color32,
    theme: &Theme,
) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, theme.border))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(caption).color(theme.dim).size(12.0));
                ui.label(egui::RichText::new(value).color(accent).size(22.0).strong());
            });
        });
}
