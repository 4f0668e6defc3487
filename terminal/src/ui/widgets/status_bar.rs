//! # Status Bar Widget
//!
//! Bottom status bar showing the backend endpoint, the active screen
//! and the cart summary while on the register.

use egui;

use crate::app::{AppState, Screen};
use crate::ui::theme::Theme;
use crate::utils::format;

/// Render status bar at bottom
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        if let Some(api_client) = state.api_client.as_ref() {
            ui.label(egui::RichText::new(api_client.base_url()).color(theme.dim).size(12.0));
            ui.separator();
        }

        ui.label(egui::RichText::new(state.current_screen.title()).size(12.0));

        if state.current_screen == Screen::Register && !state.register.cart.is_empty() {
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "{} items, {}",
                    state.register.cart.unit_count(),
                    format::format_currency(state.register.cart.total())
                ))
                .color(theme.success)
                .size(12.0),
            );
        }
    });
}
