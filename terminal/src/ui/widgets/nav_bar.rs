//! # Navigation Bar
//!
//! Top bar with one button per screen the current identity may open,
//! the signed-in identity and the logout action. Hidden entirely on the
//! login screen.

use egui;

use crate::app::{App, AppState, Screen};
use crate::session::guard::{self, Decision};
use crate::ui::theme::Theme;

/// Render the navigation bar. Only visible when authenticated.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    if !state.is_authenticated() {
        return;
    }

    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.set_height(36.0);

        ui.label(
            egui::RichText::new("PDV Terminal")
                .size(17.0)
                .strong()
                .color(theme.selected),
        );
        ui.separator();

        for &screen in Screen::all() {
            if guard::decide(&state.session, screen.access_level()) != Decision::Allow {
                continue;
            }

            let selected = state.current_screen == screen;
            let label = if selected {
                egui::RichText::new(screen.title()).color(theme.selected).strong()
            } else {
                egui::RichText::new(screen.title())
            };
            if ui.selectable_label(selected, label).clicked() && !selected {
                app.handle_screen_change(screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Logout").clicked() {
                app.handle_logout_click();
            }

            if let Some(user) = &state.session.identity {
                let (badge, color) = if user.is_admin() {
                    ("admin", theme.warning)
                } else {
                    ("employee", theme.info)
                };
                ui.label(egui::RichText::new(badge).color(color).size(12.0));
                ui.label(egui::RichText::new(&user.username).strong());
            }
        });
    });
}
