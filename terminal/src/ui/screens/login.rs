//! # Login Screen

use egui;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the login form
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        forms::render_form_heading(ui, "PDV Terminal", &theme);
        forms::render_hint(ui, "Sign in to open the register", &theme);
        ui.add_space(20.0);

        let mut username = state.login.username.clone();
        let mut password = state.login.password.clone();
        let mut submit = false;

        let username_response =
            forms::render_text_input(ui, "Username", &mut username, "Enter username", false, [260.0, 30.0]);
        ui.add_space(8.0);
        let password_response =
            forms::render_text_input(ui, "Password", &mut password, "Enter password", true, [260.0, 30.0]);

        if username_response.changed() || password_response.changed() {
            let mut state = app.state.write();
            state.login.username = username.clone();
            state.login.password = password.clone();
        }

        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter_pressed && (username_response.lost_focus() || password_response.lost_focus()) {
            submit = true;
        }

        ui.add_space(15.0);
        if let Some(error) = state.session.last_error.as_deref() {
            forms::render_error(ui, error, &theme);
        }

        if state.session.authenticating {
            ui.spinner();
            forms::render_hint(ui, "Signing in...", &theme);
        } else if forms::render_button(
            ui,
            "Sign in",
            Some(theme.selected),
            Some(egui::vec2(120.0, 34.0)),
        )
        .clicked()
            || submit
        {
            app.handle_login_click();
        }
    });
}
