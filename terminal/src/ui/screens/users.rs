//! # User Management Screen
//!
//! Admin-only account table with role badges and a create/edit dialog.
//! The backend enforces the actual permissions; this screen is only
//! reachable by admins in the first place.

use egui;
use egui_extras::{Column, TableBuilder};
use shared::Role;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};

/// Render the user management screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Users");
        if ui.button("New user").clicked() {
            app.open_user_create_dialog();
        }
        if state.users.loading {
            ui.spinner();
        }
    });
    ui.add_space(6.0);

    if let Some(error) = state.users.error.as_deref() {
        forms::render_error(ui, error, &theme);
    }

    if state.users.items.is_empty() && !state.users.loading {
        tables::render_empty_state(ui, "No users found", &theme);
    } else {
        render_table(ui, state, app, &theme);
    }

    if state.users.dialog.is_some() {
        render_dialog(ui.ctx(), state, app, &theme);
    }
}

fn render_table(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let own_id = state.session.identity.as_ref().map(|user| user.id);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(130.0))
        .header(22.0, |mut header| {
            for title in ["Username", "Role", "Actions"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for user in &state.users.items {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&user.username);
                    });
                    row.col(|ui| {
                        let (badge, color) = match user.role {
                            Role::Admin => ("admin", theme.warning),
                            Role::Employee => ("employee", theme.info),
                        };
                        ui.label(egui::RichText::new(badge).color(color));
                    });
                    row.col(|ui| {
                        if ui.button("Edit").clicked() {
                            app.open_user_edit_dialog(user.id);
                        }
                        // Deleting the account you are signed in with
                        // would orphan the session.
                        if own_id != Some(user.id) && ui.button("Delete").clicked() {
                            app.handle_user_delete_click(user.id);
                        }
                    });
                });
            }
        });
}

fn render_dialog(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(dialog) = state.users.dialog.as_ref() else {
        return;
    };
    let editing = dialog.editing_id.is_some();
    let title = if editing { "Edit user" } else { "New user" };

    let mut form = dialog.clone();
    let mut form_changed = false;
    let mut save = false;
    let mut cancel = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            form_changed |= forms::render_text_input(
                ui, "Username", &mut form.username, "Username", false, [260.0, 28.0],
            )
            .changed();
            let password_hint = if editing {
                "Leave empty to keep current"
            } else {
                "Password"
            };
            form_changed |= forms::render_text_input(
                ui, "Password", &mut form.password, password_hint, true, [260.0, 28.0],
            )
            .changed();

            ui.label("Role");
            egui::ComboBox::from_id_salt("user_dialog_role")
                .selected_text(match form.role {
                    Role::Admin => "admin",
                    Role::Employee => "employee",
                })
                .show_ui(ui, |ui| {
                    form_changed |= ui
                        .selectable_value(&mut form.role, Role::Employee, "employee")
                        .changed();
                    form_changed |= ui
                        .selectable_value(&mut form.role, Role::Admin, "admin")
                        .changed();
                });

            ui.add_space(10.0);
            if let Some(error) = form.error.as_deref() {
                forms::render_error(ui, error, theme);
            }

            ui.horizontal(|ui| {
                if form.saving {
                    ui.spinner();
                    forms::render_hint(ui, "Saving...", theme);
                } else {
                    if ui.button("Save").clicked() {
                        save = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                }
            });
        });

    if form_changed {
        app.state.write().users.dialog = Some(form);
    }
    if save {
        app.handle_user_save_click();
    }
    if cancel {
        app.close_user_dialog();
    }
}
