//! # Category Management Screen

use egui;
use egui_extras::{Column, TableBuilder};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};

/// Render the category management screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Categories");
        if ui.button("New category").clicked() {
            app.open_category_create_dialog();
        }
        if state.categories.loading {
            ui.spinner();
        }
    });
    ui.add_space(6.0);

    if let Some(error) = state.categories.error.as_deref() {
        forms::render_error(ui, error, &theme);
    }

    if state.categories.items.is_empty() && !state.categories.loading {
        tables::render_empty_state(ui, "No categories yet", &theme);
    } else {
        render_table(ui, state, app);
    }

    if state.categories.dialog.is_some() {
        render_dialog(ui.ctx(), state, app, &theme);
    }
}

fn render_table(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(180.0))
        .column(Column::remainder().at_least(220.0))
        .column(Column::auto().at_least(130.0))
        .header(22.0, |mut header| {
            for title in ["Name", "Description", "Actions"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for category in &state.categories.items {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&category.name);
                    });
                    row.col(|ui| {
                        ui.label(category.description.as_deref().unwrap_or("-"));
                    });
                    row.col(|ui| {
                        if ui.button("Edit").clicked() {
                            app.open_category_edit_dialog(category.id);
                        }
                        if ui.button("Delete").clicked() {
                            app.handle_category_delete_click(category.id);
                        }
                    });
                });
            }
        });
}

fn render_dialog(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(dialog) = state.categories.dialog.as_ref() else {
        return;
    };
    let title = if dialog.editing_id.is_some() {
        "Edit category"
    } else {
        "New category"
    };

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
                ui, "Name", &mut form.name, "Category name", false, [260.0, 28.0],
            )
            .changed();
            form_changed |= forms::render_text_input(
                ui, "Description", &mut form.description, "Optional", false, [260.0, 28.0],
            )
            .changed();

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
        app.state.write().categories.dialog = Some(form);
    }
    if save {
        app.handle_category_save_click();
    }
    if cancel {
        app.close_category_dialog();
    }
}
