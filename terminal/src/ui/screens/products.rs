//! # Product Management Screen
//!
//! Admin-only product table with search, category filter, quick stock
//! adjustment and a create/edit dialog.

use egui;
use egui_extras::{Column, TableBuilder};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format;

/// Render the product management screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Products");
        if ui.button("New product").clicked() {
            app.open_product_create_dialog();
        }
        if state.products.loading {
            ui.spinner();
        }
    });
    ui.add_space(6.0);

    render_filters(ui, state, app);

    if let Some(error) = state.products.error.as_deref() {
        forms::render_error(ui, error, &theme);
    }

    ui.add_space(6.0);
    if state.products.items.is_empty() && !state.products.loading {
        tables::render_empty_state(ui, "No products found", &theme);
    } else {
        render_table(ui, state, app, &theme);
    }

    if state.products.dialog.is_some() {
        render_dialog(ui.ctx(), state, app, &theme);
    }
}

fn render_filters(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        let mut search = state.products.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search by name...")
                .desired_width(220.0),
        );
        if response.changed() {
            app.state.write().products.search = search;
            app.refresh_admin_products();
        }

        let selected_name = state
            .products
            .category_filter
            .and_then(|id| {
                state
                    .categories
                    .items
                    .iter()
                    .find(|category| category.id == id)
            })
            .map(|category| category.name.clone())
            .unwrap_or_else(|| "All categories".to_string());

        let mut filter = state.products.category_filter;
        let mut changed = false;
        egui::ComboBox::from_id_salt("product_category_filter")
            .selected_text(selected_name)
            .show_ui(ui, |ui| {
                changed |= ui.selectable_value(&mut filter, None, "All categories").changed();
                for category in &state.categories.items {
                    changed |= ui
                        .selectable_value(&mut filter, Some(category.id), &category.name)
                        .changed();
                }
            });
        if changed {
            app.state.write().products.category_filter = filter;
            app.refresh_admin_products();
        }
    });
}

fn render_table(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(170.0))
        .column(Column::auto().at_least(130.0))
        .header(22.0, |mut header| {
            for title in ["Name", "Price", "Stock", "Category", "Adjust stock", "Actions"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for product in &state.products.items {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&product.name);
                    });
                    row.col(|ui| {
                        ui.label(format::format_currency(product.price));
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(product.stock.to_string())
                                .color(theme.stock_color(product.stock)),
                        );
                    });
                    row.col(|ui| {
                        let name = product
                            .category_id
                            .and_then(|id| {
                                state
                                    .categories
                                    .items
                                    .iter()
                                    .find(|category| category.id == id)
                            })
                            .map(|category| category.name.as_str())
                            .unwrap_or("-");
                        ui.label(name);
                    });
                    row.col(|ui| {
                        let mut entry = state
                            .products
                            .stock_edits
                            .get(&product.id)
                            .cloned()
                            .unwrap_or_else(|| product.stock.to_string());
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut entry).desired_width(60.0),
                        );
                        if response.changed() {
                            app.state
                                .write()
                                .products
                                .stock_edits
                                .insert(product.id, entry);
                        }
                        if ui.button("Set").clicked() {
                            app.handle_stock_apply_click(product.id);
                        }
                    });
                    row.col(|ui| {
                        if ui.button("Edit").clicked() {
                            app.open_product_edit_dialog(product.id);
                        }
                        if ui.button("Delete").clicked() {
                            app.handle_product_delete_click(product.id);
                        }
                    });
                });
            }
        });
}

fn render_dialog(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(dialog) = state.products.dialog.as_ref() else {
        return;
    };
    let title = if dialog.editing_id.is_some() {
        "Edit product"
    } else {
        "New product"
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
                ui, "Name", &mut form.name, "Product name", false, [260.0, 28.0],
            )
            .changed();
            form_changed |= forms::render_text_input(
                ui, "Description", &mut form.description, "Optional", false, [260.0, 28.0],
            )
            .changed();
            form_changed |= forms::render_text_input(
                ui, "Price", &mut form.price, "0.00", false, [120.0, 28.0],
            )
            .changed();
            form_changed |= forms::render_text_input(
                ui, "Stock", &mut form.stock, "0", false, [120.0, 28.0],
            )
            .changed();

            ui.label("Category");
            let selected_name = form
                .category_id
                .and_then(|id| {
                    state
                        .categories
                        .items
                        .iter()
                        .find(|category| category.id == id)
                })
                .map(|category| category.name.clone())
                .unwrap_or_else(|| "None".to_string());
            egui::ComboBox::from_id_salt("product_dialog_category")
                .selected_text(selected_name)
                .show_ui(ui, |ui| {
                    form_changed |= ui
                        .selectable_value(&mut form.category_id, None, "None")
                        .changed();
                    for category in &state.categories.items {
                        form_changed |= ui
                            .selectable_value(&mut form.category_id, Some(category.id), &category.name)
                            .changed();
                    }
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
        app.state.write().products.dialog = Some(form);
    }
    if save {
        app.handle_product_save_click();
    }
    if cancel {
        app.close_product_dialog();
    }
}
