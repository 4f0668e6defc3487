//! # Register Screen
//!
//! The point-of-sale surface: product grid on the left, cart on the
//! right. Every stock warning here is advisory; the backend makes the
//! final call when the sale is submitted.

use egui;
use shared::Product;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format;

/// Render the register screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.columns(2, |columns| {
        render_catalog(&mut columns[0], state, app, &theme);
        render_cart(&mut columns[1], state, app, &theme);
    });
}

fn render_catalog(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.heading("Products");
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        let mut search = state.register.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search by name...")
                .desired_width(220.0),
        );
        if response.changed() {
            app.state.write().register.search = search;
            // Responses are sequence-numbered, so typing fast cannot
            // leave a stale list behind.
            app.refresh_register_products();
        }
        if ui.button("Refresh").clicked() {
            app.refresh_register_products();
        }
        if state.register.loading {
            ui.spinner();
        }
    });

    if let Some(error) = state.register.error.as_deref() {
        forms::render_error(ui, error, theme);
    }
    if let Some(success) = state.register.success.as_deref() {
        forms::render_success(ui, success, theme);
    }

    ui.add_space(6.0);
    if state.register.products.is_empty() && !state.register.loading {
        tables::render_empty_state(ui, "No products found", theme);
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("register_catalog")
        .show(ui, |ui| {
            for product in &state.register.products {
                render_product_row(ui, product, app, theme);
            }
        });
}

fn render_product_row(ui: &mut egui::Ui, product: &Product, app: &mut App, theme: &Theme) {
    let in_stock = product.stock > 0;

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&product.name).strong());
                    ui.label(
                        egui::RichText::new(format!(
                            "{}  |  stock: {}",
                            format::format_currency(product.price),
                            product.stock
                        ))
                        .color(theme.stock_color(product.stock))
                        .size(12.0),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if in_stock {
                        if ui.button("Add").clicked() {
                            app.handle_add_to_cart(product.id);
                        }
                    } else {
                        ui.label(egui::RichText::new("out of stock").color(theme.error).size(12.0));
                    }
                });
            });
        });
}

fn render_cart(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let cart = &state.register.cart;

    ui.heading("Cart");
    ui.add_space(6.0);

    if cart.is_empty() {
        tables::render_empty_state(ui, "Cart is empty", theme);
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("register_cart")
        .max_height(ui.available_height() - 120.0)
        .show(ui, |ui| {
            for line in cart.lines() {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&line.name).strong());
                        ui.label(
                            egui::RichText::new(format!(
                                "{} x {} = {}",
                                line.quantity,
                                format::format_currency(line.unit_price),
                                format::format_currency(line.subtotal())
                            ))
                            .size(12.0),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("x").clicked() {
                            app.handle_remove_cart_line(line.product_id);
                        }
                        if ui.button("+").clicked() {
                            app.handle_set_quantity(
                                line.product_id,
                                i64::from(line.quantity) + 1,
                            );
                        }
                        if ui.button("-").clicked() {
                            app.handle_set_quantity(
                                line.product_id,
                                i64::from(line.quantity) - 1,
                            );
                        }
                    });
                });
                ui.separator();
            }
        });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Total").size(16.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format::format_currency(cart.total()))
                    .size(20.0)
                    .strong()
                    .color(theme.success),
            );
        });
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if cart.is_submitting() {
            ui.spinner();
            forms::render_hint(ui, "Recording sale...", theme);
        } else {
            if forms::render_button(
                ui,
                "Finalize sale",
                Some(theme.success),
                Some(egui::vec2(130.0, 34.0)),
            )
            .clicked()
            {
                app.handle_checkout_click();
            }
            if ui.button("Clear").clicked() {
                app.handle_clear_cart();
            }
        }
    });
}
