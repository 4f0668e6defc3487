//! # Sales History Screen
//!
//! Paginated sales table with date filters, summary cards for the
//! loaded page and a per-sale detail popup.

use egui;
use egui_extras::{Column, TableBuilder};
use rust_decimal::Decimal;
use shared::Sale;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format;

/// Render the sales history screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Sales");
        if state.sales.loading {
            ui.spinner();
        }
    });
    ui.add_space(6.0);

    render_filters(ui, state, app, &theme);

    if let Some(error) = state.sales.error.as_deref() {
        forms::render_error(ui, error, &theme);
    }

    ui.add_space(6.0);
    render_page_stats(ui, state, &theme);
    ui.add_space(6.0);

    if state.sales.sales.is_empty() && !state.sales.loading {
        tables::render_empty_state(ui, "No sales in this period", &theme);
    } else {
        render_table(ui, state, app);
        ui.add_space(8.0);
        render_pagination(ui, state, app);
    }

    if state.sales.detail.is_some() || state.sales.detail_loading {
        render_detail(ui.ctx(), state, app, &theme);
    }
}

fn render_filters(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        let mut start = state.sales.start_date.clone();
        let mut end = state.sales.end_date.clone();

        ui.label("From");
        let start_response = ui.add(
            egui::TextEdit::singleline(&mut start)
                .hint_text("YYYY-MM-DD")
                .desired_width(100.0),
        );
        ui.label("to");
        let end_response = ui.add(
            egui::TextEdit::singleline(&mut end)
                .hint_text("YYYY-MM-DD")
                .desired_width(100.0),
        );

        if start_response.changed() || end_response.changed() {
            let mut state = app.state.write();
            state.sales.start_date = start;
            state.sales.end_date = end;
        }

        if ui.button("Apply").clicked() {
            app.handle_sales_filter_apply();
        }
        if ui.button("Clear").clicked() {
            {
                let mut state = app.state.write();
                state.sales.start_date.clear();
                state.sales.end_date.clear();
            }
            app.handle_sales_filter_apply();
        }
    });

    if let Some(error) = state.sales.filter_error.as_deref() {
        forms::render_error(ui, error, theme);
    }
}

fn render_page_stats(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let page_total: Decimal = state.sales.sales.iter().map(|sale| sale.total_amount).sum();

    ui.horizontal(|ui| {
        tables::render_stat_card(
            ui,
            "Sales in period",
            &state.sales.total.to_string(),
            theme.text,
            theme,
        );
        tables::render_stat_card(
            ui,
            "Total on this page",
            &format::format_currency(page_total),
            theme.success,
            theme,
        );
    });
}

fn render_table(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(130.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder().at_least(90.0))
        .header(22.0, |mut header| {
            for title in ["#", "Date", "Operator", "Total", ""] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for sale in &state.sales.sales {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(sale.id.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format::format_datetime(sale.timestamp));
                    });
                    row.col(|ui| {
                        ui.label(&sale.user_username);
                    });
                    row.col(|ui| {
                        ui.label(format::format_currency(sale.total_amount));
                    });
                    row.col(|ui| {
                        if ui.button("Details").clicked() {
                            app.handle_sale_detail_click(sale.id);
                        }
                    });
                });
            }
        });
}

fn render_pagination(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        let page = state.sales.page;
        let pages = state.sales.pages;

        if ui.add_enabled(page > 1, egui::Button::new("< Prev")).clicked() {
            app.handle_sales_page_change(page - 1);
        }
        ui.label(format!("Page {} of {}", page, pages));
        if ui
            .add_enabled(page < pages, egui::Button::new("Next >"))
            .clicked()
        {
            app.handle_sales_page_change(page + 1);
        }
    });
}

fn render_detail(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let mut close = false;

    egui::Window::new("Sale detail")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            match state.sales.detail.as_ref() {
                None => {
                    ui.spinner();
                    forms::render_hint(ui, "Loading sale...", theme);
                }
                Some(sale) => render_detail_body(ui, sale, theme),
            }

            ui.add_space(10.0);
            if ui.button("Close").clicked() {
                close = true;
            }
        });

    if close {
        app.close_sale_detail();
    }
}

fn render_detail_body(ui: &mut egui::Ui, sale: &Sale, theme: &Theme) {
    ui.label(egui::RichText::new(format!("Sale #{}", sale.id)).size(16.0).strong());
    ui.label(
        egui::RichText::new(format!(
            "{}  by {}",
            format::format_datetime(sale.timestamp),
            sale.user_username
        ))
        .color(theme.dim),
    );
    ui.add_space(8.0);

    egui::Grid::new("sale_detail_items")
        .num_columns(4)
        .striped(true)
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Product").strong());
            ui.label(egui::RichText::new("Qty").strong());
            ui.label(egui::RichText::new("Unit price").strong());
            ui.label(egui::RichText::new("Subtotal").strong());
            ui.end_row();

            for item in &sale.items {
                ui.label(&item.product_name);
                ui.label(item.quantity.to_string());
                ui.label(format::format_currency(item.price_at_sale));
                ui.label(format::format_currency(item.subtotal));
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(format!("Total: {}", format::format_currency(sale.total_amount)))
            .size(16.0)
            .strong()
            .color(theme.success),
    );
}
