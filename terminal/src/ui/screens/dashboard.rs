//! # Dashboard Screen
//!
//! Aggregate sales metrics and the top-sellers chart. Admin-only.

use egui;
use egui_plot::{Bar, BarChart, Plot};
use shared::SalesSummary;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format;

/// Render the dashboard
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Dashboard");
        if ui.button("Refresh").clicked() {
            app.refresh_dashboard();
        }
        if state.dashboard.loading {
            ui.spinner();
        }
    });
    ui.add_space(10.0);

    if let Some(error) = state.dashboard.error.as_deref() {
        forms::render_error(ui, error, &theme);
    }

    let Some(summary) = state.dashboard.summary.as_ref() else {
        if state.dashboard.loading {
            tables::render_loading(ui, "Loading metrics...");
        } else {
            tables::render_empty_state(ui, "No metrics yet", &theme);
        }
        return;
    };

    render_stat_cards(ui, summary, &theme);
    ui.add_space(16.0);
    render_top_products(ui, summary, &theme);
}

fn render_stat_cards(ui: &mut egui::Ui, summary: &SalesSummary, theme: &Theme) {
    ui.horizontal(|ui| {
        tables::render_stat_card(
            ui,
            "Sales today",
            &format::format_currency(summary.today_sales),
            theme.success,
            theme,
        );
        tables::render_stat_card(
            ui,
            "Sales this month",
            &format::format_currency(summary.month_sales),
            theme.selected,
            theme,
        );
        tables::render_stat_card(
            ui,
            "All-time sales",
            &format::format_currency(summary.total_sales),
            theme.text,
            theme,
        );
        tables::render_stat_card(
            ui,
            "Transactions today",
            &summary.today_count.to_string(),
            theme.info,
            theme,
        );
    });
}

fn render_top_products(ui: &mut egui::Ui, summary: &SalesSummary, theme: &Theme) {
    ui.label(egui::RichText::new("Top products").size(16.0).strong());
    ui.add_space(6.0);

    if summary.top_products.is_empty() {
        tables::render_empty_state(ui, "No product has sold yet", theme);
        return;
    }

    let bars: Vec<Bar> = summary
        .top_products
        .iter()
        .enumerate()
        .map(|(index, product)| {
            Bar::new(index as f64, product.total_sold as f64)
                .name(&product.name)
                .width(0.6)
                .fill(theme.selected)
        })
        .collect();

    let names: Vec<String> = summary
        .top_products
        .iter()
        .map(|product| product.name.clone())
        .collect();

    Plot::new("top_products_chart")
        .height(260.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_grid(false)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > f64::EPSILON || index < 0.0 {
                return String::new();
            }
            names.get(index as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("units_sold", bars));
        });
}
