//! # GUI Rendering
//!
//! Orchestrates the per-frame rendering pipeline. Every frame takes one
//! snapshot of the shared state, so the lock is never held while
//! widgets draw, and routes the central panel to the active screen
//! after the guard has had its say.

pub mod screens;
pub mod theme;
pub mod widgets;

use egui;

use crate::app::{App, Screen};
use crate::session::guard::{self, Decision};

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App) {
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            // Lock is held by a task, skip this frame.
            None => return,
        }
    };

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        widgets::nav_bar::render(ui, &state, app);
    });

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        widgets::status_bar::render(ui, &state);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let decision = guard::decide(&state.session, state.current_screen.access_level());
        match decision {
            Decision::Defer => {
                ui.vertical_centered(|ui| {
                    ui.add_space(160.0);
                    ui.spinner();
                    ui.label("Restoring session...");
                });
            }
            Decision::RedirectToLogin => {
                // on_tick() flips the screen next frame; render login
                // now so there is no protected-content flash.
                screens::login::render(ui, &state, app);
            }
            Decision::Allow => match state.current_screen {
                Screen::Login => screens::login::render(ui, &state, app),
                Screen::Dashboard => screens::dashboard::render(ui, &state, app),
                Screen::Register => screens::register::render(ui, &state, app),
                Screen::Products => screens::products::render(ui, &state, app),
                Screen::Categories => screens::categories::render(ui, &state, app),
                Screen::Users => screens::users::render(ui, &state, app),
                Screen::Sales => screens::sales::render(ui, &state, app),
            },
        }
    });
}
