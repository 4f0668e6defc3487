//! # PDV Terminal Entry Point
//!
//! Sets up logging, builds the [`App`] (restoring any persisted
//! session) and hands control to eframe.

use pdv_terminal::app::App;
use pdv_terminal::ui::{self, theme, widgets::notifications::NotificationManager};

struct TerminalWindow {
    app: App,
    notifications: NotificationManager,
}

impl TerminalWindow {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::apply(&cc.egui_ctx);
        Self {
            app: App::new(),
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for TerminalWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain async results and enforce the route guard first, so the
        // frame renders the post-event state.
        self.app.on_tick();

        let pending = {
            let mut state = self.app.state.write();
            std::mem::take(&mut state.pending_notifications)
        };
        for (kind, message) in pending {
            self.notifications.push(kind, message);
        }

        ui::render(ctx, &mut self.app);
        self.notifications.show(ctx);

        // Background tasks finish between frames; poll at a gentle rate
        // even without input so their events are picked up promptly.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting PDV terminal");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title("PDV Terminal"),
        ..Default::default()
    };

    eframe::run_native(
        "PDV Terminal",
        options,
        Box::new(|cc| Ok(Box::new(TerminalWindow::new(cc)))),
    )
}
