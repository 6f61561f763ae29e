//! egui renderer for the prediction form.

mod alert;
mod chrome;
mod form_panel;
mod overlay_layers;
mod results_panel;
pub mod style;

use std::time::Duration;

use crate::config::AppSettings;
use crate::egui_app::controller::EguiController;
use eframe::egui;

/// Smallest window that still fits the form and the feature list.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 480.0);
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Widget ids of the form's element contract.
pub mod ids {
    pub const FEATURES: &str = "features";
    pub const FEATURE_LIST: &str = "feat-list";
    pub const PREDICT_FORM: &str = "predict-form";
    pub const USE_SAMPLE: &str = "use-sample";
    pub const RESET: &str = "reset";
    pub const PROBABILITY: &str = "prob";
    pub const PREDICTION_DEFAULT: &str = "pred-default";
    pub const PREDICTION_THRESHOLD: &str = "pred-thr";
    pub const THRESHOLD: &str = "thr";
}

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Wrap `controller` and start loading the feature list.
    pub fn new(mut controller: EguiController) -> Self {
        controller.load_features();
        Self {
            controller,
            visuals_set: false,
        }
    }

    /// Create the app from the persisted configuration.
    pub fn from_config() -> Result<Self, String> {
        let mut controller = EguiController::new(AppSettings::default());
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self::new(controller))
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_jobs();
        if self.controller.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
        let alert_open = self.controller.ui.alert.is_some();
        if alert_open {
            ctx.memory_mut(|memory| memory.stop_text_input());
        }
        self.render_top_bar(ctx, alert_open);
        self.render_status(ctx);
        self.render_feature_list(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!alert_open, |ui| {
                self.render_form(ui);
                ui.add_space(16.0);
                ui.separator();
                self.render_results(ui);
            });
        });
        self.render_alert(ctx);
    }
}
