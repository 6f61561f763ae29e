use super::{EguiApp, ids, style};
use eframe::egui::{self, Color32, RichText};

impl EguiApp {
    pub(super) fn render_results(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let results = &self.controller.ui.results;
        ui.heading(RichText::new("Prediction").color(palette.text_primary));
        ui.add_space(6.0);
        egui::Grid::new("results_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                result_row(ui, ids::PROBABILITY, "Probability", &results.probability, palette.accent_mint);
                result_row(
                    ui,
                    ids::PREDICTION_DEFAULT,
                    "Prediction (0.5 cutoff)",
                    &results.prediction_default,
                    palette.text_primary,
                );
                result_row(
                    ui,
                    ids::PREDICTION_THRESHOLD,
                    "Prediction (tuned threshold)",
                    &results.prediction_threshold,
                    palette.text_primary,
                );
                result_row(ui, ids::THRESHOLD, "Threshold", &results.threshold, palette.accent_ice);
            });
        if let Some(used) = &results.used_features {
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Server used: {}", used.join(", ")))
                    .color(palette.text_muted)
                    .small(),
            );
        }
    }
}

fn result_row(ui: &mut egui::Ui, id: &str, label: &str, value: &str, color: Color32) {
    ui.label(RichText::new(label).color(style::palette().text_muted));
    ui.push_id(id, |ui| {
        ui.label(RichText::new(value).monospace().strong().color(color));
    });
    ui.end_row();
}
