use super::overlay_layers::{OverlayLayer, modal_backdrop};
use super::{EguiApp, style};
use crate::egui_app::state::StatusTone;
use eframe::egui::{self, Align2, Color32, RichText};

impl EguiApp {
    /// Blocking alert for a failed prediction; input behind it is swallowed.
    pub(super) fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.controller.ui.alert.clone() else {
            return;
        };
        modal_backdrop(
            ctx,
            "alert_modal",
            Color32::from_rgba_premultiplied(0, 0, 0, 160),
        );
        let mut dismiss =
            ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter));
        egui::Window::new("Prediction failed")
            .id(egui::Id::new("alert_window"))
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(OverlayLayer::Modal.order())
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                let (_, color) = style::status_badge(StatusTone::Error);
                ui.label(RichText::new(&message).color(color));
                ui.add_space(8.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismiss = true;
                    }
                });
            });
        if dismiss {
            self.controller.dismiss_alert();
        }
    }
}
