use super::{EguiApp, ids, style};
use crate::prediction::FeatureOrigin;
use eframe::egui::{self, Frame, Margin, RichText};

impl EguiApp {
    /// Server URL editor and reload button. Inert while `blocked`.
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context, blocked: bool) {
        let palette = style::palette();
        let loading = self.controller.features_loading();
        let can_reload = !blocked && !self.controller.is_busy();
        let mut apply = false;
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Severity Dash").strong().color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new("Server").color(palette.text_muted));
                    let response = ui.add_enabled(
                        !blocked,
                        egui::TextEdit::singleline(&mut self.controller.ui.server_url_input)
                            .desired_width(280.0),
                    );
                    if can_reload
                        && response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    {
                        apply = true;
                    }
                    if ui
                        .add_enabled(can_reload, egui::Button::new("Reload features"))
                        .clicked()
                    {
                        apply = true;
                    }
                    if loading {
                        ui.spinner();
                    }
                });
            });
        if apply {
            self.controller.apply_server_url();
        }
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let status = self.controller.ui.status.clone();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (label, color) = style::status_badge(status.tone);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().circle_filled(badge_rect.center(), 6.0, color);
                    ui.label(RichText::new(label).color(palette.text_primary));
                    ui.separator();
                    let response = ui.label(RichText::new(&status.text).color(palette.text_primary));
                    if !status.log.is_empty() {
                        response.on_hover_text(status.log_text());
                    }
                });
            });
    }

    /// Read-only mirror of the loaded feature names.
    pub(super) fn render_feature_list(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::SidePanel::right(ids::FEATURE_LIST)
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(RichText::new("Model features").strong().color(palette.text_primary));
                ui.add_space(4.0);
                let Some(session) = self.controller.session() else {
                    return;
                };
                egui::ScrollArea::vertical()
                    .id_salt(ids::FEATURE_LIST)
                    .show(ui, |ui| {
                        for name in session.form().feature_names() {
                            ui.label(RichText::new(format!("• {name}")).monospace());
                        }
                    });
                if session.features().origin() == FeatureOrigin::Fallback {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("Built-in list (server list unavailable)")
                            .color(palette.text_muted)
                            .small(),
                    );
                }
            });
    }
}
