use super::{EguiApp, ids, style};
use crate::prediction::FormState;
use eframe::egui::{self, RichText};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormAction {
    None,
    Submit,
    UseSample,
    Reset,
}

impl EguiApp {
    /// Render one labeled input per feature plus the form buttons.
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let in_flight = self.controller.prediction_in_flight();
        let ready = self.controller.session().is_some();
        let blocked = self.controller.ui.alert.is_some();
        let mut action = FormAction::None;

        ui.push_id(ids::PREDICT_FORM, |ui| {
            ui.heading(RichText::new("Accident features").color(palette.text_primary));
            ui.add_space(6.0);
            match self.controller.session_mut() {
                None => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Loading features…").color(palette.text_muted));
                    });
                }
                Some(session) if session.form().is_empty() => {
                    ui.label(RichText::new("The server listed no features.").color(palette.text_muted));
                }
                Some(session) => {
                    if render_fields(ui, session.form_mut()) && !blocked {
                        action = FormAction::Submit;
                    }
                }
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(ready && !in_flight, egui::Button::new("Predict"))
                    .clicked()
                {
                    action = FormAction::Submit;
                }
                let sample = ui.push_id(ids::USE_SAMPLE, |ui| {
                    ui.add_enabled(ready, egui::Button::new("Use sample"))
                });
                if sample.inner.clicked() {
                    action = FormAction::UseSample;
                }
                let reset = ui.push_id(ids::RESET, |ui| ui.button("Reset"));
                if reset.inner.clicked() {
                    action = FormAction::Reset;
                }
                if in_flight {
                    ui.spinner();
                }
            });
        });

        if blocked {
            return;
        }
        match action {
            FormAction::None => {}
            FormAction::Submit => self.controller.submit_prediction(),
            FormAction::UseSample => self.controller.fill_sample(),
            FormAction::Reset => self.controller.reset_form(),
        }
    }
}

/// Draw the input grid. Returns true when Enter was pressed in a field.
fn render_fields(ui: &mut egui::Ui, form: &mut FormState) -> bool {
    let mut submit = false;
    egui::ScrollArea::vertical()
        .id_salt(ids::FEATURES)
        .max_height(ui.available_height() * 0.6)
        .show(ui, |ui| {
            egui::Grid::new(ids::FEATURES)
                .num_columns(2)
                .spacing([12.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    for field in form.fields_mut() {
                        ui.label(&field.feature);
                        let input = egui::TextEdit::singleline(&mut field.value)
                            .id(egui::Id::new(field.id.as_str()))
                            .hint_text("number")
                            .desired_width(160.0);
                        let response = ui.add(input);
                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            submit = true;
                        }
                        ui.end_row();
                    }
                });
        });
    submit
}
