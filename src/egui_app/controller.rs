//! Maintains app state and bridges the prediction client to the egui UI.

mod jobs;

use crate::config::{self, AppSettings, ConfigError};
use crate::egui_app::state::{StatusTone, UiState};
use crate::prediction::{FeatureOrigin, FormSession, PredictionApi};
use jobs::{ControllerJobs, FeatureLoadResult, JobMessage, PredictionJob, PredictionResult};

pub struct EguiController {
    pub ui: UiState,
    settings: AppSettings,
    /// Write server changes back to `config.toml`.
    persist_settings: bool,
    session: Option<FormSession>,
    jobs: ControllerJobs,
}

impl EguiController {
    /// Controller over `settings`; nothing is written to disk.
    pub fn new(settings: AppSettings) -> Self {
        let mut ui = UiState::default();
        ui.server_url_input = settings.server.server_url.clone();
        Self {
            ui,
            settings,
            persist_settings: false,
            session: None,
            jobs: ControllerJobs::new(),
        }
    }

    /// Load persisted config; later server changes are saved back.
    pub fn load_configuration(&mut self) -> Result<(), ConfigError> {
        self.settings = config::load_or_default()?;
        self.ui.server_url_input = self.settings.server.server_url.clone();
        self.persist_settings = true;
        Ok(())
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// The loaded feature list and form, once the first load finished.
    pub fn session(&self) -> Option<&FormSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut FormSession> {
        self.session.as_mut()
    }

    pub fn features_loading(&self) -> bool {
        self.jobs.feature_load_in_progress()
    }

    pub fn prediction_in_flight(&self) -> bool {
        self.jobs.prediction_in_progress()
    }

    pub fn is_busy(&self) -> bool {
        self.features_loading() || self.prediction_in_flight()
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text.into(), tone);
    }

    /// Start fetching the feature list; the form is rebuilt when it arrives.
    pub fn load_features(&mut self) {
        if self.features_loading() {
            return;
        }
        let api = match PredictionApi::new(&self.settings.server) {
            Ok(api) => api,
            Err(err) => {
                tracing::warn!("{err}");
                self.set_status(err.to_string(), StatusTone::Error);
                return;
            }
        };
        tracing::info!(url = %api.features_url(), "Loading feature list");
        self.jobs.begin_feature_load(api);
        self.set_status("Loading features…", StatusTone::Busy);
    }

    /// Adopt the server URL typed into the top bar and reload the features.
    /// Refused while a feature load or a prediction is running.
    pub fn apply_server_url(&mut self) {
        if self.features_loading() {
            self.set_status("Features are still loading", StatusTone::Warning);
            return;
        }
        if self.prediction_in_flight() {
            self.set_status("A prediction is still running", StatusTone::Warning);
            return;
        }
        let mut server = self.settings.server.clone();
        server.server_url = self.ui.server_url_input.trim().to_string();
        let server = server.normalized();
        if let Err(err) = PredictionApi::new(&server) {
            self.set_status(err.to_string(), StatusTone::Error);
            return;
        }
        self.ui.server_url_input = server.server_url.clone();
        if server != self.settings.server {
            self.settings.server = server;
            self.persist();
        }
        self.load_features();
    }

    fn persist(&mut self) {
        if !self.persist_settings {
            return;
        }
        if let Err(err) = config::save(&self.settings) {
            tracing::warn!("Failed to save config: {err}");
            self.set_status(format!("Failed to save config: {err}"), StatusTone::Warning);
        }
    }

    /// Submit the current inputs. Ignored while a prediction is in flight
    /// or the failure alert is still up.
    pub fn submit_prediction(&mut self) {
        if self.prediction_in_flight() || self.ui.alert.is_some() {
            return;
        }
        let Some(session) = self.session.as_ref() else {
            self.set_status("Features are not loaded yet", StatusTone::Warning);
            return;
        };
        let payload = session.payload();
        let api = match PredictionApi::new(&self.settings.server) {
            Ok(api) => api,
            Err(err) => {
                self.ui.alert = Some(format!("Error: {err}"));
                return;
            }
        };
        tracing::info!(
            url = %api.predict_url(),
            nulls = payload.null_count(),
            "Submitting prediction"
        );
        self.jobs.begin_prediction(PredictionJob { api, payload });
        self.set_status("Predicting…", StatusTone::Busy);
    }

    pub fn fill_sample(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.fill_sample();
        }
    }

    /// Clear every input and put the result fields back to placeholders.
    pub fn reset_form(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.clear_inputs();
        }
        self.ui.results.reset();
    }

    pub fn dismiss_alert(&mut self) {
        self.ui.alert = None;
    }

    /// Apply every finished job. Call once per frame.
    pub fn poll_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::FeaturesLoaded(message) => self.handle_features_loaded(message),
                JobMessage::PredictionFinished(message) => self.handle_prediction_finished(message),
            }
        }
    }

    fn handle_features_loaded(&mut self, message: FeatureLoadResult) {
        self.jobs.clear_feature_load();
        let features = message.features;
        let (text, tone) = match features.origin() {
            FeatureOrigin::Remote => (format!("Loaded {} features", features.len()), StatusTone::Info),
            FeatureOrigin::Fallback => (
                format!("Using built-in list of {} features", features.len()),
                StatusTone::Warning,
            ),
        };
        self.session = Some(FormSession::new(features));
        self.set_status(text, tone);
    }

    fn handle_prediction_finished(&mut self, message: PredictionResult) {
        self.jobs.clear_prediction();
        match message.result {
            Ok(response) => {
                self.ui.results.render(&response);
                let text = format!("Probability {}", self.ui.results.probability);
                self.set_status(text, StatusTone::Info);
            }
            Err(err) => {
                tracing::warn!("Prediction failed: {err}");
                self.ui.alert = Some(err.alert_message());
                self.set_status(format!("Prediction failed: {err}"), StatusTone::Error);
            }
        }
    }
}
