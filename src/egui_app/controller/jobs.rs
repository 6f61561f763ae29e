use crate::prediction::{FeatureList, Payload, PredictError, PredictionApi, PredictionResponse};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    FeaturesLoaded(FeatureLoadResult),
    PredictionFinished(PredictionResult),
}

#[derive(Debug)]
pub(crate) struct FeatureLoadResult {
    pub(crate) features: FeatureList,
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) api: PredictionApi,
    pub(crate) payload: Payload,
}

#[derive(Debug)]
pub(crate) struct PredictionResult {
    pub(crate) result: Result<PredictionResponse, PredictError>,
}

/// Worker threads for the two network operations, reporting over one channel.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    feature_load_in_progress: bool,
    prediction_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            feature_load_in_progress: false,
            prediction_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn feature_load_in_progress(&self) -> bool {
        self.feature_load_in_progress
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.prediction_in_progress
    }

    pub(super) fn begin_feature_load(&mut self, api: PredictionApi) {
        if self.feature_load_in_progress {
            return;
        }
        self.feature_load_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let features = crate::prediction::load_features(&api);
            let _ = tx.send(JobMessage::FeaturesLoaded(FeatureLoadResult { features }));
        });
    }

    pub(super) fn clear_feature_load(&mut self) {
        self.feature_load_in_progress = false;
    }

    pub(super) fn begin_prediction(&mut self, job: PredictionJob) {
        if self.prediction_in_progress {
            return;
        }
        self.prediction_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = job.api.predict(&job.payload);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionResult { result }));
        });
    }

    pub(super) fn clear_prediction(&mut self) {
        self.prediction_in_progress = false;
    }
}
