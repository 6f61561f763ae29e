//! HTTP client for the feature asset and the prediction endpoint.

use serde::Deserialize;
use url::Url;

use super::features::{FeatureListError, parse_feature_list};
use super::form::Payload;
use super::result::{PredictionResponse, ResponseShapeError};
use crate::config::ServerSettings;
use crate::http_client;

const MAX_FEATURES_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_PREDICT_RESPONSE_BYTES: usize = 256 * 1024;
/// Message used when a rejection carries no `error` field.
pub const UNKNOWN_ERROR: &str = "unknown";

#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("Invalid server URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Failure of a single `/predict` call.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl PredictError {
    /// Text for the blocking alert shown to the user.
    pub fn alert_message(&self) -> String {
        format!("Error: {self}")
    }
}

/// Resolved endpoint URLs for one server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionApi {
    features_url: Url,
    predict_url: Url,
}

impl PredictionApi {
    pub fn new(settings: &ServerSettings) -> Result<Self, EndpointError> {
        let base = parse_url(&settings.server_url)?;
        Ok(Self {
            features_url: join(&base, &settings.features_path)?,
            predict_url: join(&base, &settings.predict_path)?,
        })
    }

    pub fn features_url(&self) -> &Url {
        &self.features_url
    }

    pub fn predict_url(&self) -> &Url {
        &self.predict_url
    }

    /// GET the static feature list.
    pub fn fetch_feature_list(&self) -> Result<Vec<String>, FeatureListError> {
        let response = match http_client::agent()
            .get(self.features_url.as_str())
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(FeatureListError::Status(code)),
            Err(ureq::Error::Transport(err)) => {
                return Err(FeatureListError::Transport(err.to_string()));
            }
        };
        let body = http_client::read_response_bytes(response, MAX_FEATURES_RESPONSE_BYTES)
            .map_err(|err| FeatureListError::Body(err.to_string()))?;
        parse_feature_list(&body)
    }

    /// POST `payload` as JSON and parse the prediction.
    pub fn predict(&self, payload: &Payload) -> Result<PredictionResponse, PredictError> {
        tracing::debug!(
            url = %self.predict_url,
            fields = payload.len(),
            nulls = payload.null_count(),
            "Submitting prediction"
        );
        let request = http_client::agent()
            .post(self.predict_url.as_str())
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");
        let response = match request.send_json(payload) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = http_client::read_response_text(response, MAX_PREDICT_RESPONSE_BYTES)
                    .unwrap_or_default();
                return Err(PredictError::Rejected {
                    status: code,
                    message: rejection_message(&body),
                });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(PredictError::Transport(err.to_string()));
            }
        };
        let body = http_client::read_response_text(response, MAX_PREDICT_RESPONSE_BYTES)
            .map_err(|err| PredictError::InvalidResponse(err.to_string()))?;
        PredictionResponse::from_body(&body)
            .map_err(|err: ResponseShapeError| PredictError::InvalidResponse(err.to_string()))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// The `error` string of a rejection body, or [`UNKNOWN_ERROR`].
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body.trim())
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

fn parse_url(raw: &str) -> Result<Url, EndpointError> {
    Url::parse(raw.trim()).map_err(|source| EndpointError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn join(base: &Url, path: &str) -> Result<Url, EndpointError> {
    base.join(path).map_err(|source| EndpointError::InvalidUrl {
        url: format!("{base}{path}"),
        source,
    })
}
