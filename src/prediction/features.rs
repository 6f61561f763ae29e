//! Feature-list loading with a built-in fallback.

use super::api::PredictionApi;

/// Feature names used whenever the remote list cannot be loaded.
pub const FALLBACK_FEATURES: [&str; 8] = [
    "agg",
    "col",
    "nb_usagers",
    "nb_vehicules",
    "v1",
    "plan",
    "situ",
    "vma",
];

/// Where a [`FeatureList`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureOrigin {
    Remote,
    Fallback,
}

/// Ordered feature names the backend expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureList {
    names: Vec<String>,
    origin: FeatureOrigin,
}

impl FeatureList {
    pub fn remote(names: Vec<String>) -> Self {
        Self {
            names,
            origin: FeatureOrigin::Remote,
        }
    }

    /// The built-in eight-name list.
    pub fn fallback() -> Self {
        Self {
            names: FALLBACK_FEATURES.iter().map(|name| name.to_string()).collect(),
            origin: FeatureOrigin::Fallback,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn origin(&self) -> FeatureOrigin {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Reasons the remote feature list could not be used.
#[derive(Debug, thiserror::Error)]
pub enum FeatureListError {
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Server answered HTTP {0}")]
    Status(u16),
    #[error("Unreadable body: {0}")]
    Body(String),
    #[error("Expected a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a body that must be a JSON array of strings.
pub fn parse_feature_list(body: &[u8]) -> Result<Vec<String>, FeatureListError> {
    Ok(serde_json::from_slice::<Vec<String>>(body)?)
}

/// Fetch the feature list, substituting [`FeatureList::fallback`] on any failure.
pub fn load_features(api: &PredictionApi) -> FeatureList {
    resolve_feature_list(api.fetch_feature_list())
}

/// Turn a fetch outcome into the list the form is built from.
pub fn resolve_feature_list(fetched: Result<Vec<String>, FeatureListError>) -> FeatureList {
    match fetched {
        Ok(names) => {
            tracing::info!(count = names.len(), "Loaded feature list");
            FeatureList::remote(names)
        }
        Err(err) => {
            tracing::warn!("Feature list unavailable, using built-in list: {err}");
            FeatureList::fallback()
        }
    }
}
