//! Form generation, submission and result rendering for the `/predict` endpoint.

pub mod api;
pub mod features;
pub mod form;
pub mod result;
pub mod session;

pub use api::{EndpointError, PredictError, PredictionApi};
pub use features::{FeatureList, FeatureOrigin, load_features};
pub use form::{FormField, FormState, Payload};
pub use result::{PLACEHOLDER, PredictionResponse, ResultDisplay};
pub use session::FormSession;
