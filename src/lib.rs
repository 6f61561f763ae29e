//! Desktop client for the accident severity `/predict` endpoint.
/// Application directory resolution.
pub mod app_dirs;
/// Persistent client settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
mod http_client;
/// Logging setup.
pub mod logging;
/// Feature list, form model, submission and result rendering.
pub mod prediction;
#[cfg(test)]
mod test_support;
