//! egui front end: controller, plain UI state and the renderer.

/// Bridges the prediction client and background jobs to the view.
pub mod controller;
/// UI state shared between the controller and the renderer.
pub mod state;
/// egui rendering.
pub mod ui;
