//! Library exports for the AquaSafe client binaries and tests.
/// Application directory resolution.
pub mod app_dirs;
/// Settings file handling.
pub mod config;
/// egui front-end.
pub mod egui_app;
/// Shared HTTP agent helpers.
pub mod http_client;
/// Tracing setup.
pub mod logging;
/// Prediction requests, validation and wire types.
pub mod prediction;
