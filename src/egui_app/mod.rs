//! Desktop UI for submitting measurements and showing the verdict.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
