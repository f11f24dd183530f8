//! Shared egui UI modules.
/// Form controller that owns the sample store and the view state.
pub mod controller;
/// Plain state types consumed by the renderer.
pub mod state;
/// egui renderer.
pub mod ui;
/// Helpers to convert domain data into view structs.
pub mod view_model;
