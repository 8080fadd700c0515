//! egui front end: form state, controller and renderer.

pub mod controller;
pub mod state;
pub mod ui;
