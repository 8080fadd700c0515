//! Library exports for the practice tracker binary and its tests.
/// Base directory resolution next to the executable.
pub mod app_dirs;
/// Track playback on the default output device.
pub mod audio;
/// Practice categories and movement names.
pub mod catalog;
/// Optional `tracker.toml` settings.
pub mod config;
/// egui UI: state, controller and renderer.
pub mod egui_app;
/// tracing subscriber setup.
pub mod logging;
/// Append-only CSV practice log.
pub mod practice_log;
/// Fuzzy lookup of tracks by movement name.
pub mod resolver;
