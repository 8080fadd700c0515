//! Play, stop and save actions behind the practice form.

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{info, warn};

use crate::audio::{AudioError, TrackOutput};
use crate::catalog::PracticeCategory;
use crate::config::TrackerSettings;
use crate::egui_app::state::*;
use crate::practice_log::PracticeLog;
use crate::resolver;

#[derive(Debug, Error)]
enum PlayError {
    #[error("Please select Category and Step/Item.")]
    MissingSelection,
    #[error("Music for '{name}' not found.\nLooked in:\n{}\n\n{tip}", .folder.display())]
    NotFound {
        name: String,
        folder: PathBuf,
        tip: String,
    },
    #[error("Audio output unavailable:\n{0}")]
    OutputUnavailable(String),
    #[error("Could not play audio:\n{0}")]
    Audio(#[from] AudioError),
}

/// Maintains app state and bridges the resolver, player and log to the egui UI.
pub struct TrackerController {
    pub ui: UiState,
    settings: TrackerSettings,
    practice_log: PracticeLog,
    output: Result<Box<dyn TrackOutput>, String>,
    rng: StdRng,
}

impl TrackerController {
    /// Build a controller; a failed output keeps the form usable and is reported on play.
    pub fn new(
        settings: TrackerSettings,
        output: Result<Box<dyn TrackOutput>, AudioError>,
    ) -> Self {
        let output = output.map_err(|err| {
            warn!("Playback disabled: {err}");
            err.to_string()
        });
        Self {
            ui: UiState::default(),
            practice_log: PracticeLog::new(settings.log_path.clone()),
            settings,
            output,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the random source so random selection is reproducible.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    pub fn practice_log_path(&self) -> &Path {
        self.practice_log.path()
    }

    /// Switch category; a change clears the movement selection.
    pub fn select_category(&mut self, category: PracticeCategory) {
        if self.ui.category != category {
            self.ui.category = category;
            self.ui.movement.clear();
        }
    }

    pub fn select_movement(&mut self, movement: impl Into<String>) {
        self.ui.movement = movement.into();
    }

    /// Play a track for the selected category and movement.
    pub fn play_selected(&mut self) {
        let movement = self.ui.movement.clone();
        self.play(self.ui.category, &movement);
    }

    /// Resolve a track for `name` and start it, replacing any current track.
    ///
    /// Validation and lookup failures leave the current playback untouched.
    pub fn play(&mut self, category: PracticeCategory, name: &str) {
        match self.start_track(category, name.trim()) {
            Ok(track) => {
                let label = display_name(&track);
                info!("Now playing {}", track.display());
                self.ui.now_playing = format!("Now playing: {label}");
                self.set_status(format!("Playing {label}"), StatusTone::Info);
            }
            Err(err) => {
                warn!("Play failed: {err}");
                let tone = match err {
                    PlayError::MissingSelection | PlayError::NotFound { .. } => StatusTone::Warning,
                    _ => StatusTone::Error,
                };
                self.set_status("Nothing playing", tone);
                self.show_dialog(DialogKind::Error, "Error", err.to_string());
            }
        }
    }

    /// Halt playback and clear the now-playing indicator; safe when idle.
    pub fn stop(&mut self) {
        let was_playing = !self.ui.now_playing.is_empty();
        self.halt_playback();
        if was_playing {
            self.set_status("Playback stopped", StatusTone::Idle);
        }
    }

    /// Append the form as today's entry to the practice log.
    pub fn save_practice(&mut self) {
        let result = self.practice_log.log_practice(
            self.ui.category.label(),
            &self.ui.movement,
            &self.ui.duration,
            &self.ui.notes,
        );
        match result {
            Ok(entry) => {
                self.ui.duration.clear();
                self.ui.notes.clear();
                self.set_status(
                    format!("Logged {} min of {}", entry.duration_minutes, entry.name),
                    StatusTone::Info,
                );
                self.show_dialog(
                    DialogKind::Info,
                    "Saved",
                    format!("Saved practice for {}.", entry.name),
                );
            }
            Err(err) => {
                warn!("Save failed: {err}");
                self.set_status("Practice not saved", StatusTone::Warning);
                self.show_dialog(DialogKind::Error, "Error", err.to_string());
            }
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.ui.dialog = None;
    }

    fn start_track(&mut self, category: PracticeCategory, name: &str) -> Result<PathBuf, PlayError> {
        if name.is_empty() {
            return Err(PlayError::MissingSelection);
        }
        let folder = self.settings.media_folder(category);
        let candidates = resolver::find_matches(&folder, name);
        let policy = self.settings.selection.policy_for(category);
        let track = resolver::select_track(&candidates, policy, &mut self.rng)
            .cloned()
            .ok_or_else(|| PlayError::NotFound {
                name: name.to_string(),
                tip: naming_tip(category, name),
                folder,
            })?;
        self.halt_playback();
        let output = self
            .output
            .as_mut()
            .map_err(|reason| PlayError::OutputUnavailable(reason.clone()))?;
        output.start(&track)?;
        Ok(track)
    }

    fn halt_playback(&mut self) {
        if let Ok(output) = self.output.as_mut() {
            output.stop();
        }
        self.ui.now_playing.clear();
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
    }

    fn show_dialog(&mut self, kind: DialogKind, title: &str, message: String) {
        self.ui.dialog = Some(DialogState {
            kind,
            title: title.to_string(),
            message,
        });
    }
}

fn naming_tip(category: PracticeCategory, name: &str) -> String {
    match category {
        PracticeCategory::Adavus => format!(
            "Tip: place a file like '{}.mp3'.",
            name.to_lowercase().replace(' ', "_")
        ),
        PracticeCategory::Items => "You can name files flexibly, e.g. 'jathiswaram 1.mp3', \
             'JATHISWARAM-1.wav', 'jathiswaram1.ogg'."
            .to_string(),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
