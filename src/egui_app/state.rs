//! Plain UI model consumed by the egui renderer and mutated by the controller.

use egui::Color32;

use crate::catalog::PracticeCategory;

/// Top-level UI model: the practice form, playback indicator and feedback.
#[derive(Clone, Debug)]
pub struct UiState {
    pub category: PracticeCategory,
    /// Selected movement; empty until the user picks one.
    pub movement: String,
    /// Raw duration text as typed.
    pub duration: String,
    pub notes: String,
    /// "Now playing: <file>" while a track was started, empty otherwise.
    pub now_playing: String,
    pub status: StatusBarState,
    /// Modal message awaiting acknowledgement.
    pub dialog: Option<DialogState>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            category: PracticeCategory::default(),
            movement: String::new(),
            duration: String::new(),
            notes: String::new(),
            now_playing: String::new(),
            status: StatusBarState::idle(),
            dialog: None,
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Status shown before any action.
    pub fn idle() -> Self {
        let (badge_label, badge_color) = status_badge(StatusTone::Idle);
        Self {
            text: "Pick a step or item to practice".into(),
            badge_label,
            badge_color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
    Error,
}

pub(crate) fn status_badge(tone: StatusTone) -> (String, Color32) {
    match tone {
        StatusTone::Idle => ("Idle".into(), Color32::from_rgb(42, 42, 42)),
        StatusTone::Info => ("Info".into(), Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Warning".into(), Color32::from_rgb(192, 138, 43)),
        StatusTone::Error => ("Error".into(), Color32::from_rgb(192, 57, 43)),
    }
}

/// Kind of modal message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Error,
    Info,
}

/// A modal message box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogState {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}
