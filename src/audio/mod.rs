use std::path::{Path, PathBuf};

use thiserror::Error;

mod player;

pub use player::{AudioPlayer, decode_track};

/// Errors raised while opening the output device or loading a track.
#[derive(Debug, Error)]
pub enum AudioError {
    /// No output device could be opened.
    #[error("Audio output unavailable: {source}")]
    OutputUnavailable {
        /// Underlying rodio stream error.
        source: rodio::StreamError,
    },
    /// The track file could not be opened.
    #[error("Could not open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The track file is not decodable audio.
    #[error("Could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}

/// Destination for track playback.
///
/// Implementations start playback without blocking and keep at most one
/// track alive; `start` replaces anything already playing.
pub trait TrackOutput {
    /// Load `track` and begin playing it in the background.
    fn start(&mut self, track: &Path) -> Result<(), AudioError>;
    /// Halt playback; a no-op when idle.
    fn stop(&mut self);
}
