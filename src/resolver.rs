//! Forgiving lookup of audio tracks by movement name.
//!
//! Names and file stems are compared in a normalized form (lowercase,
//! alphanumerics only) so `Jathiswaram 1`, `JATHISWARAM-1.wav` and
//! `jathiswaram_1.ogg` all line up.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Audio extensions accepted as playable tracks (lowercase, without dots).
pub const SUPPORTED_AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "ogg"];

/// How one track is picked when several files match a name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Always the first match in listing order.
    #[default]
    First,
    /// Uniformly random among all matches.
    Random,
}

/// Canonical comparison key: lowercase with every non-alphanumeric character removed.
pub fn normalize(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_alphanumeric())
        .collect()
}

/// Return true if the path has a supported audio extension.
pub fn is_supported_audio(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    SUPPORTED_AUDIO_EXTENSIONS
        .iter()
        .any(|supported| ext.eq_ignore_ascii_case(supported))
}

/// List audio files directly inside `folder` whose normalized stem contains
/// the normalized `query`.
///
/// A missing folder yields no matches. Results keep directory listing order.
pub fn find_matches(folder: &Path, query: &str) -> Vec<PathBuf> {
    if !folder.is_dir() {
        return Vec::new();
    }
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Cannot list {}: {err}", folder.display());
            return Vec::new();
        }
    };
    let key = normalize(query);
    entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                debug!("Skipping unreadable entry in {}: {err}", folder.display());
                None
            }
        })
        .filter(|path| path.is_file() && is_supported_audio(path))
        .filter(|path| {
            path.file_stem()
                .map(|stem| normalize(&stem.to_string_lossy()).contains(&key))
                .unwrap_or(false)
        })
        .collect()
}

/// Pick one candidate according to `policy`; `None` when there are no candidates.
pub fn select_track<'a, R: Rng + ?Sized>(
    candidates: &'a [PathBuf],
    policy: SelectionPolicy,
    rng: &mut R,
) -> Option<&'a PathBuf> {
    match policy {
        SelectionPolicy::First => candidates.first(),
        SelectionPolicy::Random => candidates.choose(rng),
    }
}
