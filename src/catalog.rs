//! Practice categories and the movement names offered for each.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const ADAVUS: [&str; 7] = [
    "Tatta Adavu",
    "Natta Adavu",
    "Visharu Adavu",
    "Tatti Mettu Adavu",
    "Kuditta Mettu Adavu",
    "Sarikkal Adavu",
    "Teermanam Adavu",
];

const ITEMS: [&str; 7] = [
    "Mishra Alarippu",
    "Jathiswaram 1",
    "Jathiswaram 2",
    "Jathiswaram 3",
    "Varnam",
    "Padam",
    "Tillana",
];

/// Kind of practice being done; selects the movement list and media subfolder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PracticeCategory {
    /// Basic step sequences.
    #[default]
    Adavus,
    /// Choreographed pieces.
    Items,
}

impl PracticeCategory {
    /// All categories in selector order.
    pub const ALL: [PracticeCategory; 2] = [PracticeCategory::Adavus, PracticeCategory::Items];

    /// Label shown in the UI and written to the practice log.
    pub fn label(self) -> &'static str {
        match self {
            PracticeCategory::Adavus => "Adavus",
            PracticeCategory::Items => "Items",
        }
    }

    /// Name of the media subfolder holding this category's tracks.
    pub fn media_subfolder(self) -> &'static str {
        match self {
            PracticeCategory::Adavus => "adavus",
            PracticeCategory::Items => "items",
        }
    }

    /// Ordered movement names for this category.
    pub fn movements(self) -> &'static [&'static str] {
        match self {
            PracticeCategory::Adavus => &ADAVUS,
            PracticeCategory::Items => &ITEMS,
        }
    }
}

impl fmt::Display for PracticeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a label does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown practice category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for PracticeCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        PracticeCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}
