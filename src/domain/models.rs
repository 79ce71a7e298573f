use crate::cli::Locale;
use crate::domain::constants::{
    PHOTO_COUNT, PHOTO_DIR_TOKEN, PHOTO_EXTENSION, PHOTO_STEM, STATUS_ERROR,
};
use serde::Serialize;
use std::ops::RangeInclusive;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Naming scheme shared by the placeholder page and the index patcher.
///
/// Both steps derive every filename and token from this value, so the tile
/// caption is always the last path segment of the matching patch token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoSet {
    pub count: u32,
    pub dir_token: &'static str,
    pub stem: &'static str,
    pub extension: &'static str,
}

impl Default for PhotoSet {
    fn default() -> Self {
        Self {
            count: PHOTO_COUNT,
            dir_token: PHOTO_DIR_TOKEN,
            stem: PHOTO_STEM,
            extension: PHOTO_EXTENSION,
        }
    }
}

impl PhotoSet {
    pub fn ordinals(&self) -> RangeInclusive<u32> {
        1..=self.count
    }

    /// `photo_07.jpg`
    pub fn file_name(&self, ordinal: u32) -> String {
        format!("{}{:02}.{}", self.stem, ordinal, self.extension)
    }

    /// `./assets/photos/photo_07.jpg`
    pub fn token(&self, ordinal: u32) -> String {
        format!("{}/{}", self.dir_token, self.file_name(ordinal))
    }

    pub fn tiles(&self, locale: Locale) -> Vec<Tile> {
        self.ordinals()
            .map(|ordinal| Tile {
                ordinal,
                label: photo_label(locale, ordinal),
                file_name: self.file_name(ordinal),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub ordinal: u32,
    pub label: String,
    pub file_name: String,
}

pub fn photo_label(locale: Locale, ordinal: u32) -> String {
    match locale {
        Locale::En => format!("Photo {}", ordinal),
        Locale::Zh => format!("照片 {}", ordinal),
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct StepReport {
    pub step: String,
    pub path: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacements: Option<usize>,
    pub message: String,
}

impl StepReport {
    pub fn failed(&self) -> bool {
        self.status == STATUS_ERROR
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Guidance {
    pub site_url: String,
    pub placeholders_url: String,
}

#[derive(Serialize, Debug)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<Guidance>,
}

impl RunReport {
    pub fn ok(&self) -> bool {
        !self.steps.iter().any(StepReport::failed)
    }
}
