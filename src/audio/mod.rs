pub mod tags;

pub use tags::{TagError, TagField, TagReader, TagSource};

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Flac,
    Ogg,
    Mp4,
    Wav,
    Unknown,
}

impl AudioFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "mp3" => AudioFormat::Mp3,
            "flac" => AudioFormat::Flac,
            "ogg" | "oga" => AudioFormat::Ogg,
            "mp4" | "m4a" | "aac" => AudioFormat::Mp4,
            "wav" => AudioFormat::Wav,
            _ => AudioFormat::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(AudioFormat::from_extension)
            .unwrap_or(AudioFormat::Unknown)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, AudioFormat::Unknown)
    }

    /// Formats whose containers we can actually pull tags out of.
    pub fn has_readable_tags(&self) -> bool {
        matches!(self, AudioFormat::Mp3 | AudioFormat::Mp4)
    }
}

/// Extensions the browser treats as audio when filtering listings.
pub fn default_extensions() -> Vec<String> {
    ["mp3", "flac", "ogg", "oga", "mp4", "m4a", "aac", "wav"]
        .into_iter()
        .map(String::from)
        .collect()
}
