//! Tag extraction behind the `TagSource` capability.
//!
//! Readers exist for ID3 (mp3) and MPEG-4 (m4a/mp4/aac) containers. A
//! file outside those formats, an unparseable tag, or a tag with nothing
//! in it all surface as `TagError` so the caller can degrade instead of
//! aborting.

use std::path::Path;

use id3::TagLike;
use thiserror::Error;

use super::AudioFormat;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("no readable tags in a {0:?} container")]
    Unsupported(AudioFormat),
    #[error("id3 read failed: {0}")]
    Id3(#[from] id3::Error),
    #[error("mp4 read failed: {0}")]
    Mp4(#[from] mp4ameta::Error),
    #[error("file carries no tag fields")]
    Empty,
}

/// One label/value pair, in the fixed display order the readers emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagField {
    pub label: &'static str,
    pub value: String,
}

impl TagField {
    pub fn display(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

pub trait TagSource {
    /// Loads the displayable tag fields of `path`, in display order.
    /// Absent fields are omitted; an entirely empty tag is an error.
    fn load_tags(&self, path: &Path) -> Result<Vec<TagField>, TagError>;
}

/// Dispatches on the file extension to the matching container reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagReader;

impl TagSource for TagReader {
    fn load_tags(&self, path: &Path) -> Result<Vec<TagField>, TagError> {
        let format = AudioFormat::from_path(path);
        let fields = match format {
            AudioFormat::Mp3 => read_id3(path)?,
            AudioFormat::Mp4 => read_mp4(path)?,
            other => return Err(TagError::Unsupported(other)),
        };
        if fields.is_empty() {
            return Err(TagError::Empty);
        }
        Ok(fields)
    }
}

fn read_id3(path: &Path) -> Result<Vec<TagField>, TagError> {
    let tag = id3::Tag::read_from_path(path)?;
    let mut fields = Vec::new();
    push_text(&mut fields, "Title", tag.title());
    push_text(&mut fields, "Artist", tag.artist());
    push_text(&mut fields, "Album", tag.album());
    push_text(&mut fields, "Album Artist", tag.album_artist());
    push_number(&mut fields, "Track", tag.track());
    push_number(&mut fields, "Disc", tag.disc());
    push_number(&mut fields, "Year", tag.year().map(|y| y as u32));
    push_text(&mut fields, "Genre", tag.genre());
    push_duration(&mut fields, tag.duration().map(u64::from));
    Ok(fields)
}

fn read_mp4(path: &Path) -> Result<Vec<TagField>, TagError> {
    let tag = mp4ameta::Tag::read_from_path(path)?;
    let mut fields = Vec::new();
    push_text(&mut fields, "Title", tag.title());
    push_text(&mut fields, "Artist", tag.artist());
    push_text(&mut fields, "Album", tag.album());
    push_text(&mut fields, "Album Artist", tag.album_artist());
    push_number(&mut fields, "Track", tag.track_number().map(u32::from));
    push_number(&mut fields, "Disc", tag.disc_number().map(u32::from));
    push_number(&mut fields, "Year", tag.year().and_then(|y| y.parse().ok()));
    push_text(&mut fields, "Genre", tag.genre());
    push_duration(&mut fields, tag.duration().map(|d| d.as_millis() as u64));
    Ok(fields)
}

fn push_text(fields: &mut Vec<TagField>, label: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            fields.push(TagField {
                label,
                value: value.to_string(),
            });
        }
    }
}

fn push_number(fields: &mut Vec<TagField>, label: &'static str, value: Option<u32>) {
    if let Some(value) = value {
        fields.push(TagField {
            label,
            value: value.to_string(),
        });
    }
}

fn push_duration(fields: &mut Vec<TagField>, millis: Option<u64>) {
    if let Some(ms) = millis {
        fields.push(TagField {
            label: "Duration",
            value: format_duration(ms),
        });
    }
}

fn format_duration(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn id3_fields_come_back_in_display_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.mp3");
        fs::write(&path, []).unwrap();

        let mut tag = id3::Tag::new();
        tag.set_title("Strange Passengers");
        tag.set_artist("The Owls");
        tag.set_track(3);
        tag.set_duration(194_000);
        tag.write_to_path(&path, id3::Version::Id3v24).unwrap();

        let fields = TagReader.load_tags(&path).unwrap();
        let labels: Vec<_> = fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["Title", "Artist", "Track", "Duration"]);
        assert_eq!(fields[0].value, "Strange Passengers");
        assert_eq!(fields[0].display(), "Title: Strange Passengers");
        assert_eq!(fields[3].value, "3:14");
    }

    #[test]
    fn unsupported_containers_are_refused() {
        let err = TagReader.load_tags(Path::new("/music/x.wav")).unwrap_err();
        assert!(matches!(err, TagError::Unsupported(AudioFormat::Wav)));
        let err = TagReader.load_tags(Path::new("/music/notes.txt")).unwrap_err();
        assert!(matches!(err, TagError::Unsupported(AudioFormat::Unknown)));
    }

    #[test]
    fn garbage_files_fail_with_the_container_error() {
        let dir = tempfile::tempdir().unwrap();
        let mp3 = dir.path().join("broken.mp3");
        fs::write(&mp3, b"not an mp3 at all").unwrap();
        assert!(matches!(
            TagReader.load_tags(&mp3),
            Err(TagError::Id3(_))
        ));

        let m4a = dir.path().join("broken.m4a");
        fs::write(&m4a, b"not an mp4 either").unwrap();
        assert!(matches!(
            TagReader.load_tags(&m4a),
            Err(TagError::Mp4(_))
        ));
    }

    #[test]
    fn tag_without_display_fields_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bare.mp3");
        fs::write(&path, []).unwrap();

        let mut tag = id3::Tag::new();
        // a frame the display set ignores
        tag.add_frame(id3::frame::Frame::text("TCOP", "2020"));
        tag.write_to_path(&path, id3::Version::Id3v24).unwrap();

        assert!(matches!(
            TagReader.load_tags(&path),
            Err(TagError::Empty)
        ));
    }

    #[test]
    fn durations_format_as_minutes_and_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59_999), "0:59");
        assert_eq!(format_duration(194_000), "3:14");
        assert_eq!(format_duration(3_600_000), "60:00");
    }
}
