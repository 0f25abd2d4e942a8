//! Filesystem capability behind the navigation engine.
//!
//! The engine only ever asks two questions: what is in this directory, and
//! is this path a directory. Keeping that behind a trait lets the
//! navigation tests run against an in-memory tree instead of touching the
//! real filesystem.

use std::io;
use std::path::Path;

pub trait Filesystem {
    /// Entry names of `dir`, sorted lexicographically. Unreadable entries
    /// are skipped; an unreadable directory is an error.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>>;

    fn is_directory(&self, path: &Path) -> bool;
}

/// The real thing, one `read_dir` per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names: Vec<String> = std::fs::read_dir(dir)?
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn entries_come_back_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("c.mp3"), b"x").unwrap();
        fs::write(dir.path().join("a.mp3"), b"x").unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();

        let names = OsFilesystem.list_entries(dir.path()).unwrap();
        assert_eq!(names, vec!["a.mp3", "b", "c.mp3"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(OsFilesystem.list_entries(&gone).is_err());
    }

    #[test]
    fn is_directory_distinguishes_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("song.mp3");
        fs::write(&file, b"x").unwrap();
        assert!(OsFilesystem.is_directory(dir.path()));
        assert!(!OsFilesystem.is_directory(&file));
    }
}
