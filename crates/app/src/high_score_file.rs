//! Best-effort persistence of the single high score as decimal text.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score, or 0 when the file is missing or unreadable.
    /// Read as `u64` so a stored value beyond any single run is still kept.
    pub fn load(&self) -> u64 {
        match self.read() {
            Ok(score) => score,
            Err(err) => {
                debug!("no usable high score at {}: {err}", self.path.display());
                0
            }
        }
    }

    /// Store `score` if it beats the stored value. Returns whether it was
    /// written; write failures are logged and otherwise ignored.
    pub fn save(&self, score: u32) -> bool {
        if u64::from(score) <= self.load() {
            return false;
        }
        match self.write_atomic(score) {
            Ok(()) => true,
            Err(err) => {
                warn!("could not save high score to {}: {err}", self.path.display());
                false
            }
        }
    }

    fn read(&self) -> io::Result<u64> {
        let content = fs::read_to_string(&self.path)?;
        content.trim().parse().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write_atomic(&self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("txt.tmp");
        fs::write(&tmp_path, score.to_string())?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_zero() {
        let dir = tempdir().expect("tempdir");
        let store = HighScoreFile::new(dir.path().join("high_score.txt"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn corrupt_file_reads_as_zero() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "not a number").expect("write");
        assert_eq!(HighScoreFile::new(&path).load(), 0);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("high_score.txt");
        fs::write(&path, " 215\n").expect("write");
        assert_eq!(HighScoreFile::new(&path).load(), 215);
    }

    #[test]
    fn save_only_overwrites_with_a_strictly_higher_score() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("high_score.txt");
        let store = HighScoreFile::new(&path);

        assert!(store.save(85));
        assert_eq!(store.load(), 85);
        assert_eq!(fs::read_to_string(&path).expect("read"), "85");

        assert!(!store.save(85));
        assert!(!store.save(40));
        assert_eq!(store.load(), 85);

        assert!(store.save(190));
        assert_eq!(store.load(), 190);
        assert!(!path.with_extension("txt.tmp").exists());
    }

    #[test]
    fn stored_score_beyond_u32_is_kept() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "5000000000").expect("write");
        let store = HighScoreFile::new(&path);

        assert_eq!(store.load(), 5_000_000_000);
        assert!(!store.save(100));
        assert_eq!(fs::read_to_string(&path).expect("read"), "5000000000");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().expect("tempdir");
        let store = HighScoreFile::new(dir.path().join("nested/deeper/high_score.txt"));
        assert!(store.save(12));
        assert_eq!(store.load(), 12);
    }

    #[test]
    fn unwritable_location_is_not_fatal() {
        let dir = tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").expect("write");
        let store = HighScoreFile::new(blocker.join("high_score.txt"));
        assert!(!store.save(500));
        assert_eq!(store.load(), 0);
    }
}
