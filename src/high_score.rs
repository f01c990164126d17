//! High-score persistence: a single decimal integer in a plain text file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the best score lives between runs.
pub trait ScoreStore {
    /// Stored value, or 0 when nothing usable is stored.
    fn load(&self) -> u32;

    /// Overwrites the stored value.
    fn save(&mut self, score: u32) -> io::Result<()>;
}

/// Text file holding the score and nothing else.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => parse_score(&contents).unwrap_or_else(|| {
                log::warn!(
                    "Ignoring malformed high score in {}",
                    self.path.display()
                );
                0
            }),
            Err(e) => {
                log::debug!("No high score at {}: {e}", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        fs::write(&self.path, score.to_string())
    }
}

/// Keeps the score in memory and counts writes. Used when nothing should
/// touch the disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub value: u32,
    pub writes: usize,
}

impl MemoryScoreStore {
    pub fn with_value(value: u32) -> Self {
        MemoryScoreStore { value, writes: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.value
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        self.value = score;
        self.writes += 1;
        Ok(())
    }
}

fn parse_score(contents: &str) -> Option<u32> {
    contents.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hungry_python_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("42"), Some(42));
        assert_eq!(parse_score("  7\n"), Some(7));
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("abc"), None);
        assert_eq!(parse_score("-3"), None);
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = FileScoreStore::new(temp_path("does_not_exist.txt"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_malformed_file_loads_zero() {
        let path = temp_path("malformed.txt");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(FileScoreStore::new(&path).load(), 0);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_overwrites_with_plain_integer() {
        let path = temp_path("overwrite.txt");
        let mut store = FileScoreStore::new(&path);
        store.save(120).unwrap();
        store.save(9).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "9");
        assert_eq!(store.load(), 9);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryScoreStore::with_value(5);
        assert_eq!(store.load(), 5);
        store.save(6).unwrap();
        assert_eq!(store.load(), 6);
        assert_eq!(store.writes, 1);
    }
}
