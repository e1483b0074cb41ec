//! JSON file store
//!
//! One pretty-printed JSON file per record under a data directory. Reads
//! are tolerant: unreadable or malformed files are logged and treated as
//! absent.

use super::ResultStore;
use crate::records::{DailyResult, GameResult};
use crate::stats::Stats;
use directories::ProjectDirs;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const DAILY_FILE: &str = "daily_result.json";
const STATS_FILE: &str = "stats.json";
const PRACTICE_FILE: &str = "practice_results.json";

/// Store backed by JSON files in a directory
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created.
    pub fn new(data_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// The platform data directory for this game, if one can be determined
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordle_game").map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Where this store keeps its files
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.path(file);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("could not read {}: {err}", path.display());
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring malformed {}: {err}", path.display());
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        fs::write(self.path(file), contents)
    }
}

impl ResultStore for JsonFileStore {
    fn load_daily(&self, date_key: &str) -> Option<DailyResult> {
        let result: DailyResult = self.read_json(DAILY_FILE)?;
        if result.is_for(date_key) {
            Some(result)
        } else {
            log::debug!("saved daily result is from {}, ignoring", result.date);
            None
        }
    }

    fn save_daily(&mut self, result: &DailyResult) -> io::Result<()> {
        self.write_json(DAILY_FILE, result)
    }

    fn clear_daily(&mut self) -> io::Result<()> {
        match fs::remove_file(self.path(DAILY_FILE)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }

    fn load_stats(&self) -> Option<Stats> {
        self.read_json(STATS_FILE)
    }

    fn save_stats(&mut self, stats: &Stats) -> io::Result<()> {
        self.write_json(STATS_FILE, stats)
    }

    fn load_practice(&self) -> Vec<GameResult> {
        self.read_json(PRACTICE_FILE).unwrap_or_default()
    }

    fn save_practice(&mut self, results: &[GameResult]) -> io::Result<()> {
        self.write_json(PRACTICE_FILE, &results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{GameOutcome, StreakBaseline};

    fn sample_daily(date: &str) -> DailyResult {
        DailyResult {
            word: "DREAM".to_string(),
            won: true,
            attempts: 3,
            date: date.to_string(),
            guesses: vec!["WORLD".into(), "SMILE".into(), "DREAM".into()],
            streak_before: StreakBaseline { current: 1, max: 4 },
        }
    }

    #[test]
    fn daily_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        let result = sample_daily("2026-8-7");
        store.save_daily(&result).unwrap();

        assert_eq!(store.load_daily("2026-8-7"), Some(result));
    }

    #[test]
    fn stale_daily_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        store.save_daily(&sample_daily("2026-8-6")).unwrap();
        assert_eq!(store.load_daily("2026-8-7"), None);
    }

    #[test]
    fn clear_daily_removes_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        store.save_daily(&sample_daily("2026-8-7")).unwrap();
        store.clear_daily().unwrap();
        assert_eq!(store.load_daily("2026-8-7"), None);

        // Clearing an already-absent record is fine
        store.clear_daily().unwrap();
    }

    #[test]
    fn missing_files_read_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        assert_eq!(store.load_daily("2026-8-7"), None);
        assert_eq!(store.load_stats(), None);
        assert!(store.load_practice().is_empty());
    }

    #[test]
    fn malformed_json_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        fs::write(dir.path().join("stats.json"), "not json {").unwrap();
        assert_eq!(store.load_stats(), None);
    }

    #[test]
    fn stats_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        let stats = Stats::default().apply(&GameOutcome {
            won: true,
            attempts: 3,
        });
        store.save_stats(&stats).unwrap();
        assert_eq!(store.load_stats(), Some(stats));
    }

    #[test]
    fn practice_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        let results = vec![
            GameResult {
                word: "SMILE".to_string(),
                attempts: 4,
                won: true,
                timestamp: 2,
                guesses: vec![],
            },
            GameResult {
                word: "BEACH".to_string(),
                attempts: 6,
                won: false,
                timestamp: 1,
                guesses: vec![],
            },
        ];

        store.save_practice(&results).unwrap();
        assert_eq!(store.load_practice(), results);
    }

    #[test]
    fn store_creates_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = JsonFileStore::new(&nested).unwrap();
        assert!(store.data_dir().exists());
    }
}
