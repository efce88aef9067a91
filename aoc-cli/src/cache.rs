//! Input cache for storing puzzle inputs locally

use crate::error::CacheError;
use std::fs;
use std::path::PathBuf;

/// File-based cache for puzzle inputs
///
/// Directory structure: `{cache_dir}/{year}_{day}.txt`
#[derive(Debug, Clone)]
pub struct InputCache {
    dir: PathBuf,
}

impl InputCache {
    /// Create a new input cache rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the cache path for a specific year/day
    pub fn cache_path(&self, year: i32, day: i32) -> PathBuf {
        self.dir.join(format!("{}_{}.txt", year, day))
    }

    /// Check if input is cached
    pub fn contains(&self, year: i32, day: i32) -> bool {
        self.cache_path(year, day).is_file()
    }

    /// Get cached input with `\r\n` normalized to `\n`, or None if not cached
    pub fn get(&self, year: i32, day: i32) -> Result<Option<String>, CacheError> {
        if !self.contains(year, day) {
            return Ok(None);
        }
        let content = fs::read_to_string(self.cache_path(year, day))?;
        Ok(Some(content.replace("\r\n", "\n")))
    }

    /// Store input in cache
    pub fn put(&self, year: i32, day: i32, input: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            CacheError::DirCreation(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        fs::write(self.cache_path(year, day), input)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cache_path_format() {
        let cache = InputCache::new(PathBuf::from("/cache"));

        assert_eq!(cache.cache_path(2024, 1), PathBuf::from("/cache/2024_1.txt"));
        assert_eq!(cache.cache_path(2023, 25), PathBuf::from("/cache/2023_25.txt"));
    }

    #[test]
    fn test_cache_roundtrip() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().join("nested"));

        // Initially not cached
        assert!(!cache.contains(2024, 1));
        assert!(cache.get(2024, 1).unwrap().is_none());

        // Store input, creating the directory
        let input = "test input\nline 2\n";
        cache.put(2024, 1, input).unwrap();

        assert!(cache.contains(2024, 1));
        assert_eq!(cache.get(2024, 1).unwrap(), Some(input.to_string()));
    }

    #[test]
    fn test_get_normalizes_line_endings() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());
        fs::write(cache.cache_path(2025, 4), "..@\r\n@@.\r\n").unwrap();

        assert_eq!(cache.get(2025, 4).unwrap().as_deref(), Some("..@\n@@.\n"));
    }

    #[test]
    fn test_put_fails_when_dir_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let cache = InputCache::new(blocker);

        assert!(matches!(cache.put(2025, 1, "x"), Err(CacheError::DirCreation(_))));
    }
}
