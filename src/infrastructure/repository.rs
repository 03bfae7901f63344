//! Diary directory discovery and layout

use crate::error::{ChronologError, Result};
use crate::infrastructure::{Config, DiaryStore, FileBlobStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-diary data directory
pub const DATA_DIR: &str = ".chronolog";

/// Abstract repository for diary directory operations
pub trait DiaryRepository {
    /// Load configuration from .chronolog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .chronolog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .chronolog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .chronolog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of DiaryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover diary root by walking up from current directory
    /// First checks CHRONOLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("CHRONOLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ChronologError::Config(format!(
                    "CHRONOLOG_ROOT is set to '{}' but no .chronolog directory found. \
                    Run 'chronolog init' in that directory or unset CHRONOLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover diary root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(ChronologError::NotChronologDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// Open the entry store kept in the data directory
    pub fn open_store(&self) -> DiaryStore<FileBlobStore> {
        DiaryStore::new(FileBlobStore::new(self.data_dir()))
    }
}

impl DiaryRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.data_dir();

        if data_dir.exists() {
            return Err(ChronologError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }
}
