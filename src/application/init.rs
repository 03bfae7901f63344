//! Initialize diary use case

use crate::error::Result;
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

pub struct InitService;

impl InitService {
    /// Initialize a new diary at the specified path
    pub fn execute(path: &Path) -> Result<FileSystemRepository> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;
        repo.save_config(&Config::default())?;

        log::info!("Initialized chronolog diary at {}", path.display());

        Ok(repo)
    }
}
