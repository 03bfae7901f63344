//! Infrastructure layer - External I/O and persistence

pub mod blob;
pub mod config;
pub mod insight_client;
pub mod repository;
pub mod store;
#[cfg(test)]
pub(crate) mod test_env;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use config::Config;
pub use insight_client::{GeminiClient, TextGenerator};
pub use repository::{DiaryRepository, FileSystemRepository};
pub use store::DiaryStore;
