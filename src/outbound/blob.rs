use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::BlobStore;

/// Stores uploaded images on the local filesystem, served under `/images/`.
#[derive(Clone, Debug)]
pub struct FsBlobStore {
    dir: PathBuf,
}

impl FsBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn store(&self, bytes: Vec<u8>) -> anyhow::Result<String> {
        let name = Uuid::new_v4().to_string();

        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("creating image directory {}", self.dir.display()))?;
        tokio::fs::write(self.dir.join(&name), bytes)
            .await
            .with_context(|| format!("writing image {name}"))?;

        Ok(format!("/images/{name}"))
    }
}

/// Hands out image URLs without touching a disk. Used by tests and local runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryBlobStore;

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn store(&self, _bytes: Vec<u8>) -> anyhow::Result<String> {
        Ok(format!("/images/{}", Uuid::new_v4()))
    }
}
