//! Local File Repository Implementation
//!
//! FileRepositoryのローカルファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::repositories::file_repository::FileRepository;

/// ローカルファイルシステムベースのファイルリポジトリ
pub struct LocalFileRepository;

impl LocalFileRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 親ディレクトリを作成する（同期処理）
    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create directory: {}",
                parent.display()
            ))?;
        }
        Ok(())
    }

    /// ファイルに書き込む（同期処理）
    fn write_sync(path: &Path, bytes: &[u8]) -> Result<()> {
        Self::ensure_parent(path)?;
        fs::write(path, bytes).context(format!("Failed to write file: {}", path.display()))?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// ファイルをコピーする（同期処理）
    fn copy_sync(from: &Path, to: &Path) -> Result<()> {
        Self::ensure_parent(to)?;
        fs::copy(from, to).context(format!(
            "Failed to copy {} to {}",
            from.display(),
            to.display()
        ))?;
        Ok(())
    }
}

#[async_trait]
impl FileRepository for LocalFileRepository {
    async fn exists(&self, path: &Path) -> bool {
        // ディレクトリは入力ファイルとして扱わない
        tokio::fs::metadata(path)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            fs::read(&path).context(format!("Failed to read file: {}", path.display()))
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let path = path.to_path_buf();
        let bytes = bytes.to_vec();
        tokio::task::spawn_blocking(move || Self::write_sync(&path, &bytes))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        let from = from.to_path_buf();
        let to = to.to_path_buf();
        tokio::task::spawn_blocking(move || Self::copy_sync(&from, &to))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for LocalFileRepository {
    fn default() -> Self {
        Self::new()
    }
}
