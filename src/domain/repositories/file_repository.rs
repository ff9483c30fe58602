//! # File Repository Trait
//!
//! ホストのファイルシステム操作を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// ファイルリポジトリ
///
/// 一時ディレクトリへの書き込みと入力ファイルの読み込みを担当する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// 通常ファイルとして存在するかどうか（ディレクトリは false）
    async fn exists(&self, path: &Path) -> bool;

    /// ファイル内容を読み込む
    ///
    /// # Errors
    ///
    /// 読み込みに失敗した場合にエラーを返す
    async fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// ファイルに書き込む（既存の内容は上書き）
    ///
    /// # Errors
    ///
    /// 書き込みに失敗した場合にエラーを返す
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<()>;

    /// ファイルをコピーする（コピー先は上書き）
    async fn copy(&self, from: &Path, to: &Path) -> Result<()>;
}
