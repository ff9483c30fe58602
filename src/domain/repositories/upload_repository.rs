//! # Upload Repository Trait
//!
//! multipart リクエストの送信を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::upload_request::MultipartRequest;

/// アップロードリポジトリ
///
/// リクエストを1度だけ送信し、レスポンスボディ全体を返す
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// リクエストを送信
    ///
    /// # Returns
    ///
    /// レスポンスボディ。ボディが空の場合は `None`
    ///
    /// # Errors
    ///
    /// 通信に失敗した場合にエラーを返す（HTTPステータスはエラーにしない）
    async fn send(&self, request: &MultipartRequest) -> Result<Option<Vec<u8>>>;
}
