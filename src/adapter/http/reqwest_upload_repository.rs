//! Reqwest Upload Repository Implementation
//!
//! UploadRepositoryのreqwest実装（multipart/form-data のPOST）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::multipart::{Form, Part};

use crate::domain::entities::upload_request::MultipartRequest;
use crate::domain::repositories::upload_repository::UploadRepository;

/// reqwestベースのアップロードリポジトリ
///
/// リクエストボディもレスポンスボディも全てメモリ上にバッファする。
/// 認証ヘッダーやカスタムヘッダーは付けない。
pub struct ReqwestUploadRepository {
    client: reqwest::Client,
}

impl ReqwestUploadRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// 既存のクライアントを使ってリポジトリを作成
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// テキストパート、ファイルパートの順にフォームを組み立てる
    fn build_form(request: &MultipartRequest) -> Result<Form> {
        let form = request.fields.iter().fold(Form::new(), |form, field| {
            form.text(field.name.clone(), field.value.clone())
        });

        request.files.iter().try_fold(form, |form, file| -> Result<Form> {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime_type)
                .context(format!("Invalid MIME type for {}: {}", file.file_name, file.mime_type))?;
            Ok(form.part(file.field_name.clone(), part))
        })
    }
}

impl Default for ReqwestUploadRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UploadRepository for ReqwestUploadRepository {
    async fn send(&self, request: &MultipartRequest) -> Result<Option<Vec<u8>>> {
        let form = Self::build_form(request)?;

        let response = self
            .client
            .post(&request.endpoint)
            .multipart(form)
            .send()
            .await
            .context(format!("Failed to send request to {}", request.endpoint))?;

        // ステータスコードでは失敗を判定しない（ボディが空かどうかのみ）
        let status = response.status();
        if !status.is_success() {
            warn!("{} responded with {}", request.endpoint, status);
        }

        let body = response
            .bytes()
            .await
            .context("Failed to read response body")?;
        debug!("{} returned {} bytes ({})", request.endpoint, body.len(), status);

        if body.is_empty() {
            Ok(None)
        } else {
            Ok(Some(body.to_vec()))
        }
    }
}
