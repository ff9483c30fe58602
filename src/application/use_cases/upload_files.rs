//! # Upload Files Use Case
//!
//! multipart リクエストの組み立てと送信（MultipartUploader）

use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::upload_request::{
    Attachment, FileUpload, MissingFilePolicy, MultipartRequest, UploadRequest,
};
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::repositories::upload_repository::UploadRepository;

/// Convert error chain to string including all causes
fn error_chain_to_string(e: &anyhow::Error) -> String {
    e.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Guess the MIME type of a file part from its extension
fn guess_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "file".to_string())
}

/// ファイルアップロードユースケース
///
/// リクエストを1度だけ送信する。リトライもタイムアウト設定も行わない。
pub struct UploadFilesUseCase<U: UploadRepository, F: FileRepository> {
    upload_repository: Arc<U>,
    file_repository: Arc<F>,
}

impl<U: UploadRepository, F: FileRepository> UploadFilesUseCase<U, F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `upload_repository` - アップロードリポジトリ
    /// * `file_repository` - ファイルリポジトリ
    pub fn new(upload_repository: Arc<U>, file_repository: Arc<F>) -> Self {
        Self {
            upload_repository,
            file_repository,
        }
    }

    /// リクエストを組み立てて送信する
    ///
    /// # Returns
    ///
    /// レスポンスボディ。通信失敗・空のレスポンスの場合は `None`
    pub async fn execute(&self, request: UploadRequest) -> Option<Vec<u8>> {
        let multipart = match self.prepare(&request).await {
            Ok(multipart) => multipart,
            Err(e) => {
                warn!("Failed to prepare upload: {}", error_chain_to_string(&e));
                return None;
            }
        };

        info!(
            "POST {} ({} field(s), {} file(s))",
            multipart.endpoint,
            multipart.fields.len(),
            multipart.files.len()
        );

        match self.upload_repository.send(&multipart).await {
            Ok(Some(body)) if !body.is_empty() => {
                info!("Received {} bytes", body.len());
                Some(body)
            }
            Ok(_) => {
                warn!("Empty response from {}", multipart.endpoint);
                None
            }
            Err(e) => {
                warn!("Request to {} failed: {}", multipart.endpoint, error_chain_to_string(&e));
                None
            }
        }
    }

    /// ファイルを読み込み、送信用リクエストに変換する
    async fn prepare(&self, request: &UploadRequest) -> anyhow::Result<MultipartRequest> {
        let mut files = Vec::with_capacity(request.attachments().len());

        for attachment in request.attachments() {
            if request.missing_files() == MissingFilePolicy::Skip
                && !self.file_repository.exists(&attachment.path).await
            {
                warn!("Skipping missing file: {}", attachment.path.display());
                continue;
            }
            match self.load(attachment).await {
                Ok(file) => files.push(file),
                Err(e) if request.missing_files() == MissingFilePolicy::Skip => {
                    warn!(
                        "Skipping unreadable file: {} ({})",
                        attachment.path.display(),
                        error_chain_to_string(&e)
                    );
                }
                Err(e) => return Err(e),
            }
        }

        if files.is_empty() && !request.attachments().is_empty() {
            warn!("None of the input files are readable; sending request without file parts");
        }

        Ok(MultipartRequest {
            endpoint: request.endpoint().to_string(),
            fields: request.fields().to_vec(),
            files,
        })
    }

    async fn load(&self, attachment: &Attachment) -> anyhow::Result<FileUpload> {
        let bytes = self.file_repository.read(&attachment.path).await?;
        Ok(FileUpload::new(
            attachment.field_name.clone(),
            file_name_of(&attachment.path),
            guess_mime_type(&attachment.path),
            bytes,
        ))
    }
}
