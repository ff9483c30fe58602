//! # UploadRequest Value Object
//!
//! multipart/form-data アップロードの表現
//!
//! `UploadRequest` はファイルパスのみを保持し、送信時に
//! `MultipartRequest`（ファイル内容をメモリに読み込んだもの）へ変換される。

use std::path::{Path, PathBuf};

/// テキストパート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// 添付ファイル（パスのみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub field_name: String,
    pub path: PathBuf,
}

/// 存在しないファイルの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFilePolicy {
    /// 存在しないパスは黙ってスキップする（複数ファイルフロー）
    Skip,
    /// 存在確認は呼び出し側の責任とし、アップローダーでは確認しない
    Trust,
}

/// アップロードリクエスト
///
/// 1回の呼び出しにつき1度だけ構築・使用される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    endpoint: String,
    fields: Vec<FormField>,
    attachments: Vec<Attachment>,
    missing_files: MissingFilePolicy,
}

impl UploadRequest {
    /// 新しいリクエストを作成
    pub fn new(endpoint: impl Into<String>, missing_files: MissingFilePolicy) -> Self {
        Self {
            endpoint: endpoint.into(),
            fields: Vec::new(),
            attachments: Vec::new(),
            missing_files,
        }
    }

    /// テキストパートを追加（追加順を保持）
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// ファイルパートを追加（追加順を保持）
    pub fn with_attachment(mut self, field_name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        self.attachments.push(Attachment {
            field_name: field_name.into(),
            path: path.as_ref().to_path_buf(),
        });
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn missing_files(&self) -> MissingFilePolicy {
        self.missing_files
    }
}

/// 送信用に読み込まれたファイル
///
/// ファイル内容はメモリ上にバイト列として保持される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub field_name: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(field_name: String, file_name: String, mime_type: String, bytes: Vec<u8>) -> Self {
        Self {
            field_name,
            file_name,
            mime_type,
            bytes,
        }
    }
}

/// 完全にバッファされた multipart リクエスト
///
/// テキストパートの後にファイルパートが、それぞれ追加順に並ぶ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartRequest {
    pub endpoint: String,
    pub fields: Vec<FormField>,
    pub files: Vec<FileUpload>,
}
