//! # Resolve Input Use Case
//!
//! ホスト入力の解釈と検証（InputResolver）
//!
//! プレーンテキストはフローごとに位置で解釈される：
//!
//! - images-to-pdf: `[url, image_mode?]`
//! - unlock-pdf: `[password, url]`
//! - compress-pdf: `[url]`

use log::debug;
use std::path::PathBuf;

use crate::domain::entities::flow::ShortcutFlow;
use crate::domain::entities::flow_outcome::FlowError;
use crate::domain::entities::shortcut_input::{ShortcutInput, ShortcutParameter};
use crate::domain::entities::upload_request::{FormField, MissingFilePolicy, UploadRequest};

const MISSING_ENDPOINT: &str = "No endpoint URL provided";
const MISSING_PASSWORD: &str = "No password provided";
const TOO_MANY_FILES: &str = "Expected a single PDF file";

/// 検証済みの入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    pub flow: ShortcutFlow,
    pub endpoint: String,
    pub fields: Vec<FormField>,
    pub files: Vec<PathBuf>,
}

impl ResolvedInput {
    /// アップロードリクエストに変換
    ///
    /// 複数ファイルのフローは存在しないファイルをスキップし、
    /// 単一ファイルのフローは呼び出し側で存在確認済みとして扱う
    pub fn into_upload_request(self) -> UploadRequest {
        let policy = if self.flow.accepts_many() {
            MissingFilePolicy::Skip
        } else {
            MissingFilePolicy::Trust
        };
        let field_name = self.flow.file_field();

        let request = self
            .fields
            .into_iter()
            .fold(UploadRequest::new(self.endpoint, policy), |req, field| {
                req.with_field(field.name, field.value)
            });

        self.files
            .iter()
            .fold(request, |req, path| req.with_attachment(field_name, path))
    }
}

/// フローに応じて入力を解釈する
///
/// # Errors
///
/// 主入力やエンドポイントが無い場合に `FlowError::MissingInput` を返す
pub fn resolve(
    flow: ShortcutFlow,
    input: &ShortcutInput,
    default_image_mode: &str,
) -> Result<ResolvedInput, FlowError> {
    let resolved = match flow {
        ShortcutFlow::ImagesToPdf => resolve_images(input, default_image_mode)?,
        ShortcutFlow::UnlockPdf => resolve_unlock(input)?,
        ShortcutFlow::CompressPdf => resolve_compress(input)?,
    };
    debug!(
        "Resolved {} input: {} file(s), endpoint {}",
        flow,
        resolved.files.len(),
        resolved.endpoint
    );
    Ok(resolved)
}

/// images-to-pdf の入力を解釈
pub fn resolve_images(
    input: &ShortcutInput,
    default_image_mode: &str,
) -> Result<ResolvedInput, FlowError> {
    let flow = ShortcutFlow::ImagesToPdf;
    let files = match &input.shortcut_parameter {
        Some(param) if !param.is_empty() => param.paths().into_iter().map(PathBuf::from).collect(),
        _ => return Err(FlowError::MissingInput(flow.missing_input_message().to_string())),
    };

    let endpoint = require_text(input, 0, MISSING_ENDPOINT)?;
    let image_mode = input.plain_text(1).unwrap_or(default_image_mode);

    Ok(ResolvedInput {
        flow,
        endpoint,
        fields: vec![FormField {
            name: "image_mode".to_string(),
            value: image_mode.to_string(),
        }],
        files,
    })
}

/// unlock-pdf の入力を解釈
pub fn resolve_unlock(input: &ShortcutInput) -> Result<ResolvedInput, FlowError> {
    let flow = ShortcutFlow::UnlockPdf;
    let file = single_file(flow, input.shortcut_parameter.as_ref())?;
    let password = require_text(input, 0, MISSING_PASSWORD)?;
    let endpoint = require_text(input, 1, MISSING_ENDPOINT)?;

    Ok(ResolvedInput {
        flow,
        endpoint,
        fields: vec![FormField {
            name: "password".to_string(),
            value: password,
        }],
        files: vec![file],
    })
}

/// compress-pdf の入力を解釈
pub fn resolve_compress(input: &ShortcutInput) -> Result<ResolvedInput, FlowError> {
    let flow = ShortcutFlow::CompressPdf;
    let file = single_file(flow, input.shortcut_parameter.as_ref())?;
    let endpoint = require_text(input, 0, MISSING_ENDPOINT)?;

    Ok(ResolvedInput {
        flow,
        endpoint,
        fields: Vec::new(),
        files: vec![file],
    })
}

fn single_file(
    flow: ShortcutFlow,
    param: Option<&ShortcutParameter>,
) -> Result<PathBuf, FlowError> {
    let missing = || FlowError::MissingInput(flow.missing_input_message().to_string());

    match param {
        Some(ShortcutParameter::Single(path)) if !path.is_empty() => Ok(PathBuf::from(path)),
        Some(ShortcutParameter::Many(paths)) if paths.len() > 1 => {
            Err(FlowError::InvalidInput(TOO_MANY_FILES.to_string()))
        }
        Some(ShortcutParameter::Many(paths)) => paths
            .first()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .ok_or_else(missing),
        _ => Err(missing()),
    }
}

fn require_text(input: &ShortcutInput, index: usize, message: &str) -> Result<String, FlowError> {
    input
        .plain_text(index)
        .map(str::to_string)
        .ok_or_else(|| FlowError::MissingInput(message.to_string()))
}
