//! # Write Result Use Case
//!
//! レスポンスを一時ファイルに書き込む（ResultWriter）

use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::flow::ShortcutFlow;
use crate::domain::entities::flow_outcome::FlowError;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::services::output_naming::unique_output_name;

/// 結果書き込みユースケース
pub struct WriteResultUseCase<F: FileRepository> {
    file_repository: Arc<F>,
}

impl<F: FileRepository> WriteResultUseCase<F> {
    /// 新しいユースケースを作成
    pub fn new(file_repository: Arc<F>) -> Self {
        Self { file_repository }
    }

    /// レスポンスを書き込み、出力パスを返す
    ///
    /// # Arguments
    ///
    /// * `payload` - レスポンスボディ（無い場合は通信失敗）
    /// * `flow` - 出力ファイル名の決定に使うフロー
    /// * `output_dir` - 一時ディレクトリ
    ///
    /// # Errors
    ///
    /// - `payload` が `None` の場合 `FlowError::TransportFailure`
    /// - 書き込みに失敗した場合 `FlowError::OutputWrite`
    pub async fn execute(
        &self,
        payload: Option<Vec<u8>>,
        flow: ShortcutFlow,
        output_dir: &Path,
    ) -> Result<PathBuf, FlowError> {
        let bytes = payload.ok_or(FlowError::TransportFailure)?;
        let out_path = output_dir.join(unique_output_name(flow.output_stem()));

        self.file_repository
            .write(&out_path, &bytes)
            .await
            .map_err(|e| {
                warn!("Failed to write {}: {:#}", out_path.display(), e);
                FlowError::OutputWrite(format!("{:#}", e))
            })?;

        info!("Wrote {} bytes to {}", bytes.len(), out_path.display());
        Ok(out_path)
    }
}
