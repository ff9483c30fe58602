//! # Run Flow Use Case
//!
//! InputResolver → MultipartUploader → ResultWriter を順番に実行する
//!
//! 状態は `AwaitingInput → Uploading → Completed` の3つのみ。
//! 入力の検証に失敗した場合は `Uploading` を経由せずに完了する。

use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::dto::flow_settings::FlowSettings;
use crate::application::use_cases::resolve_input::resolve;
use crate::application::use_cases::upload_files::UploadFilesUseCase;
use crate::application::use_cases::write_result::WriteResultUseCase;
use crate::domain::entities::flow::ShortcutFlow;
use crate::domain::entities::flow_outcome::{FlowError, ShortcutOutput};
use crate::domain::entities::shortcut_input::ShortcutInput;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::repositories::upload_repository::UploadRepository;
use crate::domain::services::output_naming::staged_input_name;

/// ショートカットフローユースケース
pub struct ShortcutFlowUseCase<U: UploadRepository, F: FileRepository> {
    file_repository: Arc<F>,
    upload_use_case: UploadFilesUseCase<U, F>,
    write_use_case: WriteResultUseCase<F>,
    settings: FlowSettings,
}

impl<U: UploadRepository, F: FileRepository> ShortcutFlowUseCase<U, F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `upload_repository` - アップロードリポジトリ
    /// * `file_repository` - ファイルリポジトリ
    /// * `settings` - フロー実行設定
    pub fn new(upload_repository: Arc<U>, file_repository: Arc<F>, settings: FlowSettings) -> Self {
        Self {
            upload_use_case: UploadFilesUseCase::new(upload_repository, file_repository.clone()),
            write_use_case: WriteResultUseCase::new(file_repository.clone()),
            file_repository,
            settings,
        }
    }

    /// フローを実行し、出力ファイルのパスを返す
    ///
    /// # Errors
    ///
    /// 入力不足・通信失敗・書き込み失敗を `FlowError` として返す
    pub async fn execute(
        &self,
        flow: ShortcutFlow,
        input: &ShortcutInput,
    ) -> Result<PathBuf, FlowError> {
        let mut resolved = resolve(flow, input, &self.settings.default_image_mode)?;

        if !flow.accepts_many() {
            let source = resolved
                .files
                .first()
                .cloned()
                .ok_or_else(|| FlowError::MissingInput(flow.missing_input_message().to_string()))?;

            if !self.file_repository.exists(&source).await {
                warn!("Input file does not exist: {}", source.display());
                return Err(FlowError::MissingInput(
                    flow.missing_input_message().to_string(),
                ));
            }

            if flow == ShortcutFlow::UnlockPdf {
                resolved.files = vec![self.stage_input(&source).await?];
            }
        }

        info!("Running {} against {}", flow, resolved.endpoint);
        let payload = self
            .upload_use_case
            .execute(resolved.into_upload_request())
            .await;

        self.write_use_case
            .execute(payload, flow, &self.settings.output_dir)
            .await
    }

    /// フローを実行し、ホストの出力チャネルに渡す値を返す
    ///
    /// `legacy_silent_unlock` が有効な場合、unlock フローの失敗は何も出力しない
    pub async fn execute_for_host(&self, flow: ShortcutFlow, input: &ShortcutInput) -> ShortcutOutput {
        let result = self.execute(flow, input).await;

        match result {
            Err(e) if flow == ShortcutFlow::UnlockPdf && self.settings.legacy_silent_unlock => {
                warn!("{} failed silently: {}", flow, e);
                ShortcutOutput::Nothing
            }
            other => ShortcutOutput::from(other),
        }
    }

    /// 入力PDFを一時ディレクトリに退避する
    async fn stage_input(&self, source: &Path) -> Result<PathBuf, FlowError> {
        let staged = self.settings.output_dir.join(staged_input_name());
        self.file_repository
            .copy(source, &staged)
            .await
            .map_err(|e| FlowError::OutputWrite(format!("{:#}", e)))?;
        Ok(staged)
    }
}
