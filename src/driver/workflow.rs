//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use log::{error, info};
use std::io::{self, Write};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::http::ReqwestUploadRepository;
use crate::adapter::repositories::local_file_repository::LocalFileRepository;
use crate::application::use_cases::run_flow::ShortcutFlowUseCase;
use crate::domain::entities::flow_outcome::ShortcutOutput;

use super::cli::Args;

/// Write the output value to the host's output channel
///
/// `ShortcutOutput::Nothing` writes nothing at all
pub fn emit_output<W: Write>(output: &ShortcutOutput, writer: &mut W) -> io::Result<()> {
    if let Some(value) = output.as_host_value() {
        writeln!(writer, "{}", value)?;
    }
    writer.flush()
}

/// 設定を読み込んでワークフローを実行する
///
/// 設定ファイルの読み込みに失敗した場合もエラーメッセージとしてホストに返す
pub async fn run(args: Args) -> ShortcutOutput {
    match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => ShortcutWorkflow::new(config).execute(args).await,
        Err(e) => {
            error!("Failed to load config: {:#}", e);
            ShortcutOutput::Message(format!("Invalid config: {:#}", e))
        }
    }
}

/// Shortcut Workflow
pub struct ShortcutWorkflow {
    config: Config,
}

impl ShortcutWorkflow {
    /// Create a new workflow instance with the loaded configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute one flow invocation
    ///
    /// Every failure ends up as a `ShortcutOutput`; nothing is propagated
    pub async fn execute(&self, args: Args) -> ShortcutOutput {
        let settings = self.config.to_flow_settings(args.output_dir.as_deref());
        let flow = args.command.flow();
        let input = args.command.to_input();

        info!("Starting {}...", flow);
        info!("Output directory: {}", settings.output_dir.display());

        // Repository implementations
        let upload_repo = Arc::new(ReqwestUploadRepository::new());
        let file_repo = Arc::new(LocalFileRepository::new());

        let use_case = ShortcutFlowUseCase::new(upload_repo, file_repo, settings);
        let output = use_case.execute_for_host(flow, &input).await;

        info!("{} finished", flow);
        output
    }
}
