//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **resolve_input**: ホスト入力の解釈と検証（InputResolver）
//! - **UploadFilesUseCase**: multipart リクエストの組み立てと送信（MultipartUploader）
//! - **WriteResultUseCase**: レスポンスの一時ファイルへの書き込み（ResultWriter）
//! - **ShortcutFlowUseCase**: 上記を順番に実行するフロー全体

pub mod resolve_input;
pub mod run_flow;
pub mod upload_files;
pub mod write_result;
