//! # Driver Layer (Presentation)
//!
//! CLIとしてホストとのインターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ホストの出力チャネル（標準出力）への書き出し
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod workflow;

pub use cli::Args;
pub use workflow::ShortcutWorkflow;
