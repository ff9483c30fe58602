//! # pdf-shortcuts
//!
//! 自動化ショートカットからファイルをPDFサービスに送信するツール
//!
//! 1回の呼び出しで multipart/form-data のPOSTを1度だけ行い、
//! レスポンスを一時ファイルに書き込んでそのパスを出力する。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 入力・リクエスト・結果のエンティティとRepository trait
//! - **Application層**: InputResolver → MultipartUploader → ResultWriter のフロー
//! - **Adapter層**: 外部システムとの統合（HTTP, ファイルシステム, 設定ファイル）
//! - **Driver層**: CLI、依存性注入

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
