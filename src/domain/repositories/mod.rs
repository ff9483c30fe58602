//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供
//! - ホストのグローバル状態の代わりに、依存性として注入される

pub mod file_repository;
pub mod upload_repository;
