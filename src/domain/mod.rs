//! # Domain Layer
//!
//! ショートカット連携フローの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ホスト環境（ショートカット、ファイルシステム、HTTP）について何も知らない
//! - 外部システムへのアクセスはRepository traitを通じてのみ行う
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: 入力・リクエスト・結果のエンティティ
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（出力ファイル名の決定）

pub mod entities;
pub mod repositories;
pub mod services;
