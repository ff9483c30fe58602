//! # Domain Entities
//!
//! フローで扱うエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **ShortcutInput**: ホストから渡される入力（ショートカットパラメータとプレーンテキスト）
//! - **ShortcutFlow**: フローの種類とフローごとの定数
//! - **UploadRequest / MultipartRequest**: multipart アップロードの表現
//! - **FlowError / ShortcutOutput**: フローの結果とホストへの出力

pub mod flow;
pub mod flow_outcome;
pub mod shortcut_input;
pub mod upload_request;
