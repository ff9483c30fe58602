//! # Output Naming Service
//!
//! 一時ファイル名の決定
//!
//! 同時実行された呼び出し同士が同じファイルを上書きしないよう、
//! 呼び出しごとに一意な名前を生成する。

use uuid::Uuid;

/// 入力ファイルを退避する際のファイル名の接頭辞
pub const STAGED_INPUT_STEM: &str = "temp-in";

/// `<stem>-<token>.pdf` 形式の一意なファイル名を返す
pub fn unique_output_name(stem: &str) -> String {
    format!("{}-{}.pdf", stem, Uuid::new_v4().simple())
}

/// 入力PDFの退避先ファイル名を返す
pub fn staged_input_name() -> String {
    unique_output_name(STAGED_INPUT_STEM)
}
