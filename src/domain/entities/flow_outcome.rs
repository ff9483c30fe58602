//! # Flow Outcome
//!
//! フローの結果と、ホストの出力チャネルへの変換
//!
//! フロー内部では `Result<PathBuf, FlowError>` で結果を扱い、
//! ホストの単一文字列チャネルへの変換は境界（Driver層）でのみ行う。

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// フローのエラー
///
/// `Display` の文字列がそのままホストへの出力になる
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// 必須の入力が無い（ネットワーク呼び出しは行わない）
    #[error("{0}")]
    MissingInput(String),

    /// 入力の形が不正
    #[error("{0}")]
    InvalidInput(String),

    /// 通信失敗、または空のレスポンス
    ///
    /// HTTPステータスは区別しない
    #[error("Request failed")]
    TransportFailure,

    /// 出力ファイルの書き込みに失敗
    #[error("Failed to write output: {0}")]
    OutputWrite(String),
}

/// ホストの出力チャネルに渡す値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutOutput {
    /// 生成されたファイルのパス
    Path(PathBuf),
    /// 人が読めるエラーメッセージ
    Message(String),
    /// 何も出力しない
    Nothing,
}

impl ShortcutOutput {
    /// 出力チャネルに書き出す文字列（`Nothing` の場合は `None`）
    pub fn as_host_value(&self) -> Option<String> {
        match self {
            Self::Path(path) => Some(path.display().to_string()),
            Self::Message(message) => Some(message.clone()),
            Self::Nothing => None,
        }
    }
}

impl From<Result<PathBuf, FlowError>> for ShortcutOutput {
    fn from(result: Result<PathBuf, FlowError>) -> Self {
        match result {
            Ok(path) => Self::Path(path),
            Err(e) => Self::Message(e.to_string()),
        }
    }
}

impl fmt::Display for ShortcutOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_host_value() {
            Some(value) => f.write_str(&value),
            None => Ok(()),
        }
    }
}
