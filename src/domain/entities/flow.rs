//! # ShortcutFlow
//!
//! フローの種類とフローごとの定数

use std::fmt;

/// 画像フローで省略時に使われる画像モード
pub const DEFAULT_IMAGE_MODE: &str = "RGB";

/// ショートカットフローの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutFlow {
    /// 複数画像を1つのPDFにまとめる
    ImagesToPdf,
    /// パスワード付きPDFのロックを解除する
    UnlockPdf,
    /// PDFを圧縮する
    CompressPdf,
}

impl ShortcutFlow {
    /// ファイルパートのフィールド名
    pub fn file_field(&self) -> &'static str {
        match self {
            Self::ImagesToPdf => "files",
            Self::UnlockPdf | Self::CompressPdf => "file",
        }
    }

    /// 出力ファイル名の接頭辞
    pub fn output_stem(&self) -> &'static str {
        match self {
            Self::ImagesToPdf => "out-images",
            Self::UnlockPdf => "temp-out",
            Self::CompressPdf => "compressed-out",
        }
    }

    /// 主入力が無い場合のメッセージ
    pub fn missing_input_message(&self) -> &'static str {
        match self {
            Self::ImagesToPdf => "No image files provided",
            Self::UnlockPdf | Self::CompressPdf => "No PDF file provided",
        }
    }

    /// 複数ファイルを受け付けるかどうか
    pub fn accepts_many(&self) -> bool {
        matches!(self, Self::ImagesToPdf)
    }
}

impl fmt::Display for ShortcutFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ImagesToPdf => "images-to-pdf",
            Self::UnlockPdf => "unlock-pdf",
            Self::CompressPdf => "compress-pdf",
        };
        f.write_str(name)
    }
}
