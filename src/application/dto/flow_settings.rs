//! # Flow Settings DTO
//!
//! フロー実行設定のData Transfer Object

use std::path::PathBuf;

use crate::domain::entities::flow::DEFAULT_IMAGE_MODE;

/// フロー実行設定
///
/// 設定ファイルとCLI引数から組み立てられる
#[derive(Debug, Clone)]
pub struct FlowSettings {
    /// 出力ファイルを書き込む一時ディレクトリ
    pub output_dir: PathBuf,
    /// 画像フローで画像モードが省略された場合の値
    pub default_image_mode: String,
    /// unlock フローで、入力ファイルが無い場合とレスポンスが無い場合に何も出力しない
    pub legacy_silent_unlock: bool,
}

impl FlowSettings {
    /// 新しいフロー設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use pdf_shortcuts::application::dto::flow_settings::FlowSettings;
    ///
    /// let settings = FlowSettings::new("/tmp/shortcuts".into(), "L".to_string(), false);
    ///
    /// assert_eq!(settings.output_dir.to_str(), Some("/tmp/shortcuts"));
    /// assert_eq!(settings.default_image_mode, "L");
    /// assert!(!settings.legacy_silent_unlock);
    /// ```
    pub fn new(output_dir: PathBuf, default_image_mode: String, legacy_silent_unlock: bool) -> Self {
        Self {
            output_dir,
            default_image_mode,
            legacy_silent_unlock,
        }
    }

    /// 指定ディレクトリとデフォルト値で設定を作成
    pub fn with_output_dir(output_dir: PathBuf) -> Self {
        Self::new(output_dir, DEFAULT_IMAGE_MODE.to_string(), false)
    }
}
