//! Configuration
//!
//! JSON設定ファイルの読み込み
//!
//! 全ての項目は省略可能で、設定ファイル自体も省略できる。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::application::dto::flow_settings::FlowSettings;
use crate::domain::entities::flow::DEFAULT_IMAGE_MODE;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory output files are written to (defaults to the OS temp dir)
    pub output_dir: Option<String>,

    /// Image mode sent when the images flow gets no mode argument
    pub default_image_mode: String,

    /// Unlock flow prints nothing on failure instead of an error message
    pub legacy_silent_unlock: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            default_image_mode: DEFAULT_IMAGE_MODE.to_string(),
            legacy_silent_unlock: false,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).into_owned();
        let content = fs::read_to_string(&expanded)
            .context(format!("Failed to read config file: {}", expanded))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// 設定ファイルが指定されていれば読み込み、なければデフォルト値を使う
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// 出力ディレクトリを決定する
    ///
    /// CLIの指定 > 設定ファイル > OSの一時ディレクトリ の順に優先
    pub fn resolve_output_dir(&self, cli_override: Option<&str>) -> PathBuf {
        cli_override
            .or(self.output_dir.as_deref())
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).into_owned()))
            .unwrap_or_else(std::env::temp_dir)
    }

    /// フロー実行設定に変換
    pub fn to_flow_settings(&self, output_dir_override: Option<&str>) -> FlowSettings {
        FlowSettings::new(
            self.resolve_output_dir(output_dir_override),
            self.default_image_mode.clone(),
            self.legacy_silent_unlock,
        )
    }
}
