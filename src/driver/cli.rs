//! CLI Argument Parsing
//!
//! CLIの引数解析
//!
//! ショートカットパラメータは `-i/--input`、プレーンテキストは位置引数で渡す。

use clap::{Parser, Subcommand};

use crate::domain::entities::flow::ShortcutFlow;
use crate::domain::entities::shortcut_input::{ShortcutInput, ShortcutParameter};

/// ファイルをPDFサービスに送信し、結果のファイルパスを出力するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "pdf-shortcuts")]
#[command(about = "Send files to a PDF service and print the path of the result", long_about = None)]
pub struct Args {
    /// Config file path (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory output files are written to (defaults to the OS temp dir)
    #[arg(long)]
    pub output_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Combine images into one PDF. Plain texts: <URL> [IMAGE_MODE]
    ImagesToPdf(FlowArgs),

    /// Remove the password from a PDF. Plain texts: <PASSWORD> <URL>
    UnlockPdf(FlowArgs),

    /// Compress a PDF. Plain texts: <URL>
    CompressPdf(FlowArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct FlowArgs {
    /// Input file (repeat for several files)
    #[arg(short, long = "input")]
    pub inputs: Vec<String>,

    /// Plain text arguments, interpreted by position
    pub plain_texts: Vec<String>,
}

impl Command {
    pub fn flow(&self) -> ShortcutFlow {
        match self {
            Self::ImagesToPdf(_) => ShortcutFlow::ImagesToPdf,
            Self::UnlockPdf(_) => ShortcutFlow::UnlockPdf,
            Self::CompressPdf(_) => ShortcutFlow::CompressPdf,
        }
    }

    fn flow_args(&self) -> &FlowArgs {
        match self {
            Self::ImagesToPdf(args) | Self::UnlockPdf(args) | Self::CompressPdf(args) => args,
        }
    }

    /// ホスト入力に変換
    pub fn to_input(&self) -> ShortcutInput {
        let args = self.flow_args();
        let parameter = if args.inputs.is_empty() {
            None
        } else {
            Some(ShortcutParameter::from_paths(args.inputs.clone()))
        };
        ShortcutInput::new(parameter, args.plain_texts.clone())
    }
}
