//! pdf-shortcuts - Shortcut PDF client
//!
//! ファイルをPDFサービスに送信し、結果のファイルパスを標準出力に書き出す

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use pdf_shortcuts::driver::workflow::{emit_output, run};
use pdf_shortcuts::driver::Args;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration and run the flow; config errors become host output
    let output = run(args).await;

    emit_output(&output, &mut std::io::stdout().lock())?;
    Ok(())
}
