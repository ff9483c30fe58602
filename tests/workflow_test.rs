//! Workflow Integration Tests
//!
//! ShortcutWorkflow の統合テスト（HTTPサーバーは wiremock）

use pdf_shortcuts::adapter::config::Config;
use pdf_shortcuts::domain::entities::flow_outcome::ShortcutOutput;
use pdf_shortcuts::driver::cli::{Args, Command, FlowArgs};
use pdf_shortcuts::driver::workflow::{run, ShortcutWorkflow};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// テスト用の引数を作成
fn args(output_dir: &Path, command: Command) -> Args {
    Args {
        config: None,
        output_dir: Some(output_dir.to_string_lossy().to_string()),
        command,
    }
}

fn flow_args(inputs: Vec<String>, plain_texts: Vec<String>) -> FlowArgs {
    FlowArgs {
        inputs,
        plain_texts,
    }
}

/// 出力がパスであることを確認し、その内容を返す
fn read_output(output: &ShortcutOutput) -> Vec<u8> {
    match output {
        ShortcutOutput::Path(path) => fs::read(path).expect("output file should exist"),
        other => panic!("expected a path, got {:?}", other),
    }
}

#[tokio::test]
async fn test_images_to_pdf_skips_missing_files() {
    let temp_dir = TempDir::new().unwrap();
    let image = temp_dir.path().join("a.jpg");
    fs::write(&image, b"JPEG-A").unwrap();
    let missing = temp_dir.path().join("missing.jpg");

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/imagesToPdf"))
        .and(body_string_contains("name=\"image_mode\"\r\n\r\nRGB"))
        .and(body_string_contains("filename=\"a.jpg\""))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PDFDATA".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let command = Command::ImagesToPdf(flow_args(
        vec![
            image.to_string_lossy().to_string(),
            missing.to_string_lossy().to_string(),
        ],
        vec![format!("{}/imagesToPdf", mock_server.uri())],
    ));

    let workflow = ShortcutWorkflow::new(Config::default());
    let output = workflow.execute(args(temp_dir.path(), command)).await;

    assert_eq!(read_output(&output), b"PDFDATA");

    let received = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body).to_string();
    assert_eq!(body.matches("name=\"files\"").count(), 1);
    assert!(!body.contains("missing.jpg"));
}

#[tokio::test]
async fn test_images_to_pdf_uses_configured_mode() {
    let temp_dir = TempDir::new().unwrap();
    let image = temp_dir.path().join("a.png");
    fs::write(&image, b"PNG").unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("name=\"image_mode\"\r\n\r\nL"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PDF-L".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config {
        default_image_mode: "L".to_string(),
        ..Default::default()
    };
    let command = Command::ImagesToPdf(flow_args(
        vec![image.to_string_lossy().to_string()],
        vec![mock_server.uri()],
    ));

    let output = ShortcutWorkflow::new(config)
        .execute(args(temp_dir.path(), command))
        .await;

    assert_eq!(read_output(&output), b"PDF-L");
}

#[tokio::test]
async fn test_images_to_pdf_without_files() {
    let temp_dir = TempDir::new().unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let command = Command::ImagesToPdf(flow_args(vec![], vec![mock_server.uri()]));
    let output = ShortcutWorkflow::new(Config::default())
        .execute(args(temp_dir.path(), command))
        .await;

    assert_eq!(
        output,
        ShortcutOutput::Message("No image files provided".to_string())
    );
}

#[tokio::test]
async fn test_images_to_pdf_request_failed() {
    let temp_dir = TempDir::new().unwrap();
    let image = temp_dir.path().join("a.jpg");
    fs::write(&image, b"JPEG").unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let command = Command::ImagesToPdf(flow_args(
        vec![image.to_string_lossy().to_string()],
        vec![mock_server.uri()],
    ));
    let output = ShortcutWorkflow::new(Config::default())
        .execute(args(temp_dir.path(), command))
        .await;

    assert_eq!(output, ShortcutOutput::Message("Request failed".to_string()));
}

#[tokio::test]
async fn test_unlock_pdf_success() {
    let temp_dir = TempDir::new().unwrap();
    let locked = temp_dir.path().join("locked.pdf");
    fs::write(&locked, b"%PDF-locked").unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/unlock"))
        .and(body_string_contains("name=\"password\"\r\n\r\nsecret"))
        .and(body_string_contains("%PDF-locked"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-open".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let command = Command::UnlockPdf(flow_args(
        vec![locked.to_string_lossy().to_string()],
        vec!["secret".to_string(), format!("{}/unlock", mock_server.uri())],
    ));
    let output = ShortcutWorkflow::new(Config::default())
        .execute(args(temp_dir.path(), command))
        .await;

    assert_eq!(read_output(&output), b"%PDF-open");

    let received = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body).to_string();
    assert_eq!(body.matches("name=\"file\"").count(), 1);
}

#[tokio::test]
async fn test_unlock_pdf_absent_response_legacy_is_silent() {
    let temp_dir = TempDir::new().unwrap();
    let locked = temp_dir.path().join("locked.pdf");
    fs::write(&locked, b"%PDF-locked").unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config {
        legacy_silent_unlock: true,
        ..Default::default()
    };
    let command = Command::UnlockPdf(flow_args(
        vec![locked.to_string_lossy().to_string()],
        vec!["secret".to_string(), mock_server.uri()],
    ));
    let output = ShortcutWorkflow::new(config)
        .execute(args(temp_dir.path(), command))
        .await;

    assert_eq!(output, ShortcutOutput::Nothing);
}

#[tokio::test]
async fn test_unlock_pdf_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let command = Command::UnlockPdf(flow_args(
        vec![temp_dir.path().join("nope.pdf").to_string_lossy().to_string()],
        vec!["secret".to_string(), mock_server.uri()],
    ));
    let output = ShortcutWorkflow::new(Config::default())
        .execute(args(temp_dir.path(), command))
        .await;

    assert_eq!(
        output,
        ShortcutOutput::Message("No PDF file provided".to_string())
    );
}

#[tokio::test]
async fn test_compress_pdf_success() {
    let temp_dir = TempDir::new().unwrap();
    let pdf = temp_dir.path().join("big.pdf");
    fs::write(&pdf, b"%PDF-big").unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/compressPdf"))
        .and(body_string_contains("filename=\"big.pdf\""))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-small".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let command = Command::CompressPdf(flow_args(
        vec![pdf.to_string_lossy().to_string()],
        vec![format!("{}/compressPdf", mock_server.uri())],
    ));
    let output = ShortcutWorkflow::new(Config::default())
        .execute(args(temp_dir.path(), command))
        .await;

    assert_eq!(read_output(&output), b"%PDF-small");
}

#[tokio::test]
async fn test_images_to_pdf_skips_directory_entry() {
    let temp_dir = TempDir::new().unwrap();
    let image = temp_dir.path().join("a.jpg");
    fs::write(&image, b"JPEG-A").unwrap();
    let folder = temp_dir.path().join("photos");
    fs::create_dir(&folder).unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PDFDATA".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let command = Command::ImagesToPdf(flow_args(
        vec![
            image.to_string_lossy().to_string(),
            folder.to_string_lossy().to_string(),
        ],
        vec![mock_server.uri()],
    ));
    let output = ShortcutWorkflow::new(Config::default())
        .execute(args(temp_dir.path(), command))
        .await;

    assert_eq!(read_output(&output), b"PDFDATA");

    let received = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body).to_string();
    assert_eq!(body.matches("name=\"files\"").count(), 1);
}

#[tokio::test]
async fn test_compress_pdf_directory_is_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let folder = temp_dir.path().join("docs.pdf");
    fs::create_dir(&folder).unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let command = Command::CompressPdf(flow_args(
        vec![folder.to_string_lossy().to_string()],
        vec![mock_server.uri()],
    ));
    let output = ShortcutWorkflow::new(Config::default())
        .execute(args(temp_dir.path(), command))
        .await;

    assert_eq!(
        output,
        ShortcutOutput::Message("No PDF file provided".to_string())
    );
}

#[tokio::test]
async fn test_run_with_missing_config_reports_message() {
    let temp_dir = TempDir::new().unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut run_args = args(
        temp_dir.path(),
        Command::CompressPdf(flow_args(vec![], vec![mock_server.uri()])),
    );
    run_args.config = Some(temp_dir.path().join("missing.json").to_string_lossy().to_string());

    match run(run_args).await {
        ShortcutOutput::Message(message) => assert!(message.starts_with("Invalid config: ")),
        other => panic!("expected a message, got {:?}", other),
    }
}
