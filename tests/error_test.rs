//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use docscan::error::DocScanError;
use docscan::common::SubmitWarning;

/// DocScanErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        DocScanError::FileNotFound("lease.pdf".to_string()),
        DocScanError::UploadFailed("Failed to upload. Is backend running?".to_string()),
        DocScanError::Submit(SubmitWarning::NoFileSelected),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 未選択警告のメッセージ確認
#[test]
fn test_no_file_selected_message() {
    let err: DocScanError = SubmitWarning::NoFileSelected.into();
    let display = format!("{}", err);

    assert!(display.contains("送信できません"));
    assert!(display.contains("No file selected"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = DocScanError::FileNotFound("テスト.pdf".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("FileNotFound"));
    assert!(debug.contains("テスト.pdf"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DocScanError = io_err.into();

    assert!(matches!(err, DocScanError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: DocScanError = json_err.into();

    assert!(matches!(err, DocScanError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = docscan::common::Error::Status(502);
    let err: DocScanError = common_err.into();

    assert!(matches!(err, DocScanError::Common(_)));
    assert_eq!(format!("{}", err), "Server returned status 502");
}
