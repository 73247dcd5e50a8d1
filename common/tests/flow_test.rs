//! アップロード〜解析〜表示の流れのテスト
//!
//! 検証・疑似解析・セッションの世代管理を組み合わせて検証

use futures::executor::block_on;
use image_terms_common::{
    first_file, validate_upload, AppConfig, Error, FileMeta, ImageHandle, MockAnalyzer, Phase,
    ResultSource, Session,
};

fn file(mime_type: &str, size: u64) -> FileMeta {
    FileMeta {
        name: "upload".to_string(),
        mime_type: mime_type.to_string(),
        size,
    }
}

/// text/plain は拒否され、解析は始まらない
#[test]
fn test_invalid_type_does_not_start_analysis() {
    let config = AppConfig::default();
    let session = Session::new();

    let err = validate_upload(&file("text/plain", 100), config.max_upload_bytes).unwrap_err();
    assert!(matches!(err, Error::InvalidFileType(_)));
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.result().is_none());
}

/// 11,000,000バイトの画像は大きすぎる
#[test]
fn test_too_large_image() {
    let config = AppConfig::default();
    let err = validate_upload(&file("image/png", 11_000_000), config.max_upload_bytes).unwrap_err();
    assert!(matches!(err, Error::FileTooLarge { size: 11_000_000, .. }));
}

/// ドロップされた複数ファイルのうち先頭のみ使う
#[test]
fn test_drop_uses_first_file_only() {
    let dropped = vec![file("image/png", 1), file("text/plain", 1)];
    let chosen = first_file(dropped).expect("ファイルなし");
    assert_eq!(chosen.mime_type, "image/png");
    assert!(validate_upload(&chosen, AppConfig::default().max_upload_bytes).is_ok());
}

/// 画像経路の完走
#[test]
fn test_full_image_flow() {
    let analyzer = MockAnalyzer::from_millis(0);
    let mut session = Session::new();

    let upload = session.begin_upload();
    let handle = ImageHandle::from_bytes("image/png", &[0x89, 0x50, 0x4e, 0x47]);
    let ticket = session.image_ready(upload, handle.clone()).expect("チケットなし");

    let result = block_on(analyzer.analyze(&handle, |_| async {}));
    assert!(session.finish_analysis(ticket, result));

    let shown = session.result().expect("結果なし");
    assert!((0.0..=1.0).contains(&shown.confidence));
    assert!(!shown.search_terms.is_empty());
    assert_eq!(session.source(), Some(ResultSource::Image));
}

/// 遅れて完了した古い解析は、後から発行した検索結果を上書きしない
#[test]
fn test_last_write_wins_between_analysis_and_search() {
    let analyzer = MockAnalyzer::from_millis(0);
    let mut session = Session::new();

    let upload = session.begin_upload();
    let handle = ImageHandle::from_bytes("image/jpeg", b"jpeg");
    let ticket = session.image_ready(upload, handle.clone()).expect("チケットなし");

    assert!(session.search(&analyzer, "blazer"));
    let late = block_on(analyzer.analyze(&handle, |_| async {}));
    assert!(!session.finish_analysis(ticket, late));

    let shown = session.result().expect("結果なし");
    assert_eq!(shown.search_terms[0], "blazer");
    assert_eq!(shown.categories, vec!["Search Results"]);
    assert!(session.image().is_none());
}

/// 空白のみの検索は結果を変えない
#[test]
fn test_blank_search_keeps_previous_result() {
    let analyzer = MockAnalyzer::default();
    let mut session = Session::new();
    session.search(&analyzer, "coat");
    let before = session.result().cloned();

    assert!(!session.search(&analyzer, "   "));
    assert_eq!(session.result().cloned(), before);
}

/// 検索結果の表示中に画像を投げると、検索結果は捨てられ画像の解析結果に置き換わる
#[test]
fn test_upload_after_search_replaces_text_result() {
    let analyzer = MockAnalyzer::from_millis(0);
    let mut session = Session::new();
    assert!(session.search(&analyzer, "blazer"));

    let upload = session.begin_upload();
    assert_eq!(session.phase(), Phase::Uploading);
    assert!(session.result().is_none());
    assert_eq!(session.source(), None);

    let handle = ImageHandle::from_bytes("image/png", b"png");
    let ticket = session.image_ready(upload, handle.clone()).expect("チケットなし");
    let result = block_on(analyzer.analyze(&handle, |_| async {}));
    assert!(session.finish_analysis(ticket, result));

    assert_eq!(session.source(), Some(ResultSource::Image));
    assert_ne!(session.result().map(|r| r.search_terms[0].as_str()), Some("blazer"));
}

/// 読み込み中に検索すると、遅れて届いた画像は表示されない
#[test]
fn test_search_during_upload_drops_late_image() {
    let analyzer = MockAnalyzer::default();
    let mut session = Session::new();

    let upload = session.begin_upload();
    assert!(session.search(&analyzer, "scarf"));

    let late = ImageHandle::from_bytes("image/png", b"late");
    assert!(session.image_ready(upload, late).is_none());
    assert!(session.image().is_none());
    assert_eq!(session.result().map(|r| r.search_terms[0].as_str()), Some("scarf"));
}
