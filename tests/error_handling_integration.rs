use shears::error::Error;
use shears::{batch, files, matcher, presets, summarizer};
use tempfile::TempDir;

/// Malformed patterns surface as typed errors from every entry point
#[test]
fn test_malformed_pattern_is_always_typed() {
    let bad = "(unbalanced";

    let find_err = matcher::find_all("text", bad).unwrap_err();
    assert!(matches!(find_err, Error::InvalidPattern { .. }));

    let replace_err = matcher::replace_all(Some("text"), bad, "x").unwrap_err();
    assert!(matches!(replace_err, Error::InvalidPattern { .. }));

    let filter_err = batch::matching_filter(bad).err().unwrap();
    assert!(matches!(filter_err, Error::InvalidPattern { .. }));
}

/// The pattern string is preserved in the error for the caller to present
#[test]
fn test_invalid_pattern_carries_pattern_string() {
    let err = matcher::find_all("text", "(").unwrap_err();
    match err {
        Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "("),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

/// Missing text is InvalidInput, distinct from an empty string
#[test]
fn test_missing_text_rejected_empty_text_accepted() {
    let err = matcher::replace_all(None, "a", "b").unwrap_err();
    assert!(matches!(err, Error::InvalidInput));

    let ok = matcher::replace_all(Some(""), "a", "b").unwrap();
    assert_eq!(ok, "");
}

/// Pattern resolution fails before any matcher operation runs
#[test]
fn test_no_pattern_selected_is_caller_level() {
    let err = presets::resolve_pattern(None, None).unwrap_err();
    assert!(matches!(err, Error::NoPatternSelected));

    let err = presets::resolve_pattern(Some(""), Some("unknown-preset")).unwrap_err();
    assert!(matches!(err, Error::NoPatternSelected));
}

/// File failures propagate immediately as Io errors carrying the path
#[tokio::test]
async fn test_file_errors_carry_path_and_cause() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let read_err = files::read_to_string(&missing).await.unwrap_err();
    match read_err {
        Error::Io { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }

    let batch_err = batch::process_file(&missing, batch::keep_all, batch::identity)
        .await
        .unwrap_err();
    assert!(matches!(batch_err, Error::Io { .. }));
}

/// Writing into a missing directory fails rather than silently creating it
#[tokio::test]
async fn test_write_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no_such_dir").join("out.txt");

    let err = files::write_string(&path, "content").await.unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

/// Summarization edge inputs degrade without errors
#[test]
fn test_summarize_edges_are_not_errors() {
    assert_eq!(summarizer::summarize("", 3).unwrap(), "");
    assert_eq!(summarizer::summarize("One. Two.", 5).unwrap(), "One. Two.");
    assert_eq!(summarizer::summarize("One. Two. Three.", 0).unwrap(), "");
}
