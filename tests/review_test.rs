//! Integration tests for reviewing, filtering and serializing results.

use docdiff::{
    compare_texts, to_json, ChangeFilter, ChangeStatus, ChangeType, ComparisonOptions,
    ComparisonResult, DetailLevel, Error, JsonFormat, SortBy,
};

fn sample() -> ComparisonResult {
    compare_texts(
        "one two three four",
        "one 2 three four five six",
        &ComparisonOptions::new().with_detail_level(DetailLevel::Word),
    )
}

#[test]
fn test_review_workflow() {
    let mut result = sample();
    let total = result.statistics().total_changes;
    assert!(total >= 2);
    assert_eq!(result.review_progress().pending, total);

    result.accept("change-0").unwrap();
    result.reject("change-1").unwrap();
    let progress = result.review_progress();
    assert_eq!(progress.accepted, 1);
    assert_eq!(progress.rejected, 1);
    assert_eq!(progress.pending, total - 2);

    // Reviewers may change their mind.
    result.reject("change-0").unwrap();
    assert_eq!(result.get("change-0").unwrap().status(), ChangeStatus::Rejected);
}

#[test]
fn test_review_errors() {
    let mut result = sample();

    let err = result.accept("change-999").unwrap_err();
    assert!(matches!(err, Error::ChangeNotFound(ref id) if id == "change-999"));

    result.accept("change-0").unwrap();
    let err = result
        .set_status("change-0", ChangeStatus::Pending)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidStatusTransition {
            from: ChangeStatus::Accepted,
            to: ChangeStatus::Pending
        }
    ));
}

#[test]
fn test_status_does_not_affect_statistics() {
    let mut result = sample();
    let before = *result.statistics();
    result.accept("change-0").unwrap();
    assert_eq!(*result.statistics(), before);
}

#[test]
fn test_filter_and_sort() {
    let result = sample();

    let added = result.filtered(&ChangeFilter::new().with_type(ChangeType::Added));
    assert!(!added.is_empty());
    assert!(added.iter().all(|c| c.change_type == ChangeType::Added));

    let by_size = result.filtered(&ChangeFilter::new().sort_by(SortBy::Size).descending());
    for pair in by_size.windows(2) {
        assert!(pair[0].content_len() >= pair[1].content_len());
    }
    assert_eq!(by_size.len(), result.changes().len());
}

#[test]
fn test_json_round_trip_keeps_status() {
    let mut result = sample();
    result.accept("change-0").unwrap();

    let json = to_json(&result, JsonFormat::Compact).unwrap();
    assert!(json.contains("\"type\":\"added\"") || json.contains("\"type\":\"deleted\""));
    assert!(!json.contains('\n'));

    let restored: ComparisonResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.statistics(), result.statistics());
    assert_eq!(
        restored.get("change-0").unwrap().status(),
        ChangeStatus::Accepted
    );
}

#[test]
fn test_result_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ComparisonResult>();
}
