mod support;

use axum::http::StatusCode;
use corrcalc_cli::error::NETWORK_ERROR_MESSAGE;
use corrcalc_cli::{shell, Axis, RequestPhase, Session, SessionError};
use corrcalc_core::{CorrelationOutcome, CorrelationType, ValidationError};
use serde_json::json;
use std::io::Cursor;
use support::{MockService, Reply};

fn filled(kind: CorrelationType, x: &[f64], y: &[f64]) -> Session {
    let mut session = Session::new(kind);
    session.dataset_mut(Axis::X).extend(x.iter().copied());
    session.dataset_mut(Axis::Y).extend(y.iter().copied());
    session
}

#[tokio::test]
async fn invalid_datasets_never_reach_the_service() {
    let mock = MockService::new(Reply::Ok(support::paired()));
    let client = support::client(&support::spawn(mock.clone()).await);

    let cases = [
        (vec![], vec![1.0, 2.0], "Please add values to both datasets"),
        (
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0],
            "Both datasets must have the same number of values",
        ),
        (vec![1.0], vec![2.0], "Each dataset must contain at least 2 values"),
    ];

    for (x, y, message) in cases {
        let mut session = filled(CorrelationType::Both, &x, &y);
        let err = session.calculate(&client).await.unwrap_err();
        assert!(matches!(err, SessionError::Validation(_)));
        assert_eq!(err.to_string(), message);
        assert_eq!(session.error(), Some(message));
        assert_eq!(session.phase(), RequestPhase::Failed);
        assert!(session.result().is_none());
    }

    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn successful_calculation_is_kept_on_the_session() {
    let mock = MockService::new(Reply::Ok(support::paired()));
    let client = support::client(&support::spawn(mock.clone()).await);
    let mut session = filled(CorrelationType::Both, &[1.0, 2.0, 3.0], &[1.0, 3.0, 2.0]);

    let outcome = session.calculate(&client).await.expect("calculate").clone();
    assert!(matches!(outcome, CorrelationOutcome::Both(_)));
    assert_eq!(session.result(), Some(&outcome));
    assert_eq!(session.error(), None);
    assert_eq!(session.phase(), RequestPhase::Succeeded);
    assert_eq!(mock.hits(), 1);

    // Switching type drops the stale result.
    session.set_type(CorrelationType::Pearson);
    assert!(session.result().is_none());

    session.clear();
    assert!(session.dataset(Axis::X).is_empty());
    assert!(session.dataset(Axis::Y).is_empty());
    assert_eq!(session.phase(), RequestPhase::Idle);
}

#[tokio::test]
async fn service_error_is_recorded_then_cleared_by_next_attempt() {
    let mock = MockService::new(Reply::Status(
        StatusCode::BAD_REQUEST,
        json!({ "detail": "Cannot calculate Pearson coefficient (constant values)" }),
    ));
    let client = support::client(&support::spawn(mock).await);
    let mut session = filled(CorrelationType::Pearson, &[1.0, 1.0], &[2.0, 3.0]);

    let err = session.calculate(&client).await.unwrap_err();
    assert!(matches!(err, SessionError::Api(_)));
    assert_eq!(
        session.error(),
        Some("Cannot calculate Pearson coefficient (constant values)")
    );

    // Next attempt against a healthy service replaces the error.
    let healthy = MockService::new(Reply::Ok(support::single(0.5, "50.0%")));
    let client = support::client(&support::spawn(healthy).await);
    session.calculate(&client).await.expect("retry by user");
    assert_eq!(session.error(), None);
    assert!(matches!(session.result(), Some(CorrelationOutcome::Pearson(_))));
}

#[tokio::test]
async fn unreachable_service_reports_connectivity() {
    let client = support::client(&support::dead_url().await);
    let mut session = filled(CorrelationType::Spearman, &[1.0, 2.0], &[2.0, 1.0]);

    let err = session.calculate(&client).await.unwrap_err();
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    assert_eq!(session.phase(), RequestPhase::Failed);
}

#[tokio::test]
async fn batch_with_junk_token_is_rejected_before_any_request() {
    let mock = MockService::new(Reply::Ok(support::paired()));
    let client = support::client(&support::spawn(mock.clone()).await);
    let mut session = Session::default();

    let x = ["1", "2", "abc", "4"];
    let y = ["1", "2", "3"];
    let loaded = session
        .load_batch(Axis::X, &x)
        .and_then(|_| session.load_batch(Axis::Y, &y));

    let err = loaded.unwrap_err();
    assert!(matches!(err, SessionError::InvalidInput { .. }));
    assert_eq!(err.to_string(), "Dataset X: not a number: 'abc'");
    assert!(session.dataset(Axis::X).is_empty());
    assert!(session.dataset(Axis::Y).is_empty());

    // Nothing half-loaded can reach the service afterwards either.
    assert!(session.calculate(&client).await.is_err());
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn batch_of_clean_tokens_is_calculated_in_order() {
    let mock = MockService::new(Reply::Ok(support::paired()));
    let client = support::client(&support::spawn(mock.clone()).await);
    let mut session = Session::default();

    session.load_batch(Axis::X, &["1", "-2", " 3.5"]).expect("x");
    session.load_batch(Axis::Y, &["4", "5", "6"]).expect("y");
    session.calculate(&client).await.expect("calculate");

    assert_eq!(
        mock.last_body(),
        Some(json!({ "arrayX": [1.0, -2.0, 3.5], "arrayY": [4.0, 5.0, 6.0] }))
    );
}

#[tokio::test]
async fn shell_script_drives_a_full_calculation() {
    let mock = MockService::new(Reply::Ok(support::paired()));
    let client = support::client(&support::spawn(mock.clone()).await);
    let mut session = Session::default();

    let script = "\
x 1
x 2
x 3
y abc
y 2
y 4
y 9
rm y 2
y 7
show
calc
quit
x 99
";
    let mut out = Vec::new();
    shell::run(&mut session, &client, Cursor::new(script), &mut out, false)
        .await
        .expect("shell");
    let text = String::from_utf8(out).expect("utf8");

    assert!(text.contains("Not a number: 'abc'"));
    assert!(text.contains("Removed 9 from Dataset Y (count: 2)"));
    assert!(text.contains("Dataset Y: [0] 2 [1] 4 [2] 7"));
    assert!(text.contains("Results"));
    assert!(text.contains("Pearson Correlation ↑"));
    assert!(text.contains("Spearman Correlation ↓"));

    // Input after quit is ignored.
    assert_eq!(session.dataset(Axis::X).len(), 3);
    assert_eq!(
        mock.last_body(),
        Some(json!({ "arrayX": [1.0, 2.0, 3.0], "arrayY": [2.0, 4.0, 7.0] }))
    );
}

#[tokio::test]
async fn shell_refuses_calc_with_an_empty_dataset() {
    let mock = MockService::new(Reply::Ok(support::paired()));
    let client = support::client(&support::spawn(mock.clone()).await);
    let mut session = Session::default();

    let mut out = Vec::new();
    shell::run(&mut session, &client, Cursor::new("x 1\ncalc\n"), &mut out, false)
        .await
        .expect("shell");
    let text = String::from_utf8(out).expect("utf8");

    assert!(text.contains(&format!("Error: {}", ValidationError::EmptyDataset)));
    assert_eq!(mock.hits(), 0);
}
