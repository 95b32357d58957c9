use async_trait::async_trait;
use focuspath_ai::{analyze, ClassifyError, GeminiClassifier, TaskClassifier};
use focuspath_core::ClassifierSettings;
use focuspath_domain::{Plan, Quadrant, Task};
use mockall::mock;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

mock! {
    pub Classifier {}

    #[async_trait]
    impl TaskClassifier for Classifier {
        async fn classify(&self, input: &str) -> Result<Plan, ClassifyError>;
    }
}

fn report_and_milk() -> Plan {
    Plan::new(
        vec![
            Task::new("Finish report", Quadrant::DoFirst, 9, 8),
            Task::new("Buy milk", Quadrant::Eliminate, 2, 1),
        ],
        "A deadline and an errand.",
        "Finish report",
    )
}

struct NeverReplies;

#[async_trait]
impl TaskClassifier for NeverReplies {
    async fn classify(&self, _input: &str) -> Result<Plan, ClassifyError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(ClassifyError::EmptyResponse)
    }
}

#[tokio::test]
async fn test_blank_input_never_reaches_classifier() {
    let mut classifier = MockClassifier::new();
    classifier.expect_classify().times(0);

    let cancel = CancellationToken::new();
    for input in ["", "   ", "\n\t\n"] {
        let result = analyze(&classifier, input, &cancel).await;
        assert!(matches!(result, Err(ClassifyError::EmptyInput)));
    }
}

#[tokio::test]
async fn test_input_is_passed_through() {
    let mut classifier = MockClassifier::new();
    classifier
        .expect_classify()
        .withf(|input| input == "Finish report by Friday. Buy milk.")
        .times(1)
        .returning(|_| Ok(report_and_milk()));

    let cancel = CancellationToken::new();
    let plan = analyze(&classifier, "Finish report by Friday. Buy milk.", &cancel)
        .await
        .unwrap();
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.count_in(Quadrant::DoFirst), 1);
}

#[tokio::test]
async fn test_classifier_errors_surface_unchanged() {
    let mut classifier = MockClassifier::new();
    classifier
        .expect_classify()
        .returning(|_| Err(ClassifyError::Network("connection reset".to_string())));

    let cancel = CancellationToken::new();
    let err = analyze(&classifier, "Buy milk", &cancel).await.unwrap_err();
    assert_eq!(err.to_string(), "Network error: connection reset");
}

#[tokio::test]
async fn test_cancellation_wins_over_slow_classifier() {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        analyze(&NeverReplies, "Buy milk", &cancel),
    )
    .await
    .expect("cancellation should end the analysis");
    assert!(result.unwrap_err().is_cancelled());
}

#[tokio::test]
async fn test_already_cancelled_token() {
    let mut classifier = MockClassifier::new();
    classifier.expect_classify().times(0);

    let cancel = CancellationToken::new();
    cancel.cancel();
    let result = analyze(&classifier, "Buy milk", &cancel).await;
    assert!(matches!(result, Err(ClassifyError::Cancelled)));
}

#[test]
fn test_missing_api_key_names_the_variable() {
    let settings = ClassifierSettings {
        api_key_env: Some("FOCUSPATH_TEST_UNSET_KEY_VAR".to_string()),
        ..Default::default()
    };
    match GeminiClassifier::from_settings(&settings) {
        Err(ClassifyError::MissingApiKey(vars)) => {
            assert_eq!(vars, "FOCUSPATH_TEST_UNSET_KEY_VAR");
        }
        Err(other) => panic!("expected MissingApiKey, got {}", other),
        Ok(_) => panic!("expected MissingApiKey"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() {
    let settings = ClassifierSettings {
        endpoint: "http://127.0.0.1:1/v1beta".to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    let classifier = GeminiClassifier::new(settings, "test-key".to_string()).unwrap();
    let cancel = CancellationToken::new();

    let err = analyze(&classifier, "Buy milk", &cancel).await.unwrap_err();
    assert!(matches!(err, ClassifyError::Network(_)), "got {}", err);
}
