use async_trait::async_trait;
use focuspath_domain::Plan;
use tokio_util::sync::CancellationToken;

use crate::ClassifyError;

/// Turns a brain dump into a classified plan.
#[async_trait]
pub trait TaskClassifier: Send + Sync {
    async fn classify(&self, input: &str) -> Result<Plan, ClassifyError>;
}

/// Classify `input` unless it is blank or `cancel` fires first.
///
/// Blank input never reaches the classifier.
pub async fn analyze(
    classifier: &dyn TaskClassifier,
    input: &str,
    cancel: &CancellationToken,
) -> Result<Plan, ClassifyError> {
    if input.trim().is_empty() {
        return Err(ClassifyError::EmptyInput);
    }

    tracing::debug!("Starting analysis of {} bytes", input.len());
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::debug!("Analysis cancelled");
            Err(ClassifyError::Cancelled)
        }
        result = classifier.classify(input) => result,
    }
}
