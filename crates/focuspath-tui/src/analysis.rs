//! The one background job: a classification request.
//!
//! The request runs on a spawned tokio task and reports through a oneshot
//! channel. The app polls it on every tick, so state is only ever touched
//! from the event loop.

use focuspath_ai::{analyze, ClassifyError, TaskClassifier};
use focuspath_domain::Plan;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;

pub type AnalysisResult = Result<Plan, ClassifyError>;

pub struct PendingAnalysis {
    cancel: CancellationToken,
    rx: oneshot::Receiver<AnalysisResult>,
    started_at: Instant,
}

impl PendingAnalysis {
    pub fn start(classifier: Arc<dyn TaskClassifier>, input: String) -> Self {
        let cancel = CancellationToken::new();
        let (tx, rx) = oneshot::channel();
        let token = cancel.clone();

        tokio::spawn(async move {
            let result = analyze(classifier.as_ref(), &input, &token).await;
            if tx.send(result).is_err() {
                tracing::debug!("Analysis finished after its receiver was dropped");
            }
        });

        Self {
            cancel,
            rx,
            started_at: Instant::now(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelling(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// The result, if the request has finished.
    pub fn poll(&mut self) -> Option<AnalysisResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(lost_task())),
        }
    }

    /// Wait for the result.
    pub async fn wait(self) -> AnalysisResult {
        self.rx.await.unwrap_or_else(|_| Err(lost_task()))
    }
}

fn lost_task() -> ClassifyError {
    ClassifyError::Network("analysis stopped before it replied".to_string())
}
