pub mod classifier;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod reply;
pub mod schema;

pub use classifier::{analyze, TaskClassifier};
pub use error::ClassifyError;
pub use gemini::GeminiClassifier;
pub use prompt::build_prompt;
pub use reply::parse_plan;
pub use schema::response_schema;

use focuspath_core::ClassifierSettings;
use std::sync::Arc;

/// Build the classifier described by `settings`, reading the API key from
/// the environment.
pub fn create_classifier(
    settings: &ClassifierSettings,
) -> Result<Arc<dyn TaskClassifier>, ClassifyError> {
    let classifier = GeminiClassifier::from_settings(settings)?;
    Ok(Arc::new(classifier))
}
