//! Classification error types

use thiserror::Error;

/// Every way an analysis can fail.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Nothing to analyze: the input is empty")]
    EmptyInput,

    #[error("No API key found (set {0})")]
    MissingApiKey(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Empty response from AI")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Analysis cancelled")]
    Cancelled,
}

impl ClassifyError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClassifyError::Cancelled)
    }
}

impl From<reqwest::Error> for ClassifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClassifyError::Network(format!("request timed out: {}", err))
        } else {
            ClassifyError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_readable() {
        let err = ClassifyError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429: Resource has been exhausted");
        assert_eq!(
            ClassifyError::MissingApiKey("GEMINI_API_KEY or API_KEY".to_string()).to_string(),
            "No API key found (set GEMINI_API_KEY or API_KEY)"
        );
        assert_eq!(ClassifyError::EmptyResponse.to_string(), "Empty response from AI");
    }

    #[test]
    fn test_is_cancelled() {
        assert!(ClassifyError::Cancelled.is_cancelled());
        assert!(!ClassifyError::Network("reset".to_string()).is_cancelled());
    }
}
