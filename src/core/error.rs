use thiserror::Error;
use tracing::{debug, error, warn};

/// Failure taxonomy for the analysis pipeline.
///
/// Extraction and performance-probe failures are not represented here:
/// those collaborators return `None` because absence is an expected
/// outcome for them, never an error the caller should propagate.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Malformed caller input. Surfaced as HTTP 400 with the first
    /// validation message.
    #[error("{0}")]
    Validation(String),

    /// The completion service failed at the transport or API level.
    /// Aborts the enclosing orchestration step.
    #[error("completion request failed: {0}")]
    Gateway(String),

    /// The completion returned text that is not the requested JSON
    /// shape. `raw` keeps the original completion text for diagnostics.
    #[error("invalid JSON response from AI: {message}")]
    MalformedOutput { message: String, raw: String },

    /// Every URL in a competitor batch failed.
    #[error("Failed to analyze any competitors")]
    BatchExhausted,
}

impl ScoutError {
    /// Log this error at the severity its variant warrants.
    pub fn log(&self) {
        match self {
            ScoutError::Validation(msg) => {
                warn!(error = %msg, "request validation failed");
            }
            ScoutError::Gateway(msg) => {
                error!(error = %msg, "completion gateway failure");
            }
            ScoutError::MalformedOutput { message, raw } => {
                error!(error = %message, "completion output failed to parse");
                debug!(raw = %raw, "unparseable completion text");
            }
            ScoutError::BatchExhausted => {
                error!("competitor batch yielded zero analyses");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_exhausted_message_is_stable() {
        assert_eq!(
            ScoutError::BatchExhausted.to_string(),
            "Failed to analyze any competitors"
        );
    }

    #[test]
    fn malformed_output_keeps_raw_text() {
        let err = ScoutError::MalformedOutput {
            message: "expected value at line 1".to_string(),
            raw: "I could not produce JSON".to_string(),
        };
        match err {
            ScoutError::MalformedOutput { raw, .. } => {
                assert_eq!(raw, "I could not produce JSON");
            }
            _ => unreachable!(),
        }
    }
}
