//! psychosuite-interpret
//!
//! AI-generated narrative interpretation of a scored result, via the
//! Bedrock Converse API. One attempt, no retry; every failure is folded
//! into a visible fallback string so an augmented result always carries
//! *some* interpretation text.

pub mod converse;
pub mod error;
pub mod prompt;

use tracing::warn;

use error::InterpretError;
use prompt::ResultSummary;

/// Generate an interpretation for a scored result, absorbing failure.
///
/// On success returns the model's narrative verbatim; on any failure
/// (config, network, auth, malformed response) returns a diagnostic
/// fallback string instead. Re-invocation simply produces a fresh text;
/// the caller decides what to overwrite.
pub async fn augment(
    config: &aws_config::SdkConfig,
    model_id: &str,
    summary: &ResultSummary<'_>,
) -> String {
    let prompt = prompt::build_prompt(summary);
    fold_outcome(model_id, converse::generate(config, model_id, &prompt).await)
}

/// Fold a generation outcome into the text stored on the result: the
/// narrative verbatim on success, a diagnostic fallback otherwise.
pub fn fold_outcome(model_id: &str, outcome: Result<String, InterpretError>) -> String {
    match outcome {
        Ok(text) => text,
        Err(e) => {
            warn!(model_id, error = %e, "interpretation call failed");
            format!("Interpretation unavailable: {e}")
        }
    }
}
