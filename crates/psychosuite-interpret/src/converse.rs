//! Single-shot text generation via the Bedrock Converse API.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::info;

use crate::error::InterpretError;
use crate::prompt::SYSTEM_PROMPT;

/// Send one prompt to the given model and return the generated text.
///
/// No retry or backoff: a single attempt whose failure the caller folds
/// into a fallback interpretation string.
pub async fn generate(
    config: &aws_config::SdkConfig,
    model_id: &str,
    prompt: &str,
) -> Result<String, InterpretError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(prompt.to_string()))
        .build()
        .map_err(|e| InterpretError::Invocation(e.to_string()))?;

    info!(model_id, "requesting interpretation");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(SYSTEM_PROMPT.to_string()))
        .messages(message)
        .send()
        .await
        .map_err(|e| InterpretError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| InterpretError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(t) = block {
                Some(t.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        return Err(InterpretError::ResponseParse(
            "no text blocks in response".to_string(),
        ));
    }

    info!(model_id, text_len = text.len(), "interpretation received");
    Ok(text)
}
