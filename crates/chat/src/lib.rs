//! Chat dispatch — assembling a role-tagged message list from custom
//! instructions, curated datasets, and the live prompt, then submitting it to
//! a completion provider.
//!
//! Message assembly branches on whether the target model accepts a "system"
//! role (some providers reject one). Assembly is a pure function; only the
//! final submission touches the network.

use promptpack_core::error::Error;
use promptpack_core::message::Message;
use promptpack_core::provider::{CompletionRequest, Provider};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Session-level context threaded through from the surrounding UI.
///
/// The dispatcher itself only reads `history`; the remaining fields exist so
/// the UI's session management is visible at the type level instead of being
/// a bag of loosely-typed optional parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContext {
    /// Engine label the UI routes by (e.g. "openai", "anthropic")
    #[serde(default)]
    pub engine: String,

    /// Whether the surrounding UI is in interactive mode
    #[serde(default)]
    pub interactive: bool,

    /// Whether the UI considers this a fresh session
    #[serde(default)]
    pub new_session: bool,

    /// Prior conversation turns, passed through opaquely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<Message>>,
}

/// Everything needed for one chat turn.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// The user's live prompt
    pub prompt: String,

    /// Aggregated custom-instruction blocks
    pub custom_instructions: Vec<String>,

    /// Aggregated curated-dataset blocks
    pub curated_datasets: Vec<String>,

    /// Model identifier
    pub model: String,

    /// Max tokens for the reply
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Whether the model accepts a "system" role message
    pub supports_system_role: bool,

    /// UI session context (history is inserted before the live prompt)
    pub session: SessionContext,
}

/// Build the message sequence for a chat request.
///
/// With system-role support, instructions and datasets are joined into one
/// system message (each list newline-joined, the two blocks concatenated with
/// no separator between them), followed by the prompt. Without it, each block
/// becomes its own user message. History, when present, is inserted verbatim
/// between the context messages and the live prompt.
pub fn build_messages(request: &ChatRequest) -> Vec<Message> {
    let instructions = request.custom_instructions.join("\n");
    let datasets = request.curated_datasets.join("\n");

    let mut messages = if request.supports_system_role {
        vec![Message::system(format!("{instructions}{datasets}"))]
    } else {
        vec![Message::user(instructions), Message::user(datasets)]
    };

    if let Some(history) = &request.session.history {
        messages.extend(history.iter().cloned());
    }

    messages.push(Message::user(request.prompt.clone()));
    messages
}

/// Submit a chat request to `provider` and return the reply text.
///
/// Returns `Ok(None)` when the provider's response carried no content —
/// callers decide how to surface that, rather than receiving an empty string
/// indistinguishable from a genuine empty reply.
pub async fn dispatch(
    provider: &dyn Provider,
    request: ChatRequest,
) -> Result<Option<String>, Error> {
    let messages = build_messages(&request);
    debug!(
        provider = provider.name(),
        model = %request.model,
        message_count = messages.len(),
        "Dispatching chat request"
    );

    let mut completion = CompletionRequest::new(request.model, messages);
    completion.max_tokens = Some(request.max_tokens);
    completion.temperature = request.temperature;

    let response = provider.complete(completion).await?;
    if let Some(usage) = &response.usage {
        info!(
            model = %response.model,
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "Completion finished"
        );
    }

    Ok(response.content)
}
