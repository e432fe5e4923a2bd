//! Suggestion Gateway: trait-based wrapper around the phrasing LLM call.
//!
//! Default: `LlmSuggestionGateway` (Claude via `LlmClient`).
//! `AppState` holds an `Arc<dyn SuggestionGateway>` so tests can swap in fakes.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::suggestion::prompts::render_phrasing_prompt;
use crate::suggestion::SuggestionSection;

/// The one error callers ever see. Upstream detail goes to the log only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("An unexpected error occurred while generating suggestions. Please try again.")]
pub struct GatewayError;

#[async_trait]
pub trait SuggestionGateway: Send + Sync {
    /// Returns suggested replacement text verbatim. Never touches the document.
    async fn suggest(
        &self,
        section: SuggestionSection,
        information: &str,
    ) -> Result<String, GatewayError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhrasingOutput {
    suggested_phrasing: String,
}

pub struct LlmSuggestionGateway(pub LlmClient);

#[async_trait]
impl SuggestionGateway for LlmSuggestionGateway {
    async fn suggest(
        &self,
        section: SuggestionSection,
        information: &str,
    ) -> Result<String, GatewayError> {
        let prompt = render_phrasing_prompt(section.label(), information);

        let output = self
            .0
            .call_json::<PhrasingOutput>(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| {
                error!("Phrasing suggestion for {} failed: {e}", section.label());
                GatewayError
            })?;

        if output.suggested_phrasing.trim().is_empty() {
            error!("Phrasing suggestion for {} came back empty", section.label());
            return Err(GatewayError);
        }

        debug!(
            "Phrasing suggestion for {} ready ({} chars)",
            section.label(),
            output.suggested_phrasing.len()
        );
        Ok(output.suggested_phrasing)
    }
}
