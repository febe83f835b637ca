//! Insight provider backed by the Anthropic Messages API.

use serde::{Deserialize, Serialize};

use super::prompt::{overall_prompt, protocol_prompt};
use super::types::{Insight, OverallInsight};
use super::InsightProvider;
use crate::check::DomainReport;
use crate::config::{
    ANTHROPIC_API_URL, ANTHROPIC_API_VERSION, INSIGHT_MAX_TOKENS, INSIGHT_MODEL,
    OVERALL_INSIGHT_MAX_TOKENS,
};
use crate::error_handling::InsightError;
use crate::models::CheckResult;

/// Longest error body kept in `InsightError::Status`.
const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Asks a Claude model for annotations.
///
/// Every call is a single `POST {base_url}/v1/messages`; there are no
/// retries. Timeouts come from the `reqwest::Client` passed in.
#[derive(Clone)]
pub struct AnthropicInsights {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    overall_max_tokens: u32,
}

impl AnthropicInsights {
    /// Provider using the public API endpoint and the default model.
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: ANTHROPIC_API_URL.to_string(),
            model: INSIGHT_MODEL.to_string(),
            max_tokens: INSIGHT_MAX_TOKENS,
            overall_max_tokens: OVERALL_INSIGHT_MAX_TOKENS,
        }
    }

    /// Sends requests to `base_url` instead (no trailing `/v1/messages`).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Uses `model` instead of the default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sends one user message and returns the first text block of the reply.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, InsightError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let reply: MessagesResponse = response.json().await?;
        reply
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .find_map(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(InsightError::EmptyReply)
    }
}

impl InsightProvider for AnthropicInsights {
    async fn analyze(&self, result: &CheckResult) -> Result<Insight, InsightError> {
        let prompt = protocol_prompt(result)?;
        log::debug!(
            "Requesting {} insight for {}",
            result.protocol().label(),
            result.domain()
        );
        let text = self.complete(&prompt, self.max_tokens).await?;
        let insight: Insight = serde_json::from_str(strip_code_fence(&text))?;
        insight.validated()
    }

    async fn analyze_overall(&self, report: &DomainReport) -> Result<OverallInsight, InsightError> {
        let prompt = overall_prompt(report)?;
        log::debug!("Requesting overall insight for {}", report.domain);
        let text = self.complete(&prompt, self.overall_max_tokens).await?;
        let overall: OverallInsight = serde_json::from_str(strip_code_fence(&text))?;
        overall.validated()
    }
}

/// Removes a surrounding markdown code fence (```` ``` ```` or ```` ```json ````).
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the end of the opening line
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}
