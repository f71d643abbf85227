//! OpenAI Responses API implementation of the completion capability.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::types::Item;

use super::http::{bearer_headers, shared_client, status_to_error};
use super::{ModelResponse, ResponseRequest, ResponsesClient};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for the `/responses` endpoint.
pub struct OpenAiResponses {
    api_key: String,
    base_url: String,
}

impl OpenAiResponses {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Deserialize)]
struct WireResponse {
    id: Option<String>,
    #[serde(default)]
    output: Vec<serde_json::Value>,
}

/// Parse one wire output item into the closed item set.
///
/// Items outside the set (reasoning traces, annotations) are dropped.
fn parse_output_item(value: serde_json::Value) -> Option<Item> {
    serde_json::from_value(value).ok()
}

#[async_trait]
impl ResponsesClient for OpenAiResponses {
    async fn create(&self, request: &ResponseRequest) -> Result<ModelResponse> {
        let url = format!("{}/responses", self.base_url);
        debug!(
            model = %request.model,
            input_items = request.input.len(),
            tools = request.tools.len(),
            "responses create"
        );

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(request)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body));
        }

        let data: WireResponse = resp.json().await?;
        let output: Vec<Item> = data.output.into_iter().filter_map(parse_output_item).collect();
        debug!(output_items = output.len(), "responses parsed");

        Ok(ModelResponse {
            id: data.id,
            output,
        })
    }
}
