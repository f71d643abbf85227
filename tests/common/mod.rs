//! Shared test doubles.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use coinsage::error::Result;
use coinsage::provider::{ModelResponse, ResponseRequest, ResponsesClient};
use coinsage::types::Item;

/// Completion client that captures requests and returns queued responses.
///
/// When the queue runs dry it serves the fallback response, so a stub can
/// model a model that keeps requesting tools forever.
#[derive(Default)]
pub struct StubClient {
    responses: Mutex<VecDeque<ModelResponse>>,
    fallback: Mutex<Option<ModelResponse>>,
    requests: Mutex<Vec<ResponseRequest>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self, response: ModelResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn set_fallback(&self, response: ModelResponse) {
        *self.fallback.lock().unwrap() = Some(response);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> ResponseRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl ResponsesClient for StubClient {
    async fn create(&self, request: &ResponseRequest) -> Result<ModelResponse> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(response) = self.responses.lock().unwrap().pop_front() {
            return Ok(response);
        }
        let fallback = self.fallback.lock().unwrap();
        Ok(fallback.as_ref().expect("stub queue exhausted").clone())
    }
}

/// A response whose only output is one function call.
pub fn function_call_response(name: &str, call_id: &str, arguments: &str) -> ModelResponse {
    response_with(vec![function_call_item(name, call_id, arguments)])
}

/// A response whose only output is one assistant message.
pub fn message_response(text: &str) -> ModelResponse {
    response_with(vec![assistant_message_item(text)])
}

pub fn response_with(output: Vec<Item>) -> ModelResponse {
    ModelResponse {
        id: Some("resp_stub".to_string()),
        output,
    }
}

pub fn function_call_item(name: &str, call_id: &str, arguments: &str) -> Item {
    serde_json::from_value(json!({
        "type": "function_call",
        "name": name,
        "call_id": call_id,
        "arguments": arguments,
    }))
    .unwrap()
}

pub fn assistant_message_item(text: &str) -> Item {
    serde_json::from_value(json!({
        "type": "message",
        "role": "assistant",
        "content": [{"type": "output_text", "text": text}],
    }))
    .unwrap()
}

pub fn web_search_call_item() -> Item {
    serde_json::from_value(json!({
        "type": "web_search_call",
        "id": "ws_1",
        "status": "completed",
    }))
    .unwrap()
}
