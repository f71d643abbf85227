//! Tests for the two-tier orchestration.

mod common;

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::Value;

use coinsage::agent::orchestrator;
use coinsage::error::CoinsageError;
use coinsage::market::MarketClient;
use coinsage::prompts::{MARKET_DATA_PROMPT, ORCHESTRATOR_PROMPT, WEB_SEARCH_PROMPT};
use coinsage::provider::ToolParam;
use coinsage::types::{Item, Role};

use common::{function_call_response, message_response, StubClient};

fn stub_orchestrator(client: Arc<StubClient>) -> coinsage::Agent {
    orchestrator(client, MarketClient::new("cmc-test-key"))
}

#[tokio::test]
async fn market_data_tool_runs_the_nested_agent_and_projects_its_final_text() {
    let client = Arc::new(StubClient::new());
    // Round 1 (orchestrator): delegate to the market-data agent.
    client.queue(function_call_response(
        "market_data_agent",
        "call_1",
        r#"{"query":"price of BTC"}"#,
    ));
    // Round 1 (nested agent): answer directly, no tools.
    client.queue(message_response("<div>BTC is at $60,000</div>"));
    // Round 2 (orchestrator): final answer.
    client.queue(message_response("<div>Bitcoin trades at $60,000.</div>"));
    let agent = stub_orchestrator(client.clone());

    let outcome = agent.ask("what is the price of BTC?").await.unwrap();

    assert_eq!(client.request_count(), 3);
    assert_eq!(outcome.final_text(), "<div>Bitcoin trades at $60,000.</div>");

    // The middle request belongs to the nested agent: its own system prompt,
    // the delegated query as user prompt, and the six market tools.
    let nested = client.request(1);
    match (&nested.input[0], &nested.input[1]) {
        (Item::Message(system), Item::Message(user)) => {
            assert_eq!(system.role, Role::System);
            assert_eq!(system.text(), MARKET_DATA_PROMPT);
            assert_eq!(user.text(), "price of BTC");
        }
        other => panic!("expected nested seed messages, got {other:?}"),
    }
    assert_eq!(nested.tools.len(), 6);

    // The orchestrator's tool result is the sub-agent's final text only,
    // not a transcript and not any intermediate payload.
    let output = outcome
        .transcript
        .iter()
        .find_map(|item| match item {
            Item::FunctionCallOutput(out) => Some(out),
            _ => None,
        })
        .expect("orchestrator transcript must hold the tool result");
    assert_eq!(output.call_id, "call_1");
    let payload: Value = serde_json::from_str(&output.output).unwrap();
    assert_eq!(payload, Value::String("<div>BTC is at $60,000</div>".into()));
}

#[tokio::test]
async fn web_search_tool_delegates_to_the_web_search_agent() {
    let client = Arc::new(StubClient::new());
    client.queue(function_call_response(
        "web_search_agent",
        "call_ws",
        r#"{"query":"latest crypto ETF news"}"#,
    ));
    client.queue(message_response("<div>news summary</div>"));
    client.queue(message_response("<div>final</div>"));
    let agent = stub_orchestrator(client.clone());

    let outcome = agent.ask("any ETF news?").await.unwrap();

    assert_eq!(client.request_count(), 3);
    assert_eq!(outcome.final_text(), "<div>final</div>");

    let nested = client.request(1);
    match &nested.input[0] {
        Item::Message(system) => assert_eq!(system.text(), WEB_SEARCH_PROMPT),
        other => panic!("expected nested system message, got {other:?}"),
    }
    assert_eq!(
        nested.tools,
        vec![ToolParam::WebSearchPreview {
            search_context_size: "medium".to_string(),
        }],
    );
}

#[tokio::test]
async fn empty_payload_fails_with_missing_parameter_before_any_nested_call() {
    let client = Arc::new(StubClient::new());
    client.queue(function_call_response("market_data_agent", "call_1", "{}"));
    let agent = stub_orchestrator(client.clone());

    let err = agent.ask("price of BTC").await.unwrap_err();

    match err {
        CoinsageError::MissingParameter { tool, parameter } => {
            assert_eq!(tool, "market_data_agent");
            assert_eq!(parameter, "query");
        }
        other => panic!("expected MissingParameter, got {other}"),
    }
    // Only the orchestrator's own round happened.
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn undeclared_fields_on_an_agent_tool_are_rejected() {
    let client = Arc::new(StubClient::new());
    client.queue(function_call_response(
        "web_search_agent",
        "call_1",
        r#"{"query":"news","depth":3}"#,
    ));
    let agent = stub_orchestrator(client.clone());

    let err = agent.ask("news?").await.unwrap_err();
    assert!(matches!(err, CoinsageError::InvalidParameter { .. }));
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn nested_agent_failure_propagates_through_the_orchestrator() {
    let client = Arc::new(StubClient::new());
    client.queue(function_call_response(
        "market_data_agent",
        "call_1",
        r#"{"query":"price of BTC"}"#,
    ));
    // The nested agent's model asks for a tool that does not exist.
    client.queue(function_call_response("order_book", "call_2", "{}"));
    let agent = stub_orchestrator(client);

    let err = agent.ask("price of BTC").await.unwrap_err();
    assert!(matches!(err, CoinsageError::UnknownTool(name) if name == "order_book"));
}

#[tokio::test]
async fn orchestrator_declares_exactly_the_two_agent_tools() {
    let client = Arc::new(StubClient::new());
    client.queue(message_response("hello"));
    let agent = stub_orchestrator(client.clone());

    agent.ask("hello").await.unwrap();

    let request = client.request(0);
    let names: Vec<Option<&str>> = request.tools.iter().map(|t| t.name()).collect();
    assert_eq!(names, [Some("market_data_agent"), Some("web_search_agent")]);
    for tool in &request.tools {
        match tool {
            ToolParam::Function { strict, parameters, .. } => {
                assert!(*strict);
                assert_eq!(parameters["required"], serde_json::json!(["query"]));
                assert_eq!(parameters["additionalProperties"], serde_json::json!(false));
            }
            other => panic!("expected function declarations, got {other:?}"),
        }
    }
    match &request.input[0] {
        Item::Message(system) => assert_eq!(system.text(), ORCHESTRATOR_PROMPT),
        other => panic!("expected system message, got {other:?}"),
    }
}
