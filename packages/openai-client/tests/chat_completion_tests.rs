//! Integration tests for OpenAIClient using wiremock

use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(mock_server: &MockServer) -> OpenAIClient {
    OpenAIClient::new("test-api-key").with_base_url(mock_server.uri())
}

fn create_request() -> ChatRequest {
    ChatRequest::new("mistral-small-latest")
        .message(Message::system("You are a career expert"))
        .message(Message::user("Analyze these jobs"))
}

#[tokio::test]
async fn test_chat_completion_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_partial_json(json!({ "model": "mistral-small-latest" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": { "role": "assistant", "content": "💼 SELECTED JOB OPPORTUNITIES" }
            }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17 }
        })))
        .mount(&mock_server)
        .await;

    let response = create_client(&mock_server)
        .chat_completion(create_request())
        .await
        .unwrap();

    assert_eq!(response.content, "💼 SELECTED JOB OPPORTUNITIES");
    assert_eq!(response.usage.unwrap().total_tokens, 17);
}

#[tokio::test]
async fn test_chat_completion_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&mock_server)
        .await;

    let result = create_client(&mock_server)
        .chat_completion(create_request())
        .await;

    assert!(matches!(result, Err(OpenAIError::Auth(ref m)) if m == "Invalid API key"));
}

#[tokio::test]
async fn test_chat_completion_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&mock_server)
        .await;

    let result = create_client(&mock_server)
        .chat_completion(create_request())
        .await;

    assert!(matches!(result, Err(OpenAIError::RateLimited(_))));
}

#[tokio::test]
async fn test_chat_completion_empty_choices() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&mock_server)
        .await;

    let result = create_client(&mock_server)
        .chat_completion(create_request())
        .await;

    assert!(matches!(result, Err(OpenAIError::Parse(_))));
}
