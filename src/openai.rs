//! Utilities for querying the OpenAI API via the chat completions endpoint.
//!
//! For specific details on request/response schemas, see the [OpenAI API chat completions docs](https://platform.openai.com/docs/api-reference/chat/create).

use std::{env, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::OqError;

/// The model every query is sent to.
pub const MODEL: &str = "o1-mini";
/// Upper bound on the whole round trip, connect through body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// A `chat/completions` `messages` item
#[derive(Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// A `chat/completions` request body
#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// A `chat/completions` response message
#[derive(Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

/// A `chat/completions` response choice
#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ResponseMessage,
}

/// A `chat/completions` response body
#[derive(Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// Build the request body carrying `query` as the single user message.
pub fn build_request(query: &str) -> ChatRequest {
    ChatRequest {
        model: MODEL.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: query.to_string(),
        }],
    }
}

/// Take the first choice's message content out of a response body.
pub fn first_choice(response: ChatResponse) -> Result<String, OqError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(OqError::EmptyResponse)
}

/// Query the OpenAI API via the chat completions endpoint.
///
/// Sends `query` as a single user message and returns the first choice's text.
/// Blocks until the response arrives, the call fails, or the timeout fires.
pub fn query_chat(query: &str) -> Result<String, OqError> {
    let openai_key = env::var("OQ_OPENAI_KEY").map_err(|_| OqError::MissingApiKey)?;

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let req_body = build_request(query);

    debug!(model = MODEL, "sending chat completion request");
    let response = client
        .post(CHAT_COMPLETIONS_URL)
        .bearer_auth(openai_key)
        .json(&req_body)
        .send()?
        .error_for_status()?;

    let body = response.text()?;
    let parsed: ChatResponse = serde_json::from_str(&body)?;
    first_choice(parsed)
}
