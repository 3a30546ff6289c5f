use thiserror::Error;

/// Oq Errors
#[derive(Debug, Error)]
pub enum OqError {
    #[error("OQ_OPENAI_KEY not set. Export an OpenAI API key to send queries.")]
    MissingApiKey,
    #[error("Failed to check stdin: {0}")]
    StdinCheck(#[from] nix::Error),
    #[error("Failed to read stdin: {0}")]
    StdinRead(#[from] std::io::Error),
    #[error("Failed to get chat completion: {0}")]
    Api(#[from] reqwest::Error),
    #[error("Failed to parse chat completion response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("Chat completion response contained no choices.")]
    EmptyResponse,
}
