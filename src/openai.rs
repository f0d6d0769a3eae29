//! OpenAI client construction shared by the embedding and generation providers.

use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Default timeout for OpenAI API requests.
///
/// The retrieval core itself imposes no timeout; this bound lives on the HTTP
/// client so a stalled embedding or generation call fails instead of hanging
/// the query forever.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Create an OpenAI client with the default request timeout.
pub fn create_client() -> Client<OpenAIConfig> {
    create_client_with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
}

/// Create an OpenAI client with a custom request timeout.
pub fn create_client_with_timeout(timeout: Duration) -> Client<OpenAIConfig> {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client");

    Client::with_config(OpenAIConfig::default()).with_http_client(http_client)
}
