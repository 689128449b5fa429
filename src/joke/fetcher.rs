//! Joke fetcher
//!
//! Issues one chat-completion request per call and turns the reply into
//! either the joke text or a displayable [`JokeError`].

use super::types::{ApiErrorBody, ChatRequest, ChatResponse};
use crate::config::JokeConfig;
use crate::{JokeError, Result};
use reqwest::header::CONTENT_TYPE;
use std::future::Future;
use tracing::{debug, info, warn};

/// Returned when a well-formed reply carries no completion text
pub const NO_JOKE_FALLBACK: &str = "No joke found.";

/// Failure message used when an error body has no usable message
pub const GENERIC_API_ERROR: &str = "OpenAI API error";

/// An outbound chat-completion call
#[derive(Clone, Debug, PartialEq)]
pub struct ChatCall {
    pub url: String,
    /// Bearer credential
    pub api_key: String,
    pub body: ChatRequest,
}

/// Raw HTTP reply: status code and undecoded body
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The HTTP layer beneath the fetcher
///
/// Only network-level failures are errors here. Non-success statuses come
/// back as an ordinary [`HttpReply`].
pub trait Transport: Send + Sync + 'static {
    fn post_json(&self, call: ChatCall) -> impl Future<Output = Result<HttpReply>> + Send;
}

/// Production transport backed by `reqwest`
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, call: ChatCall) -> impl Future<Output = Result<HttpReply>> + Send {
        let client = self.client.clone();
        async move {
            let response = client
                .post(&call.url)
                .bearer_auth(&call.api_key)
                .header(CONTENT_TYPE, "application/json")
                .json(&call.body)
                .send()
                .await?;

            let status = response.status().as_u16();
            let body = match response.text().await {
                Ok(body) => body,
                // An unreadable error body falls back to the generic message
                Err(e) if !(200..300).contains(&status) => {
                    debug!("[JOKE] Could not read error body: {}", e);
                    String::new()
                }
                Err(e) => return Err(e.into()),
            };

            Ok(HttpReply { status, body })
        }
    }
}

/// Fetches harsh jokes through a [`Transport`]
pub struct JokeFetcher<T: Transport> {
    config: JokeConfig,
    transport: T,
}

impl JokeFetcher<HttpTransport> {
    /// Fetcher talking to the real endpoint
    pub fn http(config: JokeConfig) -> Self {
        Self::new(config, HttpTransport::new())
    }
}

impl<T: Transport> JokeFetcher<T> {
    pub fn new(config: JokeConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &JokeConfig {
        &self.config
    }

    /// Fetch one joke
    ///
    /// Fails with [`JokeError::MissingCredential`] before touching the network
    /// when no credential is configured.
    pub async fn fetch(&self) -> Result<String> {
        let Some(api_key) = self.config.api_key() else {
            warn!(
                "[JOKE] No credential in {}, skipping request",
                self.config.api_key_var
            );
            return Err(JokeError::MissingCredential(self.config.api_key_var.clone()));
        };

        let call = ChatCall {
            url: self.config.endpoint.clone(),
            api_key,
            body: ChatRequest::from_config(&self.config),
        };

        info!(
            "[JOKE] Requesting joke from {} (model: {})",
            call.url, call.body.model
        );

        let reply = self.transport.post_json(call).await?;
        debug!(
            "[JOKE] Reply status {} ({} bytes)",
            reply.status,
            reply.body.len()
        );

        parse_reply(&reply)
    }
}

/// Interpret an HTTP reply from the completion endpoint
pub fn parse_reply(reply: &HttpReply) -> Result<String> {
    if !reply.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&reply.body)
            .ok()
            .and_then(|body| body.message().map(str::to_string))
            .unwrap_or_else(|| GENERIC_API_ERROR.to_string());
        return Err(JokeError::Api(message));
    }

    let response: ChatResponse = serde_json::from_str(&reply.body)
        .map_err(|e| JokeError::InvalidResponse(e.to_string()))?;

    let joke = response
        .first_content()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_JOKE_FALLBACK);

    Ok(joke.to_string())
}
